//! 128-bit PRG seeds / GGM tree node values.
use std::convert::TryInto;
use std::ops;

use rand::Rng;

use crate::util::Sampleable;

pub const SEED_SIZE: usize = 16;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Seed([u8; SEED_SIZE]);

impl Seed {
    pub fn zero() -> Self {
        Seed([0u8; SEED_SIZE])
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut buf = [0u8; SEED_SIZE];
        rng.fill(&mut buf);
        Seed(buf)
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Seed(bytes.try_into().expect("16 bytes"))
    }

    pub fn as_bytes(&self) -> &[u8; SEED_SIZE] {
        &self.0
    }
}

impl Sampleable for Seed {
    fn sample() -> Self {
        Seed::random(&mut rand::thread_rng())
    }
}

impl ops::BitXor for Seed {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0.iter()) {
            *o ^= r;
        }
        Seed(out)
    }
}

impl ops::BitXorAssign for Seed {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

#[cfg(any(test, feature = "testing"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "testing"))]
impl Arbitrary for Seed {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<[u8; SEED_SIZE]>().prop_map(Seed).boxed()
    }
}
