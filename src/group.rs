//! The additive group `Z / 2^(8N) Z` that carries DPF/DCF output shares.
//!
//! `N` is fixed at 4 bytes (32-bit group) to match the two primitives this
//! crate exposes (`Eq`, `Le`); see [`crate::constants`].
use std::convert::TryInto;
use std::ops;

use rand::Rng;

use crate::algebra::Group;
use crate::util::Sampleable;

/// Number of bytes in a serialized [`GroupElement`].
pub const ELEMENT_SIZE: usize = 4;

/// An element of `Z / 2^32 Z`, represented as a little-endian wrapping `u32`.
///
/// `Add`/`Sub`/`Neg` are plain two's-complement 32-bit modular operations, so
/// they're implemented directly on top of `u32::wrapping_*`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct GroupElement(u32);

impl GroupElement {
    pub fn new(value: u32) -> Self {
        GroupElement(value)
    }

    pub fn one() -> Self {
        GroupElement(1)
    }

    /// Random element, sampled with a cryptographic RNG distinct from the PRG
    /// used for keygen/eval.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        GroupElement(rng.gen())
    }

    /// Low 4 bytes of `seed`, interpreted little-endian. Used to turn a PRG
    /// seed into a pseudorandom group element at DPF/DCF leaves.
    pub fn convert(seed: &[u8]) -> Self {
        let mut buf = [0u8; ELEMENT_SIZE];
        buf.copy_from_slice(&seed[..ELEMENT_SIZE]);
        GroupElement(u32::from_le_bytes(buf))
    }

    pub fn to_bytes(self) -> [u8; ELEMENT_SIZE] {
        self.0.to_le_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        GroupElement(u32::from_le_bytes(bytes.try_into().expect("4 bytes")))
    }

    /// Interpret as a signed 64-bit value, as returned through the `results`
    /// array of the flat-buffer eval API.
    pub fn as_i64(self) -> i64 {
        self.0 as i32 as i64
    }
}

impl ops::Add for GroupElement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        GroupElement(self.0.wrapping_add(rhs.0))
    }
}

impl ops::Sub for GroupElement {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        GroupElement(self.0.wrapping_sub(rhs.0))
    }
}

impl ops::Neg for GroupElement {
    type Output = Self;
    fn neg(self) -> Self {
        GroupElement(self.0.wrapping_neg())
    }
}

impl Sampleable for GroupElement {
    fn sample() -> Self {
        GroupElement::random(&mut rand::thread_rng())
    }
}

impl Group for GroupElement {
    fn order_size_in_bytes() -> usize {
        ELEMENT_SIZE
    }

    fn zero() -> Self {
        GroupElement(0)
    }
}

#[cfg(any(test, feature = "testing"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "testing"))]
impl Arbitrary for GroupElement {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<u32>().prop_map(GroupElement).boxed()
    }
}
