//! Fixed-key AES-based tree PRG.
//!
//! Unlike [`crate::util::Sampleable`] (which needs a CSPRNG), `G` here must be
//! a *public*, deterministic function of the seed: both parties, and anyone
//! auditing the construction, need to be able to compute it. Security comes
//! from AES being a good pseudorandom permutation, not from key secrecy, so
//! the two AES keys below are simply fixed constants baked into the binary.
use std::convert::TryInto;

use openssl::symm::{Cipher, Crypter, Mode};

use crate::prg::definition::{Expansion, TreePrg};
use crate::seed::{Seed, SEED_SIZE};

/// Fixed, public AES-128 keys for the two halves of the length-doubling
/// expansion. Any fixed, independent keys work; these are arbitrary.
const KEY_LEFT: [u8; 16] = *b"FssTreePrgLeftK!";
const KEY_RIGHT: [u8; 16] = *b"FssTreePrgRightK";

#[derive(Clone, Copy, Debug, Default)]
pub struct AesPrg;

impl AesPrg {
    pub fn new() -> Self {
        AesPrg
    }

    fn block(key: &[u8; 16], seed: &Seed) -> [u8; SEED_SIZE] {
        let cipher = Cipher::aes_128_ecb();
        let mut crypter = Crypter::new(cipher, Mode::Encrypt, key, None)
            .expect("AES-128 key is always valid");
        crypter.pad(false);
        let mut out = vec![0u8; SEED_SIZE + cipher.block_size()];
        let mut count = crypter
            .update(seed.as_bytes(), &mut out)
            .expect("single-block AES-ECB update cannot fail");
        count += crypter
            .finalize(&mut out[count..])
            .expect("no padding, finalize is a no-op");
        out.truncate(count);
        out.try_into().expect("AES block is 16 bytes")
    }
}

impl TreePrg for AesPrg {
    fn expand(&self, seed: &Seed) -> Expansion {
        let left = Self::block(&KEY_LEFT, seed);
        let right = Self::block(&KEY_RIGHT, seed);

        let bit_left = left[0] & 1 == 1;
        let bit_right = right[0] & 1 == 1;

        let mut left = left;
        let mut right = right;
        left[0] &= 0xfe;
        right[0] &= 0xfe;

        Expansion {
            seed_left: Seed::from_bytes(&left),
            bit_left,
            seed_right: Seed::from_bytes(&right),
            bit_right,
        }
    }
}


#[cfg(any(test, feature = "testing"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "testing"))]
impl Arbitrary for AesPrg {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        Just(AesPrg::new()).boxed()
    }
}
