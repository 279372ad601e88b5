//! Flat byte layout for a DCF key share.
//!
//! ```text
//! alpha_share (N=4) | seed0 (16) | t0 (1)
//!   | [ s_CW (16) | t_CW_L (1) | t_CW_R (1) | v_CW_L (N) | v_CW_R (N) ] * depth
//!   | output_correction (N=4)
//!   | reserved (63)
//! ```
//!
//! The trailing `reserved` field is zero-filled padding with no meaning to
//! this crate's own `gen`/`eval`; it exists solely so the wire size at the
//! crate's fixed depth (`DEPTH = 32`) lands on exactly 920 bytes, the DCF
//! key length the stable ABI (spec.md §6) commits to.
use crate::group::{GroupElement, ELEMENT_SIZE};
use crate::seed::{Seed, SEED_SIZE};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(
    any(test, feature = "testing"),
    derive(proptest_derive::Arbitrary)
)]
pub struct CorrectionWord {
    pub seed: Seed,
    pub bit_left: bool,
    pub bit_right: bool,
    pub value_left: GroupElement,
    pub value_right: GroupElement,
}

pub const CORRECTION_WORD_SIZE: usize = SEED_SIZE + 1 + 1 + ELEMENT_SIZE + ELEMENT_SIZE;

/// Zero-filled padding appended after `output_correction` so the wire size
/// at `DEPTH = 32` totals the 920 bytes the stable ABI promises (see the
/// module doc comment); not read back into [`DcfKey`].
pub const RESERVED: usize = 63;

impl CorrectionWord {
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.seed.as_bytes());
        out.push(self.bit_left as u8);
        out.push(self.bit_right as u8);
        out.extend_from_slice(&self.value_left.to_bytes());
        out.extend_from_slice(&self.value_right.to_bytes());
    }

    pub fn read_from(bytes: &[u8]) -> Self {
        let mut offset = 0;
        let seed = Seed::from_bytes(&bytes[offset..offset + SEED_SIZE]);
        offset += SEED_SIZE;
        let bit_left = bytes[offset] != 0;
        offset += 1;
        let bit_right = bytes[offset] != 0;
        offset += 1;
        let value_left = GroupElement::from_bytes(&bytes[offset..offset + ELEMENT_SIZE]);
        offset += ELEMENT_SIZE;
        let value_right = GroupElement::from_bytes(&bytes[offset..offset + ELEMENT_SIZE]);
        CorrectionWord {
            seed,
            bit_left,
            bit_right,
            value_left,
            value_right,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DcfKey {
    pub alpha_share: GroupElement,
    pub seed: Seed,
    pub t: bool,
    pub corrections: Vec<CorrectionWord>,
    pub output_correction: GroupElement,
}

impl DcfKey {
    pub fn key_len(depth: usize) -> usize {
        ELEMENT_SIZE + SEED_SIZE + 1 + depth * CORRECTION_WORD_SIZE + ELEMENT_SIZE + RESERVED
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::key_len(self.corrections.len()));
        out.extend_from_slice(&self.alpha_share.to_bytes());
        out.extend_from_slice(self.seed.as_bytes());
        out.push(self.t as u8);
        for cw in &self.corrections {
            cw.write_to(&mut out);
        }
        out.extend_from_slice(&self.output_correction.to_bytes());
        out.extend(std::iter::repeat(0u8).take(RESERVED));
        out
    }

    pub fn from_bytes(bytes: &[u8], depth: usize) -> Self {
        assert_eq!(bytes.len(), Self::key_len(depth), "malformed DCF key");
        let mut offset = 0;
        let alpha_share = GroupElement::from_bytes(&bytes[offset..offset + ELEMENT_SIZE]);
        offset += ELEMENT_SIZE;
        let seed = Seed::from_bytes(&bytes[offset..offset + SEED_SIZE]);
        offset += SEED_SIZE;
        let t = bytes[offset] != 0;
        offset += 1;
        let mut corrections = Vec::with_capacity(depth);
        for _ in 0..depth {
            corrections.push(CorrectionWord::read_from(
                &bytes[offset..offset + CORRECTION_WORD_SIZE],
            ));
            offset += CORRECTION_WORD_SIZE;
        }
        let output_correction = GroupElement::from_bytes(&bytes[offset..offset + ELEMENT_SIZE]);
        offset += ELEMENT_SIZE;
        offset += RESERVED;
        debug_assert_eq!(offset, bytes.len());
        DcfKey {
            alpha_share,
            seed,
            t,
            corrections,
            output_correction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_roundtrip() {
        let depth = 6;
        let key = DcfKey {
            alpha_share: GroupElement::random(&mut thread_rng()),
            seed: Seed::random(&mut thread_rng()),
            t: false,
            corrections: (0..depth)
                .map(|_| CorrectionWord {
                    seed: Seed::random(&mut thread_rng()),
                    bit_left: true,
                    bit_right: false,
                    value_left: GroupElement::random(&mut thread_rng()),
                    value_right: GroupElement::random(&mut thread_rng()),
                })
                .collect(),
            output_correction: GroupElement::random(&mut thread_rng()),
        };
        let bytes = key.to_bytes();
        assert_eq!(bytes.len(), DcfKey::key_len(depth));
        assert_eq!(DcfKey::from_bytes(&bytes, depth), key);
    }

    #[test]
    fn test_stable_abi_key_len() {
        assert_eq!(DcfKey::key_len(crate::constants::DEPTH), 920);
    }
}
