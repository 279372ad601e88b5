//! GGM-tree construction of a Distributed Comparison Function: two parties
//! hold keys that secret-share `1{x <= alpha}`.
//!
//! Built on the same per-level seed/control-bit corrections as
//! [`crate::dpf::Dpf`], plus a pair of per-level value corrections that
//! accumulate the "greater than" indicator along the evaluation path. See
//! `DESIGN.md` for the derivation.
use derivative::Derivative;
use rand::thread_rng;

use crate::dcf::key::{CorrectionWord, DcfKey};
use crate::group::GroupElement;
use crate::prg::{Expansion, TreePrg};
use crate::seed::Seed;

fn bit_at(x: u32, level: usize, depth: usize) -> bool {
    let shift = depth - 1 - level;
    (x >> shift) & 1 == 1
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Dcf<P: TreePrg> {
    #[derivative(Debug = "ignore")]
    prg: P,
    depth: usize,
}

impl<P: TreePrg> Dcf<P> {
    pub fn new(prg: P, depth: usize) -> Self {
        Dcf { prg, depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Generate a key pair for `1{x <= alpha}`.
    pub fn gen(&self, alpha: u32) -> (DcfKey, DcfKey) {
        let mut rng = thread_rng();

        let alpha_a = GroupElement::random(&mut rng);
        let alpha_b = GroupElement::new(alpha) - alpha_a;

        let seed0_a = Seed::random(&mut rng);
        let seed0_b = Seed::random(&mut rng);

        let mut s_a = seed0_a;
        let mut t_a = false;
        let mut s_b = seed0_b;
        let mut t_b = true;

        let mut corrections = Vec::with_capacity(self.depth);
        for level in 0..self.depth {
            let exp_a = self.prg.expand(&s_a);
            let exp_b = self.prg.expand(&s_b);

            let alpha_bit = bit_at(alpha, level, self.depth);
            let keep_left = !alpha_bit;

            let scw = if keep_left {
                exp_a.seed_right ^ exp_b.seed_right
            } else {
                exp_a.seed_left ^ exp_b.seed_left
            };
            let tcw_left = exp_a.bit_left ^ exp_b.bit_left ^ keep_left;
            let tcw_right = exp_a.bit_right ^ exp_b.bit_right ^ !keep_left;

            // On generation -- which we always trace along alpha's own path
            // -- the on-path invariant holds at every level: exactly one
            // party carries the control bit. `output_correction` already
            // contributes 1 unconditionally (key_a: 1, key_b: 0), which is
            // exactly right when x never strays from alpha's path (x ==
            // alpha) and also right when it strays to the "less than" (left,
            // alpha_bit = 1) side, since that side should still sum to 1.
            // Only the "greater than" (right, alpha_bit = 0) divergence needs
            // correcting back down to 0, by -1 at that level.
            let sign = if t_a { GroupElement::one() } else { -GroupElement::one() };
            let (value_left, value_right) = if alpha_bit {
                (GroupElement::zero(), GroupElement::zero())
            } else {
                (GroupElement::zero(), -sign)
            };

            let (next_s_a, next_t_a) = advance(&exp_a, t_a, scw, tcw_left, tcw_right, keep_left);
            let (next_s_b, next_t_b) = advance(&exp_b, t_b, scw, tcw_left, tcw_right, keep_left);

            corrections.push(CorrectionWord {
                seed: scw,
                bit_left: tcw_left,
                bit_right: tcw_right,
                value_left,
                value_right,
            });
            s_a = next_s_a;
            t_a = next_t_a;
            s_b = next_s_b;
            t_b = next_t_b;
        }

        let key_a = DcfKey {
            alpha_share: alpha_a,
            seed: seed0_a,
            t: false,
            corrections: corrections.clone(),
            output_correction: GroupElement::one(),
        };
        let key_b = DcfKey {
            alpha_share: alpha_b,
            seed: seed0_b,
            t: true,
            corrections,
            output_correction: GroupElement::zero(),
        };
        (key_a, key_b)
    }

    /// Evaluate `party`'s share of `1{x <= alpha}` at `x`.
    pub fn eval(&self, party: u8, key: &DcfKey, x: u32) -> GroupElement {
        assert_eq!(key.corrections.len(), self.depth, "key/depth mismatch");

        let mut s = key.seed;
        let mut t = key.t;
        let mut acc = GroupElement::zero();
        for level in 0..self.depth {
            let cw = &key.corrections[level];
            let exp = self.prg.expand(&s);
            let bit = bit_at(x, level, self.depth);

            if t {
                let value = if bit { cw.value_right } else { cw.value_left };
                acc = if party == 0 { acc + value } else { acc - value };
            }

            let (next_s, next_t) = advance(&exp, t, cw.seed, cw.bit_left, cw.bit_right, !bit);
            s = next_s;
            t = next_t;
        }

        acc + key.output_correction
    }
}

fn advance(
    exp: &Expansion,
    t_in: bool,
    scw: Seed,
    tcw_left: bool,
    tcw_right: bool,
    take_left: bool,
) -> (Seed, bool) {
    let mut seed_left = exp.seed_left;
    let mut bit_left = exp.bit_left;
    let mut seed_right = exp.seed_right;
    let mut bit_right = exp.bit_right;
    if t_in {
        seed_left ^= scw;
        bit_left ^= tcw_left;
        seed_right ^= scw;
        bit_right ^= tcw_right;
    }
    if take_left {
        (seed_left, bit_left)
    } else {
        (seed_right, bit_right)
    }
}
