//! GGM-tree construction of a Distributed Point Function: two parties hold
//! keys that secret-share `f_alpha(x) = beta * 1{x == alpha}` (`beta = 1` for
//! the boolean point function this crate exposes).
use derivative::Derivative;
use rand::thread_rng;

use crate::dpf::key::{CorrectionWord, DpfKey};
use crate::group::GroupElement;
use crate::prg::{Expansion, TreePrg};
use crate::seed::Seed;

fn bit_at(x: u32, level: usize, depth: usize) -> bool {
    let shift = depth - 1 - level;
    (x >> shift) & 1 == 1
}

/// A DPF over the domain `[0, 2^depth)`, driven by `prg`.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Dpf<P: TreePrg> {
    #[derivative(Debug = "ignore")]
    prg: P,
    depth: usize,
}

impl<P: TreePrg> Dpf<P> {
    pub fn new(prg: P, depth: usize) -> Self {
        Dpf { prg, depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Generate a key pair for `f_alpha(x) = beta * 1{x == alpha}`.
    pub fn gen(&self, alpha: u32, beta: GroupElement) -> (DpfKey, DpfKey) {
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

            let keep_left = !bit_at(alpha, level, self.depth);
            let scw = if keep_left {
                exp_a.seed_right ^ exp_b.seed_right
            } else {
                exp_a.seed_left ^ exp_b.seed_left
            };
            let tcw_left = exp_a.bit_left ^ exp_b.bit_left ^ keep_left;
            let tcw_right = exp_a.bit_right ^ exp_b.bit_right ^ !keep_left;

            let (next_s_a, next_t_a) = advance(&exp_a, t_a, scw, tcw_left, tcw_right, keep_left);
            let (next_s_b, next_t_b) = advance(&exp_b, t_b, scw, tcw_left, tcw_right, keep_left);

            corrections.push(CorrectionWord {
                seed: scw,
                bit_left: tcw_left,
                bit_right: tcw_right,
            });
            s_a = next_s_a;
            t_a = next_t_a;
            s_b = next_s_b;
            t_b = next_t_b;
        }

        let convert_a = GroupElement::convert(s_a.as_bytes());
        let convert_b = GroupElement::convert(s_b.as_bytes());
        let diff = beta - convert_a + convert_b;
        let output_correction = if t_b { -diff } else { diff };

        let key_a = DpfKey {
            alpha_share: alpha_a,
            seed: seed0_a,
            t: false,
            corrections: corrections.clone(),
            output_correction,
        };
        let key_b = DpfKey {
            alpha_share: alpha_b,
            seed: seed0_b,
            t: true,
            corrections,
            output_correction,
        };
        (key_a, key_b)
    }

    /// Evaluate `party`'s share of `f_alpha(x)` at `x`.
    pub fn eval(&self, party: u8, key: &DpfKey, x: u32) -> GroupElement {
        assert_eq!(key.corrections.len(), self.depth, "key/depth mismatch");

        let mut s = key.seed;
        let mut t = key.t;
        for level in 0..self.depth {
            let cw = &key.corrections[level];
            let exp = self.prg.expand(&s);
            let bit = bit_at(x, level, self.depth);
            let (next_s, next_t) = advance(&exp, t, cw.seed, cw.bit_left, cw.bit_right, !bit);
            s = next_s;
            t = next_t;
        }

        let convert = GroupElement::convert(s.as_bytes());
        let term = if t {
            convert + key.output_correction
        } else {
            convert
        };
        if party == 0 {
            term
        } else {
            -term
        }
    }
}

/// Apply this level's correction word (gated on the incoming control bit) and
/// descend into the child selected by `take_left`.
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
