use crate::seed::Seed;

/// Output of a length-doubling PRG expansion: a seed and a control bit for
/// each child in the GGM tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Expansion {
    pub seed_left: Seed,
    pub bit_left: bool,
    pub seed_right: Seed,
    pub bit_right: bool,
}

/// The length-doubling PRG `G` used to walk the GGM tree: `G(s) = (s_L, t_L,
/// s_R, t_R)`. Implementations use a fixed, public key (or pair of keys) --
/// unlike [`crate::util::Sampleable`], there's no secret material here, the
/// security comes entirely from the seed.
pub trait TreePrg {
    fn expand(&self, seed: &Seed) -> Expansion;
}

#[cfg(any(test, feature = "testing"))]
macro_rules! check_tree_prg {
    ($type:ty,$mod_name:ident) => {
        mod $mod_name {
            #![allow(unused_imports)]
            use super::*;
            use proptest::prelude::*;

            proptest! {
                #[test]
                fn test_eval_deterministic(prg: $type, seed: Seed) {
                    prop_assert_eq!(prg.expand(&seed), prg.expand(&seed));
                }

                #[test]
                fn test_children_independent(prg: $type, seed: Seed) {
                    let out = prg.expand(&seed);
                    prop_assert_ne!(out.seed_left, out.seed_right);
                }

                #[test]
                fn test_different_seeds_different_output(prg: $type, a: Seed, b: Seed) {
                    prop_assume!(a != b);
                    prop_assert_ne!(prg.expand(&a), prg.expand(&b));
                }
            }
        }
    };
    ($type:ty) => {
        check_tree_prg!($type, tree_prg);
    };
}
