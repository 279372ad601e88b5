/// Things that can be drawn from a cryptographically strong RNG, distinct
/// from (and never substituting for) the PRG used inside keygen/eval.
pub trait Sampleable {
    fn sample() -> Self;
}

#[cfg(test)]
macro_rules! check_sampleable {
    ($type:ty) => {
        mod sampleable {
            #![allow(unused_imports)]
            use super::*;
            use std::collections::HashSet;
            use std::iter::repeat_with;

            #[test]
            fn test_not_deterministic() {
                let elements: HashSet<_> = repeat_with(<$type>::sample).take(10).collect();
                assert!(
                    elements.len() > 1,
                    "Many random elements should not all be the same."
                );
            }
        }
    };
}

/// Test that `f(g(x)) == x` for all `x` of a particular type.
///
/// The type must implement [`Arbitrary`] and [`Clone`].
///
/// Last argument is an (optional) name for the submodule where this will go.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate fss_core;
/// # fn main() {
/// fn plus_one(x: u8) -> u8 {
///   x + 1
/// }
/// check_roundtrip!(u8, plus_one, |x| x - 1, u8_plus_minus_one);
/// # }
/// ```
///
/// [`Arbitrary`]: proptest::arbitrary::Arbitrary
/// [`Clone`]: std::clone::Clone
#[cfg(any(test, feature = "testing"))]
#[macro_export]
macro_rules! check_roundtrip {
    ($type:ty,$to:expr,$from:expr,$name:ident) => {
        check_roundtrip!($type, any::<$type>(), $to, $from, $name);
    };
    ($type:ty,$strat:expr,$to:expr,$from:expr,$name:ident) => {
        mod $name {
            #![allow(unused_imports)]
            use super::*;
            use proptest::prelude::*;
            proptest! {
                #[test]
                fn test_roundtrip(x in $strat) {
                    prop_assert_eq!(($from)(($to)(x.clone())): $type, x: $type, "round-trip failed");
                }
            }
        }
    };
    ($type:ty,$to:expr,$from:expr) => {
        check_roundtrip!($type, $to, $from, roundtrip);
    };
}
