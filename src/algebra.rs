//! Abstract algebraic structures used by the FSS primitives.
use std::ops;

/// A *commutative* group.
///
/// Group operation must be [`Add`].
///
/// [`Add`]: std::ops::Add
pub trait Group:
    Eq + Clone + ops::Sub<Output = Self> + ops::Add<Output = Self> + ops::Neg<Output = Self> + Sized
{
    /// Number of bytes needed to hold an element of the group.
    fn order_size_in_bytes() -> usize;
    fn zero() -> Self;
}

#[cfg(any(test, feature = "testing"))]
macro_rules! check_group_laws {
    ($type:ty,$mod_name:ident) => {
        // wish I could use concat_idents!(group_laws, $type) here
        mod $mod_name {
            #![allow(unused_imports)]
            use super::*;
            use proptest::prelude::*;

            proptest! {
              #[test]
              fn test_associative(a: $type, b: $type, c: $type) {
                  let a2 = a.clone();
                  let b2 = b.clone();
                  let c2 = c.clone();
                  prop_assert_eq!((a + b) + c, a2 + (b2 + c2));
              }

              #[test]
              fn test_commutative(a: $type, b: $type) {
                  let a2 = a.clone();
                  let b2 = b.clone();
                  prop_assert_eq!(a + b, b2 + a2);
              }

              #[test]
              fn test_zero(a: $type) {
                  let a2 = a.clone();
                  prop_assert_eq!(a + <$type as Group>::zero(), a2);
              }

              #[test]
              fn test_inverse(a: $type) {
                  let a2 = a.clone();
                  prop_assert_eq!(a + (-a2), <$type as Group>::zero());
              }
            }
        }
    };
    ($type:ty) => {
        check_group_laws!($type, group_laws);
    };
}
