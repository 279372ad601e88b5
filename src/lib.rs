//! Function secret sharing: a Distributed Point Function (`1{x == alpha}`)
//! and a Distributed Comparison Function (`1{x <= alpha}`), split between two
//! non-colluding parties, plus the batch driver and flat-buffer ABI used to
//! drive both at scale.
#[macro_use]
mod algebra;
#[macro_use]
mod util;

mod group;
mod seed;

#[macro_use]
mod prg;
mod dcf;
mod dpf;

pub mod batch;
pub mod constants;
#[cfg(test)]
mod end_to_end;
mod error;
pub mod ffi;

pub use algebra::Group;
pub use dcf::{Dcf, DcfKey};
pub use dpf::{Dpf, DpfKey};
pub use error::{FssError, Result};
pub use group::GroupElement;
pub use prg::{AesPrg, TreePrg};
pub use seed::Seed;
pub use util::Sampleable;
