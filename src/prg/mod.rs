#[macro_use]
pub mod definition;
pub mod aes;

pub use aes::AesPrg;
pub use definition::{Expansion, TreePrg};
