pub mod compare;
pub mod key;

pub use compare::Dcf;
pub use key::DcfKey;
