use thiserror::Error;

/// Errors from the safe, `Result`-based API. The flat-buffer ABI in
/// [`crate::ffi`] has no channel for propagating these back to the caller, so
/// it aborts instead; this type exists for Rust-native callers of
/// [`crate::batch`] who can handle failures themselves.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FssError {
    #[error("unknown operation id: {0}")]
    UnknownOp(u8),

    #[error("key buffer has length {actual}, expected {expected}")]
    BadKeyLength { actual: usize, expected: usize },

    #[error("thread pool build failed: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, FssError>;
