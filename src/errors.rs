//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by concrete
//! backend implementations (Arkworks, blstrs) as well as the high-level
//! `Error` type returned by setup, encryption and decryption.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use bgw::{Error, SubsetError};
//!
//! let err = Error::from(SubsetError::Empty);
//! assert_eq!(err.to_string(), "invalid receiver subset: subset is empty");
//! ```

use thiserror::Error;

/// Errors bubbled up from backend implementations (Arkworks, blstrs, etc.).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(&'static str),
    #[error("unsupported backend feature: {0}")]
    UnsupportedFeature(&'static str),
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
}

/// Ways a receiver subset can violate the encryption contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubsetError {
    #[error("subset is empty")]
    Empty,
    #[error("receiver {index} is outside 1..={receivers}")]
    OutOfRange { index: usize, receivers: usize },
    #[error("receiver {index} appears more than once")]
    Duplicate { index: usize },
}

/// High-level errors returned by the broadcast encryption API.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    #[error("entropy source failure: {0}")]
    EntropyFailure(String),
    #[error("invalid receiver subset: {0}")]
    InvalidSubset(#[from] SubsetError),
    /// A power-sequence slot outside the populated range was requested. This
    /// includes the omitted midpoint `n + 1`.
    #[error("power index {exponent} is not populated for {receivers} receivers")]
    IndexOutOfRange { exponent: usize, receivers: usize },
    #[error("receiver {index} is outside 1..={receivers}")]
    ReceiverOutOfRange { index: usize, receivers: usize },
    #[error("secret key belongs to receiver {secret}, public key to receiver {public}")]
    KeyMismatch { secret: usize, public: usize },
}
