//! Provides the error type used throughout this crate.

use thiserror::Error;

use crate::utils::short_type_name;

/// The error type used throughout this crate
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A contract method was called without an overriding implementation.
    #[error("{type_name} has not implemented method '{method}'")]
    UnimplementedOperation { type_name: String, method: &'static str },
    // Errors raised while emitting trace lines
    #[error("Failed to write trace line: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// Missing override of `method` on the type `T` (named without its module path).
    pub fn unimplemented<T: ?Sized>(method: &'static str) -> Self {
        DispatchError::UnimplementedOperation {
            type_name: short_type_name::<T>().to_string(),
            method,
        }
    }
}

/// Shorthand `Result` type used throughout this crate.
pub type Result<T, E = DispatchError> = std::result::Result<T, E>;
