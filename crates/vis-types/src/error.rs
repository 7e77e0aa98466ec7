//! Error types for the VIS crates.
//!
//! The algebra and integrator hot paths are total and never fail.
//! Checked constructors and `try_*` variants return `VisResult<T>`.

use thiserror::Error;

use crate::Scalar;

/// Unified error type for VIS.
#[derive(Debug, Error)]
pub enum VisError {
    /// Mass must be strictly positive and finite.
    #[error("Invalid mass: {0} (must be finite and > 0)")]
    InvalidMass(Scalar),

    /// Normalizing a vector with zero (or non-finite) length.
    #[error("Cannot normalize a zero-length vector")]
    DegenerateNormalize,

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, VisError>`.
pub type VisResult<T> = Result<T, VisError>;
