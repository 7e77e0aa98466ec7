//! # vis-types
//!
//! Shared scalar alias, error type, and physical constants
//! for the VIS math and physics crates.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that the other VIS crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{VisError, VisResult};
pub use scalar::Scalar;
