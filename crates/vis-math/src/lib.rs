//! # vis-math
//!
//! Algebra primitives for the VIS physics crates.
//!
//! Provides:
//! - [`Vector`]: three-component vector with elementwise `+ - * /`,
//!   broadcast, dot product, length, normalization, and projection
//! - [`Matrix`]: flattened 4×4 matrix with elementwise `+ -`
//! - Conversions to and from the `glam` types (`Vec3`, `Mat4`)

pub mod matrix;
pub mod vector;

pub use matrix::{matrix_add, matrix_subtract, Matrix};
pub use vector::{
    add, broadcast, divide_elementwise, dot, length, length_squared, multiply_elementwise,
    normalize, project, subtract, try_normalize, Vector,
};

pub use glam::{Mat4, Vec3};
