//! Flattened 4×4 matrix.
//!
//! Only elementwise addition and subtraction are defined. Elements are
//! stored row-major: `elements[row * 4 + col]`.

use std::ops::{Add, Sub};

use glam::Mat4;
use serde::{Deserialize, Serialize};
use vis_types::Scalar;

/// A 4×4 matrix stored as 16 contiguous elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub elements: [Scalar; 16],
}

impl Matrix {
    pub const ZERO: Self = Self {
        elements: [0.0; 16],
    };

    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn from_elements(elements: [Scalar; 16]) -> Self {
        Self { elements }
    }

    /// Element at `row`, `col`. Panics if either index is ≥ 4.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Scalar {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) out of range");
        self.elements[row * 4 + col]
    }

    /// Applies `op` to each pair of matching elements.
    #[inline]
    pub fn combine(lhs: &Self, rhs: &Self, op: fn(Scalar, Scalar) -> Scalar) -> Self {
        Self {
            elements: std::array::from_fn(|i| op(lhs.elements[i], rhs.elements[i])),
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Matrix {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::combine(&self, &rhs, |l, r| l + r)
    }
}

impl Sub for Matrix {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::combine(&self, &rhs, |l, r| l - r)
    }
}

impl From<Matrix> for Mat4 {
    /// glam is column-major, so the row-major elements are transposed.
    fn from(m: Matrix) -> Self {
        Mat4::from_cols_array(&m.elements).transpose()
    }
}

impl From<Mat4> for Matrix {
    fn from(m: Mat4) -> Self {
        Self::from_elements(m.transpose().to_cols_array())
    }
}

#[inline]
pub fn matrix_add(lhs: &Matrix, rhs: &Matrix) -> Matrix {
    *lhs + *rhs
}

#[inline]
pub fn matrix_subtract(lhs: &Matrix, rhs: &Matrix) -> Matrix {
    *lhs - *rhs
}
