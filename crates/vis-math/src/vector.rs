//! Three-component vector algebra.
//!
//! Every arithmetic operator funnels through [`Vector::combine`], which
//! applies one scalar operation per component. Scalars enter vector space
//! through [`broadcast`], so mass or timestep scaling is an elementwise
//! multiply like any other.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use vis_types::{Scalar, VisError, VisResult};

/// A 3D vector of `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vector {
    /// All zeros.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All ones.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Vector with `s` in every component.
    #[inline]
    pub const fn splat(s: Scalar) -> Self {
        Self::new(s, s, s)
    }

    /// Applies `op` to each pair of matching components.
    ///
    /// No component is special-cased: division by zero yields the usual
    /// IEEE infinities and NaNs.
    #[inline]
    pub fn combine(lhs: Self, rhs: Self, op: fn(Scalar, Scalar) -> Scalar) -> Self {
        Self {
            x: op(lhs.x, rhs.x),
            y: op(lhs.y, rhs.y),
            z: op(lhs.z, rhs.z),
        }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Scalar {
        dot(self, rhs)
    }

    #[inline]
    pub fn length(self) -> Scalar {
        length(self)
    }

    #[inline]
    pub fn length_squared(self) -> Scalar {
        length_squared(self)
    }

    #[inline]
    pub fn normalize(self) -> Self {
        normalize(self)
    }

    #[inline]
    pub fn project(self, onto: Self) -> Self {
        project(self, onto)
    }

    /// Returns true if every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [Scalar; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::combine(self, rhs, |l, r| l + r)
    }
}

impl Sub for Vector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::combine(self, rhs, |l, r| l - r)
    }
}

impl Mul for Vector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::combine(self, rhs, |l, r| l * r)
    }
}

impl Div for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::combine(self, rhs, |l, r| l / r)
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[Scalar; 3]> for Vector {
    fn from([x, y, z]: [Scalar; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector> for [Scalar; 3] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vec3 {
    fn from(v: Vector) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ─── Named operations ─────────────────────────────────────────

#[inline]
pub fn add(lhs: Vector, rhs: Vector) -> Vector {
    lhs + rhs
}

#[inline]
pub fn subtract(lhs: Vector, rhs: Vector) -> Vector {
    lhs - rhs
}

#[inline]
pub fn multiply_elementwise(lhs: Vector, rhs: Vector) -> Vector {
    lhs * rhs
}

#[inline]
pub fn divide_elementwise(lhs: Vector, rhs: Vector) -> Vector {
    lhs / rhs
}

/// Lifts a scalar into vector space by repeating it in all components.
#[inline]
pub fn broadcast(s: Scalar) -> Vector {
    Vector::splat(s)
}

/// Dot product: `x1*x2 + y1*y2 + z1*z2`.
#[inline]
pub fn dot(lhs: Vector, rhs: Vector) -> Scalar {
    lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z
}

#[inline]
pub fn length_squared(v: Vector) -> Scalar {
    dot(v, v)
}

/// Euclidean norm.
#[inline]
pub fn length(v: Vector) -> Scalar {
    length_squared(v).sqrt()
}

/// Scales `v` to unit length.
///
/// The zero vector produces NaN components. Use [`try_normalize`] when the
/// input may be degenerate.
#[inline]
pub fn normalize(v: Vector) -> Vector {
    v / broadcast(length(v))
}

/// Checked [`normalize`].
///
/// Returns [`VisError::DegenerateNormalize`] when the length is zero or
/// not finite.
pub fn try_normalize(v: Vector) -> VisResult<Vector> {
    let len = length(v);
    if len == 0.0 || !len.is_finite() {
        return Err(VisError::DegenerateNormalize);
    }
    Ok(v / broadcast(len))
}

/// Orthogonal projection of `v` onto the direction of `onto`.
#[inline]
pub fn project(v: Vector, onto: Vector) -> Vector {
    let direction = normalize(onto);
    let scale = broadcast(dot(v, direction));
    scale * direction
}
