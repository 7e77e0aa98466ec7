//! Rigid body state.
//!
//! A body is a point mass: no orientation or angular state. Its fields are
//! the whole simulation state and the integrator mutates them in place.

use serde::{Deserialize, Serialize};
use vis_math::Vector;
use vis_types::constants::DEFAULT_MASS;
use vis_types::{Scalar, VisError, VisResult};

use crate::integrator;

/// A point-mass rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub position: Vector,
    pub velocity: Vector,
    /// Force accumulator. Summed by `apply_*`, cleared by `integrate`.
    pub force: Vector,
    /// Must be > 0 for `integrate` to be well-defined. Not enforced on
    /// direct field writes.
    pub mass: Scalar,
}

impl RigidBody {
    /// A body at rest at the origin with unit mass.
    pub fn new() -> Self {
        Self {
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            force: Vector::ZERO,
            mass: DEFAULT_MASS,
        }
    }

    /// A body at rest at the origin with the given mass.
    ///
    /// Rejects zero, negative, and non-finite mass.
    pub fn with_mass(mass: Scalar) -> VisResult<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(VisError::InvalidMass(mass));
        }
        Ok(Self {
            mass,
            ..Self::new()
        })
    }

    /// Sets the initial position.
    pub fn at(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    /// Sets the initial velocity.
    pub fn moving(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn apply_gravity(&mut self, gravity: Vector) {
        integrator::apply_gravity(self, gravity);
    }

    pub fn apply_force(&mut self, force: Vector) {
        integrator::apply_force(self, force);
    }

    pub fn integrate(&mut self, timestep: Scalar) {
        integrator::integrate(self, timestep);
    }

    /// Kinetic energy: 0.5 * m * |v|².
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}
