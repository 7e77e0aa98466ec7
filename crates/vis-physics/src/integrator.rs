//! Semi-implicit (symplectic) Euler integration.
//!
//! Forces are accumulated first, then one `integrate` call consumes them:
//!
//! ```text
//! a  = F / m
//! v' = v + dt * a
//! x' = x + dt * v'      // uses the updated velocity
//! F  = 0
//! ```
//!
//! Nothing here validates its inputs. Zero mass or NaN components
//! propagate through the arithmetic.

use vis_math::{broadcast, Vector};
use vis_types::Scalar;

use crate::body::RigidBody;

/// Accumulates the weight `m * g` into the body's force.
///
/// May be called several times per step; contributions add up.
#[inline]
pub fn apply_gravity(body: &mut RigidBody, gravity: Vector) {
    body.force = body.force + broadcast(body.mass) * gravity;
}

/// Accumulates an arbitrary external force.
#[inline]
pub fn apply_force(body: &mut RigidBody, force: Vector) {
    body.force = body.force + force;
}

/// Advances velocity then position by one timestep and clears the force.
///
/// The velocity update must precede the position update.
#[inline]
pub fn integrate(body: &mut RigidBody, timestep: Scalar) {
    let dt = broadcast(timestep);
    let acceleration = body.force / broadcast(body.mass);
    body.velocity = body.velocity + dt * acceleration;
    body.position = body.position + dt * body.velocity;
    body.force = Vector::ZERO;
}
