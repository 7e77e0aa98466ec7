//! Physical constants and simulation defaults.

use crate::Scalar;

/// Gravitational acceleration (m/s²) used by the free-fall example.
pub const GRAVITY: Scalar = 9.82;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: Scalar = 1.0 / 60.0;

/// Default simulated duration (seconds).
pub const DEFAULT_END_TIME: Scalar = 10.0;

/// Mass of a freshly constructed rigid body (kg).
pub const DEFAULT_MASS: Scalar = 1.0;
