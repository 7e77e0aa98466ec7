//! # vis-physics
//!
//! Point-mass rigid body dynamics for VIS.
//!
//! ## Key Types
//!
//! - [`RigidBody`] — position, velocity, force accumulator, mass
//! - [`integrator`] — `apply_gravity` / `apply_force` / `integrate` (semi-implicit Euler)
//! - [`SimulationConfig`] — fixed timestep, duration, gravity, mass
//! - [`FallingBody`] — fixed-timestep free-fall driver producing a [`Trajectory`]

pub mod body;
pub mod config;
pub mod integrator;
pub mod simulation;

pub use body::RigidBody;
pub use config::SimulationConfig;
pub use integrator::{apply_force, apply_gravity, integrate};
pub use simulation::{FallingBody, StepRecord, Trajectory};
