//! Fixed-timestep free-fall driver.
//!
//! Each tick applies gravity, integrates, and records the body's state.
//! Termination is driven by a step counter so the step count does not
//! depend on float accumulation in the time variable.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vis_math::Vector;
use vis_types::{Scalar, VisResult};

use crate::body::RigidBody;
use crate::config::SimulationConfig;

/// Upper bound on records reserved up front by [`FallingBody::run`].
const MAX_PREALLOCATED_RECORDS: u32 = 1 << 16;

/// State of the body after one completed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-indexed step number.
    pub step: u32,
    /// Simulated time at the end of the step (seconds).
    pub time: Scalar,
    pub position: Vector,
    pub velocity: Vector,
}

/// Ordered per-step records of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    pub records: Vec<StepRecord>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    /// Every `n`-th record, always including the last one.
    pub fn sampled(&self, n: usize) -> impl Iterator<Item = &StepRecord> {
        let n = n.max(1);
        let last = self.records.len().saturating_sub(1);
        self.records
            .iter()
            .enumerate()
            .filter(move |(i, _)| (i + 1) % n == 0 || *i == last)
            .map(|(_, r)| r)
    }
}

/// A single body falling under constant gravity.
pub struct FallingBody {
    config: SimulationConfig,
    body: RigidBody,
    steps_taken: u32,
}

impl FallingBody {
    /// Validates `config` and places a body at rest at the origin.
    pub fn new(config: SimulationConfig) -> VisResult<Self> {
        config.validate()?;
        let body = RigidBody::with_mass(config.mass)?;
        Ok(Self {
            config,
            body,
            steps_taken: 0,
        })
    }

    /// Replaces the body, e.g. to start from a non-zero position or velocity.
    pub fn with_body(mut self, body: RigidBody) -> Self {
        self.body = body;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Simulated time elapsed (seconds).
    pub fn time(&self) -> Scalar {
        self.steps_taken as Scalar * self.config.timestep
    }

    pub fn is_finished(&self) -> bool {
        self.steps_taken >= self.config.step_count()
    }

    /// Advances one fixed timestep.
    pub fn step(&mut self) -> StepRecord {
        self.body.apply_gravity(self.config.gravity_vector());
        self.body.integrate(self.config.timestep);
        self.steps_taken += 1;

        let record = StepRecord {
            step: self.steps_taken,
            time: self.time(),
            position: self.body.position,
            velocity: self.body.velocity,
        };
        debug!(
            step = record.step,
            time = record.time,
            z = record.position.z,
            "integrated"
        );
        record
    }

    /// Steps until `end_time` is reached and returns the recorded trajectory.
    pub fn run(&mut self) -> Trajectory {
        let remaining = self.config.step_count().saturating_sub(self.steps_taken);
        let mut trajectory = Trajectory {
            records: Vec::with_capacity(remaining.min(MAX_PREALLOCATED_RECORDS) as usize),
        };
        while !self.is_finished() {
            trajectory.records.push(self.step());
        }
        info!(
            steps = self.steps_taken,
            time = self.time(),
            position = %self.body.position,
            "free fall finished"
        );
        trajectory
    }
}

/// Displacement after `steps` semi-implicit Euler steps from rest under
/// constant acceleration: `a * dt² * n(n+1)/2`.
pub fn euler_displacement(acceleration: Vector, timestep: Scalar, steps: u32) -> Vector {
    let n = steps as Scalar;
    acceleration * vis_math::broadcast(timestep * timestep * n * (n + 1.0) * 0.5)
}

/// Exact continuous displacement from rest: `a * t² / 2`.
pub fn continuous_displacement(acceleration: Vector, time: Scalar) -> Vector {
    acceleration * vis_math::broadcast(0.5 * time * time)
}
