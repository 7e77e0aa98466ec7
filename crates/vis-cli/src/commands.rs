//! CLI command implementations.

use vis_physics::simulation::{continuous_displacement, euler_displacement};
use vis_physics::{FallingBody, SimulationConfig};

/// Run the free-fall example.
pub fn fall(
    config_path: Option<&str>,
    timestep: Option<f32>,
    end_time: Option<f32>,
    every: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(dt) = timestep {
        config.timestep = dt;
    }
    if let Some(t) = end_time {
        config.end_time = t;
    }

    let mut sim = FallingBody::new(config)?;
    let config = sim.config().clone();

    println!("VIS Free Fall");
    println!("─────────────");
    println!("Timestep:  {:.6}s", config.timestep);
    println!("End time:  {:.3}s ({} steps)", config.end_time, config.step_count());
    println!("Gravity:   {}", config.gravity_vector());
    println!("Mass:      {}kg", config.mass);
    println!();

    let trajectory = sim.run();
    for record in trajectory.sampled(every) {
        println!(
            "t = {:>8.3}s  position = ({:.4}, {:.4}, {:.4})",
            record.time, record.position.x, record.position.y, record.position.z
        );
    }

    let Some(last) = trajectory.last() else {
        println!("No steps taken.");
        return Ok(());
    };
    let gravity = config.gravity_vector();
    let euler = euler_displacement(gravity, config.timestep, last.step);
    let exact = continuous_displacement(gravity, last.time);
    println!();
    println!("Final z:        {:.4}m", last.position.z);
    println!("Closed form:    {:.4}m (semi-implicit Euler)", euler.z);
    println!("Continuous:     {:.4}m (½gt²)", exact.z);
    Ok(())
}

/// Echo a parsed floating-point value.
pub fn value(raw: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("'{raw}' is not a number: {e}"))?;
    println!("The value is {value}");
    Ok(())
}

/// Validate a simulation config file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::load(path)?;
    println!("✓ Config is valid: {path}");
    println!("  {} steps of {:.6}s", config.step_count(), config.timestep);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_accepts_numbers() {
        assert!(value("3.25").is_ok());
        assert!(value(" -1e3 ").is_ok());
    }

    #[test]
    fn value_rejects_garbage() {
        let err = value("ten").unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn fall_rejects_bad_override() {
        assert!(fall(None, Some(0.0), None, 60).is_err());
    }

    #[test]
    fn fall_short_run() {
        assert!(fall(None, None, Some(0.5), 10).is_ok());
    }
}
