//! Integration tests for vis-types.

use vis_types::constants::{DEFAULT_DT, DEFAULT_END_TIME, DEFAULT_MASS, GRAVITY};
use vis_types::VisError;

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn default_run_is_six_hundred_steps() {
    let steps = (DEFAULT_END_TIME / DEFAULT_DT).round() as u32;
    assert_eq!(steps, 600);
}

#[test]
fn defaults_are_physical() {
    assert!(GRAVITY > 0.0);
    assert!(DEFAULT_MASS > 0.0);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn invalid_mass_display() {
    let err = VisError::InvalidMass(-2.5);
    let msg = err.to_string();
    assert!(msg.contains("-2.5"));
    assert!(msg.contains("mass"));
}

#[test]
fn degenerate_normalize_display() {
    let err = VisError::DegenerateNormalize;
    assert!(err.to_string().contains("zero-length"));
}

#[test]
fn io_error_converts() {
    fn open_missing() -> vis_types::VisResult<()> {
        std::fs::read("/definitely/not/a/real/path.toml")?;
        Ok(())
    }
    let err = open_missing().unwrap_err();
    assert!(matches!(err, VisError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}
