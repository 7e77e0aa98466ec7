//! Scalar type alias for the simulation.

/// The floating-point type used for every vector, matrix, and body field.
pub type Scalar = f32;
