//! Integration tests for vis-math.

use vis_math::{
    add, broadcast, divide_elementwise, dot, length, length_squared, matrix_add,
    matrix_subtract, multiply_elementwise, normalize, project, subtract, try_normalize, Mat4,
    Matrix, Vec3, Vector,
};
use vis_types::VisError;

fn approx_eq(a: Vector, b: Vector, tol: f32) -> bool {
    (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol
}

fn samples() -> Vec<Vector> {
    vec![
        Vector::new(1.0, 2.0, 3.0),
        Vector::new(-4.5, 0.25, 7.0),
        Vector::new(0.0, 0.0, -9.82),
        Vector::new(1e3, -2e-3, 5.5),
        Vector::new(-1.0, -1.0, -1.0),
    ]
}

// ─── Elementwise Tests ────────────────────────────────────────

#[test]
fn elementwise_operators() {
    let a = Vector::new(2.0, 6.0, -8.0);
    let b = Vector::new(1.0, 3.0, 4.0);
    assert_eq!(a + b, Vector::new(3.0, 9.0, -4.0));
    assert_eq!(a - b, Vector::new(1.0, 3.0, -12.0));
    assert_eq!(a * b, Vector::new(2.0, 18.0, -32.0));
    assert_eq!(a / b, Vector::new(2.0, 2.0, -2.0));
}

#[test]
fn named_functions_match_operators() {
    let a = Vector::new(2.0, 6.0, -8.0);
    let b = Vector::new(1.0, 3.0, 4.0);
    assert_eq!(add(a, b), a + b);
    assert_eq!(subtract(a, b), a - b);
    assert_eq!(multiply_elementwise(a, b), a * b);
    assert_eq!(divide_elementwise(a, b), a / b);
}

#[test]
fn combine_with_custom_op() {
    let a = Vector::new(1.0, 5.0, -3.0);
    let b = Vector::new(4.0, 2.0, -1.0);
    assert_eq!(Vector::combine(a, b, f32::max), Vector::new(4.0, 5.0, -1.0));
}

#[test]
fn add_is_commutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a);
        }
    }
}

#[test]
fn add_then_subtract_round_trips() {
    for a in samples() {
        for b in samples() {
            assert!(approx_eq((a + b) - b, a, 1e-3), "{a} + {b} - {b}");
        }
    }
}

#[test]
fn divide_by_zero_propagates() {
    let v = Vector::new(1.0, -1.0, 0.0) / Vector::ZERO;
    assert_eq!(v.x, f32::INFINITY);
    assert_eq!(v.y, f32::NEG_INFINITY);
    assert!(v.z.is_nan());
    assert!(!v.is_finite());
}

#[test]
fn negation() {
    assert_eq!(-Vector::new(1.0, -2.0, 3.0), Vector::new(-1.0, 2.0, -3.0));
}

#[test]
fn negation_flips_sign_of_zero() {
    let n = -Vector::ZERO;
    assert!(n.x.is_sign_negative());
    assert!(n.y.is_sign_negative());
    assert!(n.z.is_sign_negative());
    assert!((-n).x.is_sign_positive());
}

// ─── Broadcast / Dot / Length Tests ───────────────────────────

#[test]
fn broadcast_fills_all_components() {
    assert_eq!(broadcast(2.5), Vector::new(2.5, 2.5, 2.5));
    assert_eq!(broadcast(1.0), Vector::ONE);
}

#[test]
fn dot_basic() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(4.0, -5.0, 6.0);
    assert_eq!(dot(a, b), 12.0);
    assert_eq!(a.dot(b), 12.0);
}

#[test]
fn dot_is_commutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(dot(a, b), dot(b, a));
        }
    }
}

/// The z term is a product. An additive z term (`z1 + z2`) would give 5.0 here.
#[test]
fn dot_multiplies_z_components() {
    let a = Vector::new(0.0, 0.0, 2.0);
    let b = Vector::new(0.0, 0.0, 3.0);
    assert_eq!(dot(a, b), 6.0);
    assert_eq!(length(Vector::Z * broadcast(4.0)), 4.0);
}

#[test]
fn dot_self_is_length_squared() {
    for v in samples() {
        assert_eq!(dot(v, v), length_squared(v));
    }
}

#[test]
fn length_of_3_4_0() {
    assert!((length(Vector::new(3.0, 4.0, 0.0)) - 5.0).abs() < 1e-6);
    assert!((length(Vector::new(0.0, 3.0, 4.0)) - 5.0).abs() < 1e-6);
}

#[test]
fn length_matches_glam() {
    for v in samples() {
        let expected = Vec3::from(v).length();
        assert!((length(v) - expected).abs() <= expected * 1e-6);
    }
}

// ─── Normalize / Project Tests ────────────────────────────────

#[test]
fn normalize_yields_unit_length() {
    for v in samples() {
        let n = normalize(v);
        assert!((length(n) - 1.0).abs() < 1e-5, "|normalize({v})| = {}", length(n));
    }
}

#[test]
fn normalize_keeps_direction() {
    let n = normalize(Vector::new(0.0, 0.0, -9.82));
    assert!(approx_eq(n, -Vector::Z, 1e-6));
}

#[test]
fn normalize_zero_is_nan() {
    let n = normalize(Vector::ZERO);
    assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
}

#[test]
fn try_normalize_rejects_zero() {
    let err = try_normalize(Vector::ZERO).unwrap_err();
    assert!(matches!(err, VisError::DegenerateNormalize));
    let ok = try_normalize(Vector::new(2.0, 0.0, 0.0)).unwrap();
    assert_eq!(ok, Vector::X);
}

#[test]
fn project_onto_axis() {
    let v = Vector::new(3.0, -2.0, 5.0);
    assert!(approx_eq(project(v, Vector::X * broadcast(10.0)), Vector::new(3.0, 0.0, 0.0), 1e-6));
    assert!(approx_eq(project(v, Vector::Z), Vector::new(0.0, 0.0, 5.0), 1e-6));
}

#[test]
fn project_is_idempotent() {
    for v in samples() {
        for onto in samples() {
            let once = project(v, onto);
            let twice = project(once, onto);
            let tol = 1e-4 * (1.0 + length(v));
            assert!(approx_eq(once, twice, tol), "project({v}, {onto})");
        }
    }
}

#[test]
fn project_residual_is_orthogonal() {
    let v = Vector::new(1.0, 2.0, 3.0);
    let onto = Vector::new(0.0, 1.0, 1.0);
    let residual = v - v.project(onto);
    assert!(dot(residual, onto).abs() < 1e-5);
}

// ─── Conversion Tests ─────────────────────────────────────────

#[test]
fn glam_vec3_conversion() {
    let v = Vector::new(1.0, 2.0, 3.0);
    let g: Vec3 = v.into();
    assert_eq!(g, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(Vector::from(g), v);
    assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
}

#[test]
fn vector_is_serializable() {
    let v = Vector::new(0.5, -1.0, 9.82);
    let json = serde_json::to_string(&v).unwrap();
    let recovered: Vector = serde_json::from_str(&json).unwrap();
    assert_eq!(v, recovered);
}

// ─── Matrix Tests ─────────────────────────────────────────────

fn ramp(start: f32, step: f32) -> Matrix {
    Matrix::from_elements(std::array::from_fn(|i| start + step * i as f32))
}

#[test]
fn matrix_add_elementwise() {
    let sum = ramp(0.0, 1.0) + ramp(10.0, -2.0);
    for (i, e) in sum.elements.iter().enumerate() {
        assert_eq!(*e, 10.0 - i as f32);
    }
    assert_eq!(matrix_add(&ramp(0.0, 1.0), &ramp(10.0, -2.0)), sum);
}

#[test]
fn matrix_subtract_elementwise() {
    let diff = Matrix::IDENTITY - Matrix::IDENTITY;
    assert_eq!(diff, Matrix::ZERO);
    assert_eq!(matrix_subtract(&Matrix::IDENTITY, &Matrix::ZERO), Matrix::IDENTITY);
}

#[test]
fn matrix_add_subtract_round_trip() {
    let m1 = ramp(-3.5, 0.75);
    let m2 = ramp(100.0, -6.25);
    assert_eq!((m1 + m2) - m2, m1);
}

#[test]
fn matrix_get_is_row_major() {
    let m = ramp(0.0, 1.0);
    assert_eq!(m.get(0, 3), 3.0);
    assert_eq!(m.get(3, 0), 12.0);
}

#[test]
#[should_panic]
fn matrix_get_out_of_range_panics() {
    let _ = Matrix::IDENTITY.get(4, 0);
}

#[test]
fn matrix_glam_conversion() {
    let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let m = Matrix::from(t);
    assert_eq!(m.get(0, 3), 1.0);
    assert_eq!(m.get(1, 3), 2.0);
    assert_eq!(m.get(2, 3), 3.0);
    assert_eq!(Mat4::from(m), t);
    assert_eq!(Matrix::from(Mat4::IDENTITY), Matrix::IDENTITY);
}
