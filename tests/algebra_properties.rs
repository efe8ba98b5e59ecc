//! Randomized property tests for the matrix algebra core
//!
//! These exercise the adjoint-method inverse and the determinant/adjoint
//! relation over random invertible matrices, not just hand-picked samples.

use approx::assert_relative_eq;
use rotix::{Mat3, Mat4, Vec3, Vec4};

const TOLERANCE: f32 = 1e-4;
const ROUNDS: usize = 200;

fn rand_unit() -> f32 {
    fastrand::f32() * 2.0 - 1.0
}

/// Random matrix with entries in [-1, 1] and determinant bounded away from
/// zero, so the inverse is well conditioned for f32
fn random_invertible_mat3() -> Mat3 {
    loop {
        let m = Mat3::new(
            Vec3::new(rand_unit(), rand_unit(), rand_unit()),
            Vec3::new(rand_unit(), rand_unit(), rand_unit()),
            Vec3::new(rand_unit(), rand_unit(), rand_unit()),
        );
        if m.determinant().abs() > 0.2 {
            return m;
        }
    }
}

fn random_invertible_mat4() -> Mat4 {
    loop {
        let m = Mat4::new(
            Vec4::new(rand_unit(), rand_unit(), rand_unit(), rand_unit()),
            Vec4::new(rand_unit(), rand_unit(), rand_unit(), rand_unit()),
            Vec4::new(rand_unit(), rand_unit(), rand_unit(), rand_unit()),
            Vec4::new(rand_unit(), rand_unit(), rand_unit(), rand_unit()),
        );
        if m.determinant().abs() > 0.2 {
            return m;
        }
    }
}

fn assert_mat3_eq(a: Mat3, b: Mat3) {
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(a[i][j], b[i][j], epsilon = TOLERANCE, max_relative = TOLERANCE);
        }
    }
}

fn assert_mat4_eq(a: Mat4, b: Mat4) {
    for i in 0..4 {
        for j in 0..4 {
            assert_relative_eq!(a[i][j], b[i][j], epsilon = TOLERANCE, max_relative = TOLERANCE);
        }
    }
}

// ==================== 3x3 ====================

#[test]
fn mat3_inverse_roundtrip() {
    fastrand::seed(0x5eed_3331);
    for _ in 0..ROUNDS {
        let m = random_invertible_mat3();
        let inv = m.inverse();
        assert_mat3_eq(m * inv, Mat3::IDENTITY);
        assert_mat3_eq(inv * m, Mat3::IDENTITY);
    }
}

#[test]
fn mat3_double_inverse_is_identity_map() {
    fastrand::seed(0x5eed_3332);
    for _ in 0..ROUNDS {
        let m = random_invertible_mat3();
        assert_mat3_eq(m.inverse().inverse(), m);
    }
}

#[test]
fn mat3_adjoint_determinant_relation() {
    fastrand::seed(0x5eed_3333);
    for _ in 0..ROUNDS {
        let m = random_invertible_mat3();
        let adj = m.adjoint();
        let det = m.determinant();
        for i in 0..3 {
            assert_relative_eq!(adj[i].dot(m[i]), det, epsilon = TOLERANCE, max_relative = TOLERANCE);
        }
        assert_mat3_eq(m * adj.transpose(), Mat3::IDENTITY * det);
    }
}

// ==================== 4x4 ====================

#[test]
fn mat4_inverse_roundtrip() {
    fastrand::seed(0x5eed_4441);
    for _ in 0..ROUNDS {
        let m = random_invertible_mat4();
        let inv = m.inverse();
        assert_mat4_eq(m * inv, Mat4::IDENTITY);
        assert_mat4_eq(inv * m, Mat4::IDENTITY);
    }
}

#[test]
fn mat4_double_inverse_is_identity_map() {
    fastrand::seed(0x5eed_4442);
    for _ in 0..ROUNDS {
        let m = random_invertible_mat4();
        assert_mat4_eq(m.inverse().inverse(), m);
    }
}

#[test]
fn mat4_adjoint_determinant_relation() {
    fastrand::seed(0x5eed_4443);
    for _ in 0..ROUNDS {
        let m = random_invertible_mat4();
        let adj = m.adjoint();
        let det = m.determinant();
        for i in 0..4 {
            assert_relative_eq!(adj[i].dot(m[i]), det, epsilon = TOLERANCE, max_relative = TOLERANCE);
        }
        assert_mat4_eq(m * adj.transpose(), Mat4::IDENTITY * det);
    }
}

#[test]
fn mat4_determinant_matches_product_rule() {
    fastrand::seed(0x5eed_4444);
    for _ in 0..50 {
        let a = random_invertible_mat4();
        let b = random_invertible_mat4();
        assert_relative_eq!(
            (a * b).determinant(),
            a.determinant() * b.determinant(),
            max_relative = 1e-3
        );
    }
}

#[test]
fn identity_scenario() {
    let m = Mat4::IDENTITY;
    assert_eq!(m.determinant(), 1.0);
    assert_eq!(m.trace(), 4.0);
    assert_eq!(m.inverse(), Mat4::IDENTITY);
}
