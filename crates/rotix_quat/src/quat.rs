//! Quaternion algebra for 3D rotations
//!
//! A quaternion is stored as `{x, y, z, w}` where `(x, y, z)` is the vector
//! (imaginary) part and `w` the scalar part. Unit quaternions represent
//! rotations; the type does not enforce unit length. Callers maintain the
//! invariant, and operations that require it assert in debug builds only.
//!
//! Composition convention: `a * b` is the Hamilton product and rotating by it
//! applies `b` first, then `a`. The [`Quat::then`] combinator expresses the
//! opposite, often more readable, "apply self first" order.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use rotix_vec::{Mat3, Vec3, Vec4};

/// Smoothing epsilon for the atan2/sinc denominators in the log/exp maps.
/// Avoids a branch at the zero-rotation singularity at the cost of a bounded
/// error there.
const MAP_EPSILON: f32 = 1e-8;

/// Quaternion with vector part (x, y, z) and scalar part w
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a quaternion from raw components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a quaternion from a vector part and a scalar part
    #[inline]
    pub fn from_parts(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Reinterpret a Vec4 as a quaternion ({x, y, z} vector part, w scalar)
    #[inline]
    pub fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// The components as a Vec4
    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// The vector (imaginary) part
    #[inline]
    pub fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Rotation of `angle` radians about `axis` (must be unit length):
    /// `(sin(angle/2) * axis, cos(angle/2))`
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::from_parts(axis * s, c)
    }

    /// Shortest-arc rotation taking unit vector `from` to unit vector `to`.
    ///
    /// Uses the bisector construction: with `h = normalize(from + to)` the
    /// result is `(from x h, from . h)`, which encodes the half angle without
    /// any trigonometric calls. Exactly antiparallel inputs have no unique
    /// bisector; the fallback is a half turn about the coordinate axis least
    /// aligned with `from`, crossed in to stay perpendicular.
    pub fn from_arc(from: Vec3, to: Vec3) -> Self {
        let mid = from + to;
        if mid.length_squared() > 1e-12 {
            let half = mid.normalized();
            Self::from_parts(from.cross(half), from.dot(half))
        } else {
            let a = from.abs();
            let pick = if a.x <= a.y && a.x <= a.z {
                Vec3::X
            } else if a.y <= a.z {
                Vec3::Y
            } else {
                Vec3::Z
            };
            Self::from_parts(from.cross(pick).normalized(), 0.0)
        }
    }

    /// Dot product over all four components
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length
    ///
    /// The input must be non-zero. Checked in debug builds only.
    #[inline]
    pub fn normalized(self) -> Self {
        debug_assert!(
            self.length_squared() > 0.0,
            "cannot normalize a zero quaternion"
        );
        self * (1.0 / self.length())
    }

    /// One Newton step toward unit length: `q * (3 - |q|^2) / 2`.
    ///
    /// Valid only when the input is already close to unit length, as after a
    /// lerp of unit quaternions or an accumulation of rounding drift.
    #[inline]
    pub fn fast_renormalized(self) -> Self {
        self * (0.5 * (3.0 - self.length_squared()))
    }

    /// Conjugate: negated vector part
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse: `conjugate / |q|^2` (equals the conjugate for
    /// unit quaternions)
    #[inline]
    pub fn inverse(self) -> Self {
        let n = self.length_squared();
        debug_assert!(n > 0.0, "cannot invert a zero quaternion");
        self.conjugate() * (1.0 / n)
    }

    /// Compose so that rotating by the result applies `self` first, then
    /// `next`. Equivalent to `next * self`.
    #[inline]
    pub fn then(self, next: Self) -> Self {
        next * self
    }

    /// Rotate a point by this quaternion (which must be unit length).
    ///
    /// Double-cross form of the sandwich product `q p q*`:
    /// `p + 2 (w b0 + b1)` with `b0 = v x p`, `b1 = v x b0`. 18 multiplies,
    /// no matrix construction.
    #[inline]
    pub fn rotate(self, p: Vec3) -> Vec3 {
        self.debug_assert_unit();
        let v = self.vector();
        let b0 = v.cross(p);
        let b1 = v.cross(b0);
        p + (b0 * self.w + b1) * 2.0
    }

    /// Rotation axis (unit vector), or near-zero for the identity rotation
    #[inline]
    pub fn axis(self) -> Vec3 {
        self.vector().normalized_safe()
    }

    /// Total rotation angle in radians: `2 atan2(|v|, w)`
    #[inline]
    pub fn angle(self) -> f32 {
        2.0 * self.vector().length().atan2(self.w)
    }

    // ---- rotation matrix conversions ----

    /// Rotation matrix in the column-vector convention: `M * p == rotate(p)`.
    ///
    /// Closed 9-term form from the doubled component products.
    pub fn to_rotation_matrix(self) -> Mat3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx = self.x * x2;
        let yy = self.y * y2;
        let zz = self.z * z2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yz = self.y * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;
        Mat3::new(
            Vec3::new(1.0 - (yy + zz), xy - wz, xz + wy),
            Vec3::new(xy + wz, 1.0 - (xx + zz), yz - wx),
            Vec3::new(xz - wy, yz + wx, 1.0 - (xx + yy)),
        )
    }

    /// Rotation matrix in the row-vector convention: `p * M == rotate(p)`.
    /// Transpose of [`Quat::to_rotation_matrix`].
    #[inline]
    pub fn to_rotation_matrix_row(self) -> Mat3 {
        self.to_rotation_matrix().transpose()
    }

    /// Extract the quaternion of a rotation matrix in the column-vector
    /// convention.
    ///
    /// Selects whichever of the four output components has the largest
    /// magnitude (pairwise comparisons of the diagonal), then assembles the
    /// rest through per-case sign multipliers and an index permutation rather
    /// than four separate formula blocks. Matches the textbook
    /// largest-diagonal extraction up to the double-cover sign.
    ///
    /// The input must be a proper rotation matrix (orthonormal, det +1).
    pub fn from_rotation_matrix(m: &Mat3) -> Self {
        // case index = which of x (0), y (1), z (2), w (3) is largest
        let c = if m.z.z < 0.0 {
            usize::from(m.x.x <= m.y.y)
        } else {
            2 + usize::from(m.x.x >= -m.y.y)
        };

        let sign = |neg: bool| if neg { -1.0f32 } else { 1.0 };
        let sx = sign(c == 0 || c == 3);
        let sy = sign(c == 1 || c == 3);
        let sz = sign(c == 2 || c == 3);
        let qt = 1.0 - sx * m.x.x - sy * m.y.y - sz * m.z.z;
        let qs = 0.5 / qt.sqrt();

        let mut q = [0.0f32; 4];
        q[c] = qt * qs;
        if c == 3 {
            // remaining components from the antisymmetric off-diagonal parts
            for j in 0..3 {
                let (a, b) = ((j + 1) % 3, (j + 2) % 3);
                q[j] = (m[b][a] - m[a][b]) * qs;
            }
        } else {
            // remaining vector components from the symmetric parts, scalar
            // from the antisymmetric pair opposite the chosen component
            for j in 0..3 {
                if j != c {
                    q[j] = (m[c][j] + m[j][c]) * qs;
                }
            }
            let (a, b) = ((c + 1) % 3, (c + 2) % 3);
            q[3] = (m[b][a] - m[a][b]) * qs;
        }
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Extract the quaternion of a rotation matrix in the row-vector
    /// convention.
    #[inline]
    pub fn from_rotation_matrix_row(m: &Mat3) -> Self {
        Self::from_rotation_matrix(&m.transpose())
    }

    // ---- logarithm / exponential maps ----

    /// Logarithm map of a unit quaternion: the half-angle rotation vector
    /// `axis * angle/2`.
    ///
    /// `atan2`-based, so it stays accurate for rotations near a half turn
    /// where an `acos` form loses precision. The singular direction at zero
    /// rotation is smoothed by a small epsilon instead of branched around.
    #[inline]
    pub fn log_unit(self) -> Vec3 {
        self.debug_assert_unit();
        let v = self.vector();
        let s = v.length();
        v * (s.atan2(self.w) / (s + MAP_EPSILON))
    }

    /// Exponential map: inverse of [`Quat::log_unit`]. Takes a half-angle
    /// rotation vector and returns the corresponding unit quaternion.
    #[inline]
    pub fn exp_unit(v: Vec3) -> Self {
        let theta = v.length();
        let (s, c) = theta.sin_cos();
        Self::from_parts(v * (s / (theta + MAP_EPSILON)), c)
    }

    /// General logarithm: the unit log in the vector part and `ln |q|` in the
    /// scalar part
    #[inline]
    pub fn log(self) -> Self {
        let v = self.vector();
        let s = v.length();
        Self::from_parts(v * (s.atan2(self.w) / (s + MAP_EPSILON)), self.length().ln())
    }

    /// General exponential: inverse of [`Quat::log`]; the scalar part scales
    /// the result by `exp(w)`
    #[inline]
    pub fn exp(self) -> Self {
        let v = self.vector();
        let theta = v.length();
        let (s, c) = theta.sin_cos();
        let scale = self.w.exp();
        Self::from_parts(v * (scale * s / (theta + MAP_EPSILON)), scale * c)
    }

    /// Advance this orientation by an angular velocity `omega` (radians per
    /// second, world frame) over `dt` seconds
    #[inline]
    pub fn integrate(self, omega: Vec3, dt: f32) -> Self {
        self.then(Self::exp_unit(omega * (0.5 * dt)))
    }

    // ---- interpolation ----

    /// Spherical linear interpolation from `self` (s = 0) to `other` (s = 1).
    ///
    /// Nearly identical or nearly opposite inputs return `self` outright to
    /// avoid a 0/0 blend. At half a turn the axis of travel is not unique and
    /// the unnormalized midpoint is returned; any choice there is valid.
    pub fn slerp(self, other: Self, s: f32) -> Self {
        let cos_half = self.dot(other);
        if cos_half.abs() >= 0.99999 {
            return self;
        }
        let half_theta = cos_half.clamp(-1.0, 1.0).acos();
        let sin_half = half_theta.sin();
        if sin_half < 1e-5 {
            return (self + other) * 0.5;
        }
        let ra = (((1.0 - s) * half_theta).sin()) / sin_half;
        let rb = ((s * half_theta).sin()) / sin_half;
        self * ra + other * rb
    }

    /// Normalized linear interpolation: cheaper than slerp, non-constant
    /// angular velocity. Renormalizes with the single Newton step, so the
    /// inputs must be unit length.
    #[inline]
    pub fn nlerp(self, other: Self, s: f32) -> Self {
        (self * (1.0 - s) + other * s).fast_renormalized()
    }

    /// Flip sign if needed so that interpolating from `reference` to the
    /// result takes the shorter arc (q and -q encode the same rotation)
    #[inline]
    pub fn aligned(self, reference: Self) -> Self {
        if reference.dot(self) < 0.0 {
            -self
        } else {
            self
        }
    }

    // ---- axis-constrained projections ----

    /// Closest rotation about the given unit `axis`.
    ///
    /// Projects onto the 2D subspace spanned by the axial component and w,
    /// then renormalizes. If both projections are exactly zero there is no
    /// direction to normalize and the identity is returned as-is; valid
    /// rotation input never lands there.
    pub fn closest_axial(self, axis: Vec3) -> Self {
        let a = self.vector().dot(axis);
        let n = (a * a + self.w * self.w).sqrt();
        if n > 0.0 {
            Self::from_parts(axis * (a / n), self.w / n)
        } else {
            Self::IDENTITY
        }
    }

    /// Closest rotation expressible as the Hamilton product `rx * ry` of a
    /// rotation about X and a rotation about Y (the Y rotation applies first).
    ///
    /// Writing the target as `Rx(2a) * Ry(2b)`, the objective decouples in
    /// the sum and difference half-angles `a+b` and `a-b`; each subproblem is
    /// a 2D projection solved in closed form. `disc = sqrt(1 - 4 det^2)` with
    /// `det = x y - z w` is the product of the two subproblem norms; when one
    /// norm vanishes that angle is unconstrained and the stable fallback picks
    /// zero for it.
    pub fn closest_rot_xy(self) -> Self {
        self.debug_assert_unit();
        let sum_s = self.x + self.y;
        let sum_c = self.w - self.z;
        let dif_s = self.x - self.y;
        let dif_c = self.w + self.z;
        let rs = (sum_s * sum_s + sum_c * sum_c).sqrt();
        let rd = (dif_s * dif_s + dif_c * dif_c).sqrt();
        let (sp, cp) = if rs > 1e-6 {
            (sum_s / rs, sum_c / rs)
        } else {
            (0.0, 1.0)
        };
        let (sm, cm) = if rd > 1e-6 {
            (dif_s / rd, dif_c / rd)
        } else {
            (0.0, 1.0)
        };
        Self::new(
            0.5 * (sp + sm),
            0.5 * (sp - sm),
            0.5 * (cm - cp),
            0.5 * (cm + cp),
        )
    }

    /// Split this rotation into a twist about the given unit `axis` and a
    /// residual swing, such that `twist.then(swing) == self` and the twist
    /// leaves `axis` fixed.
    ///
    /// Returns `(twist, swing)`.
    pub fn decompose_twist(self, axis: Vec3) -> (Self, Self) {
        self.debug_assert_unit();
        let rotated = self.rotate(axis);
        let swing = Self::from_arc(axis, rotated);
        let twist = swing.conjugate() * self;
        (twist, swing)
    }

    #[inline]
    fn debug_assert_unit(self) {
        debug_assert!(
            (self.length_squared() - 1.0).abs() < 1e-3,
            "quaternion is not unit length: |q|^2 = {}",
            self.length_squared()
        );
    }
}

// Operator overloads

/// Hamilton product; rotating by `a * b` applies `b` first, then `a`
impl std::ops::Mul for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        let av = self.vector();
        let bv = other.vector();
        Self::from_parts(
            bv * self.w + av * other.w + av.cross(bv),
            self.w * other.w - av.dot(bv),
        )
    }
}

impl std::ops::Mul<f32> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<Vec4> for Quat {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Quat> for Vec4 {
    #[inline]
    fn from(q: Quat) -> Self {
        q.to_vec4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn quat_approx_eq(a: Quat, b: Quat) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    #[test]
    fn test_axis_angle_z_quarter_turn() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        assert!(quat_approx_eq(
            q,
            Quat::new(0.0, 0.0, 0.70710678, 0.70710678)
        ));
        assert!(approx_eq(q.length_squared(), 1.0));
        let p = q.rotate(Vec3::X);
        assert!(vec_approx_eq(p, Vec3::Y), "expected Y, got {:?}", p);
    }

    #[test]
    fn test_rotation_fixes_axis() {
        let axis = Vec3::new(1.0, -2.0, 0.5).normalized();
        let q = Quat::from_axis_angle(axis, 1.234);
        assert!(vec_approx_eq(q.rotate(axis), axis));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 2.1);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(approx_eq(p.length(), q.rotate(p).length()));
    }

    #[test]
    fn test_then_composition() {
        let a = Quat::from_axis_angle(Vec3::X, 0.7);
        let b = Quat::from_axis_angle(Vec3::Y, -1.2);
        let p = Vec3::new(0.3, -0.9, 1.5);
        let sequential = b.rotate(a.rotate(p));
        let composed = a.then(b).rotate(p);
        assert!(vec_approx_eq(sequential, composed));
    }

    #[test]
    fn test_conjugate_inverts_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 0.9);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(q.conjugate().rotate(q.rotate(p)), p));
    }

    #[test]
    fn test_inverse_nonunit() {
        let q = Quat::new(0.2, -0.4, 0.1, 2.0);
        let prod = q * q.inverse();
        assert!(quat_approx_eq(prod, Quat::IDENTITY));
    }

    #[test]
    fn test_axis_angle_accessors() {
        let axis = Vec3::new(0.0, 0.6, 0.8);
        let q = Quat::from_axis_angle(axis, 1.1);
        assert!(vec_approx_eq(q.axis(), axis));
        assert!(approx_eq(q.angle(), 1.1));
    }

    #[test]
    fn test_from_arc_basis() {
        let q = Quat::from_arc(Vec3::X, Vec3::Y);
        assert!(vec_approx_eq(q.rotate(Vec3::X), Vec3::Y));
        assert!(approx_eq(q.length_squared(), 1.0));
    }

    #[test]
    fn test_from_arc_identity() {
        let v = Vec3::new(0.0, 0.6, 0.8);
        assert!(quat_approx_eq(Quat::from_arc(v, v), Quat::IDENTITY));
    }

    #[test]
    fn test_from_arc_antiparallel() {
        let v = Vec3::new(0.0, 0.0, 1.0);
        let q = Quat::from_arc(v, -v);
        assert!(approx_eq(q.length_squared(), 1.0));
        assert!(vec_approx_eq(q.rotate(v), -v));
        // the half-turn axis is perpendicular to the input
        assert!(approx_eq(q.vector().dot(v), 0.0));
    }

    #[test]
    fn test_matrix_roundtrip_column() {
        let q = Quat::from_axis_angle(Vec3::new(0.48, 0.6, 0.64), 2.5);
        let m = q.to_rotation_matrix();
        let p = Vec3::new(-1.0, 0.5, 2.0);
        assert!(vec_approx_eq(m * p, q.rotate(p)));
        let back = Quat::from_rotation_matrix(&m).aligned(q);
        assert!(quat_approx_eq(back, q));
    }

    #[test]
    fn test_matrix_roundtrip_row() {
        let q = Quat::from_axis_angle(Vec3::new(-0.6, 0.0, 0.8), -1.9);
        let m = q.to_rotation_matrix_row();
        let p = Vec3::new(0.7, -0.2, 1.1);
        assert!(vec_approx_eq(p * m, q.rotate(p)));
        let back = Quat::from_rotation_matrix_row(&m).aligned(q);
        assert!(quat_approx_eq(back, q));
    }

    #[test]
    fn test_extraction_covers_all_cases() {
        // one rotation per dominant component: w, x, y, z
        let cases = [
            Quat::from_axis_angle(Vec3::X, 0.1),
            Quat::from_axis_angle(Vec3::X, PI - 0.1),
            Quat::from_axis_angle(Vec3::Y, PI - 0.1),
            Quat::from_axis_angle(Vec3::Z, PI - 0.1),
        ];
        for q in cases {
            let back = Quat::from_rotation_matrix(&q.to_rotation_matrix()).aligned(q);
            assert!(quat_approx_eq(back, q), "{:?} -> {:?}", q, back);
        }
    }

    #[test]
    fn test_log_exp_roundtrip() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 1.7);
        let v = q.log_unit();
        // the log is the half-angle rotation vector
        assert!(approx_eq(v.length(), 0.85));
        assert!(quat_approx_eq(Quat::exp_unit(v), q));
    }

    #[test]
    fn test_exp_unit_zero() {
        assert!(quat_approx_eq(Quat::exp_unit(Vec3::ZERO), Quat::IDENTITY));
    }

    #[test]
    fn test_general_log_exp_roundtrip() {
        let q = Quat::from_axis_angle(Vec3::X, 0.8) * 2.5;
        let back = q.log().exp();
        assert!(quat_approx_eq(back, q), "{:?} vs {:?}", q, back);
    }

    #[test]
    fn test_integrate_quarter_turn() {
        let omega = Vec3::Z * FRAC_PI_2; // 90 degrees per second
        let q = Quat::IDENTITY.integrate(omega, 1.0);
        assert!(vec_approx_eq(q.rotate(Vec3::X), Vec3::Y));
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quat::from_axis_angle(Vec3::Z, 0.3);
        let b = Quat::from_axis_angle(Vec3::Z, 2.1);
        assert!(quat_approx_eq(a.slerp(b, 0.0), a));
        assert!(quat_approx_eq(a.slerp(b, 1.0), b));
    }

    #[test]
    fn test_slerp_identical_and_opposite() {
        let q = Quat::from_axis_angle(Vec3::Y, 0.8);
        assert!(quat_approx_eq(q.slerp(q, 0.5), q));
        let r = q.slerp(-q, 0.5);
        assert!(r.x.is_finite() && r.y.is_finite() && r.z.is_finite() && r.w.is_finite());
    }

    #[test]
    fn test_slerp_midpoint_angle() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let mid = a.slerp(b, 0.5);
        assert!(quat_approx_eq(mid, Quat::from_axis_angle(Vec3::Y, FRAC_PI_2 / 2.0)));
    }

    #[test]
    fn test_nlerp_close_to_slerp_for_small_arcs() {
        let a = Quat::from_axis_angle(Vec3::X, 0.1);
        let b = Quat::from_axis_angle(Vec3::X, 0.3);
        let n = a.nlerp(b, 0.5);
        let s = a.slerp(b, 0.5);
        assert!((n.dot(s).abs() - 1.0).abs() < 1e-4);
        assert!(approx_eq(n.length_squared(), 1.0));
    }

    #[test]
    fn test_aligned_flips_sign() {
        let q = Quat::from_axis_angle(Vec3::Z, 0.4);
        assert!(quat_approx_eq((-q).aligned(q), q));
        assert!(quat_approx_eq(q.aligned(q), q));
    }

    #[test]
    fn test_closest_axial_projects() {
        // a mostly-Z rotation with some X contamination
        let q = (Quat::from_axis_angle(Vec3::Z, 1.0)
            .then(Quat::from_axis_angle(Vec3::X, 0.2)))
        .normalized();
        let c = q.closest_axial(Vec3::Z);
        assert!(approx_eq(c.length_squared(), 1.0));
        // result is purely axial
        assert!(approx_eq(c.x, 0.0));
        assert!(approx_eq(c.y, 0.0));
        // and fixes the axis
        assert!(vec_approx_eq(c.rotate(Vec3::Z), Vec3::Z));
    }

    #[test]
    fn test_closest_axial_exact_axial_is_fixed_point() {
        let q = Quat::from_axis_angle(Vec3::Y, 0.9);
        assert!(quat_approx_eq(q.closest_axial(Vec3::Y), q));
    }

    #[test]
    fn test_closest_axial_degenerate_returns_identity() {
        // both the axial component and w exactly zero: an exact half turn
        // about an axis perpendicular to the requested one
        let q = Quat::new(1.0, 0.0, 0.0, 0.0);
        let c = q.closest_axial(Vec3::Z);
        assert_eq!(c, Quat::IDENTITY);
    }

    #[test]
    fn test_closest_rot_xy_fixed_point() {
        let q = Quat::from_axis_angle(Vec3::X, 0.5) * Quat::from_axis_angle(Vec3::Y, 0.8);
        let c = q.closest_rot_xy();
        assert!(quat_approx_eq(c, q), "{:?} vs {:?}", q, c);
    }

    #[test]
    fn test_closest_rot_xy_is_closer_than_naive() {
        let q = Quat::from_axis_angle(Vec3::new(0.36, 0.48, 0.8), 1.3);
        let c = q.closest_rot_xy();
        assert!(approx_eq(c.length_squared(), 1.0));
        // satisfies the Rx * Ry constraint surface x*y == z*w
        assert!(approx_eq(c.x * c.y, c.z * c.w));
        // at least as close as dropping z and renormalizing
        let naive = Quat::new(q.x, q.y, 0.0, q.w).normalized();
        assert!(c.dot(q) >= naive.dot(q) - EPSILON);
    }

    #[test]
    fn test_decompose_twist_recomposes() {
        let axis = Vec3::new(0.0, 0.0, 1.0);
        let q = Quat::from_axis_angle(Vec3::new(0.6, 0.0, 0.8), 1.1);
        let (twist, swing) = q.decompose_twist(axis);
        assert!(quat_approx_eq(twist.then(swing).aligned(q), q));
        // twist leaves the axis fixed
        assert!(vec_approx_eq(twist.rotate(axis), axis));
        // swing carries the axis to where q does
        assert!(vec_approx_eq(swing.rotate(axis), q.rotate(axis)));
    }

    #[test]
    fn test_fast_renormalize_drift() {
        let q = Quat::from_axis_angle(Vec3::X, 0.6) * 1.01;
        let r = q.fast_renormalized();
        assert!((r.length_squared() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_vec4_conversions() {
        let v = Vec4::new(0.1, 0.2, 0.3, 0.4);
        let q = Quat::from(v);
        assert_eq!(Vec4::from(q), v);
    }
}
