//! Rotation, scale, and homogeneous transform builders
//!
//! Every rotation builder exists in two forms: the `c*` family produces
//! matrices for the column-vector convention (`result = M * v`) and the `r*`
//! family for the row-vector convention (`result = v * M`). The two are
//! transposes of each other; callers pick one family and stay with it.
//!
//! Homogeneous builders embed an n-dimensional linear part in an (n+1)-sized
//! matrix with a translation column (or row, for the `rh*` family).
//! [`chapply4`]/[`rhapply4`] apply an affine transform to a point one
//! dimension lower; [`chproj4`]/[`rhproj4`] additionally divide through the
//! extra coordinate for projective maps.

use rotix_vec::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::Quat;

// ---- plain rotations ----

/// 2x2 rotation by `theta` radians, column-vector convention
pub fn crot2(theta: f32) -> Mat2 {
    let (s, c) = theta.sin_cos();
    Mat2::new(Vec2::new(c, -s), Vec2::new(s, c))
}

/// 2x2 rotation by `theta` radians, row-vector convention
#[inline]
pub fn rrot2(theta: f32) -> Mat2 {
    crot2(theta).transpose()
}

/// 3x3 rotation about a unit `axis` by `theta` radians, column-vector
/// convention
#[inline]
pub fn crot3(axis: Vec3, theta: f32) -> Mat3 {
    Quat::from_axis_angle(axis, theta).to_rotation_matrix()
}

/// 3x3 rotation about a unit `axis` by `theta` radians, row-vector convention
#[inline]
pub fn rrot3(axis: Vec3, theta: f32) -> Mat3 {
    Quat::from_axis_angle(axis, theta).to_rotation_matrix_row()
}

/// 3x3 shortest-arc rotation taking unit `from` to unit `to`, column-vector
/// convention
#[inline]
pub fn crot3_arc(from: Vec3, to: Vec3) -> Mat3 {
    Quat::from_arc(from, to).to_rotation_matrix()
}

/// 3x3 shortest-arc rotation taking unit `from` to unit `to`, row-vector
/// convention
#[inline]
pub fn rrot3_arc(from: Vec3, to: Vec3) -> Mat3 {
    Quat::from_arc(from, to).to_rotation_matrix_row()
}

/// 3x3 rotation matrix of a unit quaternion, column-vector convention
#[inline]
pub fn crot3_quat(q: Quat) -> Mat3 {
    q.to_rotation_matrix()
}

/// 3x3 rotation matrix of a unit quaternion, row-vector convention
#[inline]
pub fn rrot3_quat(q: Quat) -> Mat3 {
    q.to_rotation_matrix_row()
}

// ---- scales ----

/// 2x2 non-uniform scale
#[inline]
pub fn scale2(s: Vec2) -> Mat2 {
    Mat2::from_diagonal(s)
}

/// 3x3 non-uniform scale
#[inline]
pub fn scale3(s: Vec3) -> Mat3 {
    Mat3::from_diagonal(s)
}

/// 4x4 non-uniform scale
#[inline]
pub fn scale4(s: Vec4) -> Mat4 {
    Mat4::from_diagonal(s)
}

// ---- homogeneous 2D (3x3) ----

/// Homogeneous 2D rotation, column-vector convention
#[inline]
pub fn chrot3(theta: f32) -> Mat3 {
    Mat3::from_mat2(crot2(theta))
}

/// Homogeneous 2D rotation, row-vector convention
#[inline]
pub fn rhrot3(theta: f32) -> Mat3 {
    chrot3(theta).transpose()
}

/// Homogeneous 2D scale (both conventions; the matrix is diagonal)
#[inline]
pub fn chscale3(s: Vec2) -> Mat3 {
    Mat3::from_diagonal(Vec3::new(s.x, s.y, 1.0))
}

/// Homogeneous 2D scale, row-vector convention
#[inline]
pub fn rhscale3(s: Vec2) -> Mat3 {
    chscale3(s)
}

/// Homogeneous 2D translation in the last column, column-vector convention
pub fn chtrans3(t: Vec2) -> Mat3 {
    Mat3::new(
        Vec3::new(1.0, 0.0, t.x),
        Vec3::new(0.0, 1.0, t.y),
        Vec3::Z,
    )
}

/// Homogeneous 2D translation in the last row, row-vector convention
#[inline]
pub fn rhtrans3(t: Vec2) -> Mat3 {
    chtrans3(t).transpose()
}

// ---- homogeneous 3D (4x4) ----

/// Homogeneous 3D rotation about a unit `axis`, column-vector convention
#[inline]
pub fn chrot4(axis: Vec3, theta: f32) -> Mat4 {
    Mat4::from_mat3(crot3(axis, theta))
}

/// Homogeneous 3D rotation about a unit `axis`, row-vector convention
#[inline]
pub fn rhrot4(axis: Vec3, theta: f32) -> Mat4 {
    chrot4(axis, theta).transpose()
}

/// Homogeneous 3D rotation of a unit quaternion, column-vector convention
#[inline]
pub fn chrot4_quat(q: Quat) -> Mat4 {
    Mat4::from_mat3(q.to_rotation_matrix())
}

/// Homogeneous 3D rotation of a unit quaternion, row-vector convention
#[inline]
pub fn rhrot4_quat(q: Quat) -> Mat4 {
    chrot4_quat(q).transpose()
}

/// Homogeneous 3D scale (both conventions; the matrix is diagonal)
#[inline]
pub fn chscale4(s: Vec3) -> Mat4 {
    Mat4::from_diagonal(Vec4::new(s.x, s.y, s.z, 1.0))
}

/// Homogeneous 3D scale, row-vector convention
#[inline]
pub fn rhscale4(s: Vec3) -> Mat4 {
    chscale4(s)
}

/// Homogeneous 3D translation in the last column, column-vector convention
pub fn chtrans4(t: Vec3) -> Mat4 {
    Mat4::new(
        Vec4::new(1.0, 0.0, 0.0, t.x),
        Vec4::new(0.0, 1.0, 0.0, t.y),
        Vec4::new(0.0, 0.0, 1.0, t.z),
        Vec4::W,
    )
}

/// Homogeneous 3D translation in the last row, row-vector convention
#[inline]
pub fn rhtrans4(t: Vec3) -> Mat4 {
    chtrans4(t).transpose()
}

// ---- homogeneous application ----

/// Apply an affine homogeneous 3x3 transform to a 2D point: append 1,
/// multiply as a column vector, drop the extra coordinate (no division)
#[inline]
pub fn chapply3(m: &Mat3, p: Vec2) -> Vec2 {
    (*m * Vec3::new(p.x, p.y, 1.0)).xy()
}

/// Apply a projective homogeneous 3x3 transform to a 2D point: append 1,
/// multiply as a column vector, divide by the extra coordinate
#[inline]
pub fn chproj3(m: &Mat3, p: Vec2) -> Vec2 {
    let r = *m * Vec3::new(p.x, p.y, 1.0);
    r.xy() / r.z
}

/// Row-vector dual of [`chapply3`]
#[inline]
pub fn rhapply3(p: Vec2, m: &Mat3) -> Vec2 {
    (Vec3::new(p.x, p.y, 1.0) * *m).xy()
}

/// Row-vector dual of [`chproj3`]
#[inline]
pub fn rhproj3(p: Vec2, m: &Mat3) -> Vec2 {
    let r = Vec3::new(p.x, p.y, 1.0) * *m;
    r.xy() / r.z
}

/// Apply an affine homogeneous 4x4 transform to a 3D point: append 1,
/// multiply as a column vector, drop the extra coordinate (no division)
#[inline]
pub fn chapply4(m: &Mat4, p: Vec3) -> Vec3 {
    (*m * Vec4::new(p.x, p.y, p.z, 1.0)).xyz()
}

/// Apply a projective homogeneous 4x4 transform to a 3D point: append 1,
/// multiply as a column vector, divide by the extra coordinate
#[inline]
pub fn chproj4(m: &Mat4, p: Vec3) -> Vec3 {
    let r = *m * Vec4::new(p.x, p.y, p.z, 1.0);
    r.xyz() / r.w
}

/// Row-vector dual of [`chapply4`]
#[inline]
pub fn rhapply4(p: Vec3, m: &Mat4) -> Vec3 {
    (Vec4::new(p.x, p.y, p.z, 1.0) * *m).xyz()
}

/// Row-vector dual of [`chproj4`]
#[inline]
pub fn rhproj4(p: Vec3, m: &Mat4) -> Vec3 {
    let r = Vec4::new(p.x, p.y, p.z, 1.0) * *m;
    r.xyz() / r.w
}
