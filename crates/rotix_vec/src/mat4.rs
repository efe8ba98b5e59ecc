//! 4x4 Matrix type
//!
//! The 4x4 determinant and adjoint are built on the generalized 4D cross
//! product of three vectors, mirroring the 3x3 cross/dot construction.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::{Mat3, Vec4};

/// 4x4 matrix stored as four row vectors; element (i, j) is row i, component j
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    pub x: Vec4,
    pub y: Vec4,
    pub z: Vec4,
    pub w: Vec4,
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const ZERO: Self = Self {
        x: Vec4::ZERO,
        y: Vec4::ZERO,
        z: Vec4::ZERO,
        w: Vec4::ZERO,
    };
    pub const IDENTITY: Self = Self {
        x: Vec4::X,
        y: Vec4::Y,
        z: Vec4::Z,
        w: Vec4::W,
    };

    /// Create a matrix from four row vectors
    #[inline]
    pub const fn new(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self { x, y, z, w }
    }

    /// Create a diagonal matrix
    #[inline]
    pub fn from_diagonal(d: Vec4) -> Self {
        Self::new(
            Vec4::new(d.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, d.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, d.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, d.w),
        )
    }

    /// Embed a 3x3 matrix in the upper-left corner with a homogeneous 1 corner
    #[inline]
    pub fn from_mat3(m: Mat3) -> Self {
        Self::new(
            Vec4::new(m.x.x, m.x.y, m.x.z, 0.0),
            Vec4::new(m.y.x, m.y.y, m.y.z, 0.0),
            Vec4::new(m.z.x, m.z.y, m.z.z, 0.0),
            Vec4::W,
        )
    }

    /// Copy of the upper-left 3x3 block
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::new(self.x.xyz(), self.y.xyz(), self.z.xyz())
    }

    /// Row `i` as a vector
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        self[i]
    }

    /// Column `j` as a vector
    #[inline]
    pub fn col(&self, j: usize) -> Vec4 {
        Vec4::new(self.x[j], self.y[j], self.z[j], self.w[j])
    }

    /// Transposed copy
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    /// Sum of the diagonal elements
    #[inline]
    pub fn trace(&self) -> f32 {
        self.x.x + self.y.y + self.z.z + self.w.w
    }

    /// Determinant: `row0 . cross(row1, row2, row3)`
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.x.dot(self.y.cross(self.z, self.w))
    }

    /// Cofactor-row adjoint: row i is the signed 4D cross product of the other
    /// three rows, alternating sign. Satisfies
    /// `adjoint().row(i).dot(row(i)) == det` and
    /// `M * adjoint(M).transpose() == det(M) * I`.
    #[inline]
    pub fn adjoint(&self) -> Self {
        Self::new(
            self.y.cross(self.z, self.w),
            -self.x.cross(self.z, self.w),
            self.x.cross(self.y, self.w),
            -self.x.cross(self.y, self.z),
        )
    }

    /// Inverse by the adjoint method.
    ///
    /// The matrix must be invertible. Checked in debug builds only; release
    /// builds divide by a zero determinant and propagate non-finite values.
    pub fn inverse(&self) -> Self {
        let adj = self.adjoint();
        let det = adj.x.dot(self.x);
        debug_assert!(det != 0.0, "cannot invert a singular Mat4");
        adj.transpose() / det
    }

    /// Inverse, or `None` if the determinant is exactly zero
    pub fn try_inverse(&self) -> Option<Self> {
        let adj = self.adjoint();
        let det = adj.x.dot(self.x);
        if det == 0.0 {
            None
        } else {
            Some(adj.transpose() / det)
        }
    }
}

// Operator overloads

impl std::ops::Add for Mat4 {
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

impl std::ops::Sub for Mat4 {
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

impl std::ops::Mul<f32> for Mat4 {
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

impl std::ops::Div<f32> for Mat4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl std::ops::Neg for Mat4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// Matrix product
impl std::ops::Mul for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            other.x * self.x.x + other.y * self.x.y + other.z * self.x.z + other.w * self.x.w,
            other.x * self.y.x + other.y * self.y.y + other.z * self.y.z + other.w * self.y.w,
            other.x * self.z.x + other.y * self.z.y + other.z * self.z.z + other.w * self.z.w,
            other.x * self.w.x + other.y * self.w.y + other.z * self.w.z + other.w * self.w.w,
        )
    }
}

/// Column-vector transform: `M * v`
impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(self.x.dot(v), self.y.dot(v), self.z.dot(v), self.w.dot(v))
    }
}

/// Row-vector transform: `v * M`
impl std::ops::Mul<Mat4> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, m: Mat4) -> Vec4 {
        m.x * self.x + m.y * self.y + m.z * self.z + m.w * self.w
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn index(&self, i: usize) -> &Vec4 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Mat4 row index out of range: {}", i),
        }
    }
}

impl std::ops::IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec4 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Mat4 row index out of range: {}", i),
        }
    }
}
