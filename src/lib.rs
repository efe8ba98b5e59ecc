//! rotix - fixed-size vector, matrix, and quaternion math
//!
//! A small computational-geometry toolkit for graphics, physics, and robotics
//! code: 2/3/4-component vectors and matrices with closed-form inverses, an
//! integer vector mirror, quaternion rotation algebra, and rotation-matrix
//! builders for both the column-vector and row-vector conventions.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`], [`IVec2`], [`IVec3`], [`IVec4`]
//! - [`Mat2`], [`Mat3`], [`Mat4`]
//! - [`Quat`]
//!
//! ## Modules
//!
//! - [`format`] - bracketed `[x y z]` / `[[row][row]]` printing and parsing
//! - [`rot`] - rotation, scale, and homogeneous transform builders

pub use rotix_vec::{
    format, IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, ParseGeomError, Vec2, Vec3, Vec4,
};

pub use rotix_quat::{rot, Quat};
