//! Fixed-size vector and matrix primitives
//!
//! This crate provides the value types the rest of rotix is built on.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - float vectors with componentwise
//!   arithmetic, dot/cross products, and normalization
//! - [`Mat2`], [`Mat3`], [`Mat4`] - row-major matrices with the closed-form
//!   determinant/adjoint/inverse algebra
//! - [`IVec2`], [`IVec3`], [`IVec4`] - integer mirror of the vector layer
//!
//! ## Formatting
//!
//! The [`format`] module prints vectors as `[x y z]` and matrices as
//! `[[row][row]]`, and parses the same layout back.

mod vec2;
mod vec3;
mod vec4;
mod ivec;
mod mat2;
mod mat3;
mod mat4;
pub mod format;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use ivec::{IVec2, IVec3, IVec4};
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use format::ParseGeomError;
