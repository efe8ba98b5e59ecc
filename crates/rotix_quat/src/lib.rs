//! Quaternion algebra and rotation construction
//!
//! This crate provides the rotation layer of rotix.
//!
//! ## Core Types
//!
//! - [`Quat`] - quaternion with composition, rotation application, matrix
//!   conversion, log/exp maps, interpolation, and axis-constrained projection
//!
//! ## Rotation builders
//!
//! The [`rot`] module builds rotation, scale, and homogeneous transform
//! matrices from angle/axis, vector-pair, or quaternion inputs, in both the
//! column-vector and row-vector conventions.

mod quat;
pub mod rot;

pub use quat::Quat;
