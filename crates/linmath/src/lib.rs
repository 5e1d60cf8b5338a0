//! Small linear algebra primitives for graphics, physics and simulation code.
//!
//! # Overview
//!
//! This crate provides the handful of value types that transform and camera code is built from:
//!
//! - [`Vec2`], [`Vec3`] and [`Vec4`] vectors (all aliases of [`Vector`]).
//! - [`Mat3`] and [`Mat4`] column-major matrices (aliases of [`Matrix`]).
//! - [`Quat`], a quaternion used to represent rotations.
//! - Projection builders ([`perspective`], [`orthographic`], [`ui_space`]) and
//!   [`Mat4::transform`] for model matrices.
//! - Axis-aligned aggregates in [`rect`], and scalar interpolation helpers in [`interp`].
//!
//! # Conventions
//!
//! - Elements are always [`f32`].
//! - Matrices are column-major: `m[col]` is a column vector and `m[col][row]` a single element.
//!   Matrices are applied to column vectors, so `(a * b) * v == a * (b * v)`: to apply `b` first
//!   and then `a`, write `a * b`. Quaternion products compose the same way.
//! - The identity quaternion is `w = 1, x = y = z = 0`.
//! - `==` is exact. Approximate comparisons go through the [`approx::ApproxEq`] trait and the
//!   [`assert_approx_eq!`] macro.
//! - The forward direction is `-Z`, up is `+Y` and right is `+X`.
//!
//! # Goals & Non-Goals
//!
//! - Numerical degeneracies (normalizing a zero vector, projecting with a zero-sized viewport,
//!   ...) are *not* errors. They produce NaN or infinite components that propagate through further
//!   arithmetic, just like they would with plain floats. None of the operations panic on bad
//!   numeric input.
//! - Only 2, 3 and 4 dimensional vectors and 3x3/4x4 matrices are supported. The types are
//!   const-generic over their dimension so that shared operations are only written once, but the
//!   crate makes no attempt to be a general N-dimensional algebra library.
//! - No SIMD, no double precision, no serialization.
//! - With the (default) `bytemuck` feature, all types implement [`bytemuck::Pod`] so that they can
//!   be copied into GPU buffers directly.

pub mod approx;
mod error;
pub mod interp;
mod matrix;
mod projection;
mod quat;
pub mod rect;
mod vector;

pub use error::*;
pub use matrix::*;
pub use projection::*;
pub use quat::*;
pub use vector::*;
