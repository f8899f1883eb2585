//! Coordinates, matrices, and the rotation transform.
//!
//! This module holds the pure math underneath shape transforms:
//! - [`Coordinate`]: an integer position in surface pixel space
//! - [`Matrix`]: a generic dense matrix with validated multiplication
//! - [`Angle`] / [`Pivot`]: rotation parameters
//! - [`rotate_about`]: the translate, rotate, translate-back primitive

pub mod angle;
pub mod coord;
pub mod matrix;

// Re-export commonly used types at module level
pub use angle::{Angle, Pivot};
pub use coord::Coordinate;
pub use matrix::{Matrix, rotate_about};
