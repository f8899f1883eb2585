//! Error type shared by the drawing, geometry, and surface modules.

use thiserror::Error;

/// Errors surfaced by validated constructors and drawing operations.
///
/// Every failure is deterministic given invalid input and is reported before
/// any state is mutated; there is no recovery path inside the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// A color had the wrong number of channels, an out-of-range channel
    /// value, or a malformed hex code.
    #[error("invalid color value: {0}")]
    InvalidColorValue(String),

    /// A width, height, radius, or border width was not a positive integer.
    #[error("{what} must be a positive integer, got {value}")]
    InvalidDimension {
        /// Which dimension was rejected (e.g. "width", "radius").
        what: &'static str,
        /// The offending value.
        value: i32,
    },

    /// A rotation-pivot name was not one of `center`, `left`, or `right`.
    #[error("'{0}' is not a recognized rotation pivot")]
    InvalidPivot(String),

    /// Matrix multiplication was attempted with mismatched inner dimensions,
    /// or a matrix was built from ragged/empty rows.
    #[error(
        "incompatible matrix dimensions: {left_rows}x{left_cols} * {right_rows}x{right_cols}"
    )]
    IncompatibleDimensions {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// The windowing backend could not produce a usable handle.
    #[error("no valid window handle could be obtained")]
    NoValidHandle,
}
