//! Stroke parameters shared by lines and shape borders.

use crate::draw::color::{self, Color};
use crate::error::DrawError;

/// How a line or border is inked: color, pixel width, and whether the
/// stepping algorithm antialiases.
///
/// Plain data; shapes validate it at construction so an invalid width is
/// rejected before anything touches a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels (must be >= 1)
    pub width: i32,
    /// Whether diagonal strokes are antialiased
    pub antialiasing: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: color::BLACK,
            width: 1,
            antialiasing: false,
        }
    }
}

impl Stroke {
    /// Creates a validated stroke.
    pub fn new(color: Color, width: i32, antialiasing: bool) -> Result<Self, DrawError> {
        let stroke = Self {
            color,
            width,
            antialiasing,
        };
        stroke.validate("width")?;
        Ok(stroke)
    }

    /// A default-width stroke in the given color.
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self, what: &'static str) -> Result<(), DrawError> {
        if self.width <= 0 {
            return Err(DrawError::InvalidDimension {
                what,
                value: self.width,
            });
        }
        Ok(())
    }
}
