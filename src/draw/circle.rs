//! Circle shape: midpoint border ring with optional filled interior.

use std::fmt;

use crate::draw::color::Color;
use crate::draw::ensure_positive;
use crate::draw::stroke::Stroke;
use crate::error::DrawError;
use crate::geometry::Coordinate;
use crate::raster::{fill_circle, stroke_circle};
use crate::surface::Surface;

/// A circle with an integer radius.
///
/// Rotationally symmetric, so unlike [`Line`](crate::draw::Line) and
/// [`Rect`](crate::draw::Rect) it has no rotate operation. The stroke's
/// antialiasing flag is carried but has no effect on the midpoint
/// rasterizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Coordinate,
    radius: i32,
    border: Stroke,
    filled: bool,
    fill_color: Color,
}

impl Circle {
    /// Creates an unfilled circle.
    ///
    /// Fails with [`DrawError::InvalidDimension`] when the radius or
    /// border width is not positive.
    pub fn new(center: Coordinate, radius: i32, border: Stroke) -> Result<Self, DrawError> {
        ensure_positive("radius", radius)?;
        border.validate("border width")?;
        Ok(Self {
            center,
            radius,
            border,
            filled: false,
            fill_color: border.color,
        })
    }

    /// Creates a circle whose interior is filled with `fill_color`.
    pub fn filled(
        center: Coordinate,
        radius: i32,
        border: Stroke,
        fill_color: Color,
    ) -> Result<Self, DrawError> {
        let mut circle = Self::new(center, radius, border)?;
        circle.filled = true;
        circle.fill_color = fill_color;
        Ok(circle)
    }

    /// The center coordinate.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// The radius in pixels.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The border stroke.
    pub fn border(&self) -> Stroke {
        self.border
    }

    /// Whether the interior is filled when displayed.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Rasterizes the circle onto the surface: the border ring first, then
    /// the interior disk when filled.
    pub fn display<S: Surface>(&self, surface: &mut S) {
        self.paint(surface, self.border.color.argb(), self.fill_color.argb());
    }

    /// Erases the circle by repeating the same rasterization in the
    /// surface's background color.
    pub fn undisplay<S: Surface>(&self, surface: &mut S) {
        let background = surface.background().argb();
        self.paint(surface, background, background);
    }

    /// Toggles the interior fill and redraws in place.
    ///
    /// As with [`Rect::change_fill`](crate::draw::Rect::change_fill), the
    /// redraw does not erase first, so disabling fill leaves the old
    /// interior pixels standing.
    pub fn change_fill<S: Surface>(&mut self, surface: &mut S) {
        self.filled = !self.filled;
        self.display(surface);
    }

    fn paint<S: Surface>(&self, surface: &mut S, border_argb: u32, fill_argb: u32) {
        stroke_circle(
            surface,
            self.center.x,
            self.center.y,
            self.radius,
            self.border.width,
            border_argb,
        );
        if self.filled {
            fill_circle(
                surface,
                self.center.x,
                self.center.y,
                self.radius,
                self.border.width,
                fill_argb,
            );
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, r={})", self.center, self.radius)
    }
}
