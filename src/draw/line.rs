//! Line shape: slope classification, rasterizer dispatch, and rotation.

use std::fmt;

use crate::draw::stroke::Stroke;
use crate::error::DrawError;
use crate::geometry::{Angle, Coordinate, Matrix, Pivot, rotate_about};
use crate::raster::{stroke_line, stroke_line_antialiased};
use crate::surface::Surface;

/// A straight line segment between two coordinates.
///
/// The slope is derived at construction and kept in sync by
/// [`rotate`](Line::rotate); it classifies how the line is rasterized:
/// axis-aligned lines take the `fill_rect` fast path, everything else goes
/// through the Bresenham or Wu stepper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    start: Coordinate,
    end: Coordinate,
    stroke: Stroke,
    slope: Option<f64>,
}

impl Line {
    /// Creates a line. Fails with [`DrawError::InvalidDimension`] when the
    /// stroke width is not positive.
    pub fn new(start: Coordinate, end: Coordinate, stroke: Stroke) -> Result<Self, DrawError> {
        stroke.validate("width")?;
        Ok(Self {
            start,
            end,
            stroke,
            slope: slope_between(start, end),
        })
    }

    /// The start coordinate.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The end coordinate.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// The stroke this line is inked with.
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Rise over run, or `None` for a vertical line.
    pub fn slope(&self) -> Option<f64> {
        self.slope
    }

    /// Rasterizes the line onto the surface.
    pub fn display<S: Surface>(&self, surface: &mut S) {
        self.paint(surface, self.stroke.color.argb());
    }

    /// Erases the line by repeating the same rasterization in the
    /// surface's background color.
    pub fn undisplay<S: Surface>(&self, surface: &mut S) {
        let background = surface.background().argb();
        self.paint(surface, background);
    }

    /// Rotates the line about the given pivot and redraws it.
    ///
    /// Unless `keep_original` is set, the line erases itself before its
    /// endpoints move so no stale pixels are left behind. Both endpoints
    /// are translated to the pivot, multiplied by the rotation matrix,
    /// translated back, and truncated to pixel coordinates; the slope is
    /// recomputed before the redraw.
    pub fn rotate<S: Surface>(
        &mut self,
        surface: &mut S,
        angle: Angle,
        pivot: Pivot,
        keep_original: bool,
    ) -> Result<(), DrawError> {
        if !keep_original {
            self.undisplay(surface);
        }

        let rotation = Matrix::rotation(angle.radians());
        let (pivot_x, pivot_y) = match pivot {
            Pivot::Center => (
                (self.end.x - self.start.x) as f64 / 2.0 + self.start.x as f64,
                (self.end.y - self.start.y) as f64 / 2.0 + self.start.y as f64,
            ),
            Pivot::Left => (self.start.x as f64, self.start.y as f64),
            Pivot::Right => (self.end.x as f64, self.end.y as f64),
        };

        self.start = rotate_about(self.start, pivot_x, pivot_y, &rotation)?;
        self.end = rotate_about(self.end, pivot_x, pivot_y, &rotation)?;
        self.slope = slope_between(self.start, self.end);

        self.display(surface);
        Ok(())
    }

    fn paint<S: Surface>(&self, surface: &mut S, argb: u32) {
        match self.slope {
            // Vertical: the bounding box is one stroke width wide.
            None => {
                let top = self.start.y.min(self.end.y);
                let height = (self.end.y - self.start.y).abs();
                surface.fill_rect(self.start.x, top, self.stroke.width, height, argb);
            }
            // Horizontal: one stroke width tall.
            Some(slope) if slope == 0.0 => {
                let left = self.start.x.min(self.end.x);
                let width = (self.end.x - self.start.x).abs();
                surface.fill_rect(left, self.start.y, width, self.stroke.width, argb);
            }
            Some(_) => {
                if self.stroke.antialiasing {
                    stroke_line_antialiased(
                        surface,
                        self.start.x,
                        self.start.y,
                        self.end.x,
                        self.end.y,
                        self.stroke.width,
                        argb,
                    );
                } else {
                    stroke_line(
                        surface,
                        self.start.x,
                        self.start.y,
                        self.end.x,
                        self.end.y,
                        self.stroke.width,
                        argb,
                    );
                }
            }
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({} -> {})", self.start, self.end)
    }
}

fn slope_between(start: Coordinate, end: Coordinate) -> Option<f64> {
    if end.x == start.x {
        None
    } else {
        Some((end.y - start.y) as f64 / (end.x - start.x) as f64)
    }
}
