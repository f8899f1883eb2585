//! Rectangle shape: four line edges, corner patching, fill, and rotation.

use std::fmt;

use crate::draw::color::Color;
use crate::draw::ensure_positive;
use crate::draw::line::Line;
use crate::draw::stroke::Stroke;
use crate::error::DrawError;
use crate::geometry::{Angle, Coordinate, Matrix, rotate_about};
use crate::surface::Surface;

/// A rectangle composed of four [`Line`] edges sharing one border stroke.
///
/// The three remaining corners are derived from the top-left corner and the
/// dimensions at construction. Rotation replaces all four corners and
/// rebuilds all four edges from scratch; edges are never updated
/// incrementally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    width: i32,
    height: i32,
    border: Stroke,
    filled: bool,
    fill_color: Color,
    top_left: Coordinate,
    top_right: Coordinate,
    bottom_left: Coordinate,
    bottom_right: Coordinate,
    top_edge: Line,
    bottom_edge: Line,
    left_edge: Line,
    right_edge: Line,
}

impl Rect {
    /// Creates an unfilled rectangle.
    ///
    /// Fails with [`DrawError::InvalidDimension`] when the width, height,
    /// or border width is not positive.
    pub fn new(
        top_left: Coordinate,
        width: i32,
        height: i32,
        border: Stroke,
    ) -> Result<Self, DrawError> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        border.validate("border width")?;

        let top_right = Coordinate::new(top_left.x + width, top_left.y);
        let bottom_left = Coordinate::new(top_left.x, top_left.y + height);
        let bottom_right = Coordinate::new(top_left.x + width, top_left.y + height);
        let (top_edge, bottom_edge, left_edge, right_edge) =
            Self::edges(top_left, top_right, bottom_left, bottom_right, border)?;

        Ok(Self {
            width,
            height,
            border,
            filled: false,
            fill_color: border.color,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            top_edge,
            bottom_edge,
            left_edge,
            right_edge,
        })
    }

    /// Creates a rectangle whose interior is filled with `fill_color`.
    pub fn filled(
        top_left: Coordinate,
        width: i32,
        height: i32,
        border: Stroke,
        fill_color: Color,
    ) -> Result<Self, DrawError> {
        let mut rect = Self::new(top_left, width, height, border)?;
        rect.filled = true;
        rect.fill_color = fill_color;
        Ok(rect)
    }

    /// The top-left corner.
    pub fn top_left(&self) -> Coordinate {
        self.top_left
    }

    /// All four corners: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Coordinate; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// Width at construction time.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height at construction time.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The border stroke.
    pub fn border(&self) -> Stroke {
        self.border
    }

    /// Whether the interior is filled when displayed.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Rasterizes the rectangle onto the surface.
    ///
    /// The four edges are drawn independently; the axis-aligned fast path
    /// leaves a `border width` square gap at the bottom-right corner, which
    /// is patched explicitly. The interior fill (when enabled) comes last
    /// so the border is never overdrawn. The patch and fill apply only
    /// while the rectangle is axis-aligned; diagonal edges close their own
    /// corners.
    pub fn display<S: Surface>(&self, surface: &mut S) {
        self.paint(surface, None);
    }

    /// Erases the rectangle by repainting the same pixel set in the
    /// surface's background color.
    pub fn undisplay<S: Surface>(&self, surface: &mut S) {
        let background = surface.background().argb();
        self.paint(surface, Some(background));
    }

    /// Toggles the interior fill and redraws in place.
    ///
    /// The redraw does not erase first: enabling fill paints the interior
    /// over already-correct border pixels, but disabling it leaves the old
    /// interior pixels standing. Call [`undisplay`](Rect::undisplay) before
    /// toggling when a clean interior matters.
    pub fn change_fill<S: Surface>(&mut self, surface: &mut S) {
        self.filled = !self.filled;
        self.display(surface);
    }

    /// Rotates the rectangle about its geometric center and redraws it.
    ///
    /// Unless `keep_original` is set, the rectangle erases itself before
    /// any corner moves. Every corner is translated to the pivot,
    /// multiplied by the rotation matrix, translated back, and truncated;
    /// the four edges are then rebuilt from the new corners.
    pub fn rotate<S: Surface>(
        &mut self,
        surface: &mut S,
        angle: Angle,
        keep_original: bool,
    ) -> Result<(), DrawError> {
        if !keep_original {
            self.undisplay(surface);
        }

        let rotation = Matrix::rotation(angle.radians());
        // The pivot halves with integer division, matching the corner grid.
        let pivot_x = (self.top_left.x + self.width / 2) as f64;
        let pivot_y = (self.top_left.y + self.height / 2) as f64;

        self.top_left = rotate_about(self.top_left, pivot_x, pivot_y, &rotation)?;
        self.top_right = rotate_about(self.top_right, pivot_x, pivot_y, &rotation)?;
        self.bottom_left = rotate_about(self.bottom_left, pivot_x, pivot_y, &rotation)?;
        self.bottom_right = rotate_about(self.bottom_right, pivot_x, pivot_y, &rotation)?;

        let (top_edge, bottom_edge, left_edge, right_edge) = Self::edges(
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.border,
        )?;
        self.top_edge = top_edge;
        self.bottom_edge = bottom_edge;
        self.left_edge = left_edge;
        self.right_edge = right_edge;

        self.display(surface);
        Ok(())
    }

    /// Paints the rectangle, in its own colors or (for erasure) a single
    /// override color.
    fn paint<S: Surface>(&self, surface: &mut S, erase_argb: Option<u32>) {
        match erase_argb {
            None => {
                self.top_edge.display(surface);
                self.bottom_edge.display(surface);
                self.left_edge.display(surface);
                self.right_edge.display(surface);
            }
            Some(_) => {
                self.top_edge.undisplay(surface);
                self.bottom_edge.undisplay(surface);
                self.left_edge.undisplay(surface);
                self.right_edge.undisplay(surface);
            }
        }

        if !self.is_axis_aligned() {
            return;
        }

        let patch_argb = erase_argb.unwrap_or_else(|| self.border.color.argb());
        surface.fill_rect(
            self.bottom_right.x,
            self.bottom_right.y,
            self.border.width,
            self.border.width,
            patch_argb,
        );

        if self.filled {
            let fill_argb = erase_argb.unwrap_or_else(|| self.fill_color.argb());
            surface.fill_rect(
                self.top_left.x + self.border.width,
                self.top_left.y + self.border.width,
                self.width - self.border.width,
                self.height - self.border.width,
                fill_argb,
            );
        }
    }

    fn is_axis_aligned(&self) -> bool {
        self.top_left.y == self.top_right.y && self.top_left.x == self.bottom_left.x
    }

    fn edges(
        top_left: Coordinate,
        top_right: Coordinate,
        bottom_left: Coordinate,
        bottom_right: Coordinate,
        border: Stroke,
    ) -> Result<(Line, Line, Line, Line), DrawError> {
        Ok((
            Line::new(top_left, top_right, border)?,
            Line::new(bottom_left, bottom_right, border)?,
            Line::new(top_left, bottom_left, border)?,
            Line::new(top_right, bottom_right, border)?,
        ))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}x{})", self.top_left, self.width, self.height)
    }
}
