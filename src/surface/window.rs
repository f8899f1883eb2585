//! Native window surface with scoped handle ownership.

use log::debug;

use crate::draw::Color;
use crate::error::DrawError;
use crate::geometry::Coordinate;
use crate::surface::backend::WindowBackend;
use crate::surface::{DrawTarget, Surface};

/// A native window drawn on through an injected [`WindowBackend`].
///
/// The window owns its native handle for its whole lifetime and releases it
/// on every exit path: `Drop` calls
/// [`destroy_window`](WindowBackend::destroy_window), so a handle can never
/// leak past the `Window` value that created it.
pub struct Window<B: WindowBackend> {
    backend: B,
    handle: B::Handle,
    title: String,
    width: i32,
    height: i32,
    background: Color,
}

impl<B: WindowBackend> std::fmt::Debug for Window<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .finish()
    }
}

impl<B: WindowBackend> Window<B> {
    /// Creates a native window and clears it to the background color.
    ///
    /// Fails with [`DrawError::InvalidDimension`] for non-positive
    /// dimensions and propagates [`DrawError::NoValidHandle`] from the
    /// backend.
    pub fn open(
        backend: B,
        title: impl Into<String>,
        width: i32,
        height: i32,
        background: Color,
    ) -> Result<Self, DrawError> {
        if width <= 0 {
            return Err(DrawError::InvalidDimension {
                what: "window width",
                value: width,
            });
        }
        if height <= 0 {
            return Err(DrawError::InvalidDimension {
                what: "window height",
                value: height,
            });
        }

        let title = title.into();
        let mut backend = backend;
        let handle = backend.create_window(&title, width, height)?;
        debug!("opened window '{title}' ({width}x{height})");

        let mut window = Self {
            backend,
            handle,
            title,
            width,
            height,
            background,
        };
        window.fill_rect(0, 0, width, height, background.argb());
        Ok(window)
    }

    /// The window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Paints a single pixel in the given color.
    pub fn draw(&mut self, coord: Coordinate, color: Color) {
        self.draw_pixel(coord.x, coord.y, color.argb());
    }

    /// Runs the native message loop, blocking the calling thread until the
    /// window is closed.
    pub fn run_message_loop(&mut self) {
        self.backend.run_message_loop(&self.handle);
    }

    /// Tears the window down explicitly. Equivalent to dropping it.
    pub fn close(self) {}
}

impl<B: WindowBackend> Drop for Window<B> {
    fn drop(&mut self) {
        debug!("destroying window '{}'", self.title);
        self.backend.destroy_window(&self.handle);
    }
}

impl<B: WindowBackend> DrawTarget for Window<B> {
    fn draw_pixel(&mut self, x: i32, y: i32, argb: u32) {
        self.backend.draw_pixel(&self.handle, x, y, argb);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, argb: u32) {
        self.backend.fill_rect(&self.handle, x, y, width, height, argb);
    }
}

impl<B: WindowBackend> Surface for Window<B> {
    fn background(&self) -> Color {
        self.background
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}
