//! Contract for the native windowing collaborator.

use crate::error::DrawError;

/// The set of native routines a window implementation must supply.
///
/// Backends are constructor-injected into [`Window`](super::Window) so the
/// native layer can be swapped or mocked in tests. All calls are direct and
/// blocking; the only loop is [`run_message_loop`](Self::run_message_loop),
/// which returns when the window is closed.
pub trait WindowBackend {
    /// Opaque handle to a native window.
    type Handle;

    /// Creates a native window and returns its handle.
    ///
    /// Fails with [`DrawError::NoValidHandle`] when no usable handle could
    /// be obtained.
    fn create_window(
        &mut self,
        title: &str,
        width: i32,
        height: i32,
    ) -> Result<Self::Handle, DrawError>;

    /// Writes one pixel to the window's client area.
    fn draw_pixel(&mut self, handle: &Self::Handle, x: i32, y: i32, argb: u32);

    /// Fills an axis-aligned rectangle in the window's client area.
    fn fill_rect(&mut self, handle: &Self::Handle, x: i32, y: i32, width: i32, height: i32, argb: u32);

    /// Runs the native message loop, blocking until the window is closed.
    fn run_message_loop(&mut self, handle: &Self::Handle);

    /// Destroys the native window.
    fn destroy_window(&mut self, handle: &Self::Handle);
}
