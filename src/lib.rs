//! Embeddable 2D raster graphics layer.
//!
//! rasterpad models colors, coordinates, and shapes, rasterizes them with
//! integer line and circle algorithms, and draws through a pluggable
//! windowing backend so the native layer can be swapped or mocked:
//!
//! - [`draw`]: colors, strokes, and the Line/Rect/Circle shapes
//! - [`geometry`]: coordinates, matrices, and the rotation transform
//! - [`raster`]: the Bresenham/Wu/midpoint pixel algorithms
//! - [`surface`]: drawing-surface traits, native windows, offscreen buffers
//! - [`config`]: TOML-backed drawing defaults

pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod surface;

pub use config::Config;
pub use draw::{Circle, Color, Line, Rect, Stroke};
pub use error::DrawError;
pub use geometry::{Angle, Coordinate, Matrix, Pivot};
pub use surface::{DrawTarget, PixelBuffer, Surface, Window, WindowBackend};
