//! Configuration file support for drawing defaults.
//!
//! Embedding applications can load window and stroke defaults from a TOML
//! file instead of hard-coding them. All fields have sensible defaults and
//! out-of-range values are clamped with a warning rather than rejected.
//!
//! # Example TOML
//! ```toml
//! [window]
//! title = "sketch"
//! width = 800
//! height = 600
//! background = "#FFFFFF"
//!
//! [stroke]
//! color = [30, 30, 30]
//! width = 2
//! antialiasing = true
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::draw::color::{BLACK, WHITE};
use crate::draw::{Color, Stroke};

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure deserialized from the TOML file.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Window defaults (title, dimensions, background color)
    #[serde(default)]
    pub window: WindowConfig,

    /// Default stroke for new shapes
    #[serde(default)]
    pub stroke: StrokeConfig,
}

/// Window defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
    /// Client area width in pixels
    #[serde(default = "default_window_width")]
    pub width: i32,
    /// Client area height in pixels
    #[serde(default = "default_window_height")]
    pub height: i32,
    /// Background color shapes erase themselves with
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_window_width(),
            height: default_window_height(),
            background: default_background(),
        }
    }
}

/// Default stroke parameters for new shapes.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrokeConfig {
    /// Stroke color
    #[serde(default = "default_stroke_color")]
    pub color: ColorSpec,
    /// Stroke width in pixels
    #[serde(default = "default_stroke_width")]
    pub width: i32,
    /// Whether diagonal strokes are antialiased
    #[serde(default)]
    pub antialiasing: bool,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            width: default_stroke_width(),
            antialiasing: false,
        }
    }
}

fn default_title() -> String {
    "rasterpad".to_string()
}

fn default_window_width() -> i32 {
    640
}

fn default_window_height() -> i32 {
    480
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> i32 {
    1
}

/// A color in the config file: a predefined name or hex code, or an
/// rgb(a) channel array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (`"red"`) or hex code (`"#FF0000"`, `"FF000080"`)
    Name(String),
    /// Channel values: `[r, g, b]` or `[r, g, b, a]`, each 0-255
    Channels(Vec<i32>),
}

impl ColorSpec {
    /// Resolves the specification through the validated [`Color`]
    /// constructors. Unresolvable specs fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name)
                .or_else(|| Color::from_hex(name).ok())
                .unwrap_or_else(|| {
                    warn!("unknown color '{name}', using black");
                    BLACK
                }),
            ColorSpec::Channels(values) => {
                Color::from_channels(values).unwrap_or_else(|err| {
                    warn!("{err}, using black");
                    BLACK
                })
            }
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Parse failures are errors; out-of-range values are clamped with a
    /// warning so a stray edit never locks the application out.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;
        config.validate_and_clamp();
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `window.width` / `window.height`: positive (reset to defaults)
    /// - `stroke.width`: 1 - 64
    fn validate_and_clamp(&mut self) {
        if self.window.width <= 0 {
            warn!(
                "invalid window width {}, falling back to {}",
                self.window.width,
                default_window_width()
            );
            self.window.width = default_window_width();
        }
        if self.window.height <= 0 {
            warn!(
                "invalid window height {}, falling back to {}",
                self.window.height,
                default_window_height()
            );
            self.window.height = default_window_height();
        }
        if !(1..=64).contains(&self.stroke.width) {
            warn!(
                "invalid stroke width {}, clamping to 1-64 range",
                self.stroke.width
            );
            self.stroke.width = self.stroke.width.clamp(1, 64);
        }
    }

    /// The default stroke described by this configuration.
    pub fn stroke(&self) -> Stroke {
        Stroke {
            color: self.stroke.color.to_color(),
            width: self.stroke.width,
            antialiasing: self.stroke.antialiasing,
        }
    }

    /// The window background color.
    pub fn background(&self) -> Color {
        self.window.background.to_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.validate_and_clamp();
        assert_eq!(config.window.title, "rasterpad");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.background(), WHITE);
        assert_eq!(config.stroke(), Stroke::default());
    }

    #[test]
    fn color_specs_resolve_names_hex_and_channels() {
        assert_eq!(ColorSpec::Name("red".to_string()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#FF0000".to_string()).to_color(), RED);
        assert_eq!(ColorSpec::Channels(vec![255, 0, 0]).to_color(), RED);
        assert_eq!(
            ColorSpec::Channels(vec![0, 255, 0, 128]).to_color(),
            Color::rgba(0, 255, 0, 128)
        );
        // Unresolvable specs fall back to black.
        assert_eq!(ColorSpec::Name("mauve-ish".to_string()).to_color(), BLACK);
        assert_eq!(ColorSpec::Channels(vec![999, 0, 0]).to_color(), BLACK);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [window]
            width = -5

            [stroke]
            width = 200
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.stroke.width, 64);
    }

    #[test]
    fn load_reads_a_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [window]
            title = "sketch"
            width = 320
            height = 200
            background = "00FF00"

            [stroke]
            color = [10, 20, 30]
            width = 3
            antialiasing = true
            "#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.window.title, "sketch");
        assert_eq!(config.background(), Color::rgb(0, 255, 0));
        let stroke = config.stroke();
        assert_eq!(stroke.color, Color::rgb(10, 20, 30));
        assert_eq!(stroke.width, 3);
        assert!(stroke.antialiasing);
    }

    #[test]
    fn parse_errors_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "window = 3").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Config::load(Path::new("/nonexistent/rasterpad.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
