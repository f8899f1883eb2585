//! Rotation parameters: angle units and pivot selection.

use std::fmt;
use std::str::FromStr;

use crate::error::DrawError;

/// A rotation angle in either unit.
///
/// Callers working in degrees don't have to convert by hand; the transform
/// converts once, up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Radians(f64),
    Degrees(f64),
}

impl Angle {
    /// The angle in radians.
    pub fn radians(self) -> f64 {
        match self {
            Angle::Radians(theta) => theta,
            Angle::Degrees(degrees) => degrees.to_radians(),
        }
    }
}

/// The point a line is rotated about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivot {
    /// The midpoint of the segment.
    #[default]
    Center,
    /// The start coordinate.
    Left,
    /// The end coordinate.
    Right,
}

impl FromStr for Pivot {
    type Err = DrawError;

    /// Parses a pivot name, failing with [`DrawError::InvalidPivot`] for
    /// anything other than `center`, `left`, or `right`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "center" => Ok(Pivot::Center),
            "left" => Ok(Pivot::Left),
            "right" => Ok(Pivot::Right),
            _ => Err(DrawError::InvalidPivot(name.to_string())),
        }
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pivot::Center => "center",
            Pivot::Left => "left",
            Pivot::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn degrees_convert_to_radians() {
        assert!((Angle::Degrees(180.0).radians() - PI).abs() < 1e-12);
        assert_eq!(Angle::Radians(1.5).radians(), 1.5);
    }

    #[test]
    fn pivot_names_round_trip() {
        for pivot in [Pivot::Center, Pivot::Left, Pivot::Right] {
            assert_eq!(pivot.to_string().parse::<Pivot>().unwrap(), pivot);
        }
        assert_eq!("CENTER".parse::<Pivot>().unwrap(), Pivot::Center);
    }

    #[test]
    fn unknown_pivot_name_is_rejected() {
        let err = "middle".parse::<Pivot>().unwrap_err();
        assert_eq!(err, DrawError::InvalidPivot("middle".to_string()));
    }
}
