//! Gradient markers, presets and the gradient string codec.
//!
//! The serialized form is a list of `position,red,green,blue` tuples
//! joined by `:`, e.g. `0,0,0,255:0.5,0,255,0:1,255,0,0`. Positions are
//! decimal fractions, channels 0-255 integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::color::{Color, ColorMap, ColorStop};

/// Separator between serialized stops
pub const STOP_SEPARATOR: char = ':';
/// Separator between the fields of one serialized stop
pub const FIELD_SEPARATOR: char = ',';

/// A gradient stop as edited in the gradient editor.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientMarker {
    pub position: f64,
    pub color: Color,
    /// Set while the marker is grabbed by the pointer
    pub has_focus: bool,
}

impl GradientMarker {
    pub fn new(position: f64, color: Color) -> Self {
        Self {
            position,
            color,
            has_focus: false,
        }
    }
}

impl Default for GradientMarker {
    fn default() -> Self {
        Self::new(0.5, Color::default())
    }
}

/// Named marker sets the editor can be reset to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Empty,
    Jet,
    JetDark,
    Earth,
}

impl Preset {
    /// Marker positions and colors, in the order they are seeded
    pub fn stops(&self) -> Vec<ColorStop> {
        let stop = |position: f64, r: u8, g: u8, b: u8| ColorStop::new(position, Color::from_rgb8(r, g, b));
        match self {
            Preset::Empty => Vec::new(),
            Preset::Jet => vec![
                stop(1.00, 255, 0, 0),
                stop(0.75, 255, 255, 0),
                stop(0.50, 0, 255, 0),
                stop(0.25, 0, 255, 255),
                stop(0.00, 0, 0, 255),
            ],
            Preset::JetDark => vec![
                stop(0.75, 255, 128, 0),
                stop(1.00, 255, 0, 0),
                stop(0.25, 0, 128, 255),
                stop(0.50, 0, 128, 0),
                stop(0.00, 0, 0, 255),
            ],
            Preset::Earth => vec![stop(0.25, 0, 128, 255), stop(0.50, 0, 128, 0)],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Empty => "empty",
            Preset::Jet => "jet",
            Preset::JetDark => "jet-dark",
            Preset::Earth => "earth",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown preset '{0}' (expected empty, jet, jet-dark or earth)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Preset::Empty),
            "jet" => Ok(Preset::Jet),
            "jet-dark" | "jetdark" => Ok(Preset::JetDark),
            "earth" => Ok(Preset::Earth),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

/// Why a single serialized stop was rejected
#[derive(Debug, Error, PartialEq)]
pub enum GradientParseError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid position '{0}'")]
    InvalidPosition(String),
    #[error("position {0} outside 0..=1")]
    PositionOutOfRange(f64),
    #[error("invalid color channel '{0}'")]
    InvalidChannel(String),
}

/// Serialize a color map. Stops are written in map order with no
/// trailing separator; alpha is not stored.
pub fn gradient_to_string(map: &ColorMap) -> String {
    map.iter()
        .map(|stop| {
            let (r, g, b, _) = stop.color.to_rgba8();
            format!("{}{sep}{}{sep}{}{sep}{}", stop.position, r, g, b, sep = FIELD_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(&STOP_SEPARATOR.to_string())
}

/// Parse one `position,r,g,b` tuple
pub fn parse_stop(tuple: &str) -> Result<ColorStop, GradientParseError> {
    let fields: Vec<&str> = tuple.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() != 4 {
        return Err(GradientParseError::FieldCount(fields.len()));
    }

    let position: f64 = fields[0]
        .parse()
        .map_err(|_| GradientParseError::InvalidPosition(fields[0].to_string()))?;
    if !position.is_finite() || !(0.0..=1.0).contains(&position) {
        return Err(GradientParseError::PositionOutOfRange(position));
    }

    let channel = |s: &str| {
        s.parse::<u8>()
            .map_err(|_| GradientParseError::InvalidChannel(s.to_string()))
    };
    let color = Color::from_rgb8(channel(fields[1])?, channel(fields[2])?, channel(fields[3])?);

    Ok(ColorStop::new(position, color))
}

/// Parse a serialized gradient. Malformed tuples are skipped, never fatal.
pub fn string_to_gradient(config: &str) -> ColorMap {
    let mut map = ColorMap::new();
    for tuple in config.split(STOP_SEPARATOR).filter(|s| !s.trim().is_empty()) {
        match parse_stop(tuple) {
            Ok(stop) => map.insert(stop.position, stop.color),
            Err(e) => log::debug!("Skipping gradient stop '{}': {}", tuple, e),
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jet_map() -> ColorMap {
        Preset::Jet
            .stops()
            .into_iter()
            .map(|s| (s.position, s.color))
            .collect()
    }

    #[test]
    fn test_gradient_to_string_format() {
        assert_eq!(
            gradient_to_string(&jet_map()),
            "0,0,0,255:0.25,0,255,255:0.5,0,255,0:0.75,255,255,0:1,255,0,0"
        );
        assert_eq!(gradient_to_string(&ColorMap::new()), "");
    }

    #[test]
    fn test_string_round_trip() {
        let mut map = jet_map();
        map.insert(0.125, Color::from_rgb8(12, 34, 56));
        map.insert(0.3333, Color::from_rgb8(200, 100, 1));

        let parsed = string_to_gradient(&gradient_to_string(&map));
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_malformed_tuples_are_skipped() {
        let parsed = string_to_gradient("0,0,0,255::garbage:0.5,1,2:0.6,1,2,300:1.5,1,2,3:1,255,0,0");
        let positions: Vec<f64> = parsed.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 1.0]);
    }

    #[test]
    fn test_parse_stop_errors() {
        assert_eq!(parse_stop("0.5,1,2"), Err(GradientParseError::FieldCount(3)));
        assert_eq!(
            parse_stop("x,1,2,3"),
            Err(GradientParseError::InvalidPosition("x".to_string()))
        );
        assert_eq!(
            parse_stop("2,1,2,3"),
            Err(GradientParseError::PositionOutOfRange(2.0))
        );
        assert_eq!(
            parse_stop("0.5,1,2,256"),
            Err(GradientParseError::InvalidChannel("256".to_string()))
        );
        assert_eq!(
            parse_stop(" 0.5 , 1 , 2 , 3 ").unwrap(),
            ColorStop::new(0.5, Color::from_rgb8(1, 2, 3))
        );
    }

    #[test]
    fn test_preset_stops() {
        let jet: Vec<f64> = Preset::Jet.stops().iter().map(|s| s.position).collect();
        assert_eq!(jet, vec![1.0, 0.75, 0.5, 0.25, 0.0]);

        let pairs = |preset: Preset| -> Vec<(f64, (u8, u8, u8))> {
            preset
                .stops()
                .iter()
                .map(|s| {
                    let (r, g, b, _) = s.color.to_rgba8();
                    (s.position, (r, g, b))
                })
                .collect()
        };
        assert_eq!(
            pairs(Preset::JetDark),
            vec![
                (0.75, (255, 128, 0)),
                (1.0, (255, 0, 0)),
                (0.25, (0, 128, 255)),
                (0.5, (0, 128, 0)),
                (0.0, (0, 0, 255)),
            ]
        );
        assert_eq!(
            pairs(Preset::Earth),
            vec![(0.25, (0, 128, 255)), (0.5, (0, 128, 0))]
        );
        assert!(Preset::Empty.stops().is_empty());
    }

    #[test]
    fn test_preset_names() {
        for preset in [Preset::Empty, Preset::Jet, Preset::JetDark, Preset::Earth] {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
        assert!("rainbow".parse::<Preset>().is_err());

        let json = serde_json::to_string(&Preset::JetDark).unwrap();
        assert_eq!(json, "\"jet-dark\"");
    }
}
