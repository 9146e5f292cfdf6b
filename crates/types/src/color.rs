//! Foundational color types used by the sliders and the gradient editor.
//!
//! Color, ColorStop and ColorMap are the building blocks for every
//! gradient that flows from the editor into the gradient slider.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Rounds to the nearest 8-bit channel value, so a color built with
    /// `from_rgba8` always converts back to the same bytes.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        fn channel(v: f64) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        (channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }

    /// Linear interpolation between two colors, `t` in 0.0..=1.0
    pub fn lerp(from: &Color, to: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Convert to GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn to_gdk_rgba(&self) -> gdk4::RGBA {
        gdk4::RGBA::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32)
    }

    /// Create from GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn from_gdk_rgba(rgba: &gdk4::RGBA) -> Self {
        Self {
            r: rgba.red() as f64,
            g: rgba.green() as f64,
            b: rgba.blue() as f64,
            a: rgba.alpha() as f64,
        }
    }

    /// Apply to Cairo context
    #[cfg(feature = "gtk")]
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Color stop for gradients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    pub position: f64, // 0.0 to 1.0
    pub color: Color,
}

impl ColorStop {
    pub fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Ordered position -> color associations.
///
/// Stops are kept sorted by position and positions are unique: inserting
/// at a position that already exists replaces that stop's color.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorMap {
    stops: Vec<ColorStop>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, position: f64, color: Color) {
        match self
            .stops
            .binary_search_by(|s| s.position.total_cmp(&position))
        {
            Ok(index) => self.stops[index].color = color,
            Err(index) => self.stops.insert(index, ColorStop::new(position, color)),
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorStop> {
        self.stops.iter()
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `position`, interpolated between the neighbouring stops.
    /// Positions outside the first/last stop take that stop's color.
    pub fn color_at(&self, position: f64) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        if position <= first.position {
            return Some(first.color);
        }
        if position >= last.position {
            return Some(last.color);
        }

        self.stops.windows(2).find_map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            if position >= a.position && position <= b.position {
                let span = b.position - a.position;
                let t = if span > 0.0 {
                    (position - a.position) / span
                } else {
                    0.0
                };
                Some(Color::lerp(&a.color, &b.color, t))
            } else {
                None
            }
        })
    }
}

impl FromIterator<(f64, Color)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (f64, Color)>>(iter: I) -> Self {
        let mut map = ColorMap::new();
        for (position, color) in iter {
            map.insert(position, color);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_round_trip() {
        for v in [0u8, 1, 77, 128, 200, 254, 255] {
            let c = Color::from_rgb8(v, 255 - v, v / 2);
            assert_eq!(c.to_rgba8(), (v, 255 - v, v / 2, 255));
        }
    }

    #[test]
    fn test_color_map_sorted_and_unique() {
        let mut map = ColorMap::new();
        map.insert(0.75, Color::from_rgb8(1, 1, 1));
        map.insert(0.25, Color::from_rgb8(2, 2, 2));
        map.insert(0.75, Color::from_rgb8(3, 3, 3));

        let positions: Vec<f64> = map.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.25, 0.75]);
        assert_eq!(map.stops()[1].color, Color::from_rgb8(3, 3, 3));
    }

    #[test]
    fn test_color_at_interpolates_and_pads() {
        let map: ColorMap = vec![
            (0.2, Color::new(0.0, 0.0, 0.0, 1.0)),
            (0.6, Color::new(1.0, 0.5, 0.0, 1.0)),
        ]
        .into_iter()
        .collect();

        let mid = map.color_at(0.4).unwrap();
        assert!((mid.r - 0.5).abs() < 1e-9);
        assert!((mid.g - 0.25).abs() < 1e-9);

        assert_eq!(map.color_at(0.0), Some(Color::new(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(map.color_at(1.0), Some(Color::new(1.0, 0.5, 0.0, 1.0)));
        assert_eq!(ColorMap::new().color_at(0.5), None);
    }
}
