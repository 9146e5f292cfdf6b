//! range-slider-types: Shared data types for the range-slider widgets.
//!
//! This crate contains pure data types (colors, color maps, gradient
//! markers and presets) plus the gradient string codec. They have no GTK
//! or Cairo dependencies unless the `gtk` feature is enabled.

pub mod color;
pub mod gradient;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorMap, ColorStop};
pub use gradient::{
    gradient_to_string, parse_stop, string_to_gradient, GradientMarker, GradientParseError, Preset,
};
