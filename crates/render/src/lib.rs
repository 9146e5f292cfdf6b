//! range-slider-render: Cairo rendering functions for the sliders and the
//! gradient editor.

pub mod gradient_editor_display;
pub mod render_utils;
pub mod slider_display;

pub use gradient_editor_display::render_gradient_editor;
pub use slider_display::{
    render_range_slider, DefaultSliderStyle, GradientGroove, GradientSpan, GroovePainter,
    HighlightGroove,
};
