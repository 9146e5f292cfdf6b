//! Range slider rendering: groove, groove fill and the two handles.
//!
//! The groove fill is pluggable through [`GroovePainter`]: the plain slider
//! highlights the selected window, the gradient slider paints a color map.
//! Everything is drawn in an axis-local frame (x along the slider); vertical
//! sliders rotate the context so the low end sits at the bottom.

use range_slider_core::{Orientation, Rect, Size, SliderGeometry, StyleMetrics};
use range_slider_types::{Color, ColorMap};

use crate::render_utils::{horizontal_gradient_pattern, rounded_rectangle};

/// Handle extent along the slider axis
pub const HANDLE_LENGTH: f64 = 12.0;
/// Handle extent across the slider axis
pub const HANDLE_THICKNESS: f64 = 18.0;
/// Groove extent across the slider axis
pub const GROOVE_THICKNESS: f64 = 6.0;

const GROOVE_COLOR: Color = Color {
    r: 0.78,
    g: 0.78,
    b: 0.78,
    a: 1.0,
};
const GROOVE_BORDER: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.55,
    a: 1.0,
};
const HIGHLIGHT_COLOR: Color = Color {
    r: 0.21,
    g: 0.52,
    b: 0.89,
    a: 1.0,
};
const HANDLE_FILL: Color = Color {
    r: 0.98,
    g: 0.98,
    b: 0.98,
    a: 1.0,
};
const HANDLE_BORDER: Color = Color {
    r: 0.45,
    g: 0.45,
    b: 0.45,
    a: 1.0,
};

/// Built-in style metrics matching the handles drawn here
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSliderStyle;

impl StyleMetrics for DefaultSliderStyle {
    fn handle_size(&self, orientation: Orientation) -> Size {
        let size = Size::new(HANDLE_LENGTH, HANDLE_THICKNESS);
        match orientation {
            Orientation::Horizontal => size,
            Orientation::Vertical => size.transposed(),
        }
    }
}

/// Fills the groove after its background is drawn and before the handles
pub trait GroovePainter {
    fn paint_groove(
        &self,
        cr: &cairo::Context,
        geometry: &SliderGeometry,
        groove: Rect,
    ) -> Result<(), cairo::Error>;
}

/// Highlights the sub-track between the low and high values
#[derive(Debug, Clone, Copy)]
pub struct HighlightGroove {
    pub color: Color,
}

impl Default for HighlightGroove {
    fn default() -> Self {
        Self {
            color: HIGHLIGHT_COLOR,
        }
    }
}

impl GroovePainter for HighlightGroove {
    fn paint_groove(
        &self,
        cr: &cairo::Context,
        geometry: &SliderGeometry,
        groove: Rect,
    ) -> Result<(), cairo::Error> {
        let start = geometry.value_distance_to_pixels(geometry.value_lo - geometry.minimum);
        let end = geometry.length()
            - geometry.value_distance_to_pixels(geometry.maximum - geometry.value_hi);
        if end <= start {
            return Ok(());
        }

        self.color.apply_to_cairo(cr);
        rounded_rectangle(cr, start, groove.y, end - start, groove.height, groove.height / 2.0);
        cr.fill()?;
        Ok(())
    }
}

/// What pixel span the gradient stops are laid out over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradientSpan {
    /// Stops span the whole groove
    #[default]
    Groove,
    /// Stops span the window between the two handles, padded outside it
    Selection,
}

/// Paints the groove with an externally supplied color map
#[derive(Debug, Clone, Default)]
pub struct GradientGroove {
    pub color_map: ColorMap,
    pub span: GradientSpan,
}

impl GradientGroove {
    pub fn new(color_map: ColorMap) -> Self {
        Self {
            color_map,
            span: GradientSpan::default(),
        }
    }

    pub fn set_color_map(&mut self, color_map: ColorMap) {
        self.color_map = color_map;
    }
}

impl GroovePainter for GradientGroove {
    fn paint_groove(
        &self,
        cr: &cairo::Context,
        geometry: &SliderGeometry,
        groove: Rect,
    ) -> Result<(), cairo::Error> {
        let (x1, x2) = match self.span {
            GradientSpan::Groove => (groove.left(), groove.right()),
            GradientSpan::Selection => geometry.selection_span(),
        };
        let Some(pattern) =
            horizontal_gradient_pattern(&self.color_map, x1, x2, groove.y + groove.height / 2.0)
        else {
            return Ok(());
        };

        cr.set_source(&pattern)?;
        cr.rectangle(groove.x, groove.y + 1.0, groove.width, groove.height - 2.0);
        cr.fill()?;
        Ok(())
    }
}

/// Render a range slider: full-length groove, groove fill, both handles
pub fn render_range_slider(
    cr: &cairo::Context,
    geometry: &SliderGeometry,
    painter: &dyn GroovePainter,
) -> Result<(), cairo::Error> {
    cr.save()?;
    if geometry.orientation == Orientation::Vertical {
        cr.translate(0.0, geometry.size.height);
        cr.rotate(-std::f64::consts::FRAC_PI_2);
    }

    let length = geometry.length();
    let thickness = geometry.thickness();
    let groove = Rect::new(
        0.0,
        ((thickness - GROOVE_THICKNESS) / 2.0).floor(),
        length,
        GROOVE_THICKNESS,
    );

    // Whole-length groove
    GROOVE_COLOR.apply_to_cairo(cr);
    rounded_rectangle(cr, groove.x, groove.y, groove.width, groove.height, 2.0);
    cr.fill_preserve()?;
    GROOVE_BORDER.apply_to_cairo(cr);
    cr.set_line_width(1.0);
    cr.stroke()?;

    painter.paint_groove(cr, geometry, groove)?;

    render_handle(cr, geometry, geometry.value_lo)?;
    render_handle(cr, geometry, geometry.value_hi)?;

    cr.restore()?;
    Ok(())
}

fn render_handle(
    cr: &cairo::Context,
    geometry: &SliderGeometry,
    value: i32,
) -> Result<(), cairo::Error> {
    let handle_length = geometry.handle_length();
    let handle_thickness = geometry.handle_thickness().min(geometry.thickness());
    let x = geometry.handle_offset(value) + 0.5;
    let y = ((geometry.thickness() - handle_thickness) / 2.0).floor() + 0.5;

    rounded_rectangle(cr, x, y, handle_length - 1.0, handle_thickness - 1.0, 3.0);
    HANDLE_FILL.apply_to_cairo(cr);
    cr.fill_preserve()?;
    HANDLE_BORDER.apply_to_cairo(cr);
    cr.set_line_width(1.0);
    cr.stroke()?;
    Ok(())
}
