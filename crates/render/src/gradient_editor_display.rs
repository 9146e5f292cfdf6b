//! Gradient editor rendering

use range_slider_core::constants::MARKER_STRIP_HEIGHT;
use range_slider_core::GradientEditor;
use range_slider_types::Color;

use crate::render_utils::horizontal_gradient_pattern;

/// Distance from the bottom edge to the marker ring centers
const MARKER_CENTER_OFFSET: f64 = 5.0;
const MARKER_INNER_RADIUS: f64 = 2.0;
const MARKER_OUTER_RADIUS: f64 = 4.0;

/// Render the gradient strip, the padded boundary lines and one ring per
/// marker. `foreground` is the widget's text color.
pub fn render_gradient_editor(
    cr: &cairo::Context,
    editor: &GradientEditor,
    foreground: Color,
) -> Result<(), cairo::Error> {
    let view = editor.view_rect();
    if view.is_empty() {
        return Ok(());
    }
    let gradient_rect = editor.gradient_rect();

    // Gradient fill, leaving the bottom strip for the markers
    let mid_y = gradient_rect.bottom() / 2.0;
    if let Some(pattern) = horizontal_gradient_pattern(
        &editor.gradient(),
        gradient_rect.left(),
        gradient_rect.right(),
        mid_y,
    ) {
        cr.set_source(&pattern)?;
        cr.rectangle(
            view.x,
            view.y + 1.0,
            view.width,
            (view.height - 1.0 - MARKER_STRIP_HEIGHT).max(0.0),
        );
        cr.fill()?;
    }

    foreground.apply_to_cairo(cr);
    cr.set_line_width(1.0);
    for x in [gradient_rect.left(), gradient_rect.right()] {
        cr.move_to(x + 0.5, gradient_rect.top());
        cr.line_to(x + 0.5, gradient_rect.bottom());
    }
    cr.stroke()?;

    let center_y = view.bottom() - MARKER_CENTER_OFFSET;
    for marker in editor.markers() {
        let x = editor.marker_pixel_x(marker);

        cr.new_path();
        cr.set_line_width(3.0);
        marker.color.apply_to_cairo(cr);
        cr.arc(x, center_y, MARKER_INNER_RADIUS, 0.0, std::f64::consts::TAU);
        cr.stroke()?;

        cr.new_path();
        cr.set_line_width(1.0);
        foreground.apply_to_cairo(cr);
        cr.arc(x, center_y, MARKER_OUTER_RADIUS, 0.0, std::f64::consts::TAU);
        cr.stroke()?;
    }

    Ok(())
}
