//! Shared rendering utilities

use range_slider_types::ColorMap;

/// Draw a rounded rectangle path
pub fn rounded_rectangle(cr: &cairo::Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let radius = radius.min(width / 2.0).min(height / 2.0).max(0.0);

    cr.new_path();
    cr.arc(
        x + radius,
        y + radius,
        radius,
        std::f64::consts::PI,
        3.0 * std::f64::consts::PI / 2.0,
    );
    cr.arc(
        x + width - radius,
        y + radius,
        radius,
        3.0 * std::f64::consts::PI / 2.0,
        0.0,
    );
    cr.arc(
        x + width - radius,
        y + height - radius,
        radius,
        0.0,
        std::f64::consts::PI / 2.0,
    );
    cr.arc(
        x + radius,
        y + height - radius,
        radius,
        std::f64::consts::PI / 2.0,
        std::f64::consts::PI,
    );
    cr.close_path();
}

/// Horizontal gradient from `x1` to `x2` using the map's stops, padded
/// with the end colors outside that span. `None` for an empty map.
pub fn horizontal_gradient_pattern(
    map: &ColorMap,
    x1: f64,
    x2: f64,
    y: f64,
) -> Option<cairo::LinearGradient> {
    if map.is_empty() {
        return None;
    }

    let pattern = cairo::LinearGradient::new(x1, y, x2, y);
    pattern.set_extend(cairo::Extend::Pad);
    for stop in map.iter() {
        pattern.add_color_stop_rgba(
            stop.position,
            stop.color.r,
            stop.color.g,
            stop.color.b,
            stop.color.a,
        );
    }
    Some(pattern)
}
