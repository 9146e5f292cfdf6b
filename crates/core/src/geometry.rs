//! Plain geometry shared by the models and the renderers.

/// Slider orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same size with width and height exchanged
    pub fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Snapshot of everything a renderer needs to draw a range slider.
///
/// Pixel helpers work along the slider's main axis: `length` is the
/// extent along the axis and `thickness` the extent across it, whatever
/// the orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub orientation: Orientation,
    pub size: Size,
    pub handle_size: Size,
    pub minimum: i32,
    pub maximum: i32,
    pub value_lo: i32,
    pub value_hi: i32,
}

impl SliderGeometry {
    pub fn length(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.size.width,
            Orientation::Vertical => self.size.height,
        }
    }

    pub fn thickness(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.size.height,
            Orientation::Vertical => self.size.width,
        }
    }

    pub fn handle_length(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.handle_size.width,
            Orientation::Vertical => self.handle_size.height,
        }
    }

    pub fn handle_thickness(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.handle_size.height,
            Orientation::Vertical => self.handle_size.width,
        }
    }

    /// Value span; a collapsed range counts as 1 to keep conversions finite
    pub fn span(&self) -> f64 {
        (self.maximum as f64 - self.minimum as f64).max(1.0)
    }

    /// Pixels available to the handles' leading edges
    pub fn travel(&self) -> f64 {
        (self.length() - self.handle_length()).max(0.0)
    }

    /// Leading edge of the handle drawn for `value`
    pub fn handle_offset(&self, value: i32) -> f64 {
        (self.travel() / self.span() * (value as f64 - self.minimum as f64)).trunc()
    }

    /// Pixel length of a value distance across the full widget length
    pub fn value_distance_to_pixels(&self, distance: i32) -> f64 {
        (self.length() * (distance as f64 / self.span())).trunc()
    }

    /// Span from the lo handle's leading edge to the hi handle's trailing edge
    pub fn selection_span(&self) -> (f64, f64) {
        let start = self.handle_offset(self.value_lo);
        let end = (self.travel() / self.span() * (self.value_hi as f64 - self.minimum as f64)
            + self.handle_length())
        .trunc();
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(min: i32, max: i32, lo: i32, hi: i32) -> SliderGeometry {
        SliderGeometry {
            orientation: Orientation::Horizontal,
            size: Size::new(212.0, 20.0),
            handle_size: Size::new(12.0, 18.0),
            minimum: min,
            maximum: max,
            value_lo: lo,
            value_hi: hi,
        }
    }

    #[test]
    fn test_handle_offsets() {
        let g = geometry(0, 100, 20, 80);
        assert_eq!(g.travel(), 200.0);
        assert_eq!(g.handle_offset(0), 0.0);
        assert_eq!(g.handle_offset(100), 200.0);
        assert_eq!(g.selection_span(), (40.0, 172.0));
    }

    #[test]
    fn test_collapsed_range_stays_finite() {
        let g = geometry(5, 5, 5, 5);
        assert_eq!(g.span(), 1.0);
        assert_eq!(g.handle_offset(5), 0.0);
        assert!(g.value_distance_to_pixels(0).is_finite());
    }

    #[test]
    fn test_vertical_axis_swaps_extents() {
        let mut g = geometry(0, 10, 0, 10);
        g.orientation = Orientation::Vertical;
        g.size = Size::new(20.0, 150.0);
        g.handle_size = Size::new(18.0, 12.0);
        assert_eq!(g.length(), 150.0);
        assert_eq!(g.thickness(), 20.0);
        assert_eq!(g.handle_length(), 12.0);
        assert_eq!(g.handle_thickness(), 18.0);
    }
}
