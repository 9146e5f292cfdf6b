//! Dual-handle range slider model.
//!
//! Holds an integer range `[minimum, maximum]` and a selected window
//! `[value_lo, value_hi]`, and turns pointer drags and key presses into
//! value changes. Every public mutation keeps
//! `minimum <= value_lo <= value_hi <= maximum`.
//!
//! Pointer interaction is only implemented for horizontal sliders;
//! presses on a vertical slider are ignored. Keyboard stepping works in
//! both orientations.

use crate::collaborators::StyleMetrics;
use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_STEP_SIZE};
use crate::geometry::{Orientation, Rect, Size, SliderGeometry};
use crate::signal::Signal;

/// What the current pointer gesture is moving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Disabled,
    MoveLo,
    MoveHi,
    MoveBoth,
}

/// Keys the slider reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

/// State captured when a drag starts; lives until pointer release
#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: f64,
    start_y: f64,
    start_lo: i32,
    start_hi: i32,
    mode: DragMode,
}

pub struct RangeSlider {
    orientation: Orientation,
    handle_size: Size,
    size: Size,
    minimum: i32,
    maximum: i32,
    value_lo: i32,
    value_hi: i32,
    step_size: i32,
    page_size: i32,
    drag: Option<DragSession>,
    value_lo_changed: Signal<i32>,
    value_hi_changed: Signal<i32>,
    range_changed: Signal<(i32, i32)>,
    redraw_requested: Signal<()>,
}

impl RangeSlider {
    pub fn new(
        range_min: i32,
        range_max: i32,
        value_lo: i32,
        value_hi: i32,
        metrics: &dyn StyleMetrics,
    ) -> Self {
        let minimum = range_min.min(range_max);
        let maximum = range_min.max(range_max);
        let lo = value_lo.clamp(minimum, maximum);
        let hi = value_hi.clamp(minimum, maximum);
        let orientation = Orientation::Horizontal;

        let mut slider = Self {
            orientation,
            handle_size: metrics.handle_size(orientation),
            size: Size::default(),
            minimum,
            maximum,
            value_lo: lo.min(hi),
            value_hi: lo.max(hi),
            step_size: DEFAULT_STEP_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            drag: None,
            value_lo_changed: Signal::new(),
            value_hi_changed: Signal::new(),
            range_changed: Signal::new(),
            redraw_requested: Signal::new(),
        };
        slider.size = slider.size_hint();
        slider
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn value_lo(&self) -> i32 {
        self.value_lo
    }

    pub fn value_hi(&self) -> i32 {
        self.value_hi
    }

    pub fn step_size(&self) -> i32 {
        self.step_size
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag.map(|d| d.mode).unwrap_or_default()
    }

    pub fn set_orientation(&mut self, orientation: Orientation, metrics: &dyn StyleMetrics) {
        self.orientation = orientation;
        self.handle_size = metrics.handle_size(orientation);
        self.request_redraw();
    }

    pub fn size_hint(&self) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(150.0, 20.0),
            Orientation::Vertical => Size::new(20.0, 150.0),
        }
    }

    pub fn minimum_size_hint(&self) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(30.0, 20.0),
            Orientation::Vertical => Size::new(20.0, 30.0),
        }
    }

    /// Record the allocated widget size used for hit-testing
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Steps are at least 1
    pub fn set_step_size(&mut self, step: i32) {
        self.step_size = step.max(1);
    }

    pub fn set_page_size(&mut self, page: i32) {
        self.page_size = page.max(1);
    }

    pub fn set_minimum(&mut self, min: i32) {
        self.set_range(min, self.maximum);
    }

    pub fn set_maximum(&mut self, max: i32) {
        self.set_range(self.minimum, max);
    }

    /// Set both bounds (swapped if given inverted) and re-clamp the values.
    pub fn set_range(&mut self, min: i32, max: i32) {
        let old = (self.minimum, self.maximum);
        self.minimum = min.min(max);
        self.maximum = min.max(max);

        if old != (self.minimum, self.maximum) {
            // Clamping is monotonic, so lo <= hi survives it. A lo pushed
            // above the old hi drags hi along with it.
            self.value_lo = self.value_lo.clamp(self.minimum, self.maximum);
            self.value_hi = self.value_hi.clamp(self.minimum, self.maximum);
            self.value_lo_changed.emit(&self.value_lo);
            self.value_hi_changed.emit(&self.value_hi);
            self.range_changed.emit(&(self.minimum, self.maximum));
        }
        self.request_redraw();
    }

    /// Set the low value. A value above the current high value takes the
    /// high role and the old high value becomes the low value.
    pub fn set_value_lo(&mut self, value: i32) {
        let value = value.clamp(self.minimum, self.maximum);
        if value <= self.value_hi {
            self.value_lo = value;
        } else {
            self.value_lo = self.value_hi;
            self.value_hi = value;
            self.value_hi_changed.emit(&self.value_hi);
        }
        self.value_lo_changed.emit(&self.value_lo);
        self.request_redraw();
    }

    /// Set the high value, swapping roles like [`RangeSlider::set_value_lo`].
    pub fn set_value_hi(&mut self, value: i32) {
        let value = value.clamp(self.minimum, self.maximum);
        if value >= self.value_lo {
            self.value_hi = value;
        } else {
            self.value_hi = self.value_lo;
            self.value_lo = value;
            self.value_lo_changed.emit(&self.value_lo);
        }
        self.value_hi_changed.emit(&self.value_hi);
        self.request_redraw();
    }

    pub fn connect_value_lo_changed<F: Fn(i32) + 'static>(&mut self, f: F) {
        self.value_lo_changed.connect(move |v| f(*v));
    }

    pub fn connect_value_hi_changed<F: Fn(i32) + 'static>(&mut self, f: F) {
        self.value_hi_changed.connect(move |v| f(*v));
    }

    pub fn connect_range_changed<F: Fn(i32, i32) + 'static>(&mut self, f: F) {
        self.range_changed.connect(move |(min, max)| f(*min, *max));
    }

    pub fn connect_redraw_requested<F: Fn() + 'static>(&mut self, f: F) {
        self.redraw_requested.connect(move |_| f());
    }

    fn request_redraw(&self) {
        self.redraw_requested.emit(&());
    }

    pub fn geometry(&self) -> SliderGeometry {
        SliderGeometry {
            orientation: self.orientation,
            size: self.size,
            handle_size: self.handle_size,
            minimum: self.minimum,
            maximum: self.maximum,
            value_lo: self.value_lo,
            value_hi: self.value_hi,
        }
    }

    /// Rectangle from the lo handle's leading edge to the hi handle's
    /// trailing edge, in widget coordinates (horizontal layout).
    pub fn rect_containing_both_handles(&self) -> Rect {
        let (start, end) = self.geometry().selection_span();
        Rect::new(start, 0.0, end - start, self.size.height)
    }

    /// Start a drag if the press lands between the outer edges of the two
    /// handles. Returns whether a drag started.
    pub fn pointer_press(&mut self, x: f64, y: f64) -> bool {
        if self.orientation == Orientation::Vertical {
            log::debug!("RangeSlider: pointer interaction is not supported for vertical sliders");
            return false;
        }

        let rect = self.rect_containing_both_handles();
        let pixels_into_rect = x - rect.left();
        if pixels_into_rect < 0.0 || pixels_into_rect > rect.width {
            return false;
        }

        let handle_width = self.handle_size.width;
        let mode = if pixels_into_rect < handle_width {
            DragMode::MoveLo
        } else if pixels_into_rect >= rect.width - handle_width {
            DragMode::MoveHi
        } else {
            DragMode::MoveBoth
        };
        log::debug!("RangeSlider: press at {:.1} starts {:?}", x, mode);

        self.drag = Some(DragSession {
            start_x: x,
            start_y: y,
            start_lo: self.value_lo,
            start_hi: self.value_hi,
            mode,
        });
        self.request_redraw();
        true
    }

    /// Apply the pointer displacement since the press to the values
    /// captured at press time.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(drag) = self.drag else {
            return;
        };

        let geometry = self.geometry();
        let pixels_per_value = geometry.travel() / geometry.span();
        if pixels_per_value <= 0.0 {
            return;
        }

        let moved = match self.orientation {
            Orientation::Horizontal => x - drag.start_x,
            Orientation::Vertical => y - drag.start_y,
        };
        let delta = moved / pixels_per_value;
        let shifted = |start: i32| (start as f64 + delta) as i32;

        match drag.mode {
            DragMode::MoveBoth => {
                self.set_value_lo(shifted(drag.start_lo));
                self.set_value_hi(shifted(drag.start_hi));
            }
            DragMode::MoveHi => self.set_value_hi(shifted(drag.start_hi)),
            DragMode::MoveLo => self.set_value_lo(shifted(drag.start_lo)),
            DragMode::Disabled => {}
        }
    }

    pub fn pointer_release(&mut self) {
        self.drag = None;
    }

    /// Handle a key press; returns false for keys the slider ignores.
    ///
    /// Page keys move lo by `page_size`, then set hi to the *updated* lo
    /// plus or minus `page_size`, so the selection shrinks to one page.
    /// Steps saturate at the `i32` limits before clamping.
    pub fn key_press(&mut self, key: SliderKey) -> bool {
        match key {
            SliderKey::Up | SliderKey::Right => {
                self.set_value_lo(self.value_lo.saturating_add(self.step_size));
                self.set_value_hi(self.value_hi.saturating_add(self.step_size));
            }
            SliderKey::Down | SliderKey::Left => {
                self.set_value_lo(self.value_lo.saturating_sub(self.step_size));
                self.set_value_hi(self.value_hi.saturating_sub(self.step_size));
            }
            SliderKey::PageUp => {
                self.set_value_lo(self.value_lo.saturating_add(self.page_size));
                self.set_value_hi(self.value_lo.saturating_add(self.page_size));
            }
            SliderKey::PageDown => {
                self.set_value_lo(self.value_lo.saturating_sub(self.page_size));
                self.set_value_hi(self.value_lo.saturating_sub(self.page_size));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedMetrics;

    impl StyleMetrics for FixedMetrics {
        fn handle_size(&self, orientation: Orientation) -> Size {
            match orientation {
                Orientation::Horizontal => Size::new(12.0, 18.0),
                Orientation::Vertical => Size::new(18.0, 12.0),
            }
        }
    }

    /// 0..100 slider whose track is exactly 200 px (2 px per value)
    fn slider(lo: i32, hi: i32) -> RangeSlider {
        let mut s = RangeSlider::new(0, 100, lo, hi, &FixedMetrics);
        s.set_size(212.0, 20.0);
        s
    }

    fn assert_invariants(s: &RangeSlider) {
        assert!(s.minimum() <= s.maximum());
        assert!(s.minimum() <= s.value_lo());
        assert!(s.value_lo() <= s.value_hi());
        assert!(s.value_hi() <= s.maximum());
    }

    type Log = Rc<RefCell<Vec<String>>>;

    fn record(s: &mut RangeSlider) -> Log {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        s.connect_value_lo_changed(move |v| l.borrow_mut().push(format!("lo {}", v)));
        let l = log.clone();
        s.connect_value_hi_changed(move |v| l.borrow_mut().push(format!("hi {}", v)));
        let l = log.clone();
        s.connect_range_changed(move |a, b| l.borrow_mut().push(format!("range {} {}", a, b)));
        log
    }

    #[test]
    fn test_construction_normalizes() {
        let s = RangeSlider::new(100, 0, 90, 10, &FixedMetrics);
        assert_eq!((s.minimum(), s.maximum()), (0, 100));
        assert_eq!((s.value_lo(), s.value_hi()), (10, 90));

        let s = RangeSlider::new(0, 50, -5, 70, &FixedMetrics);
        assert_eq!((s.value_lo(), s.value_hi()), (0, 50));
        assert_eq!(s.step_size(), 1);
        assert_eq!(s.page_size(), 10);
    }

    #[test]
    fn test_set_range_inverted_equals_normal() {
        let mut a = slider(20, 80);
        let mut b = slider(20, 80);
        a.set_range(90, 10);
        b.set_range(10, 90);
        assert_eq!(
            (a.minimum(), a.maximum(), a.value_lo(), a.value_hi()),
            (b.minimum(), b.maximum(), b.value_lo(), b.value_hi())
        );
        assert_invariants(&a);
    }

    #[test]
    fn test_set_range_reclamps_values() {
        let mut s = slider(20, 80);
        s.set_range(90, 200);
        assert_eq!((s.value_lo(), s.value_hi()), (90, 90));
        assert_invariants(&s);

        s.set_range(-50, 0);
        assert_eq!((s.value_lo(), s.value_hi()), (0, 0));
        assert_invariants(&s);
    }

    #[test]
    fn test_range_changed_only_when_bounds_change() {
        let mut s = slider(20, 80);
        let log = record(&mut s);
        let redraws = Rc::new(RefCell::new(0));
        let r = redraws.clone();
        s.connect_redraw_requested(move || *r.borrow_mut() += 1);

        s.set_range(0, 100);
        assert!(log.borrow().is_empty());
        assert_eq!(*redraws.borrow(), 1);

        s.set_maximum(50);
        assert_eq!(*log.borrow(), vec!["lo 20", "hi 50", "range 0 50"]);
    }

    #[test]
    fn test_set_value_lo_above_hi_swaps() {
        let mut s = slider(20, 80);
        let log = record(&mut s);
        s.set_value_lo(90);
        assert_eq!((s.value_lo(), s.value_hi()), (80, 90));
        assert_eq!(*log.borrow(), vec!["hi 90", "lo 80"]);
    }

    #[test]
    fn test_set_value_hi_below_lo_swaps() {
        let mut s = slider(20, 80);
        let log = record(&mut s);
        s.set_value_hi(5);
        assert_eq!((s.value_lo(), s.value_hi()), (5, 20));
        assert_eq!(*log.borrow(), vec!["lo 5", "hi 20"]);
    }

    #[test]
    fn test_setters_always_notify() {
        let mut s = slider(20, 80);
        let log = record(&mut s);
        s.set_value_lo(20);
        s.set_value_hi(500);
        assert_eq!(*log.borrow(), vec!["lo 20", "hi 100"]);
    }

    #[test]
    fn test_press_outside_handles_is_ignored() {
        let mut s = slider(20, 80);
        // selection spans 40..172 px
        assert!(!s.pointer_press(10.0, 10.0));
        assert!(!s.pointer_press(180.0, 10.0));
        assert_eq!(s.drag_mode(), DragMode::Disabled);
    }

    #[test]
    fn test_press_classifies_drag_mode() {
        let mut s = slider(20, 80);
        assert!(s.pointer_press(45.0, 10.0));
        assert_eq!(s.drag_mode(), DragMode::MoveLo);
        s.pointer_release();

        assert!(s.pointer_press(165.0, 10.0));
        assert_eq!(s.drag_mode(), DragMode::MoveHi);
        s.pointer_release();

        assert!(s.pointer_press(100.0, 10.0));
        assert_eq!(s.drag_mode(), DragMode::MoveBoth);
        s.pointer_release();
        assert_eq!(s.drag_mode(), DragMode::Disabled);
    }

    #[test]
    fn test_drag_lo_past_hi_clamps_then_swaps() {
        // Bounds [0,100], (20,80): dragging lo by +90 values asks for 110,
        // which clamps to 100 > hi, so lo takes 80 and hi takes 100.
        let mut s = slider(20, 80);
        assert!(s.pointer_press(45.0, 10.0));
        s.pointer_move(45.0 + 180.0, 10.0);
        assert_eq!((s.value_lo(), s.value_hi()), (80, 100));
        assert_invariants(&s);
    }

    #[test]
    fn test_drag_both_shifts_window_from_press_values() {
        let mut s = slider(20, 80);
        assert!(s.pointer_press(100.0, 10.0));
        s.pointer_move(110.0, 10.0);
        assert_eq!((s.value_lo(), s.value_hi()), (25, 85));
        // displacement is measured from the press, not the last move
        s.pointer_move(80.0, 10.0);
        assert_eq!((s.value_lo(), s.value_hi()), (10, 70));
        // lo clamps to 100 first and swaps with hi, then hi clamps to 100
        s.pointer_move(300.0, 10.0);
        assert_eq!((s.value_lo(), s.value_hi()), (70, 100));
        assert_invariants(&s);
    }

    #[test]
    fn test_move_without_press_does_nothing() {
        let mut s = slider(20, 80);
        s.pointer_move(150.0, 10.0);
        assert_eq!((s.value_lo(), s.value_hi()), (20, 80));
    }

    #[test]
    fn test_vertical_pointer_is_ignored() {
        let mut s = slider(20, 80);
        s.set_orientation(Orientation::Vertical, &FixedMetrics);
        assert_eq!(s.size_hint(), Size::new(20.0, 150.0));
        assert!(!s.pointer_press(10.0, 50.0));
        assert!(s.key_press(SliderKey::Up));
        assert_eq!((s.value_lo(), s.value_hi()), (21, 81));
    }

    #[test]
    fn test_arrow_keys_step_both_values() {
        let mut s = slider(20, 80);
        s.set_step_size(5);
        s.key_press(SliderKey::Right);
        assert_eq!((s.value_lo(), s.value_hi()), (25, 85));
        s.key_press(SliderKey::Down);
        s.key_press(SliderKey::Left);
        assert_eq!((s.value_lo(), s.value_hi()), (15, 75));
    }

    #[test]
    fn test_page_keys_shrink_selection_to_one_page() {
        let mut s = slider(20, 80);
        s.key_press(SliderKey::PageUp);
        assert_eq!((s.value_lo(), s.value_hi()), (30, 40));

        let mut s = slider(20, 80);
        s.key_press(SliderKey::PageDown);
        // lo drops to 10, then hi is set to 10 - 10 = 0 and swaps below lo
        assert_eq!((s.value_lo(), s.value_hi()), (0, 10));
        assert_invariants(&s);
    }

    #[test]
    fn test_key_steps_saturate_at_i32_limits() {
        let mut s = RangeSlider::new(i32::MAX - 100, i32::MAX, i32::MAX - 5, i32::MAX, &FixedMetrics);
        s.key_press(SliderKey::Up);
        assert_eq!((s.value_lo(), s.value_hi()), (i32::MAX, i32::MAX));
        s.key_press(SliderKey::PageUp);
        assert_eq!((s.value_lo(), s.value_hi()), (i32::MAX, i32::MAX));

        let mut s = RangeSlider::new(i32::MIN, i32::MIN + 100, i32::MIN, i32::MIN + 20, &FixedMetrics);
        s.key_press(SliderKey::PageDown);
        assert_eq!((s.value_lo(), s.value_hi()), (i32::MIN, i32::MIN));
        s.key_press(SliderKey::Left);
        assert_eq!((s.value_lo(), s.value_hi()), (i32::MIN, i32::MIN));
        assert_invariants(&s);
    }

    #[test]
    fn test_non_positive_steps_are_raised_to_one() {
        let mut s = slider(20, 80);
        s.set_step_size(-5);
        s.key_press(SliderKey::Up);
        assert_eq!((s.value_lo(), s.value_hi()), (21, 81));

        s.set_page_size(0);
        s.key_press(SliderKey::PageUp);
        assert_eq!((s.value_lo(), s.value_hi()), (22, 23));
    }

    #[test]
    fn test_invariants_hold_under_mixed_mutations() {
        let mut s = slider(20, 80);
        let ops: Vec<Box<dyn Fn(&mut RangeSlider)>> = vec![
            Box::new(|s| s.set_value_lo(-40)),
            Box::new(|s| s.set_value_hi(1000)),
            Box::new(|s| s.set_range(30, -30)),
            Box::new(|s| s.set_minimum(10)),
            Box::new(|s| s.set_maximum(5)),
            Box::new(|s| {
                s.key_press(SliderKey::PageUp);
            }),
            Box::new(|s| s.set_value_lo(7)),
        ];
        for op in ops {
            op(&mut s);
            assert_invariants(&s);
        }
    }
}
