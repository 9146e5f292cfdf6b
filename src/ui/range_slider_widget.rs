//! GTK front-end for the range slider model.
//!
//! One widget type covers all three slider flavours: the groove painter
//! decides how the selection is drawn and an optional [`RescalePolicy`]
//! turns it into a floating slider.

use gdk4::Key;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerKey, GestureDrag, Widget};
use range_slider_core::{
    AnimatedBound, ColorMap, Orientation, RangeSlider, RescalePolicy, Size, SliderKey,
};
use range_slider_render::{
    render_range_slider, DefaultSliderStyle, GradientGroove, GroovePainter, HighlightGroove,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use uuid::Uuid;

use crate::core::GlibInterpolator;

/// Range slider widget, generic over how the groove is filled
pub struct RangeSliderWidget<P: GroovePainter + 'static> {
    drawing_area: DrawingArea,
    slider: Rc<RefCell<RangeSlider>>,
    painter: Rc<RefCell<P>>,
    rescale: Option<RescalePolicy>,
}

impl RangeSliderWidget<HighlightGroove> {
    /// Plain range slider with a highlighted selection
    pub fn new(minimum: i32, maximum: i32, value_lo: i32, value_hi: i32) -> Self {
        Self::with_painter(minimum, maximum, value_lo, value_hi, HighlightGroove::default(), None)
    }

    /// Range slider that rescales its bounds after each drag
    pub fn floating(minimum: i32, maximum: i32, value_lo: i32, value_hi: i32, padding: f64) -> Self {
        Self::with_painter(
            minimum,
            maximum,
            value_lo,
            value_hi,
            HighlightGroove::default(),
            Some(RescalePolicy::new(padding)),
        )
    }
}

impl RangeSliderWidget<GradientGroove> {
    /// Floating range slider whose groove shows a color map
    pub fn floating_gradient(
        minimum: i32,
        maximum: i32,
        value_lo: i32,
        value_hi: i32,
        padding: f64,
    ) -> Self {
        Self::with_painter(
            minimum,
            maximum,
            value_lo,
            value_hi,
            GradientGroove::default(),
            Some(RescalePolicy::new(padding)),
        )
    }

    /// Replace the groove's color map and redraw
    pub fn set_color_map(&self, color_map: ColorMap) {
        self.painter.borrow_mut().set_color_map(color_map);
        self.drawing_area.queue_draw();
    }
}

impl<P: GroovePainter + 'static> RangeSliderWidget<P> {
    pub fn with_painter(
        minimum: i32,
        maximum: i32,
        value_lo: i32,
        value_hi: i32,
        painter: P,
        rescale: Option<RescalePolicy>,
    ) -> Self {
        let drawing_area = DrawingArea::new();
        drawing_area.set_focusable(true);

        let slider = Rc::new(RefCell::new(RangeSlider::new(
            minimum,
            maximum,
            value_lo,
            value_hi,
            &DefaultSliderStyle,
        )));
        let painter = Rc::new(RefCell::new(painter));

        let widget = Self {
            drawing_area,
            slider,
            painter,
            rescale,
        };
        widget.apply_size_hints();
        widget.setup_drawing();
        widget.setup_pointer();
        widget.setup_keyboard();
        widget
    }

    pub fn widget(&self) -> Widget {
        self.drawing_area.clone().upcast()
    }

    pub fn minimum(&self) -> i32 {
        self.slider.borrow().minimum()
    }

    pub fn maximum(&self) -> i32 {
        self.slider.borrow().maximum()
    }

    pub fn value_lo(&self) -> i32 {
        self.slider.borrow().value_lo()
    }

    pub fn value_hi(&self) -> i32 {
        self.slider.borrow().value_hi()
    }

    pub fn set_minimum(&self, minimum: i32) {
        self.slider.borrow_mut().set_minimum(minimum);
    }

    pub fn set_maximum(&self, maximum: i32) {
        self.slider.borrow_mut().set_maximum(maximum);
    }

    pub fn set_range(&self, minimum: i32, maximum: i32) {
        self.slider.borrow_mut().set_range(minimum, maximum);
    }

    pub fn set_value_lo(&self, value: i32) {
        self.slider.borrow_mut().set_value_lo(value);
    }

    pub fn set_value_hi(&self, value: i32) {
        self.slider.borrow_mut().set_value_hi(value);
    }

    pub fn set_step_size(&self, step: i32) {
        self.slider.borrow_mut().set_step_size(step);
    }

    pub fn set_page_size(&self, page: i32) {
        self.slider.borrow_mut().set_page_size(page);
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.slider
            .borrow_mut()
            .set_orientation(orientation, &DefaultSliderStyle);
        self.apply_size_hints();
    }

    /// Handlers run while the slider is being updated; use the value passed
    /// in rather than reading it back from the widget.
    pub fn connect_value_lo_changed<F: Fn(i32) + 'static>(&self, f: F) {
        self.slider.borrow_mut().connect_value_lo_changed(f);
    }

    pub fn connect_value_hi_changed<F: Fn(i32) + 'static>(&self, f: F) {
        self.slider.borrow_mut().connect_value_hi_changed(f);
    }

    pub fn connect_range_changed<F: Fn(i32, i32) + 'static>(&self, f: F) {
        self.slider.borrow_mut().connect_range_changed(f);
    }

    fn apply_size_hints(&self) {
        let slider = self.slider.borrow();
        let hint = slider.size_hint();
        let minimum = slider.minimum_size_hint();
        let horizontal = slider.orientation() == Orientation::Horizontal;

        self.drawing_area.set_content_width(hint.width as i32);
        self.drawing_area.set_content_height(hint.height as i32);
        self.drawing_area
            .set_size_request(minimum.width as i32, minimum.height as i32);
        self.drawing_area.set_hexpand(horizontal);
        self.drawing_area.set_vexpand(!horizontal);
    }

    fn setup_drawing(&self) {
        let slider_draw = self.slider.clone();
        let painter_draw = self.painter.clone();
        self.drawing_area.set_draw_func(move |_, cr, width, height| {
            let mut geometry = slider_draw.borrow().geometry();
            geometry.size = Size::new(width as f64, height as f64);
            let painter = painter_draw.borrow();
            if let Err(e) = render_range_slider(cr, &geometry, &*painter) {
                log::debug!("Range slider render failed: {:?}", e);
            }
        });

        let slider_resize = self.slider.clone();
        self.drawing_area.connect_resize(move |_, width, height| {
            slider_resize
                .borrow_mut()
                .set_size(width as f64, height as f64);
        });

        // Weak ref avoids a cycle through the model's handler list
        let area_weak = self.drawing_area.downgrade();
        self.slider.borrow_mut().connect_redraw_requested(move || {
            if let Some(area) = area_weak.upgrade() {
                area.queue_draw();
            }
        });
    }

    fn setup_pointer(&self) {
        let drag_gesture = GestureDrag::new();
        // Any button drags
        drag_gesture.set_button(0);

        let press_point: Rc<Cell<(f64, f64)>> = Rc::new(Cell::new((0.0, 0.0)));

        let slider_begin = self.slider.clone();
        let press_point_begin = press_point.clone();
        let area_weak = self.drawing_area.downgrade();
        drag_gesture.connect_drag_begin(move |_, x, y| {
            if let Some(area) = area_weak.upgrade() {
                area.grab_focus();
            }
            press_point_begin.set((x, y));
            slider_begin.borrow_mut().pointer_press(x, y);
        });

        let slider_update = self.slider.clone();
        let press_point_update = press_point.clone();
        drag_gesture.connect_drag_update(move |_, offset_x, offset_y| {
            let (start_x, start_y) = press_point_update.get();
            slider_update
                .borrow_mut()
                .pointer_move(start_x + offset_x, start_y + offset_y);
        });

        let slider_end = self.slider.clone();
        let rescale = self.rescale;
        let owner = Uuid::new_v4();
        drag_gesture.connect_drag_end(move |_, _, _| {
            slider_end.borrow_mut().pointer_release();

            let Some(policy) = rescale else {
                return;
            };
            let plan = policy.plan(&slider_end.borrow());
            if plan.is_empty() {
                return;
            }

            let slider_weak = Rc::downgrade(&slider_end);
            plan.schedule(
                owner,
                &GlibInterpolator,
                Rc::new(move |bound: AnimatedBound, value: i32| {
                    let Some(slider) = slider_weak.upgrade() else {
                        return;
                    };
                    let mut slider = slider.borrow_mut();
                    match bound {
                        AnimatedBound::Minimum => slider.set_minimum(value),
                        AnimatedBound::Maximum => slider.set_maximum(value),
                    }
                }),
            );
        });

        self.drawing_area.add_controller(drag_gesture);
    }

    fn setup_keyboard(&self) {
        let key_controller = EventControllerKey::new();
        let slider_key = self.slider.clone();
        key_controller.connect_key_pressed(move |_, keyval, _keycode, _state| {
            let key = match keyval {
                Key::Up | Key::KP_Up => SliderKey::Up,
                Key::Down | Key::KP_Down => SliderKey::Down,
                Key::Left | Key::KP_Left => SliderKey::Left,
                Key::Right | Key::KP_Right => SliderKey::Right,
                Key::Page_Up | Key::KP_Page_Up => SliderKey::PageUp,
                Key::Page_Down | Key::KP_Page_Down => SliderKey::PageDown,
                _ => return glib::Propagation::Proceed,
            };
            if slider_key.borrow_mut().key_press(key) {
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });
        self.drawing_area.add_controller(key_controller);
    }
}
