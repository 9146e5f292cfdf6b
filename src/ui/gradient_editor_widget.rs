//! Gradient editor widget: a gradient strip with draggable color markers.
//!
//! Primary click on empty space adds a marker, primary click on a marker
//! recolors it and dragging moves it, secondary click removes it.

use gtk4::prelude::*;
use gtk4::{DrawingArea, GestureDrag, Widget};
use range_slider_core::{
    ColorMap, ColorPrompt, GradientEditor, PointerButton, PressOutcome, ReleaseOutcome,
};
use range_slider_render::render_gradient_editor;
use range_slider_types::{Color, Preset};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::ui::color_picker::DialogColorPrompt;

const MIN_HEIGHT: i32 = 25;

/// Gradient editor widget
pub struct GradientEditorWidget {
    drawing_area: DrawingArea,
    editor: Rc<RefCell<GradientEditor>>,
}

impl GradientEditorWidget {
    /// Editor asking for colors with the GTK color dialog
    pub fn new() -> Self {
        let drawing_area = DrawingArea::new();
        let prompt = Rc::new(DialogColorPrompt::new(&drawing_area));
        Self::with_area_and_prompt(drawing_area, prompt)
    }

    /// Editor asking for colors through `prompt`
    pub fn with_prompt(prompt: Rc<dyn ColorPrompt>) -> Self {
        Self::with_area_and_prompt(DrawingArea::new(), prompt)
    }

    fn with_area_and_prompt(drawing_area: DrawingArea, prompt: Rc<dyn ColorPrompt>) -> Self {
        drawing_area.set_content_height(MIN_HEIGHT);
        drawing_area.set_size_request(-1, MIN_HEIGHT);
        drawing_area.set_hexpand(true);

        let widget = Self {
            drawing_area,
            editor: Rc::new(RefCell::new(GradientEditor::new())),
        };
        widget.setup_drawing();
        widget.setup_pointer(prompt);
        widget
    }

    pub fn widget(&self) -> Widget {
        self.drawing_area.clone().upcast()
    }

    /// Replace the markers with a preset
    pub fn reset(&self, preset: Preset) {
        self.editor.borrow_mut().reset(preset);
    }

    pub fn add_marker(&self, color: Color, position: f64) {
        self.editor.borrow_mut().add_marker(color, position);
    }

    pub fn gradient(&self) -> ColorMap {
        self.editor.borrow().gradient()
    }

    /// Replace the markers; fewer than two stops leave the editor empty
    pub fn set_gradient(&self, stops: &ColorMap) {
        self.editor.borrow_mut().set_gradient(stops);
    }

    /// `f` receives the new gradient after every change
    pub fn connect_gradient_changed<F: Fn(&ColorMap) + 'static>(&self, f: F) {
        self.editor.borrow_mut().connect_gradient_changed(f);
    }

    fn setup_drawing(&self) {
        let editor_draw = self.editor.clone();
        self.drawing_area.set_draw_func(move |area, cr, _width, _height| {
            let foreground = Color::from_gdk_rgba(&area.color());
            if let Err(e) = render_gradient_editor(cr, &editor_draw.borrow(), foreground) {
                log::debug!("Gradient editor render failed: {:?}", e);
            }
        });

        let editor_resize = self.editor.clone();
        self.drawing_area.connect_resize(move |_, width, height| {
            editor_resize
                .borrow_mut()
                .set_size(width as f64, height as f64);
        });

        let area_weak = self.drawing_area.downgrade();
        self.editor.borrow_mut().connect_redraw_requested(move || {
            if let Some(area) = area_weak.upgrade() {
                area.queue_draw();
            }
        });
    }

    fn setup_pointer(&self, prompt: Rc<dyn ColorPrompt>) {
        let drag_gesture = GestureDrag::new();
        drag_gesture.set_button(0);

        let press_x: Rc<Cell<f64>> = Rc::new(Cell::new(0.0));

        let editor_begin = self.editor.clone();
        let press_x_begin = press_x.clone();
        let prompt_begin = prompt.clone();
        drag_gesture.connect_drag_begin(move |gesture, x, _y| {
            let button = match gesture.current_button() {
                1 => PointerButton::Primary,
                3 => PointerButton::Secondary,
                _ => PointerButton::Other,
            };
            press_x_begin.set(x);

            let outcome = editor_begin.borrow_mut().pointer_press(x, button);
            if let PressOutcome::PromptNewMarker { position, initial } = outcome {
                let editor_weak = Rc::downgrade(&editor_begin);
                prompt_begin.prompt_for_color(
                    initial,
                    Box::new(move |choice| {
                        if let Some(editor) = editor_weak.upgrade() {
                            editor.borrow_mut().apply_new_marker(position, choice);
                        }
                    }),
                );
            }
        });

        let editor_update = self.editor.clone();
        let press_x_update = press_x.clone();
        drag_gesture.connect_drag_update(move |_, offset_x, _offset_y| {
            editor_update
                .borrow_mut()
                .pointer_move(press_x_update.get() + offset_x);
        });

        let editor_end = self.editor.clone();
        drag_gesture.connect_drag_end(move |_, _, _| {
            let outcome = editor_end.borrow_mut().pointer_release();
            if let ReleaseOutcome::PromptRecolor { index, initial } = outcome {
                let editor_weak = Rc::downgrade(&editor_end);
                prompt.prompt_for_color(
                    initial,
                    Box::new(move |choice| {
                        if let Some(editor) = editor_weak.upgrade() {
                            editor.borrow_mut().apply_recolor(index, choice);
                        }
                    }),
                );
            }
        });

        self.drawing_area.add_controller(drag_gesture);
    }
}

impl Default for GradientEditorWidget {
    fn default() -> Self {
        Self::new()
    }
}
