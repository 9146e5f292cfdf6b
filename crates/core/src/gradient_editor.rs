//! Gradient-stop editor model.
//!
//! The editor shows a horizontal gradient strip with one marker per stop.
//! The usable gradient span excludes a padding area at both ends. Pointer
//! gestures map onto marker operations:
//!
//! - primary press on a marker grabs it; dragging moves it, a release
//!   without movement asks for a new color
//! - secondary press on a marker removes it (never below two markers)
//! - primary press on empty space asks for a color and adds a marker there
//!
//! Color questions are returned to the caller as outcomes; the answers come
//! back through [`GradientEditor::apply_new_marker`] and
//! [`GradientEditor::apply_recolor`].

use range_slider_types::{Color, ColorMap, GradientMarker, Preset};

use crate::constants::{GRADIENT_EDITOR_PADDING, MARKER_HIT_TOLERANCE};
use crate::geometry::{Rect, Size};
use crate::signal::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// Result of a pointer press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressOutcome {
    /// Nothing to do
    Ignored,
    /// The marker at this index is ready to move
    MarkerGrabbed(usize),
    /// The marker at this index was removed
    MarkerRemoved(usize),
    /// Ask for a color; on a choice call `apply_new_marker(position, ..)`
    PromptNewMarker { position: f64, initial: Color },
}

/// Result of a pointer release
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    Idle,
    /// A grabbed marker was dragged
    Moved,
    /// A marker was clicked without moving; on a choice call
    /// `apply_recolor(index, ..)`
    PromptRecolor { index: usize, initial: Color },
}

pub struct GradientEditor {
    padding: f64,
    markers: Vec<GradientMarker>,
    view: Rect,
    gradient_rect: Rect,
    drag_x: f64,
    marker_ready_to_move: bool,
    marker_has_been_moved: bool,
    gradient_changed: Signal<ColorMap>,
    redraw_requested: Signal<()>,
}

impl GradientEditor {
    pub fn new() -> Self {
        let mut editor = Self {
            padding: GRADIENT_EDITOR_PADDING,
            markers: Vec::new(),
            view: Rect::default(),
            gradient_rect: Rect::default(),
            drag_x: 0.0,
            marker_ready_to_move: false,
            marker_has_been_moved: false,
            gradient_changed: Signal::new(),
            redraw_requested: Signal::new(),
        };
        editor.reset(Preset::Empty);
        editor
    }

    /// Recompute the view and the padded gradient rectangle
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.view = Rect::new(0.0, 0.0, width, height);
        let inset = (width * self.padding).trunc();
        self.gradient_rect = Rect::new(inset, 0.0, (width - 2.0 * inset).max(0.0), height);
        self.request_redraw();
    }

    pub fn size(&self) -> Size {
        Size::new(self.view.width, self.view.height)
    }

    pub fn view_rect(&self) -> Rect {
        self.view
    }

    pub fn gradient_rect(&self) -> Rect {
        self.gradient_rect
    }

    pub fn markers(&self) -> &[GradientMarker] {
        &self.markers
    }

    /// Horizontal pixel position of a marker's center
    pub fn marker_pixel_x(&self, marker: &GradientMarker) -> f64 {
        (self.gradient_rect.left() + marker.position * self.gradient_rect.width).trunc()
    }

    /// The current stops as a color map
    pub fn gradient(&self) -> ColorMap {
        self.markers.iter().map(|m| (m.position, m.color)).collect()
    }

    /// Replace all markers. Fewer than two stops resets to the empty preset.
    pub fn set_gradient(&mut self, stops: &ColorMap) {
        if stops.len() < 2 {
            self.reset(Preset::Empty);
            return;
        }

        self.clear_gesture();
        self.markers = stops
            .iter()
            .map(|s| GradientMarker::new(s.position, s.color))
            .collect();
        self.notify_changed();
        self.request_redraw();
    }

    /// Replace all markers with a preset, notifying once for the batch
    pub fn reset(&mut self, preset: Preset) {
        self.clear_gesture();
        self.markers.clear();

        self.gradient_changed.set_blocked(true);
        for stop in preset.stops() {
            self.add_marker(stop.color, stop.position);
        }
        self.gradient_changed.set_blocked(false);

        log::debug!("Gradient editor reset to preset '{}'", preset);
        self.notify_changed();
        self.request_redraw();
    }

    /// Append a marker; the position is clamped to 0.0..=1.0
    pub fn add_marker(&mut self, color: Color, position: f64) {
        let position = if position.is_nan() {
            0.5
        } else {
            position.clamp(0.0, 1.0)
        };
        self.markers.push(GradientMarker::new(position, color));
        self.notify_changed();
        self.request_redraw();
    }

    /// Remove a marker. Out-of-range indices and removals that would leave
    /// fewer than two markers are ignored. Returns whether one was removed.
    pub fn remove_marker(&mut self, index: usize) -> bool {
        if self.markers.len() <= 2 || index >= self.markers.len() {
            return false;
        }
        self.markers.remove(index);
        self.notify_changed();
        self.request_redraw();
        true
    }

    pub fn connect_gradient_changed<F: Fn(&ColorMap) + 'static>(&mut self, f: F) {
        self.gradient_changed.connect(f);
    }

    pub fn connect_redraw_requested<F: Fn() + 'static>(&mut self, f: F) {
        self.redraw_requested.connect(move |_| f());
    }

    pub fn pointer_press(&mut self, x: f64, button: PointerButton) -> PressOutcome {
        self.drag_x = x;
        if self.gradient_rect.width <= 0.0 {
            return PressOutcome::Ignored;
        }

        let hit = self
            .markers
            .iter()
            .position(|m| (x - self.marker_pixel_x(m)).abs() < MARKER_HIT_TOLERANCE);
        for marker in &mut self.markers {
            marker.has_focus = false;
        }
        self.marker_ready_to_move = false;
        self.marker_has_been_moved = false;

        let outcome = match (hit, button) {
            (Some(index), PointerButton::Primary) => {
                self.markers[index].has_focus = true;
                self.marker_ready_to_move = true;
                PressOutcome::MarkerGrabbed(index)
            }
            (Some(index), PointerButton::Secondary) => {
                if self.remove_marker(index) {
                    PressOutcome::MarkerRemoved(index)
                } else {
                    log::debug!("Gradient editor: keeping marker {}, at least two are required", index);
                    PressOutcome::Ignored
                }
            }
            (None, PointerButton::Primary) => {
                let position =
                    ((x - self.gradient_rect.left()) / self.gradient_rect.width).clamp(0.0, 1.0);
                log::debug!("Gradient editor: adding marker at {:.3}", position);
                PressOutcome::PromptNewMarker {
                    position,
                    initial: Color::from_rgb8(rand::random(), rand::random(), rand::random()),
                }
            }
            _ => PressOutcome::Ignored,
        };
        self.request_redraw();
        outcome
    }

    /// Move the grabbed marker with the pointer. The marker stays inside
    /// 0.0..=1.0 and only follows once the pointer has caught up with it,
    /// so it never jumps to the cursor.
    pub fn pointer_move(&mut self, x: f64) {
        if !self.marker_ready_to_move {
            return;
        }

        if let Some(index) = self.markers.iter().position(|m| m.has_focus) {
            let pixel_x = self.marker_pixel_x(&self.markers[index]);
            let delta = (x - self.drag_x) / self.gradient_rect.width;
            // Even a blocked move counts: releasing must not prompt for a color
            self.marker_has_been_moved = true;

            let target = self.markers[index].position + delta;
            let in_bounds = (0.0..=1.0).contains(&target);
            let caught_up = !(delta > 0.0 && x < pixel_x) && !(delta < 0.0 && x > pixel_x);
            if in_bounds && caught_up {
                self.markers[index].position = target;
                self.notify_changed();
            }
        }

        self.drag_x = x;
        self.request_redraw();
    }

    pub fn pointer_release(&mut self) -> ReleaseOutcome {
        self.marker_ready_to_move = false;
        let focused = self.markers.iter().position(|m| m.has_focus);
        for marker in &mut self.markers {
            marker.has_focus = false;
        }

        if self.marker_has_been_moved {
            self.marker_has_been_moved = false;
            return ReleaseOutcome::Moved;
        }

        match focused {
            Some(index) => ReleaseOutcome::PromptRecolor {
                index,
                initial: self.markers[index].color,
            },
            None => ReleaseOutcome::Idle,
        }
    }

    /// Complete a [`PressOutcome::PromptNewMarker`]
    pub fn apply_new_marker(&mut self, position: f64, choice: Option<Color>) {
        if let Some(color) = choice {
            self.add_marker(color, position);
        }
    }

    /// Complete a [`ReleaseOutcome::PromptRecolor`]
    pub fn apply_recolor(&mut self, index: usize, choice: Option<Color>) {
        let Some(color) = choice else {
            return;
        };
        if let Some(marker) = self.markers.get_mut(index) {
            marker.color = color;
            self.notify_changed();
            self.request_redraw();
        }
    }

    fn clear_gesture(&mut self) {
        self.marker_ready_to_move = false;
        self.marker_has_been_moved = false;
    }

    fn notify_changed(&self) {
        if self.gradient_changed.is_blocked() {
            return;
        }
        let gradient = self.gradient();
        self.gradient_changed.emit(&gradient);
    }

    fn request_redraw(&self) {
        self.redraw_requested.emit(&());
    }
}

impl Default for GradientEditor {
    fn default() -> Self {
        Self::new()
    }
}
