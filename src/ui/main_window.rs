//! Main application window: the three sliders, a live readout and the
//! gradient editor feeding the gradient slider.

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, Label, Orientation};
use range_slider_render::GroovePainter;
use range_slider_types::{gradient_to_string, string_to_gradient};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::ui::{GradientEditorWidget, RangeSliderWidget};

const WINDOW_TITLE: &str = "RangeSliderTest";

const EDITOR_HELP: &str = "\ngradient editor: lmb into the void to create marker, \
                           lmb on marker to change color. rmb on marker to delete";

/// Last reported `[minimum, value_lo, value_hi, maximum]` of one slider
type SliderState = Rc<Cell<[i32; 4]>>;

pub struct MainWindow {
    window: ApplicationWindow,
}

impl MainWindow {
    /// Build the window. `config_path` is where the edited gradient is saved
    /// on close; `None` uses the default config location.
    pub fn new(app: &Application, config: &AppConfig, config_path: Option<PathBuf>) -> Self {
        let window = ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .default_width(config.window.width)
            .default_height(config.window.height)
            .build();

        let container = GtkBox::new(Orientation::Vertical, 6);
        container.set_margin_start(12);
        container.set_margin_end(12);
        container.set_margin_top(12);
        container.set_margin_bottom(12);

        let s = &config.slider;
        let padding = config.floating.padding;
        let range_slider = RangeSliderWidget::new(s.minimum, s.maximum, s.value_lo, s.value_hi);
        let floating_slider =
            RangeSliderWidget::floating(s.minimum, s.maximum, s.value_lo, s.value_hi, padding);
        let gradient_slider = Rc::new(RangeSliderWidget::floating_gradient(
            s.minimum, s.maximum, s.value_lo, s.value_hi, padding,
        ));

        let readout = Label::new(None);
        readout.set_halign(gtk4::Align::Start);
        readout.set_xalign(0.0);

        let states: [SliderState; 3] = [
            Rc::new(Cell::new(slider_state(&range_slider))),
            Rc::new(Cell::new(slider_state(&floating_slider))),
            Rc::new(Cell::new(slider_state(gradient_slider.as_ref()))),
        ];

        let readout_weak = readout.downgrade();
        let states_refresh = states.clone();
        let refresh: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(label) = readout_weak.upgrade() {
                label.set_text(&readout_text(&states_refresh));
            }
        });

        track_slider(&range_slider, &states[0], &refresh);
        track_slider(&floating_slider, &states[1], &refresh);
        track_slider(gradient_slider.as_ref(), &states[2], &refresh);
        range_slider.set_step_size(s.step_size);
        floating_slider.set_step_size(s.step_size);
        gradient_slider.set_step_size(s.step_size);
        range_slider.set_page_size(s.page_size);
        floating_slider.set_page_size(s.page_size);
        gradient_slider.set_page_size(s.page_size);
        refresh();

        container.append(&range_slider.widget());
        container.append(&floating_slider.widget());
        container.append(&gradient_slider.widget());
        container.append(&Label::new(Some(EDITOR_HELP)));

        let gradient_editor = Rc::new(GradientEditorWidget::new());
        match config.gradient.serialized.as_deref() {
            Some(serialized) => {
                log::info!("Restoring saved gradient");
                gradient_editor.set_gradient(&string_to_gradient(serialized));
            }
            None => gradient_editor.reset(config.gradient.preset),
        }
        container.append(&gradient_editor.widget());

        gradient_slider.set_color_map(gradient_editor.gradient());
        let gradient_slider_sync = gradient_slider.clone();
        gradient_editor.connect_gradient_changed(move |gradient| {
            gradient_slider_sync.set_color_map(gradient.clone());
        });

        container.append(&readout);
        window.set_child(Some(&container));

        let config_close = RefCell::new(config.clone());
        let editor_close = gradient_editor.clone();
        window.connect_close_request(move |_| {
            let mut config = config_close.borrow_mut();
            config.gradient.serialized = Some(gradient_to_string(&editor_close.gradient()));
            let saved = match config_path.as_ref() {
                Some(path) => config.save_to_path(path),
                None => config.save(),
            };
            match saved {
                Ok(()) => log::info!("Saved gradient to configuration"),
                Err(e) => log::warn!("Failed to save configuration: {}", e),
            }
            glib::Propagation::Proceed
        });

        Self { window }
    }

    pub fn present(&self) {
        self.window.present();
    }
}

fn slider_state<P: GroovePainter + 'static>(slider: &RangeSliderWidget<P>) -> [i32; 4] {
    [
        slider.minimum(),
        slider.value_lo(),
        slider.value_hi(),
        slider.maximum(),
    ]
}

/// Mirror the slider's notifications into `state` and refresh the readout.
/// The handlers run mid-update, so they only use the values they receive.
fn track_slider<P: GroovePainter + 'static>(
    slider: &RangeSliderWidget<P>,
    state: &SliderState,
    refresh: &Rc<dyn Fn()>,
) {
    let update = |index: usize, value: i32, state: &SliderState| {
        let mut values = state.get();
        values[index] = value;
        state.set(values);
    };

    let (state_lo, refresh_lo) = (state.clone(), refresh.clone());
    slider.connect_value_lo_changed(move |value| {
        update(1, value, &state_lo);
        refresh_lo();
    });

    let (state_hi, refresh_hi) = (state.clone(), refresh.clone());
    slider.connect_value_hi_changed(move |value| {
        update(2, value, &state_hi);
        refresh_hi();
    });

    let (state_range, refresh_range) = (state.clone(), refresh.clone());
    slider.connect_range_changed(move |minimum, maximum| {
        update(0, minimum, &state_range);
        update(3, maximum, &state_range);
        refresh_range();
    });
}

fn readout_text(states: &[SliderState; 3]) -> String {
    let line = |state: &SliderState| {
        let [minimum, lo, hi, maximum] = state.get();
        format!("[{}   {}   {}   {}]", minimum, lo, hi, maximum)
    };
    format!(
        "simple range slider\n{}\
         \n\nfloating range slider for endless range (but requires mousework :)\n{}\
         \n\nfloating gradient range slider - same as above, but with gradient\n{}",
        line(&states[0]),
        line(&states[1]),
        line(&states[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_lists_all_sliders() {
        let states = [
            Rc::new(Cell::new([0, 20, 80, 100])),
            Rc::new(Cell::new([-20, 5, 80, 100])),
            Rc::new(Cell::new([0, 20, 80, 120])),
        ];
        let text = readout_text(&states);
        assert!(text.starts_with("simple range slider\n[0   20   80   100]"));
        assert!(text.contains("(but requires mousework :)\n[-20   5   80   100]"));
        assert!(text.ends_with("with gradient\n[0   20   80   120]"));
    }
}
