//! Color picker dialog

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{ColorDialog, Widget, Window};
use range_slider_core::ColorPrompt;
use range_slider_types::Color;

/// Color picker dialog
pub struct ColorPickerDialog;

impl ColorPickerDialog {
    /// Show color picker and return selected color
    pub async fn pick_color(parent: Option<&Window>, initial_color: Color) -> Option<Color> {
        let dialog = ColorDialog::builder()
            .title("Select Color")
            .modal(true)
            .with_alpha(false)
            .build();

        // Set initial color
        let initial_rgba = initial_color.to_gdk_rgba();

        match dialog.choose_rgba_future(parent, Some(&initial_rgba)).await {
            Ok(rgba) => Some(Color::from_gdk_rgba(&rgba)),
            Err(_) => None,
        }
    }
}

/// [`ColorPrompt`] that opens a [`ColorDialog`] over the window containing
/// `anchor`. The answer arrives asynchronously on the main loop.
pub struct DialogColorPrompt {
    anchor: glib::WeakRef<Widget>,
}

impl DialogColorPrompt {
    pub fn new(anchor: &impl IsA<Widget>) -> Self {
        Self {
            anchor: anchor.upcast_ref::<Widget>().downgrade(),
        }
    }
}

impl ColorPrompt for DialogColorPrompt {
    fn prompt_for_color(&self, initial: Color, on_choice: Box<dyn FnOnce(Option<Color>)>) {
        let window = self
            .anchor
            .upgrade()
            .and_then(|anchor| anchor.root())
            .and_then(|root| root.downcast::<Window>().ok());

        glib::MainContext::default().spawn_local(async move {
            let choice = ColorPickerDialog::pick_color(window.as_ref(), initial).await;
            if choice.is_none() {
                log::debug!("Color prompt cancelled");
            }
            on_choice(choice);
        });
    }
}
