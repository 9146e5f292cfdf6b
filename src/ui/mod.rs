//! UI components

mod color_picker;
mod gradient_editor_widget;
mod main_window;
mod range_slider_widget;

pub use color_picker::{ColorPickerDialog, DialogColorPrompt};
pub use gradient_editor_widget::GradientEditorWidget;
pub use main_window::MainWindow;
pub use range_slider_widget::RangeSliderWidget;
