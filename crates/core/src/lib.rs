//! range-slider-core: Interaction models for the range-slider widgets.
//!
//! Everything here is independent of the GUI toolkit. The models own the
//! widget state, interpret pointer and keyboard input and fire change
//! signals; toolkit services (style metrics, color dialogs, animation
//! clocks) are reached through the traits in [`collaborators`].

pub mod animation;
pub mod collaborators;
pub mod constants;
pub mod floating;
pub mod geometry;
pub mod gradient_editor;
pub mod range_slider;
pub mod signal;

pub use animation::{Easing, PropertyAnimation};
pub use collaborators::{AnimatedBound, AnimationKey, ColorPrompt, Interpolator, StyleMetrics};
pub use floating::{RescalePlan, RescalePolicy};
pub use geometry::{Orientation, Rect, Size, SliderGeometry};
pub use gradient_editor::{GradientEditor, PointerButton, PressOutcome, ReleaseOutcome};
pub use range_slider::{DragMode, RangeSlider, SliderKey};
pub use signal::Signal;

// Re-export the data types used in model signatures for convenience
pub use range_slider_types::{Color, ColorMap, ColorStop, GradientMarker, Preset};
