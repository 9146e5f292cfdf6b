//! range-slider: Range slider and gradient editor widgets for GTK4
//!
//! This library provides:
//! - A dual-handle range slider, a floating variant that rescales its bounds
//!   and a floating variant whose groove shows a gradient
//! - A gradient editor emitting the color map it edits
//! - Configuration management for the demo application

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use ui::{GradientEditorWidget, MainWindow, RangeSliderWidget};
