//! Configuration management

mod settings;

pub use settings::{AppConfig, FloatingConfig, GradientConfig, SliderConfig, WindowConfig};
