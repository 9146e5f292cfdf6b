//! Main-loop services for the widget models

pub mod animation_manager;

pub use animation_manager::{
    schedule_animation, shutdown_animation_manager, GlibInterpolator,
};
