//! Narrow interfaces to the services a GUI toolkit normally provides
//! implicitly. The toolkit layer implements them and injects them into
//! the widgets.

use range_slider_types::Color;
use uuid::Uuid;

use crate::animation::PropertyAnimation;
use crate::geometry::{Orientation, Size};

/// Style metrics used for hit-testing and layout
pub trait StyleMetrics {
    /// Size of one slider handle for the given orientation
    fn handle_size(&self, orientation: Orientation) -> Size;
}

/// Asks the user for a color.
///
/// Toolkit color dialogs are asynchronous, so the answer is delivered to
/// `on_choice`; `None` means the prompt was cancelled.
pub trait ColorPrompt {
    fn prompt_for_color(&self, initial: Color, on_choice: Box<dyn FnOnce(Option<Color>)>);
}

/// Which slider bound an animation drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedBound {
    Minimum,
    Maximum,
}

/// Identifies one animated property of one widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationKey {
    pub owner: Uuid,
    pub property: AnimatedBound,
}

impl AnimationKey {
    pub fn new(owner: Uuid, property: AnimatedBound) -> Self {
        Self { owner, property }
    }
}

/// Drives animations from a clock the model does not own.
pub trait Interpolator {
    /// Start `animation`, calling `on_tick` with each interpolated value
    /// (the last call carries `animation.end`). Scheduling a key that is
    /// still running replaces the running animation.
    fn schedule_interpolation(
        &self,
        key: AnimationKey,
        animation: PropertyAnimation,
        on_tick: Box<dyn Fn(f64)>,
    );
}
