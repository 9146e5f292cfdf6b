//! Auto-rescaling for floating range sliders.
//!
//! With padding `p`, releasing the pointer rescales the visible range when
//! a handle is too close to an edge or to the middle:
//!  - lo below `p` (relative) lowers the minimum, lo above `0.5 - p` raises it
//!  - hi above `1 - p` raises the maximum, hi below `0.5 + p` lowers it
//!
//! Each adjustment moves the bound by a fifth of the current range and is
//! animated rather than applied at once.

use std::rc::Rc;
use uuid::Uuid;

use crate::animation::{Easing, PropertyAnimation};
use crate::collaborators::{AnimatedBound, AnimationKey, Interpolator};
use crate::constants::{MAX_RESCALE_PADDING, RESCALE_DURATION, RESCALE_FRACTION};
use crate::range_slider::RangeSlider;

/// Animations to run for one pointer release
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RescalePlan {
    pub minimum: Option<PropertyAnimation>,
    pub maximum: Option<PropertyAnimation>,
}

impl RescalePlan {
    pub fn is_empty(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none()
    }

    /// Hand the planned animations to `interpolator`. `apply` receives the
    /// bound and its rounded value on every tick.
    pub fn schedule<I>(self, owner: Uuid, interpolator: &I, apply: Rc<dyn Fn(AnimatedBound, i32)>)
    where
        I: Interpolator + ?Sized,
    {
        let planned = [
            (AnimatedBound::Minimum, self.minimum),
            (AnimatedBound::Maximum, self.maximum),
        ];
        for (bound, animation) in planned {
            let Some(animation) = animation else {
                continue;
            };
            log::debug!(
                "Rescaling {:?} from {} to {}",
                bound,
                animation.start,
                animation.end
            );
            let apply = apply.clone();
            interpolator.schedule_interpolation(
                AnimationKey::new(owner, bound),
                animation,
                Box::new(move |value| apply(bound, value.round() as i32)),
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescalePolicy {
    padding: f64,
}

impl RescalePolicy {
    /// `padding` is clamped to `0.0..=0.2`
    pub fn new(padding: f64) -> Self {
        let padding = if padding.is_nan() {
            0.0
        } else {
            padding.clamp(0.0, MAX_RESCALE_PADDING)
        };
        Self { padding }
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Decide which bounds to animate, given the slider state at release
    pub fn plan(&self, slider: &RangeSlider) -> RescalePlan {
        let minimum = slider.minimum() as f64;
        let maximum = slider.maximum() as f64;
        let range = maximum - minimum;
        if range <= 0.0 {
            return RescalePlan::default();
        }

        let step = range * RESCALE_FRACTION;
        let animate = |from: f64, to: f64| {
            PropertyAnimation::new(from, to.round(), RESCALE_DURATION, Easing::OutQuart)
        };

        let relative_lo = (slider.value_lo() as f64 - minimum) / range;
        let min_animation = if relative_lo < self.padding {
            Some(animate(minimum, minimum - step))
        } else if relative_lo > 0.5 - self.padding {
            Some(animate(minimum, minimum + step))
        } else {
            None
        };

        let relative_hi = (slider.value_hi() as f64 - minimum) / range;
        let max_animation = if relative_hi > 1.0 - self.padding {
            Some(animate(maximum, maximum + step))
        } else if relative_hi < 0.5 + self.padding {
            Some(animate(maximum, maximum - step))
        } else {
            None
        };

        RescalePlan {
            minimum: min_animation,
            maximum: max_animation,
        }
    }
}
