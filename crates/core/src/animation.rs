//! Time-based interpolation of a single numeric property.

use std::time::Duration;

/// Easing curve applied to an animation's linear progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Fast start, decelerating to zero velocity
    #[default]
    OutQuart,
}

impl Easing {
    /// Map linear progress (0.0..=1.0) to eased progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Interpolates from `start` to `end` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAnimation {
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl PropertyAnimation {
    pub fn new(start: f64, end: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            easing,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Property value `elapsed` after the animation started
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let eased = self.easing.apply(self.progress(elapsed));
        self.start + (self.end - self.start) * eased
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_quart_endpoints_and_shape() {
        assert_eq!(Easing::OutQuart.apply(0.0), 0.0);
        assert_eq!(Easing::OutQuart.apply(1.0), 1.0);
        // ease-out runs ahead of linear
        assert!(Easing::OutQuart.apply(0.25) > 0.25);
        assert!((Easing::OutQuart.apply(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_value_at_reaches_end_exactly() {
        let anim = PropertyAnimation::new(0.0, -20.0, Duration::from_millis(200), Easing::OutQuart);
        assert_eq!(anim.value_at(Duration::ZERO), 0.0);
        assert_eq!(anim.value_at(Duration::from_millis(200)), -20.0);
        assert_eq!(anim.value_at(Duration::from_millis(500)), -20.0);
        assert!(!anim.is_finished(Duration::from_millis(199)));
        assert!(anim.is_finished(Duration::from_millis(200)));
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let anim = PropertyAnimation::new(3.0, 9.0, Duration::ZERO, Easing::Linear);
        assert_eq!(anim.value_at(Duration::ZERO), 9.0);
    }
}
