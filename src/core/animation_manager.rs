//! Global animation manager driving property animations.
//!
//! Instead of each widget creating its own `glib::timeout_add_local()` timer,
//! this module runs a single main-loop timer that advances every scheduled
//! [`PropertyAnimation`]. The timer only runs while animations are pending.
//!
//! Animations are keyed by [`AnimationKey`]; scheduling a key that is still
//! running replaces the old animation from the new start value.

use gtk4::glib;
use range_slider_core::constants::ANIMATION_FRAME_INTERVAL;
use range_slider_core::{AnimationKey, Interpolator, PropertyAnimation};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

thread_local! {
    /// Thread-local animation manager. Since GTK operations must happen on the main thread,
    /// we use thread-local storage instead of a global static.
    static ANIMATION_MANAGER: AnimationManager = AnimationManager::new();
}

fn with_animation_manager<F, R>(f: F) -> R
where
    F: FnOnce(&AnimationManager) -> R,
{
    ANIMATION_MANAGER.with(f)
}

/// Schedule `animation` for `key` on the main loop.
///
/// `on_tick` is called with the interpolated value on every frame; the last
/// call carries `animation.end`.
pub fn schedule_animation(
    key: AnimationKey,
    animation: PropertyAnimation,
    on_tick: Box<dyn Fn(f64)>,
) {
    with_animation_manager(|manager| {
        manager.insert(key, animation, on_tick, Instant::now());
        manager.ensure_timer_running();
    });
}

/// Drop all pending animations. The timer stops on its next tick.
pub fn shutdown_animation_manager() {
    with_animation_manager(|manager| {
        manager.shutdown();
    });
}

/// [`Interpolator`] backed by the main-loop animation manager
#[derive(Debug, Clone, Copy, Default)]
pub struct GlibInterpolator;

impl Interpolator for GlibInterpolator {
    fn schedule_interpolation(
        &self,
        key: AnimationKey,
        animation: PropertyAnimation,
        on_tick: Box<dyn Fn(f64)>,
    ) {
        schedule_animation(key, animation, on_tick);
    }
}

/// Entry in the animation registry.
struct AnimationEntry {
    animation: PropertyAnimation,
    started: Instant,
    /// Shared so a tick can run after the registry borrow is released
    on_tick: Rc<dyn Fn(f64)>,
}

struct AnimationManager {
    entries: RefCell<HashMap<AnimationKey, AnimationEntry>>,
    /// Whether the timer is currently scheduled.
    timer_active: Cell<bool>,
}

impl AnimationManager {
    fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            timer_active: Cell::new(false),
        }
    }

    fn insert(
        &self,
        key: AnimationKey,
        animation: PropertyAnimation,
        on_tick: Box<dyn Fn(f64)>,
        now: Instant,
    ) {
        let replaced = self.entries.borrow_mut().insert(
            key,
            AnimationEntry {
                animation,
                started: now,
                on_tick: Rc::from(on_tick),
            },
        );
        if replaced.is_some() {
            log::debug!("Animation manager: replaced running animation for {:?}", key.property);
        }
    }

    fn ensure_timer_running(&self) {
        if self.timer_active.get() {
            return;
        }
        self.timer_active.set(true);

        // Use DEFAULT_IDLE priority so user input events (mouse, keyboard) are always
        // processed before animation ticks.
        glib::source::timeout_add_local_full(
            ANIMATION_FRAME_INTERVAL,
            glib::Priority::DEFAULT_IDLE,
            move || {
                with_animation_manager(|manager| {
                    manager.tick(Instant::now());
                    if manager.entries.borrow().is_empty() {
                        manager.timer_active.set(false);
                        glib::ControlFlow::Break
                    } else {
                        glib::ControlFlow::Continue
                    }
                })
            },
        );
    }

    /// Advance every animation to `now`, dropping finished ones.
    /// Returns the number of callbacks invoked.
    fn tick(&self, now: Instant) -> usize {
        let mut due: Vec<(Rc<dyn Fn(f64)>, f64)> = Vec::new();
        self.entries.borrow_mut().retain(|_, entry| {
            let elapsed = now.saturating_duration_since(entry.started);
            due.push((entry.on_tick.clone(), entry.animation.value_at(elapsed)));
            !entry.animation.is_finished(elapsed)
        });

        // Callbacks may schedule new animations, so run them unborrowed
        for (on_tick, value) in &due {
            on_tick(*value);
        }
        log::trace!("Animation tick: {} updated, {} pending", due.len(), self.entry_count());
        due.len()
    }

    fn entry_count(&self) -> usize {
        self.entries.borrow().len()
    }

    fn shutdown(&self) {
        log::info!(
            "Animation manager shutdown: clearing {} entries",
            self.entries.borrow().len()
        );
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_slider_core::{AnimatedBound, Easing};
    use std::time::Duration;
    use uuid::Uuid;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, Box<dyn Fn(f64)>) {
        let values = Rc::new(RefCell::new(Vec::new()));
        let values_clone = values.clone();
        (values, Box::new(move |v| values_clone.borrow_mut().push(v)))
    }

    #[test]
    fn test_tick_runs_to_end_and_drops_entry() {
        let manager = AnimationManager::new();
        let start = Instant::now();
        let key = AnimationKey::new(Uuid::new_v4(), AnimatedBound::Minimum);
        let animation =
            PropertyAnimation::new(0.0, 100.0, Duration::from_millis(200), Easing::Linear);
        let (values, on_tick) = recorder();
        manager.insert(key, animation, on_tick, start);

        assert_eq!(manager.tick(start + Duration::from_millis(100)), 1);
        assert_eq!(manager.entry_count(), 1);
        assert_eq!(manager.tick(start + Duration::from_millis(250)), 1);
        assert_eq!(manager.entry_count(), 0);
        assert_eq!(*values.borrow(), vec![50.0, 100.0]);
    }

    #[test]
    fn test_rescheduling_a_key_replaces_it() {
        let manager = AnimationManager::new();
        let start = Instant::now();
        let owner = Uuid::new_v4();
        let animation =
            PropertyAnimation::new(0.0, 10.0, Duration::from_millis(200), Easing::Linear);
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();

        manager.insert(AnimationKey::new(owner, AnimatedBound::Maximum), animation, on_first, start);
        manager.insert(AnimationKey::new(owner, AnimatedBound::Maximum), animation, on_second, start);
        manager.insert(AnimationKey::new(owner, AnimatedBound::Minimum), animation, Box::new(|_| {}), start);
        assert_eq!(manager.entry_count(), 2);

        manager.tick(start + Duration::from_secs(1));
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![10.0]);
    }
}
