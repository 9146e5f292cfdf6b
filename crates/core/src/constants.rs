//! Shared constants for the widget models

use std::time::Duration;

/// Animation frame interval for smooth 60fps animations (16ms)
pub const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Duration of a floating slider's rescale animation
pub const RESCALE_DURATION: Duration = Duration::from_millis(200);

/// Fraction of the current range a floating slider grows or shrinks by
pub const RESCALE_FRACTION: f64 = 0.2;

/// Upper bound for a floating slider's edge padding
pub const MAX_RESCALE_PADDING: f64 = 0.2;

/// Default single-step increment for keyboard input
pub const DEFAULT_STEP_SIZE: i32 = 1;

/// Default page increment for keyboard input
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Horizontal gradient-editor padding as a fraction of the widget width
pub const GRADIENT_EDITOR_PADDING: f64 = 0.1;

/// Pointer distance (px) within which a press grabs a marker
pub const MARKER_HIT_TOLERANCE: f64 = 9.0;

/// Height (px) of the strip below the gradient reserved for marker rings
pub const MARKER_STRIP_HEIGHT: f64 = 12.0;
