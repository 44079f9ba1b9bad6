//! Shared gesture constants for touch handling on the list.
//!
//! Values are in logical pixels.

/// Vertical travel after which a pointer drag starts scrolling the list.
///
/// Matches common platform conventions (Android uses ~8dp for
/// `ViewConfiguration.TOUCH_SLOP`). The swipe recogniser ignores this value:
/// it judges the whole gesture at release, however short.
pub const DRAG_THRESHOLD: f32 = 8.0;
