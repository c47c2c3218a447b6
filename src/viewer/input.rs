//! Wheel-delta classification.
//!
//! Pure decision logic: each wheel event is classified synchronously and
//! produces at most one redraw. Horizontal-dominant gestures and deltas that
//! cannot move the offset are handed back to the host so its default scroll
//! behavior proceeds.

/// Outcome of classifying one wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelAction {
    /// Do nothing and let the host's default action proceed.
    Ignore,
    /// Suppress the default action and scroll to the clamped offset.
    Scroll { scroll_y: f64 },
}

/// Classify a wheel delta against the current scroll state.
///
/// A gesture is horizontal when `|delta_x| > |delta_y|`; horizontal scroll
/// is out of scope and ignored entirely. Vertical deltas act only when they
/// can move the offset in-bounds: down-scroll below `max_scroll_y`, or
/// up-scroll above zero.
pub fn classify_wheel(
    delta_x: f64,
    delta_y: f64,
    scroll_y: f64,
    max_scroll_y: f64,
) -> WheelAction {
    let horizontal = delta_x.abs() > delta_y.abs();
    let can_move = (delta_y > 0.0 && scroll_y < max_scroll_y) || (delta_y < 0.0 && scroll_y > 0.0);
    if horizontal || !can_move {
        return WheelAction::Ignore;
    }
    WheelAction::Scroll {
        scroll_y: (scroll_y + delta_y).clamp(0.0, max_scroll_y),
    }
}
