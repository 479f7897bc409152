//! Frame timestamps.

/// `performance.now()` in milliseconds, the clock `requestAnimationFrame`
/// passes to its callback. Falls back to 0 outside a window context.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}
