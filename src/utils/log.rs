//! Diagnostic console output.
//!
//! Writes to the browser console via `web_sys::console`. Off `wasm32` these
//! are no-ops so core logic can run under native unit tests.

/// Debug trace (`console.log`).
pub fn debug(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Recoverable anomaly (`console.warn`).
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Failure surfaced to the user (`console.error`).
pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
