//! Pushup Web - push-up rep counting from MediaPipe Pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Re-exports of wasm_bindgen entry points in submodules
//!
//! Camera capture, pose estimation, and DOM rendering stay in
//! JavaScript; this module owns the per-frame counting logic.

mod bridge;
pub mod counter;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    // Landmark feed
    update_landmarks,
    clear_landmarks,
    pose_skeleton,
    // Per-frame counting
    process_frame,
    reset_session,
    // Display getters
    rep_count,
    correct_rep_count,
    accuracy_percent,
    phase_label,
    left_angle,
    right_angle,
    posture_ok,
    posture_warnings,
    // Session clock
    start_session_clock,
    stop_session_clock,
    reset_session_clock,
    session_elapsed_label,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log!("✅ Push-up counter ready");
}
