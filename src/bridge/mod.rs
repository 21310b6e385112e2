//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod counter_integration;
mod landmarks;
mod session_clock;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    pose_skeleton,
    // Internal API
    get_all_landmarks,
    current_snapshot,
    has_landmarks,
    Landmark,
    // Constants
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LANDMARK_COUNT, POSE_SKELETON,
};

pub use counter_integration::{
    process_frame,
    reset_session,
    rep_count,
    correct_rep_count,
    accuracy_percent,
    phase_label,
    left_angle,
    right_angle,
    posture_ok,
    posture_warnings,
};

pub use session_clock::{
    start_session_clock,
    stop_session_clock,
    reset_session_clock,
    session_elapsed_label,
};
