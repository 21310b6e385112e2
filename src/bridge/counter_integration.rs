//! Counter integration - connects the rep counter with landmark data
//!
//! Owns the per-session `RepState` and the last `FrameReport`, and
//! exports both to JavaScript through small getter entry points. The
//! display (DOM) rendering itself runs in JavaScript.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::current_snapshot;
use crate::counter::{self, FrameReport, RepState};

/// Session-wide counter state
#[derive(Default)]
struct SessionState {
    rep_state: RepState,
    /// Report from the last frame a pose was visible
    last_report: FrameReport,
}

thread_local! {
    static SESSION: RefCell<SessionState> = RefCell::new(SessionState::default());
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Process the current landmark frame
///
/// Call once per frame after `update_landmarks` (or `clear_landmarks`).
/// When no pose is present the previous report and all counts are kept
/// as they are; detection dropouts never reset the session.
#[wasm_bindgen]
pub fn process_frame() {
    let Some(snapshot) = current_snapshot() else {
        return;
    };

    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        let report = counter::update(&snapshot, &mut session.rep_state);
        session.last_report = report;
    });
}

/// Reset the session: counts to zero, phase to UP, report to baseline
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|session_cell| {
        let mut session = session_cell.borrow_mut();
        session.rep_state.reset();
        session.last_report = FrameReport::default();
    });
}

// ============================================================================
// DISPLAY GETTERS
// ============================================================================

/// Total completed reps
#[wasm_bindgen]
pub fn rep_count() -> u32 {
    SESSION.with(|s| s.borrow().rep_state.rep_count)
}

/// Reps counted as correct form
#[wasm_bindgen]
pub fn correct_rep_count() -> u32 {
    SESSION.with(|s| s.borrow().rep_state.correct_rep_count)
}

/// Correct reps as a percentage of total, in [0, 100]
#[wasm_bindgen]
pub fn accuracy_percent() -> u32 {
    SESSION.with(|s| s.borrow().rep_state.accuracy_percent())
}

/// Current phase as display text ("Up" / "Down")
#[wasm_bindgen]
pub fn phase_label() -> String {
    SESSION.with(|s| s.borrow().rep_state.phase.label().to_string())
}

/// Left elbow angle in degrees, or -1 when unreliable this frame
#[wasm_bindgen]
pub fn left_angle() -> i32 {
    SESSION.with(|s| angle_or_invalid(s.borrow().last_report.left_angle))
}

/// Right elbow angle in degrees, or -1 when unreliable this frame
#[wasm_bindgen]
pub fn right_angle() -> i32 {
    SESSION.with(|s| angle_or_invalid(s.borrow().last_report.right_angle))
}

/// True when no posture warning is active
#[wasm_bindgen]
pub fn posture_ok() -> bool {
    SESSION.with(|s| s.borrow().last_report.posture_ok())
}

/// Active posture warnings joined with " | ", empty string for none
#[wasm_bindgen]
pub fn posture_warnings() -> String {
    SESSION.with(|s| s.borrow().last_report.warning_text())
}

fn angle_or_invalid(angle: Option<u32>) -> i32 {
    angle.map(|a| a as i32).unwrap_or(-1)
}
