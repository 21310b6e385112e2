//! Landmark storage and JS bridge
//!
//! Receives MediaPipe Pose landmarks from JavaScript and stores them
//! for the rep counter to read.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::counter::PoseSnapshot;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;

/// Total landmarks per MediaPipe Pose frame
pub const LANDMARK_COUNT: usize = 33;

/// Skeleton connections for the push-up view (pairs of landmark indices),
/// exported for the JS overlay
pub const POSE_SKELETON: [(usize, usize); 7] = [
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
];

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 3D landmark point (normalized coordinates)
#[derive(Clone, Copy, Default)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth (unused by the counter)
}

/// Internal storage for current frame's landmarks
struct LandmarkStore {
    landmarks: [Landmark; LANDMARK_COUNT],
    has_data: bool,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LANDMARK_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with flat Float32Array of 99 values
/// (33 landmarks × 3 coordinates: x, y, z)
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if data.len() != LANDMARK_COUNT * 3 {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                LANDMARK_COUNT * 3
            )
            .into(),
        );
        return;
    }

    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();

        for i in 0..LANDMARK_COUNT {
            store.landmarks[i] = Landmark {
                x: data[i * 3],
                y: data[i * 3 + 1],
                z: data[i * 3 + 2],
            };
        }
        store.has_data = true;
    });
}

/// Skeleton connections as a flat array of index pairs, for the JS
/// canvas overlay (each consecutive pair is one line segment)
#[wasm_bindgen]
pub fn pose_skeleton() -> Vec<u32> {
    POSE_SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}

/// Called from JavaScript when MediaPipe reports no pose this frame
///
/// Marks the store empty so `process_frame` skips the frame without
/// touching counts or the last report.
#[wasm_bindgen]
pub fn clear_landmarks() {
    LANDMARKS.with(|store_cell| {
        store_cell.borrow_mut().has_data = false;
    });
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Get all current landmarks
pub fn get_all_landmarks() -> Option<[Landmark; LANDMARK_COUNT]> {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.landmarks)
        } else {
            None
        }
    })
}

/// Build the counter's input from the current frame, if a pose is present
pub fn current_snapshot() -> Option<PoseSnapshot> {
    let lm = get_all_landmarks()?;
    let point = |i: usize| (lm[i].x, lm[i].y);

    Some(PoseSnapshot {
        left_shoulder: point(LEFT_SHOULDER),
        right_shoulder: point(RIGHT_SHOULDER),
        left_elbow: point(LEFT_ELBOW),
        right_elbow: point(RIGHT_ELBOW),
        left_wrist: point(LEFT_WRIST),
        right_wrist: point(RIGHT_WRIST),
        left_hip: point(LEFT_HIP),
        right_hip: point(RIGHT_HIP),
    })
}

/// Check if we have valid landmark data
#[allow(dead_code)]
pub fn has_landmarks() -> bool {
    LANDMARKS.with(|store_cell| store_cell.borrow().has_data)
}
