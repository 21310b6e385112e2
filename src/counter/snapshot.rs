//! Pose snapshot - shared input structure for per-frame analysis
//!
//! One frame's worth of the landmarks the counter cares about, in
//! normalized coordinates. Built by the bridge from the full MediaPipe
//! frame so the analysis code never touches raw landmark arrays.

/// The body points needed for push-up analysis, as normalized `(x, y)`
#[derive(Clone, Copy, Debug, Default)]
pub struct PoseSnapshot {
    pub left_shoulder: (f32, f32),
    pub right_shoulder: (f32, f32),
    pub left_elbow: (f32, f32),
    pub right_elbow: (f32, f32),
    pub left_wrist: (f32, f32),
    pub right_wrist: (f32, f32),
    pub left_hip: (f32, f32),
    pub right_hip: (f32, f32),
}
