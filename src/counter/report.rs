//! Frame report - per-frame output for the display sink

use super::posture::PostureWarning;
use super::state::Phase;

/// Everything the display needs for one frame
///
/// Recomputed every frame the pose is visible; the bridge keeps the last
/// one so missing-pose frames leave the display unchanged.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    /// Left elbow angle in degrees, `None` if unreliable this frame
    pub left_angle: Option<u32>,
    /// Right elbow angle in degrees, `None` if unreliable this frame
    pub right_angle: Option<u32>,
    /// Active posture warnings (empty = correct form)
    pub warnings: Vec<PostureWarning>,
    /// Correct reps as a percentage of total reps
    pub accuracy_percent: u32,
    /// Phase after this frame's update
    pub phase: Phase,
    /// Total completed reps
    pub rep_count: u32,
    /// Reps counted as correct
    pub correct_rep_count: u32,
}

impl FrameReport {
    /// Warning labels joined for a one-line display, e.g.
    /// "Uneven Shoulders | Sagging Hips / Bent Back"
    pub fn warning_text(&self) -> String {
        self.warnings
            .iter()
            .map(|w| w.label())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// True when no posture warning is active
    pub fn posture_ok(&self) -> bool {
        self.warnings.is_empty()
    }
}
