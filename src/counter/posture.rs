//! Posture deviation checks
//!
//! Rule-based form checks over normalized landmark positions. Thresholds
//! are fixed constants in normalized-coordinate units; no calibration.

use super::snapshot::PoseSnapshot;

/// Shoulder y-difference above this flags uneven shoulders
pub const SHOULDER_LEVEL_TOLERANCE: f32 = 0.05;

/// Hip-to-shoulder y-difference above this flags a sagging hip line
pub const HIP_SAG_TOLERANCE: f32 = 0.25;

/// Posture deviation flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostureWarning {
    UnevenShoulders,
    SaggingHips,
}

impl PostureWarning {
    pub fn label(&self) -> &'static str {
        match self {
            PostureWarning::UnevenShoulders => "Uneven Shoulders",
            PostureWarning::SaggingHips => "Sagging Hips / Bent Back",
        }
    }
}

/// Return the set of warnings active for this frame
///
/// Both checks use a strict `>` comparison, so a deviation exactly at
/// the tolerance does not fire. Multiple warnings may be active at once;
/// order carries no meaning.
pub fn evaluate_posture(snapshot: &PoseSnapshot) -> Vec<PostureWarning> {
    let mut warnings = Vec::new();

    let shoulder_diff = (snapshot.left_shoulder.1 - snapshot.right_shoulder.1).abs();
    if shoulder_diff > SHOULDER_LEVEL_TOLERANCE {
        warnings.push(PostureWarning::UnevenShoulders);
    }

    let hip_diff = (snapshot.left_hip.1 - snapshot.left_shoulder.1).abs();
    if hip_diff > HIP_SAG_TOLERANCE {
        warnings.push(PostureWarning::SaggingHips);
    }

    warnings
}
