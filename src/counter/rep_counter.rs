//! Push-up rep counting state machine
//!
//! Drives the UP/DOWN phase from the average elbow angle and counts one
//! rep per completed UP→DOWN→UP cycle. The gap between the two
//! thresholds is a hysteresis band that stops the phase chattering when
//! the arms hover near a boundary.

use super::angles::joint_angle;
use super::posture::evaluate_posture;
use super::report::FrameReport;
use super::snapshot::PoseSnapshot;
use super::state::{Phase, RepState};

/// Average elbow angle below this while UP enters the DOWN phase
pub const DOWN_THRESHOLD: f32 = 90.0;

/// Average elbow angle above this while DOWN completes the rep
pub const UP_THRESHOLD: f32 = 160.0;

/// Process one frame of pose data
///
/// Computes both elbow angles, advances the phase machine, and returns
/// the report for the display sink. Phase logic only runs when both
/// angles are valid; a degenerate angle on either side leaves `state`
/// untouched for the frame. Posture warnings never gate the correct-rep
/// count; every completed cycle increments both counters.
pub fn update(snapshot: &PoseSnapshot, state: &mut RepState) -> FrameReport {
    let left_angle = joint_angle(
        snapshot.left_shoulder,
        snapshot.left_elbow,
        snapshot.left_wrist,
    );
    let right_angle = joint_angle(
        snapshot.right_shoulder,
        snapshot.right_elbow,
        snapshot.right_wrist,
    );

    // Both angles must be valid to drive a transition
    if let (Some(left), Some(right)) = (left_angle, right_angle) {
        let avg_angle = (left + right) as f32 / 2.0;

        if avg_angle < DOWN_THRESHOLD && state.phase == Phase::Up {
            state.phase = Phase::Down;
        } else if avg_angle > UP_THRESHOLD && state.phase == Phase::Down {
            state.phase = Phase::Up;
            state.rep_count += 1;
            state.correct_rep_count += 1;
        }
        // Angles inside [90, 160] change nothing
    }

    FrameReport {
        left_angle,
        right_angle,
        warnings: evaluate_posture(snapshot),
        accuracy_percent: state.accuracy_percent(),
        phase: state.phase,
        rep_count: state.rep_count,
        correct_rep_count: state.correct_rep_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::posture::PostureWarning;

    /// Snapshot whose elbow angles both read `angle` degrees, with level
    /// shoulders and hips close to the shoulder line (no warnings)
    fn snapshot_with_angle(angle: f32) -> PoseSnapshot {
        // Place the wrist on a circle around the elbow so the
        // shoulder-elbow-wrist angle equals `angle`
        let rad = angle.to_radians();
        let arm = |shoulder_x: f32| {
            let elbow = (shoulder_x, 0.5);
            let shoulder = (shoulder_x - 0.2, 0.5);
            let wrist = (
                shoulder_x + 0.2 * (std::f32::consts::PI - rad).cos(),
                0.5 + 0.2 * (std::f32::consts::PI - rad).sin(),
            );
            (shoulder, elbow, wrist)
        };

        let (left_shoulder, left_elbow, left_wrist) = arm(0.35);
        let (right_shoulder, right_elbow, right_wrist) = arm(0.75);

        PoseSnapshot {
            left_shoulder,
            right_shoulder,
            left_elbow,
            right_elbow,
            left_wrist,
            right_wrist,
            left_hip: (0.35, 0.55),
            right_hip: (0.75, 0.55),
        }
    }

    #[test]
    fn test_snapshot_helper_produces_requested_angle() {
        let report = update(&snapshot_with_angle(120.0), &mut RepState::new());
        assert_eq!(report.left_angle, Some(120));
        assert_eq!(report.right_angle, Some(120));
    }

    #[test]
    fn test_full_cycle_counts_one_rep() {
        let mut state = RepState::new();

        let report = update(&snapshot_with_angle(80.0), &mut state);
        assert_eq!(report.phase, Phase::Down);
        assert_eq!(report.rep_count, 0);

        let report = update(&snapshot_with_angle(170.0), &mut state);
        assert_eq!(report.phase, Phase::Up);
        assert_eq!(report.rep_count, 1);
        assert_eq!(report.correct_rep_count, 1);
        assert_eq!(report.accuracy_percent, 100);
    }

    #[test]
    fn test_mid_band_angles_are_inert() {
        let mut state = RepState::new();

        for _ in 0..10 {
            let report = update(&snapshot_with_angle(120.0), &mut state);
            assert_eq!(report.phase, Phase::Up);
            assert_eq!(report.rep_count, 0);
        }
    }

    #[test]
    fn test_no_double_count_without_descent() {
        let mut state = RepState::new();

        update(&snapshot_with_angle(80.0), &mut state);
        update(&snapshot_with_angle(170.0), &mut state);
        // Staying extended must not count again
        update(&snapshot_with_angle(175.0), &mut state);
        let report = update(&snapshot_with_angle(170.0), &mut state);

        assert_eq!(report.rep_count, 1);
    }

    #[test]
    fn test_multiple_cycles() {
        let mut state = RepState::new();

        for _ in 0..3 {
            update(&snapshot_with_angle(80.0), &mut state);
            update(&snapshot_with_angle(170.0), &mut state);
        }

        assert_eq!(state.rep_count, 3);
        assert_eq!(state.correct_rep_count, 3);
    }

    #[test]
    fn test_degenerate_angle_skips_phase_logic() {
        let mut state = RepState::new();

        // Collapse the left arm onto a single point: no left angle
        let mut snapshot = snapshot_with_angle(80.0);
        snapshot.left_shoulder = snapshot.left_elbow;

        let report = update(&snapshot, &mut state);
        assert_eq!(report.left_angle, None);
        assert!(report.right_angle.is_some());
        // Right angle alone must not drive the transition
        assert_eq!(report.phase, Phase::Up);
        assert_eq!(state.rep_count, 0);
    }

    #[test]
    fn test_warnings_do_not_gate_correct_count() {
        let mut state = RepState::new();

        // Sagging hips throughout the whole cycle
        let mut down = snapshot_with_angle(80.0);
        down.left_hip.1 = down.left_shoulder.1 + 0.4;
        let mut up = snapshot_with_angle(170.0);
        up.left_hip.1 = up.left_shoulder.1 + 0.4;

        update(&down, &mut state);
        let report = update(&up, &mut state);

        assert!(report.warnings.contains(&PostureWarning::SaggingHips));
        assert_eq!(report.rep_count, 1);
        assert_eq!(report.correct_rep_count, 1);
        assert_eq!(report.accuracy_percent, 100);
    }

    #[test]
    fn test_reset_restores_baseline() {
        let mut state = RepState::new();
        update(&snapshot_with_angle(80.0), &mut state);
        update(&snapshot_with_angle(170.0), &mut state);

        state.reset();
        let report = update(&snapshot_with_angle(120.0), &mut state);
        assert_eq!(report.rep_count, 0);
        assert_eq!(report.correct_rep_count, 0);
        assert_eq!(report.phase, Phase::Up);
        assert_eq!(report.accuracy_percent, 0);
    }
}
