//! Counter module - push-up rep counting and form feedback
//!
//! Pure per-frame analysis over normalized landmark positions. No WASM
//! types here; the bridge feeds in a [`PoseSnapshot`] and carries the
//! [`FrameReport`] back out to JavaScript.

mod angles;
mod posture;
mod rep_counter;
mod report;
mod snapshot;
mod state;

pub use angles::joint_angle;
pub use posture::{evaluate_posture, PostureWarning, HIP_SAG_TOLERANCE, SHOULDER_LEVEL_TOLERANCE};
pub use rep_counter::{update, DOWN_THRESHOLD, UP_THRESHOLD};
pub use report::FrameReport;
pub use snapshot::PoseSnapshot;
pub use state::{Phase, RepState};
