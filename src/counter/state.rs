//! Rep state - session counters and push-up phase

/// Push-up cycle phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Arms extended (top of the push-up)
    #[default]
    Up,
    /// Arms flexed (bottom of the push-up)
    Down,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Up => "Up",
            Phase::Down => "Down",
        }
    }
}

/// Mutable session state, updated once per frame
///
/// Counts only ever move via completed UP→DOWN→UP cycles or an explicit
/// [`reset`](RepState::reset).
#[derive(Clone, Copy, Debug, Default)]
pub struct RepState {
    /// Completed repetitions
    pub rep_count: u32,
    /// Repetitions counted as correct form
    pub correct_rep_count: u32,
    /// Current cycle phase
    pub phase: Phase,
}

impl RepState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accuracy as a whole percentage in [0, 100]
    ///
    /// `max(rep_count, 1)` keeps the zero-rep case at 0% instead of
    /// dividing by zero.
    pub fn accuracy_percent(&self) -> u32 {
        let reps = self.rep_count.max(1);
        ((100.0 * self.correct_rep_count as f32 / reps as f32).round()) as u32
    }

    /// Restore session-start state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
