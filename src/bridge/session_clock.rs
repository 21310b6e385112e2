//! Session clock - wall-clock elapsed-time display
//!
//! Runs independently of the rep counter. JavaScript drives the tick
//! (a 1 s interval) and only asks for the formatted label; start, stop
//! and reset mirror the session control buttons.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// Clock state in milliseconds of wall time
#[derive(Default)]
struct ClockState {
    /// `Date.now()` at the last start, `None` while paused
    started_at: Option<f64>,
    /// Elapsed time accumulated across previous start/stop spans
    accumulated_ms: f64,
}

impl ClockState {
    fn elapsed_ms(&self, now: f64) -> f64 {
        match self.started_at {
            Some(t) => self.accumulated_ms + (now - t).max(0.0),
            None => self.accumulated_ms,
        }
    }
}

thread_local! {
    static CLOCK: RefCell<ClockState> = RefCell::new(ClockState::default());
}

/// Format elapsed milliseconds as zero-padded "MM:SS"
fn format_mm_ss(elapsed_ms: f64) -> String {
    let total_secs = (elapsed_ms / 1000.0).floor() as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Start (or resume) the session clock
#[wasm_bindgen]
pub fn start_session_clock() {
    let now = js_sys::Date::now();
    CLOCK.with(|clock_cell| {
        let mut clock = clock_cell.borrow_mut();
        if clock.started_at.is_none() {
            clock.started_at = Some(now);
        }
    });
}

/// Pause the session clock, keeping elapsed time
#[wasm_bindgen]
pub fn stop_session_clock() {
    let now = js_sys::Date::now();
    CLOCK.with(|clock_cell| {
        let mut clock = clock_cell.borrow_mut();
        if let Some(started) = clock.started_at.take() {
            clock.accumulated_ms += (now - started).max(0.0);
        }
    });
}

/// Reset the session clock to 00:00
#[wasm_bindgen]
pub fn reset_session_clock() {
    CLOCK.with(|clock_cell| {
        *clock_cell.borrow_mut() = ClockState::default();
    });
}

/// Elapsed session time as "MM:SS" for the display
#[wasm_bindgen]
pub fn session_elapsed_label() -> String {
    let now = js_sys::Date::now();
    CLOCK.with(|clock_cell| format_mm_ss(clock_cell.borrow().elapsed_ms(now)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0.0), "00:00");
        assert_eq!(format_mm_ss(999.0), "00:00");
        assert_eq!(format_mm_ss(1000.0), "00:01");
        assert_eq!(format_mm_ss(61_500.0), "01:01");
        assert_eq!(format_mm_ss(600_000.0), "10:00");
    }

    #[test]
    fn test_elapsed_accumulates_across_spans() {
        let mut clock = ClockState::default();

        clock.started_at = Some(1_000.0);
        assert_eq!(clock.elapsed_ms(4_000.0), 3_000.0);

        // Pause at t=4000, resume at t=10000
        clock.accumulated_ms = 3_000.0;
        clock.started_at = None;
        assert_eq!(clock.elapsed_ms(9_000.0), 3_000.0);

        clock.started_at = Some(10_000.0);
        assert_eq!(clock.elapsed_ms(12_000.0), 5_000.0);
    }
}
