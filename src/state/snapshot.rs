//! Point-in-time view of a timer

use serde::{Deserialize, Serialize};

/// Snapshot of every timer output at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Whether the timer is counting
    pub running: bool,
    /// Elapsed ticks formatted as tenths, e.g. "2.3"
    pub display_text: String,
    /// Reset control visibility; `None` before any input has been seen
    pub reset_hidden: Option<bool>,
    /// Raw tick count
    pub ticks: u64,
}

impl TimerSnapshot {
    /// Whether the reset control should currently be shown
    pub fn reset_visible(&self) -> bool {
        self.reset_hidden == Some(false)
    }
}
