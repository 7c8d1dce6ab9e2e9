//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{TimerSnapshot, TimerState};

/// Main application state that owns the timer and server metadata
#[derive(Debug)]
pub struct AppState {
    /// The timer driven by the API
    pub timer: TimerState,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with a stopped timer
    pub fn new(port: u16, host: String, tick_period: Duration) -> Self {
        Self {
            timer: TimerState::new(tick_period),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Record the action name and time for status reporting
    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Start or pause the timer
    pub fn set_running(&self, running: bool) -> TimerSnapshot {
        info!("Setting running state to: {}", running);
        self.record_action(if running { "start" } else { "pause" });
        self.timer.set_running(running);
        self.timer.snapshot()
    }

    /// Reset the timer count to zero
    pub fn reset(&self) -> TimerSnapshot {
        self.record_action("reset");
        self.timer.reset();
        self.timer.snapshot()
    }

    /// Current timer snapshot
    pub fn snapshot(&self) -> TimerSnapshot {
        self.timer.snapshot()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(3)), "3s");
        assert_eq!(format_uptime(Duration::from_secs(123)), "2m 3s");
        assert_eq!(format_uptime(Duration::from_secs(3723)), "1h 2m 3s");
    }

    #[tokio::test(start_paused = true)]
    async fn test_actions_are_recorded() {
        let state = AppState::new(20554, "127.0.0.1".to_string(), Duration::from_secs(1));
        assert_eq!(state.get_last_action(), (None, None));

        let snapshot = state.set_running(true);
        assert!(snapshot.running);
        assert_eq!(state.get_last_action().0.as_deref(), Some("start"));

        let snapshot = state.reset();
        assert_eq!(snapshot.display_text, "0.0");
        assert_eq!(snapshot.reset_hidden, Some(true));

        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("reset"));
        assert!(time.is_some());
    }
}
