//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TimerSnapshot;

/// Request body for POST /running
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunningRequest {
    pub running: bool,
}

/// API response structure for timer input endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Response for a running input; status follows the timer
    pub fn running(timer: TimerSnapshot) -> Self {
        if timer.running {
            Self::new("running".to_string(), "Timer started".to_string(), timer)
        } else {
            Self::new("paused".to_string(), "Timer paused".to_string(), timer)
        }
    }

    /// Response for a reset input
    pub fn reset(timer: TimerSnapshot) -> Self {
        Self::new("reset".to_string(), "Timer reset".to_string(), timer)
    }
}

/// Status response with the timer outputs and server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub display_text: String,
    pub reset_hidden: Option<bool>,
    pub ticks: u64,
    pub tick_period_ms: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
