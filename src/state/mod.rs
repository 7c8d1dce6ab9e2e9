//! State management module
//!
//! This module contains the timer core, its output drivers and the
//! application state that wraps it for the HTTP layer.

pub mod app_state;
pub mod driver;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use driver::{Driver, TimerOutputs};
pub use snapshot::TimerSnapshot;
pub use timer_state::{format_ticks, TimerState, DEFAULT_TICK_PERIOD};
