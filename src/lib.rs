//! Sample Timer - A reactive tenths-of-a-second timer
//!
//! This library provides a timer state-holder that counts ticks while running,
//! resets on demand and exposes its running flag, display text and reset
//! control visibility as continuously-updated drivers. An HTTP layer forwards
//! inputs to the timer and serves its outputs.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Driver, TimerOutputs, TimerSnapshot, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
