//! Background tasks module
//!
//! This module contains the tick source behind a running timer and the
//! display logger that follows the timer's outputs.

pub mod display_logger;
pub mod ticker;

// Re-export main functions
pub use display_logger::display_logger_task;
pub use ticker::ticker_task;
