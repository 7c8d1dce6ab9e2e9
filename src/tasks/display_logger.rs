//! Display logger background task

use tracing::{debug, info};

use crate::state::TimerOutputs;

/// Background task that follows the timer outputs the way a view binding would,
/// logging every change. Ends once all drivers have closed.
pub async fn display_logger_task(outputs: TimerOutputs) {
    info!("Starting display logger task");

    let TimerOutputs {
        mut is_running,
        mut display_text,
        mut is_reset_hidden,
    } = outputs;

    loop {
        tokio::select! {
            Some(running) = is_running.changed() => {
                debug!("Running flag: {}", running);
            }
            Some(text) = display_text.changed() => {
                debug!("Display text: {}", text);
            }
            Some(hidden) = is_reset_hidden.changed() => {
                debug!("Reset hidden: {:?}", hidden);
            }
            else => {
                info!("Timer outputs closed, stopping display logger");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::TimerState;

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_timer_dropped() {
        let timer = TimerState::default();
        let handle = tokio::spawn(display_logger_task(timer.outputs()));

        timer.set_running(true);
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        timer.reset();
        drop(timer);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("display logger should stop")
            .expect("display logger should not panic");
    }
}
