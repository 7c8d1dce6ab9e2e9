//! Periodic tick background task

use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Background task that calls `on_tick` once per elapsed `period`.
///
/// The first tick fires one full period after the task starts. The task ends
/// as soon as `on_tick` returns `false`, which is how a superseded ticker
/// retires itself.
pub async fn ticker_task<F>(period: Duration, mut on_tick: F)
where
    F: FnMut() -> bool + Send + 'static,
{
    debug!("Starting ticker with period {:?}", period);

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

    loop {
        interval.tick().await;

        if !on_tick() {
            debug!("Ticker superseded, stopping");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let handle = tokio::spawn(ticker_task(Duration::from_secs(1), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            true
        }));

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2_200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_callback_declines() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let handle = tokio::spawn(ticker_task(Duration::from_secs(1), move || {
            seen.fetch_add(1, Ordering::SeqCst) < 1
        }));

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(handle.is_finished());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
