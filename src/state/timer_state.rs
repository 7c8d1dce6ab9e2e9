//! Timer state: tick counter, running flag and derived outputs

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::{runtime::Handle, sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use super::{Driver, TimerOutputs, TimerSnapshot};
use crate::tasks::ticker_task;

/// Default length of one tick
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Format a tick count as tenths, e.g. 23 -> "2.3"
pub fn format_ticks(ticks: u64) -> String {
    format!("{}.{}", ticks / 10, ticks % 10)
}

/// Reactive timer that counts ticks while running.
///
/// Inputs are [`set_running`](Self::set_running) and [`reset`](Self::reset).
/// Every input is applied under a single lock and published to all outputs
/// before the call returns, so observers never see a half-applied input.
pub struct TimerState {
    inner: Arc<Inner>,
}

struct Inner {
    tick_period: Duration,
    core: Mutex<Core>,
    ticks_tx: watch::Sender<u64>,
    display_tx: watch::Sender<String>,
    running_tx: watch::Sender<bool>,
    reset_hidden_tx: watch::Sender<Option<bool>>,
}

/// Mutable state guarded by the core lock
struct Core {
    ticks: u64,
    running: bool,
    /// Bumped on every running input; ticks from older generations are dropped
    generation: u64,
    ticker: Option<JoinHandle<()>>,
}

impl TimerState {
    /// Create a stopped timer at zero ticking every `tick_period`
    pub fn new(tick_period: Duration) -> Self {
        let (ticks_tx, _) = watch::channel(0);
        let (display_tx, _) = watch::channel(format_ticks(0));
        let (running_tx, _) = watch::channel(false);
        let (reset_hidden_tx, _) = watch::channel(None);

        Self {
            inner: Arc::new(Inner {
                tick_period,
                core: Mutex::new(Core {
                    ticks: 0,
                    running: false,
                    generation: 0,
                    ticker: None,
                }),
                ticks_tx,
                display_tx,
                running_tx,
                reset_hidden_tx,
            }),
        }
    }

    /// Start or stop counting.
    ///
    /// Any running ticker is cancelled first. Starting spawns a fresh ticker
    /// whose first tick is one period away. Stopping re-publishes the current
    /// count so observers get a value without waiting for a tick.
    ///
    /// Ticks are produced on the current Tokio runtime. Outside a runtime the
    /// flag is still recorded but no ticker is spawned.
    pub fn set_running(&self, running: bool) {
        let inner = &self.inner;
        let mut core = inner.lock();

        core.generation = core.generation.wrapping_add(1);
        if let Some(ticker) = core.ticker.take() {
            ticker.abort();
        }
        core.running = running;

        inner.running_tx.send_replace(running);
        inner.reset_hidden_tx.send_replace(Some(false));

        if running {
            info!("Timer running from {}", format_ticks(core.ticks));
            let Ok(runtime) = Handle::try_current() else {
                warn!("No Tokio runtime available, timer will not tick");
                return;
            };
            let generation = core.generation;
            let weak = Arc::downgrade(inner);
            core.ticker = Some(runtime.spawn(ticker_task(inner.tick_period, move || {
                weak.upgrade()
                    .is_some_and(|inner| inner.apply_tick(generation))
            })));
        } else {
            info!("Timer paused at {}", format_ticks(core.ticks));
            inner.publish_ticks(core.ticks);
        }
    }

    /// Set the count back to zero without touching the running flag.
    pub fn reset(&self) {
        let inner = &self.inner;
        let mut core = inner.lock();

        core.ticks = 0;
        inner.publish_ticks(0);
        inner.reset_hidden_tx.send_replace(Some(true));

        info!("Timer reset (running={})", core.running);
    }

    /// Driver mirroring the latest running input
    pub fn is_running(&self) -> Driver<bool> {
        Driver::new(self.inner.running_tx.subscribe())
    }

    /// Driver for the formatted elapsed time
    pub fn display_text(&self) -> Driver<String> {
        Driver::new(self.inner.display_tx.subscribe())
    }

    /// Driver for the reset control's hidden flag.
    ///
    /// Starts at `None`: nothing is emitted for the initial state, only for
    /// running and reset inputs.
    pub fn is_reset_hidden(&self) -> Driver<Option<bool>> {
        Driver::new(self.inner.reset_hidden_tx.subscribe())
    }

    /// All three drivers at once
    pub fn outputs(&self) -> TimerOutputs {
        TimerOutputs {
            is_running: self.is_running(),
            display_text: self.display_text(),
            is_reset_hidden: self.is_reset_hidden(),
        }
    }

    /// Current raw tick count
    pub fn ticks(&self) -> u64 {
        *self.inner.ticks_tx.borrow()
    }

    /// Length of one tick
    pub fn tick_period(&self) -> Duration {
        self.inner.tick_period
    }

    /// Consistent view of all outputs
    pub fn snapshot(&self) -> TimerSnapshot {
        let core = self.inner.lock();
        TimerSnapshot {
            running: core.running,
            display_text: format_ticks(core.ticks),
            reset_hidden: *self.inner.reset_hidden_tx.borrow(),
            ticks: core.ticks,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

impl fmt::Debug for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.lock();
        f.debug_struct("TimerState")
            .field("ticks", &core.ticks)
            .field("running", &core.running)
            .field("tick_period", &self.inner.tick_period)
            .finish()
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Core> {
        // Core holds plain counters, so a poisoned lock is still consistent
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish_ticks(&self, ticks: u64) {
        self.ticks_tx.send_replace(ticks);
        self.display_tx.send_replace(format_ticks(ticks));
    }

    /// Apply one tick on behalf of ticker `generation`.
    /// Returns `false` when that ticker has been superseded.
    fn apply_tick(&self, generation: u64) -> bool {
        let mut core = self.lock();
        if core.generation != generation {
            return false;
        }

        core.ticks = core.ticks.saturating_add(1);
        self.publish_ticks(core.ticks);
        debug!("Tick {}", core.ticks);
        true
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let core = self.core.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(ticker) = core.ticker.take() {
            ticker.abort();
        }
    }
}
