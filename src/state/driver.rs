//! Continuously-updated output values for view bindings

use futures::stream::{self, Stream};
use tokio::sync::watch;

/// A value stream that always carries a current value and never surfaces an error.
///
/// Once the owning timer is gone the driver simply stops producing values;
/// the last observed value stays readable through [`Driver::get`].
#[derive(Debug, Clone)]
pub struct Driver<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Driver<T> {
    pub(crate) fn new(rx: watch::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for the next notification and return the value it carries.
    ///
    /// Every publish counts as a notification, including re-emission of an
    /// unchanged value. Returns `None` once the source has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl<T> Driver<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Turn the driver into a stream of future notifications.
    pub fn into_stream(self) -> impl Stream<Item = T> + Send + 'static {
        stream::unfold(self, |mut driver| async move {
            let value = driver.changed().await?;
            Some((value, driver))
        })
    }
}

/// The three outputs of a timer, bundled for binding.
#[derive(Debug, Clone)]
pub struct TimerOutputs {
    pub is_running: Driver<bool>,
    pub display_text: Driver<String>,
    /// `None` until the first running or reset notification
    pub is_reset_hidden: Driver<Option<bool>>,
}
