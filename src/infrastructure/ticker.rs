//! Repeating tick signal with scoped release

use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// A spawned task emitting one tick per interval.
///
/// The task is aborted when the `Ticker` is dropped, so holding one is the
/// same as holding the subscription. Must be acquired inside a tokio runtime.
pub struct Ticker {
    receiver: mpsc::UnboundedReceiver<()>,
    handle: JoinHandle<()>,
    interval: Duration,
}

impl Ticker {
    /// Start emitting ticks every `interval`, the first one `interval` from now
    pub fn acquire(interval: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + interval, interval);
            loop {
                ticks.tick().await;
                if sender.send(()).is_err() {
                    break;
                }
            }
        });

        debug!("Ticker acquired ({:?})", interval);
        Ticker {
            receiver,
            handle,
            interval,
        }
    }

    /// Wait for the next tick. Returns `false` if the signal has stopped.
    pub async fn tick(&mut self) -> bool {
        self.receiver.recv().await.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Ticker released");
    }
}
