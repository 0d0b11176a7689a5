//! Cancellable background timers
//!
//! Each task runs on its own thread and only sends "fired" messages over a
//! channel; the UI thread drains them on `Tick`. Cancelling or dropping the
//! handle wakes the thread immediately and stops it.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace};

/// Handle to a repeating timer thread
pub struct ScheduledTask {
    name: &'static str,
    /// Dropping this sender signals the thread to stop
    cancel: Option<Sender<()>>,
    receiver: Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Fire after `initial_delay`, then every `period`
    pub fn repeating(name: &'static str, initial_delay: Duration, period: Duration) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let (fire_tx, fire_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            Self::run(name, cancel_rx, fire_tx, initial_delay, period);
        });
        debug!(task = name, ?initial_delay, ?period, "scheduled task started");

        Self {
            name,
            cancel: Some(cancel_tx),
            receiver: fire_rx,
            handle: Some(handle),
        }
    }

    fn run(
        name: &'static str,
        cancel: Receiver<()>,
        fire: Sender<()>,
        initial_delay: Duration,
        period: Duration,
    ) {
        let mut wait = initial_delay;
        loop {
            match cancel.recv_timeout(wait) {
                Err(RecvTimeoutError::Timeout) => {}
                // Explicit cancel or handle dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
            if fire.send(()).is_err() {
                break;
            }
            trace!(task = name, "fired");
            wait = period;
        }
    }

    /// Number of firings since the last drain
    pub fn drain(&self) -> usize {
        let mut fired = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(()) => fired += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        fired
    }

    /// Stop the thread. Pending firings are discarded.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
            debug!(task = self.name, "scheduled task cancelled");
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        while self.receiver.try_recv().is_ok() {}
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
