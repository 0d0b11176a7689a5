//! Simulated "deal analysis" timer
//!
//! Wraps a [`ScheduledTask`] and stamps every tick with the activation
//! generation it was started for. Starting again replaces (and cancels) the
//! previous task.

use super::scheduler::ScheduledTask;
use std::time::Duration;
use tracing::debug;

/// Default analysis tick period
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(30);

pub struct AnalysisTimer {
    period: Duration,
    active: Option<(u64, ScheduledTask)>,
}

impl Default for AnalysisTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

impl AnalysisTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            active: None,
        }
    }

    /// Start ticking for `generation`, cancelling any previous activation
    pub fn start(&mut self, generation: u64) {
        self.stop();
        debug!(generation, period_ms = self.period.as_millis() as u64, "analysis timer started");
        let task = ScheduledTask::repeating("analysis", self.period, self.period);
        self.active = Some((generation, task));
    }

    /// Cancel the running activation, if any
    pub fn stop(&mut self) {
        if let Some((generation, mut task)) = self.active.take() {
            task.cancel();
            debug!(generation, "analysis timer stopped");
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Ticks fired since the last poll, each tagged with its generation
    pub fn poll(&self) -> Vec<u64> {
        match &self.active {
            Some((generation, task)) => vec![*generation; task.drain()],
            None => Vec::new(),
        }
    }
}
