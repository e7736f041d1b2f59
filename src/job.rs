//! The default loading job: a fixed-length timer.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::LoaderConfig;
use crate::progress::{ProgressSink, PROGRESS_MAX};
use crate::traits::LoadJob;

/// Shortest sleep between two progress updates
const MIN_UPDATE_INTERVAL: Duration = Duration::from_millis(1);

/// Simulates loading by waiting out a fixed duration.
///
/// Progress is a linear function of elapsed time. The thread sleeps between
/// updates rather than spinning on the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedLoad {
    duration: Duration,
    update_interval: Duration,
}

impl SimulatedLoad {
    /// Creates a job; `update_interval` is raised to at least one millisecond.
    pub fn new(duration: Duration, update_interval: Duration) -> Self {
        Self {
            duration,
            update_interval: update_interval.max(MIN_UPDATE_INTERVAL),
        }
    }

    /// Builds the job described by `config`.
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.duration(), config.update_interval())
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Progress reached after `elapsed`, as a percentage of the duration.
    pub fn progress_at(&self, elapsed: Duration) -> u8 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return PROGRESS_MAX;
        }
        let percent = elapsed.as_nanos() * u128::from(PROGRESS_MAX) / self.duration.as_nanos();
        percent as u8
    }
}

impl Default for SimulatedLoad {
    fn default() -> Self {
        Self::from_config(&LoaderConfig::default())
    }
}

impl LoadJob for SimulatedLoad {
    fn run(&self, sink: &ProgressSink) {
        let start = Instant::now();

        loop {
            let elapsed = start.elapsed();
            if elapsed >= self.duration {
                break;
            }
            sink.report(self.progress_at(elapsed));

            // Never oversleep the deadline by more than one interval
            let remaining = self.duration - elapsed;
            thread::sleep(self.update_interval.min(remaining));
        }

        sink.finish();
    }
}
