//! Progress and completion state shared with the loading thread.
//!
//! The loading thread is the only writer of both fields and the frame loop
//! only reads them, so plain atomics are enough; no lock is taken on either
//! side. Writes use `Release` and reads use `Acquire` so that a completion
//! flag observed as set is always accompanied by the final progress value.
//!
//! The coordinator hands every load a fresh instance, so a finished thread
//! that is still exiting can never write into the next load's state.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Upper bound of the progress scale.
pub const PROGRESS_MAX: u8 = 100;

/// Progress value and completion flag for one coordinator instance.
#[derive(Debug, Default)]
pub struct SharedProgress {
    /// Percentage complete, 0..=100
    progress: AtomicU8,
    /// Set exactly once by the loading thread when its work is done
    loaded: AtomicBool,
}

impl SharedProgress {
    /// Creates a new shared state with progress 0 and the flag cleared.
    pub fn new() -> Self {
        Self {
            progress: AtomicU8::new(0),
            loaded: AtomicBool::new(false),
        }
    }

    /// Current progress percentage.
    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Acquire)
    }

    /// Returns true once the loading thread has finished.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }
}

/// Write handle given to a [`LoadJob`](crate::LoadJob).
///
/// Cloning is cheap; all clones point at the same shared state.
#[derive(Debug, Clone)]
pub struct ProgressSink {
    shared: Arc<SharedProgress>,
}

impl ProgressSink {
    pub(crate) fn new(shared: Arc<SharedProgress>) -> Self {
        Self { shared }
    }

    /// Publishes a new progress value.
    ///
    /// Values above 100 are clamped. A value lower than the one already
    /// published is ignored, so progress never moves backwards.
    pub fn report(&self, percent: u8) {
        self.shared
            .progress
            .fetch_max(percent.min(PROGRESS_MAX), Ordering::Release);
    }

    /// Marks the work as finished: progress goes to 100, then the flag is set.
    ///
    /// Calling this more than once has no further effect.
    pub fn finish(&self) {
        self.report(PROGRESS_MAX);
        let was_loaded = self.shared.loaded.swap(true, Ordering::Release);
        debug_assert!(!was_loaded, "load job finished twice");
    }

    /// Last published progress value.
    pub fn current(&self) -> u8 {
        self.shared.progress()
    }
}
