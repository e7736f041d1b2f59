//! Background load coordination.
//!
//! [`AsyncLoadCoordinator`] runs a [`LoadJob`] on its own thread while a
//! per-frame loop keeps drawing. The frame loop calls
//! [`poll_tick`](AsyncLoadCoordinator::poll_tick) once per frame and renders
//! from [`snapshot`](AsyncLoadCoordinator::snapshot); it never blocks on the
//! loading thread.
//!
//! Field ownership is split across the two threads:
//! - the frame loop owns the [`LoadState`] and the frame counter
//! - the loading thread owns writes to progress and the completion flag
//!
//! The loading thread never changes the state. The frame loop sees the
//! completion flag and makes the `Loading -> Finished` transition itself.

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::job::SimulatedLoad;
use crate::progress::{ProgressSink, SharedProgress};
use crate::traits::{LoadJob, TaskSpawner, ThreadSpawner};

/// Coordinator state as seen by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadState {
    /// Idle, ready to start a load
    #[default]
    Waiting,
    /// The loading thread is running
    Loading,
    /// The loading thread reported completion
    Finished,
}

impl LoadState {
    pub fn label(self) -> &'static str {
        match self {
            LoadState::Waiting => "Waiting",
            LoadState::Loading => "Loading",
            LoadState::Finished => "Finished",
        }
    }
}

/// Read-only view of the coordinator for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub state: LoadState,
    /// Percentage complete, 0..=100
    pub progress: u8,
    /// Frames spent in `Loading` so far
    pub frames_counter: u32,
}

impl Snapshot {
    /// Whether blinking text is in its visible half for this frame.
    pub fn blink_visible(&self, period: u32) -> bool {
        (self.frames_counter / period.max(1)) % 2 == 1
    }
}

/// Starts a background load and tracks it from the frame loop.
///
/// The cycle `Waiting -> Loading -> Finished -> Waiting` can repeat any
/// number of times. Requests that don't apply to the current state are
/// ignored.
pub struct AsyncLoadCoordinator<S: TaskSpawner = ThreadSpawner, J: LoadJob = SimulatedLoad> {
    /// Current state, written only by the frame loop
    state: LoadState,

    /// Frames spent in `Loading`, drives the blink animation
    frames_counter: u32,

    /// Progress and completion flag shared with the loading thread
    shared: Arc<SharedProgress>,

    /// Work to run on each start
    job: Arc<J>,

    spawner: S,

    /// Handle of the most recent loading thread, joined on the next start
    handle: Option<JoinHandle<()>>,

    config: LoaderConfig,
}

impl AsyncLoadCoordinator {
    /// Creates a coordinator running the default simulated load.
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    /// Creates a coordinator whose simulated load follows `config`.
    pub fn with_config(config: LoaderConfig) -> Self {
        let job = SimulatedLoad::from_config(&config);
        Self::with_parts(config, ThreadSpawner, job)
    }
}

impl Default for AsyncLoadCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TaskSpawner, J: LoadJob> AsyncLoadCoordinator<S, J> {
    /// Creates a coordinator from an explicit spawner and job.
    pub fn with_parts(config: LoaderConfig, spawner: S, job: J) -> Self {
        Self {
            state: LoadState::Waiting,
            frames_counter: 0,
            shared: Arc::new(SharedProgress::new()),
            job: Arc::new(job),
            spawner,
            handle: None,
            config,
        }
    }

    /// Starts the loading thread.
    ///
    /// Only acts in `Waiting`; in any other state this returns `Ok(())`
    /// without touching the running thread. If the thread can't be created
    /// the state stays `Waiting` and the caller may try again.
    ///
    /// The previous loading thread is joined first, so two jobs never run
    /// at once. That thread has already published completion, so the join
    /// only waits out whatever it does after `finish()`.
    pub fn request_start(&mut self) -> Result<(), LoadError> {
        if self.state != LoadState::Waiting {
            return Ok(());
        }
        self.join_previous();

        let sink = ProgressSink::new(Arc::clone(&self.shared));
        let job = Arc::clone(&self.job);

        match self
            .spawner
            .spawn(&self.config.thread_name, Box::new(move || J::run(&job, &sink)))
        {
            Ok(handle) => {
                log::info!("Loading thread initialized successfully");
                self.handle = Some(handle);
                self.frames_counter = 0;
                self.transition(LoadState::Loading);
                Ok(())
            }
            Err(source) => {
                log::error!("Error creating loading thread: {}", source);
                Err(LoadError::TaskSpawnFailure { source })
            }
        }
    }

    /// Advances one frame.
    ///
    /// In `Loading` this bumps the frame counter and moves to `Finished`
    /// once the loading thread has set the completion flag. Other states
    /// are left alone.
    pub fn poll_tick(&mut self) {
        if self.state != LoadState::Loading {
            return;
        }

        self.frames_counter = self.frames_counter.wrapping_add(1);
        if self.shared.is_loaded() {
            self.frames_counter = 0;
            self.transition(LoadState::Finished);
        }
    }

    /// Returns to `Waiting` so another load can be started.
    ///
    /// Only acts in `Finished`, where it always succeeds: progress goes back
    /// to 0 and the completion flag is cleared. Returns `true` when the reset
    /// happened.
    ///
    /// The finished loading thread may still be exiting. It keeps its handle
    /// to the old shared state, so the fresh state seen from here can't be
    /// touched by it; its join happens on the next start.
    pub fn request_reset(&mut self) -> bool {
        if self.state != LoadState::Finished {
            return false;
        }

        self.shared = Arc::new(SharedProgress::new());
        self.frames_counter = 0;
        self.transition(LoadState::Waiting);
        true
    }

    /// Applies the "confirm" input: start when waiting, reset when finished.
    pub fn handle_confirm(&mut self) -> Result<(), LoadError> {
        match self.state {
            LoadState::Waiting => self.request_start(),
            LoadState::Loading => Ok(()),
            LoadState::Finished => {
                self.request_reset();
                Ok(())
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            progress: self.shared.progress(),
            frames_counter: self.frames_counter,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn progress(&self) -> u8 {
        self.shared.progress()
    }

    /// Completion flag as last published by the loading thread.
    pub fn is_loaded(&self) -> bool {
        self.shared.is_loaded()
    }

    pub fn frames_counter(&self) -> u32 {
        self.frames_counter
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn join_previous(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                log::debug!("waiting for previous loading thread to exit");
            }
            if handle.join().is_err() {
                log::error!("loading thread panicked");
            }
        }
    }

    fn transition(&mut self, next: LoadState) {
        log::debug!("load state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
