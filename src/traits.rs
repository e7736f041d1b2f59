use std::io;
use std::thread::{self, JoinHandle};

use crate::progress::ProgressSink;

/// A unit of work boxed for handing to a [`TaskSpawner`].
pub type BoxedWork = Box<dyn FnOnce() + Send + 'static>;

/// Trait for starting a background thread of control.
///
/// The coordinator only needs "spawn a unit of work and give me a handle to
/// join later"; implementations decide how the thread is created.
pub trait TaskSpawner {
    /// Starts `work` on a new thread named `name`.
    ///
    /// Returns an error instead of panicking when the thread cannot be
    /// created.
    fn spawn(&self, name: &str, work: BoxedWork) -> io::Result<JoinHandle<()>>;
}

/// Spawns plain OS threads through [`std::thread::Builder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl TaskSpawner for ThreadSpawner {
    fn spawn(&self, name: &str, work: BoxedWork) -> io::Result<JoinHandle<()>> {
        thread::Builder::new().name(name.to_string()).spawn(work)
    }
}

/// Trait for the work performed on the loading thread.
///
/// A job publishes its progress through the sink and must call
/// [`ProgressSink::finish`] exactly once before returning. It never touches
/// the coordinator's state.
pub trait LoadJob: Send + Sync + 'static {
    /// Runs the job to completion on the calling thread.
    fn run(&self, sink: &ProgressSink);
}

impl<F> LoadJob for F
where
    F: Fn(&ProgressSink) + Send + Sync + 'static,
{
    fn run(&self, sink: &ProgressSink) {
        self(sink)
    }
}
