pub mod traits;
pub mod progress;
pub mod job;
pub mod coordinator;
pub mod config;
pub mod error;
pub mod scissor;
pub mod logging;

// Export seams
pub use traits::{TaskSpawner, ThreadSpawner, LoadJob, BoxedWork};

// Export coordinator
pub use coordinator::{AsyncLoadCoordinator, LoadState, Snapshot};
pub use progress::{ProgressSink, SharedProgress, PROGRESS_MAX};
pub use job::SimulatedLoad;

// Export configuration and errors
pub use config::LoaderConfig;
pub use error::LoadError;

// Export scissor demo state
pub use scissor::ScissorState;

// Export logging setup
pub use logging::{init_logging, LoggingConfig};
