//! Error types for the load coordinator.

use std::io;
use thiserror::Error;

/// Errors reported by [`AsyncLoadCoordinator`](crate::AsyncLoadCoordinator).
///
/// Only starting a load can fail; polling, resetting and snapshotting are
/// total over every state.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The background loading thread could not be created.
    ///
    /// The coordinator stays in `Waiting`, so the caller may retry.
    #[error("failed to spawn loading thread")]
    TaskSpawnFailure {
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Returns true if this is a spawn failure.
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, LoadError::TaskSpawnFailure { .. })
    }
}
