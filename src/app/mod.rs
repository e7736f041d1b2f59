//! Application-level modules for the demo viewer.
//!
//! This module contains the application coordinator, centralized state and
//! preference persistence.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::{AppState, DemoKind};
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
