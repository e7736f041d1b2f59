//! Application-level coordination.
//!
//! Translates panel interactions into coordinator calls and keeps the error
//! message in sync with their outcome.

use crate::app::{AppState, DemoKind};
use rloader::{AsyncLoadCoordinator, LoadJob, TaskSpawner};

/// Coordinates workflows between the GUI state and the load coordinator.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Advances the load coordinator by one frame.
    ///
    /// Called once per frame in the update loop, before any panel renders.
    pub fn tick<S: TaskSpawner, J: LoadJob>(loader: &mut AsyncLoadCoordinator<S, J>) {
        loader.poll_tick();
    }

    /// Handles the confirm key on the loading screen.
    ///
    /// Starts a load when waiting and resets when finished. A failed spawn
    /// leaves the loader waiting and shows the error in the status bar.
    pub fn confirm<S: TaskSpawner, J: LoadJob>(
        state: &mut AppState,
        loader: &mut AsyncLoadCoordinator<S, J>,
    ) {
        match loader.handle_confirm() {
            Ok(()) => state.error_message = None,
            Err(e) => state.error_message = Some(format!("Error creating loading thread: {}", e)),
        }
    }

    /// Switches the central panel to another demo.
    pub fn select_demo(state: &mut AppState, demo: DemoKind) {
        state.select_demo(demo);
    }

    /// Toggles clipping on the scissor screen.
    pub fn toggle_scissor(state: &mut AppState) {
        state.scissor.toggle();
        log::debug!("scissor mode {}", if state.scissor.is_enabled() { "on" } else { "off" });
    }

    /// Keeps the clip area centred on the pointer.
    pub fn track_pointer(state: &mut AppState, pointer: Option<egui::Pos2>) {
        if let Some(pos) = pointer {
            state.scissor.center_on(pos);
        }
    }
}
