//! Header panel UI rendering
//!
//! Handles the top bar with the demo selector and the key hints.

use eframe::egui;
use crate::app::{AppState, DemoKind};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a different demo
    DemoSelected(DemoKind),
}

/// Renders the application header with the demo selector
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        for demo in DemoKind::ALL {
            if ui.selectable_label(state.demo == demo, demo.title()).clicked() && state.demo != demo {
                interaction = Some(HeaderInteraction::DemoSelected(demo));
            }
        }

        ui.separator();

        let hint = match state.demo {
            DemoKind::LoadingThread => "ENTER: start / reset",
            DemoKind::ScissorTest => "S: toggle clipping",
        };
        ui.label(hint);
    });

    interaction
}
