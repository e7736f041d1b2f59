//! Status bar UI rendering
//!
//! Shows the loader state, the scissor state and the last error.

use eframe::egui;
use egui::RichText;
use rloader::{LoadState, Snapshot};

use crate::app::{AppState, DemoKind};

/// Text describing the loader for the status bar.
pub fn loader_status_text(snapshot: Snapshot) -> String {
    match snapshot.state {
        LoadState::Loading => format!(
            "Loader: {} | Progress: {}% | Frames: {}",
            snapshot.state.label(),
            snapshot.progress,
            snapshot.frames_counter
        ),
        _ => format!("Loader: {} | Progress: {}%", snapshot.state.label(), snapshot.progress),
    }
}

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `snapshot` - Loader state for this frame
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, snapshot: Snapshot) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(loader_status_text(snapshot)).strong());

        if state.demo == DemoKind::ScissorTest {
            let area = state.scissor.area();
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!(
                "Scissor: {} | Area: {:.0},{:.0} {:.0}x{:.0}",
                if state.scissor.is_enabled() { "on" } else { "off" },
                area.min.x,
                area.min.y,
                area.width(),
                area.height()
            )).strong());
        }

        if let Some(error) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(error).strong().color(egui::Color32::RED));
        }
    });
}
