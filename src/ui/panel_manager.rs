//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar and the active demo screen, and folds
//! their interactions into a single result for the app to apply.

use crate::app::{AppState, ApplicationCoordinator, DemoKind};
use crate::ui::{header, loading_panel, scissor_panel, status_bar};
use rloader::{AsyncLoadCoordinator, LoadJob, TaskSpawner};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User picked another demo in the header
    DemoSelected(DemoKind),
    /// Confirm key pressed on the loading screen
    ConfirmPressed,
    /// Toggle key pressed on the scissor screen
    ScissorTogglePressed,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation after the loader was ticked.
    pub fn render_all_panels<S: TaskSpawner, J: LoadJob>(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoadCoordinator<S, J>,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let snapshot = loader.snapshot();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::DemoSelected(demo)) = header::render_header(ui, state) {
                interaction = Some(PanelInteraction::DemoSelected(demo));
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, snapshot);
        });

        let canvas_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(canvas_frame)
            .show(ctx, |ui| match state.demo {
                DemoKind::LoadingThread => {
                    let blink_period = loader.config().blink_period();
                    if let Some(loading_panel::LoadingPanelInteraction::ConfirmPressed) =
                        loading_panel::render_loading_panel(ui, snapshot, blink_period)
                    {
                        interaction = Some(PanelInteraction::ConfirmPressed);
                    }
                }
                DemoKind::ScissorTest => {
                    ApplicationCoordinator::track_pointer(state, ctx.input(|i| i.pointer.hover_pos()));
                    if let Some(scissor_panel::ScissorPanelInteraction::TogglePressed) =
                        scissor_panel::render_scissor_panel(ui, state)
                    {
                        interaction = Some(PanelInteraction::ScissorTogglePressed);
                    }
                }
            });

        interaction
    }
}
