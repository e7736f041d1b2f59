//! Loader demo GUI application
//!
//! An egui window hosting two small demos:
//! - Loading thread: ENTER starts a simulated load on a background thread
//!   while a progress bar fills; ENTER again resets once it finishes
//! - Scissor test: a clip rectangle follows the mouse; S toggles clipping
//!
//! Usage: `rloader-gui [loading|scissor] [CONFIG.json]`
//!
//! The application is split into:
//! - `app/` - Application state, coordination and preference persistence
//! - `ui/` - Panel rendering and input handling

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use rloader::{init_logging, AsyncLoadCoordinator, LoaderConfig, LoggingConfig};
use std::time::Duration;

mod app;
mod ui;

use app::{AppState, ApplicationCoordinator, DemoKind, SettingsCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Repaint interval, roughly 60 frames per second
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Main application entry point that initializes and launches the demo window.
fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().collect();

    let initial_demo = match args.get(1) {
        Some(arg) => Some(
            DemoKind::from_arg(arg)
                .ok_or_else(|| anyhow::anyhow!("unknown demo '{}', expected 'loading' or 'scissor'", arg))?,
        ),
        None => None,
    };

    let config = match args.get(2) {
        Some(path) => LoaderConfig::from_file(path)?,
        None => LoaderConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 450.0])
            .with_title("rloader demos"),
        ..Default::default()
    };

    eframe::run_native(
        "rloader demos",
        options,
        Box::new(move |cc| Ok(Box::new(LoaderDemoApp::new(cc, initial_demo, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the demo window: {}", e))
}

/// The demo application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies interactions to state and loader
/// - `SettingsCoordinator` restores and persists preferences
/// - `PanelManager` handles UI panel layout and rendering
struct LoaderDemoApp {
    /// Centralized application state
    state: AppState,
    /// Background load coordinator
    loader: AsyncLoadCoordinator,
}

impl LoaderDemoApp {
    /// Creates the app with preferences loaded from persistent storage.
    /// A demo given on the command line overrides the stored one.
    fn new(cc: &eframe::CreationContext, initial_demo: Option<DemoKind>, config: LoaderConfig) -> Self {
        Self {
            state: SettingsCoordinator::load_app_state(cc.storage, initial_demo),
            loader: AsyncLoadCoordinator::with_config(config),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::DemoSelected(demo) => {
                ApplicationCoordinator::select_demo(&mut self.state, demo);
            }
            PanelInteraction::ConfirmPressed => {
                ApplicationCoordinator::confirm(&mut self.state, &mut self.loader);
            }
            PanelInteraction::ScissorTogglePressed => {
                ApplicationCoordinator::toggle_scissor(&mut self.state);
            }
        }
    }
}

impl eframe::App for LoaderDemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_app_state(storage, &self.state);
    }

    /// Per-frame update:
    /// 1. Advance the loader by one frame
    /// 2. Render all panels via PanelManager
    /// 3. Apply panel interactions
    /// 4. Schedule the next frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::tick(&mut self.loader);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction);
        }

        // The blink and the progress bar are frame driven, so keep frames coming
        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
