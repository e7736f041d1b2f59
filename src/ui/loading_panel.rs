//! Loading thread screen.
//!
//! Draws the progress bar for the background load and reports the confirm
//! key back to the caller.

use eframe::egui;
use egui::{pos2, vec2, Align2, FontId, Rect, Stroke, StrokeKind};
use rloader::{LoadState, Snapshot};

use crate::ui::palette;

/// Top-left corner of the progress bar, relative to the canvas
const BAR_ORIGIN: egui::Vec2 = vec2(150.0, 200.0);
/// Full size of the progress bar
const BAR_SIZE: egui::Vec2 = vec2(500.0, 60.0);
/// Bar width per progress percent
const BAR_PIXELS_PER_PERCENT: f32 = BAR_SIZE.x / 100.0;

/// Result of user interaction with the loading screen
pub enum LoadingPanelInteraction {
    /// ENTER was pressed
    ConfirmPressed,
}

/// Width in points of the filled part of the bar.
pub fn bar_fill_width(progress: u8) -> f32 {
    f32::from(progress.min(100)) * BAR_PIXELS_PER_PERCENT
}

/// Renders the loading screen for the given snapshot.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `snapshot` - Coordinator state for this frame
/// * `blink_period` - Frames per half-period of the "loading" text
pub fn render_loading_panel(
    ui: &mut egui::Ui,
    snapshot: Snapshot,
    blink_period: u32,
) -> Option<LoadingPanelInteraction> {
    let canvas = ui.available_rect_before_wrap();
    let painter = ui.painter();
    let origin = canvas.min;

    painter.rect_filled(canvas, 0.0, palette::RAYWHITE);

    let bar_rect = Rect::from_min_size(origin + BAR_ORIGIN, BAR_SIZE);

    match snapshot.state {
        LoadState::Waiting => {
            painter.text(
                origin + vec2(150.0, 170.0),
                Align2::LEFT_TOP,
                "PRESS ENTER to START LOADING DATA",
                FontId::proportional(20.0),
                palette::DARKGRAY,
            );
        }
        LoadState::Loading => {
            let fill = Rect::from_min_size(bar_rect.min, vec2(bar_fill_width(snapshot.progress), BAR_SIZE.y));
            painter.rect_filled(fill, 0.0, palette::SKYBLUE);

            if snapshot.blink_visible(blink_period) {
                painter.text(
                    pos2(origin.x + 240.0, origin.y + 210.0),
                    Align2::LEFT_TOP,
                    "LOADING DATA...",
                    FontId::proportional(40.0),
                    palette::DARKBLUE,
                );
            }
        }
        LoadState::Finished => {
            painter.rect_filled(bar_rect, 0.0, palette::LIME);
            painter.text(
                pos2(origin.x + 250.0, origin.y + 210.0),
                Align2::LEFT_TOP,
                "DATA LOADED!",
                FontId::proportional(40.0),
                palette::GREEN,
            );
        }
    }

    painter.rect_stroke(bar_rect, 0.0, Stroke::new(1.0, palette::DARKGRAY), StrokeKind::Inside);

    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        Some(LoadingPanelInteraction::ConfirmPressed)
    } else {
        None
    }
}
