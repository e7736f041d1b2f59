//! Scissor test screen.
//!
//! A full-canvas red rectangle and a line of text are drawn through a
//! painter clipped to the scissor area, so only the part under the area is
//! visible.

use eframe::egui;
use egui::{vec2, Align2, FontId, Stroke, StrokeKind};

use crate::app::AppState;
use crate::ui::palette;

/// Result of user interaction with the scissor screen
pub enum ScissorPanelInteraction {
    /// S was pressed
    TogglePressed,
}

/// Renders the scissor screen.
///
/// The pointer position is applied to the scissor area by the caller before
/// this runs, so the clip follows the mouse on the same frame.
pub fn render_scissor_panel(ui: &mut egui::Ui, state: &AppState) -> Option<ScissorPanelInteraction> {
    let canvas = ui.available_rect_before_wrap();
    let origin = canvas.min;
    let area = state.scissor.area();

    ui.painter().rect_filled(canvas, 0.0, palette::RAYWHITE);

    // with_clip_rect intersects with the panel clip, so drawing never leaks
    // outside the canvas either way
    let clipped = ui.painter().with_clip_rect(state.scissor.clip_rect(canvas));
    clipped.rect_filled(canvas, 0.0, palette::RED);
    clipped.text(
        origin + vec2(190.0, 200.0),
        Align2::LEFT_TOP,
        "Move the mouse around to reveal this text!",
        FontId::proportional(20.0),
        palette::LIGHTGRAY,
    );

    let painter = ui.painter();
    painter.rect_stroke(area, 0.0, Stroke::new(1.0, palette::BLACK), StrokeKind::Inside);
    painter.text(
        origin + vec2(10.0, 10.0),
        Align2::LEFT_TOP,
        "Press S to toggle scissor test",
        FontId::proportional(20.0),
        palette::BLACK,
    );

    if ui.input(|i| i.key_pressed(egui::Key::S)) {
        Some(ScissorPanelInteraction::TogglePressed)
    } else {
        None
    }
}
