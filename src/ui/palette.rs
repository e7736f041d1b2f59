//! Fixed colors used by the demo screens.

use egui::Color32;

pub const RAYWHITE: Color32 = Color32::from_rgb(245, 245, 245);
pub const LIGHTGRAY: Color32 = Color32::from_rgb(200, 200, 200);
pub const DARKGRAY: Color32 = Color32::from_rgb(80, 80, 80);
pub const RED: Color32 = Color32::from_rgb(230, 41, 55);
pub const GREEN: Color32 = Color32::from_rgb(0, 228, 48);
pub const LIME: Color32 = Color32::from_rgb(0, 158, 47);
pub const SKYBLUE: Color32 = Color32::from_rgb(102, 191, 255);
pub const DARKBLUE: Color32 = Color32::from_rgb(0, 82, 172);
pub const BLACK: Color32 = Color32::BLACK;
