//! Scissor (clip rectangle) state for the clipping demo.

use egui::{pos2, vec2, Pos2, Rect, Vec2};

/// Default side length of the clip area in points
pub const DEFAULT_SCISSOR_SIZE: f32 = 300.0;

/// A movable clip rectangle that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScissorState {
    area: Rect,
    enabled: bool,
}

impl Default for ScissorState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScissorState {
    /// A 300x300 area at the origin with clipping on.
    pub fn new() -> Self {
        Self::with_size(vec2(DEFAULT_SCISSOR_SIZE, DEFAULT_SCISSOR_SIZE))
    }

    pub fn with_size(size: Vec2) -> Self {
        Self {
            area: Rect::from_min_size(Pos2::ZERO, size),
            enabled: true,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flips clipping on or off.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Moves the area so that its centre sits on `pos`. Size is unchanged.
    pub fn center_on(&mut self, pos: Pos2) {
        let half = self.area.size() / 2.0;
        self.area = Rect::from_min_size(pos2(pos.x - half.x, pos.y - half.y), self.area.size());
    }

    /// Rectangle to clip drawing to: the area when enabled, `full` otherwise.
    pub fn clip_rect(&self, full: Rect) -> Rect {
        if self.enabled {
            self.area
        } else {
            full
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_area() {
        let s = ScissorState::new();
        assert!(s.is_enabled());
        assert_eq!(s.area().min, Pos2::ZERO);
        assert_eq!(s.area().size(), vec2(300.0, 300.0));
    }

    #[test]
    fn test_center_on_keeps_size() {
        let mut s = ScissorState::new();
        s.center_on(pos2(400.0, 225.0));
        assert_eq!(s.area().center(), pos2(400.0, 225.0));
        assert_eq!(s.area().min, pos2(250.0, 75.0));
        assert_eq!(s.area().size(), vec2(300.0, 300.0));
    }

    #[test]
    fn test_center_on_allows_negative_origin() {
        let mut s = ScissorState::new();
        s.center_on(pos2(10.0, 20.0));
        assert_eq!(s.area().min, pos2(-140.0, -130.0));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut s = ScissorState::new();
        s.toggle();
        assert!(!s.is_enabled());
        s.toggle();
        assert_eq!(s, ScissorState::new());
    }

    #[test]
    fn test_clip_rect() {
        let full = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 450.0));
        let mut s = ScissorState::with_size(vec2(100.0, 50.0));
        assert_eq!(s.clip_rect(full), s.area());
        s.set_enabled(false);
        assert_eq!(s.clip_rect(full), full);
    }
}
