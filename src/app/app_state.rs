//! Centralized GUI state.
//!
//! The load coordinator lives next to this state in the app struct rather
//! than inside it, so panels can borrow both at once.

use rloader::ScissorState;
use serde::{Deserialize, Serialize};

/// Which demo screen is shown in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DemoKind {
    /// Background loading thread with a progress bar
    #[default]
    LoadingThread,
    /// Clip rectangle following the mouse
    ScissorTest,
}

impl DemoKind {
    pub const ALL: [DemoKind; 2] = [DemoKind::LoadingThread, DemoKind::ScissorTest];

    /// Parses the command-line name of a demo.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "loading" | "loading-thread" => Some(DemoKind::LoadingThread),
            "scissor" | "scissor-test" => Some(DemoKind::ScissorTest),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::LoadingThread => "Loading thread",
            DemoKind::ScissorTest => "Scissor test",
        }
    }
}

/// GUI state shared by all panels.
pub struct AppState {
    /// Demo currently shown
    pub demo: DemoKind,

    /// Clip area for the scissor demo
    pub scissor: ScissorState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_demo(DemoKind::default())
    }

    pub fn with_demo(demo: DemoKind) -> Self {
        Self {
            demo,
            scissor: ScissorState::new(),
            error_message: None,
        }
    }

    /// Creates state restored from persisted preferences.
    pub fn with_preferences(demo: DemoKind, scissor_enabled: bool) -> Self {
        let mut state = Self::with_demo(demo);
        state.scissor.set_enabled(scissor_enabled);
        state
    }

    pub fn select_demo(&mut self, demo: DemoKind) {
        if self.demo != demo {
            self.demo = demo;
            self.error_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_from_arg() {
        assert_eq!(DemoKind::from_arg("loading"), Some(DemoKind::LoadingThread));
        assert_eq!(DemoKind::from_arg("scissor-test"), Some(DemoKind::ScissorTest));
        assert_eq!(DemoKind::from_arg("audio"), None);
    }

    #[test]
    fn test_select_demo_clears_error() {
        let mut state = AppState::new();
        state.error_message = Some("boom".to_string());
        state.select_demo(DemoKind::ScissorTest);
        assert_eq!(state.demo, DemoKind::ScissorTest);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_preferences_restore_scissor_flag() {
        let state = AppState::with_preferences(DemoKind::ScissorTest, false);
        assert!(!state.scissor.is_enabled());
    }
}
