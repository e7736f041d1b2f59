//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the demo viewer:
//! - Header panel (demo selector, key hints)
//! - Loading panel (progress bar for the background load)
//! - Scissor panel (clip rectangle following the mouse)
//! - Status bar (loader and scissor state, errors)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod loading_panel;
pub mod scissor_panel;
pub mod status_bar;
pub mod palette;
pub mod panel_manager;
