//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `main_layout`: Main layout rendering (sidebar, transcript, composer)
//! - `modals`: Modal/overlay rendering
//!
//! Rendering is a pure projection of [`App`]: no state transition happens
//! while drawing.

pub mod colors;
pub mod main_layout;
pub mod modals;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    main_layout::render_main(frame, app, chunks[0]);
    main_layout::render_status_bar(frame, app, chunks[1]);

    if app.help_open {
        modals::render_help_overlay(frame, app);
    }
}
