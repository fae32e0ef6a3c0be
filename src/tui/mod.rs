//! Terminal User Interface for Botdeck

pub mod render;

use crate::app::{App, Event, Handler};
use crate::config::Action;
use anyhow::Result;
use ratatui::crossterm::{
    event::{KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, or event polling fails
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Tick => {
                app.poll_reply(Instant::now());
            }
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key.code, key.modifiers);
                }
            }
            Event::Mouse(_) | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle a key press: bound actions first, then composer editing.
///
/// The composer is always focused, so plain characters and line-editing
/// chords never go through the keybinding table.
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // The help overlay swallows the next key press
    if app.help_open {
        app.help_open = false;
        return;
    }

    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        dispatch_action(app, action);
        return;
    }

    match (code, modifiers) {
        (KeyCode::Enter, mods)
            if mods.contains(KeyModifiers::SHIFT) || mods.contains(KeyModifiers::ALT) =>
        {
            // Reserved for newline insertion; must never submit
            app.composer.insert_newline();
        }
        (KeyCode::Enter, _) => {
            app.submit_composer();
        }
        (KeyCode::Char('u'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.composer.clear();
        }
        (KeyCode::Char('w'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.composer.delete_word();
        }
        (KeyCode::Char(c), mods)
            if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::ALT) =>
        {
            app.composer.insert_char(c);
        }
        (KeyCode::Backspace, _) => app.composer.backspace(),
        (KeyCode::Delete, _) => app.composer.delete(),
        (KeyCode::Left, _) => app.composer.cursor_left(),
        (KeyCode::Right, _) => app.composer.cursor_right(),
        (KeyCode::Home, _) => app.composer.cursor_home(),
        (KeyCode::End, _) => app.composer.cursor_end(),
        _ => {}
    }
}

fn dispatch_action(app: &mut App, action: Action) {
    match action {
        Action::NextModel => app.select_next_model(),
        Action::PrevModel => app.select_prev_model(),
        Action::ToggleSidebar => app.toggle_sidebar(),
        Action::ScrollUp => app.ui.scroll_up(render::main_layout::SCROLL_STEP),
        Action::ScrollDown => app.ui.scroll_down(render::main_layout::SCROLL_STEP),
        Action::Help => app.toggle_help(),
        Action::Quit => app.quit(),
    }
}
