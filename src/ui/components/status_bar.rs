//! Status bar widget

use crate::tui::render::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct Widget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug)]
enum StatusContent {
    /// Keybinding hints, optionally with a busy indicator
    Hints { hints: String, busy: bool },
    /// Transient status message
    Status(String),
}

impl Widget {
    /// Create a status bar showing keybinding hints
    #[must_use]
    pub const fn hints(hints: String, busy: bool) -> Self {
        Self {
            content: StatusContent::Hints { hints, busy },
        }
    }

    /// Create a status bar showing a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let spans = match &self.content {
            StatusContent::Status(msg) => vec![Span::styled(
                format!(" {msg} "),
                Style::default().fg(colors::STATUS_OK),
            )],
            StatusContent::Hints { hints, busy } => {
                let mut spans = vec![Span::styled(
                    format!(" {hints} "),
                    Style::default().fg(colors::TEXT_DIM),
                )];
                if *busy {
                    spans.push(Span::styled(
                        "generating...",
                        Style::default()
                            .fg(colors::STATUS_BUSY)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                spans
            }
        };

        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::SURFACE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_hints() {
        let widget = Widget::hints("[Ctrl+q]quit".to_string(), false);
        match widget.content {
            StatusContent::Hints { hints, busy } => {
                assert!(hints.contains("quit"));
                assert!(!busy);
            }
            StatusContent::Status(_) => unreachable!("expected hints content"),
        }
    }

    #[test]
    fn test_status_bar_message() {
        let widget = Widget::status("Using Grok AI");
        match widget.content {
            StatusContent::Status(msg) => assert_eq!(msg, "Using Grok AI"),
            StatusContent::Hints { .. } => unreachable!("expected status content"),
        }
    }
}
