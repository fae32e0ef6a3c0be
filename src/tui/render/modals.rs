//! Modal/overlay rendering

use crate::app::App;
use crate::config::ActionGroup;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::colors;

/// Render the help overlay listing all keybindings
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let mut lines: Vec<Line<'_>> = Vec::new();

    for group in [ActionGroup::Models, ActionGroup::Navigation, ActionGroup::Other] {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            group.title(),
            Style::default()
                .fg(colors::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        )));

        for action in crate::config::Action::ALL_FOR_HELP {
            if action.group() == group {
                lines.push(Line::from(Span::styled(
                    app.config.keys.help_line(*action),
                    Style::default().fg(colors::TEXT_PRIMARY),
                )));
            }
        }
    }

    lines.push(Line::raw(""));
    lines.push(
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(colors::TEXT_MUTED),
        ))
        .alignment(Alignment::Center),
    );

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(50, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(colors::MODAL_BG))
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::BORDER)),
            ),
        area,
    );
}

/// Center a `width` x `height` rect within `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 10);
        assert!(rect.x > 0 && rect.y > 0);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(50, 10, area);
        assert!(rect.width <= 20);
        assert!(rect.height <= 5);
    }
}
