//! Main layout rendering: sidebar, header, transcript, composer, status bar

use crate::app::App;
use crate::conversation::Sender;
use crate::model::Model;
use crate::ui::components::{model_list, status_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::colors;

/// Sidebar width in columns when open
const SIDEBAR_WIDTH: u16 = 28;

/// Lines scrolled per page key press
pub const SCROLL_STEP: usize = 3;

/// Render the main area (sidebar, header, transcript, composer)
pub fn render_main(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let sidebar_width = if app.sidebar_open { SIDEBAR_WIDTH } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(area);

    if app.sidebar_open {
        render_sidebar(frame, app, chunks[0]);
    }
    render_content(frame, app, chunks[1]);
}

fn render_sidebar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let widget = model_list::Widget::new(app.selection.index());
    frame.render_widget(widget.to_list(), area);
}

fn render_content(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let composer_height = composer_height(&app.composer.buffer);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(composer_height),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_transcript(frame, app, chunks[1]);
    render_composer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let model = app.selection.current();
    let title = Line::from(vec![
        Span::styled(
            " Botdeck ",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· mocked chat dashboard", Style::default().fg(colors::TEXT_MUTED)),
    ]);

    let badge = Line::from(vec![
        Span::styled("● ", Style::default().fg(colors::model_color(model.color))),
        Span::styled(
            format!("Using {} ", model.name),
            Style::default().fg(colors::TEXT_DIM),
        ),
    ])
    .alignment(Alignment::Right);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(area);

    let background = Style::default().bg(colors::SURFACE);
    frame.render_widget(Paragraph::new(title).style(background), chunks[0]);
    frame.render_widget(Paragraph::new(badge).style(background), chunks[1]);
}

fn render_transcript(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width.max(1));
    let lines = transcript_lines(app, width);

    let height = usize::from(inner.height);
    let total = lines.len();
    let max_scroll = total.saturating_sub(height);
    let offset = app.ui.transcript_scroll.min(max_scroll);
    let end = total - offset;
    let start = end.saturating_sub(height);

    let visible: Vec<Line<'static>> = lines[start..end].to_vec();
    frame.render_widget(Paragraph::new(visible), inner);
}

/// Build the full transcript as styled lines, wrapped to `width`
fn transcript_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for message in app.conversation.messages() {
        let time = message.sent_at.format("%H:%M").to_string();
        match message.sender {
            Sender::Bot => {
                let model_name = message.model_name.clone().unwrap_or_default();
                let dot_color = Model::ALL
                    .iter()
                    .find(|m| m.name == model_name)
                    .map_or(colors::TEXT_DIM, |m| colors::model_color(m.color));

                lines.push(Line::from(vec![
                    Span::styled("● ", Style::default().fg(dot_color)),
                    Span::styled(model_name, Style::default().fg(colors::TEXT_MUTED)),
                    Span::styled(format!("  {time}"), Style::default().fg(colors::TEXT_MUTED)),
                ]));
                for text_line in wrap_text(&message.text, width) {
                    lines.push(Line::from(Span::styled(
                        text_line,
                        Style::default().fg(colors::BOT_TEXT),
                    )));
                }
            }
            Sender::User => {
                lines.push(
                    Line::from(Span::styled(
                        format!("You  {time}"),
                        Style::default().fg(colors::TEXT_MUTED),
                    ))
                    .alignment(Alignment::Right),
                );
                for text_line in wrap_text(&message.text, width) {
                    lines.push(
                        Line::from(Span::styled(
                            text_line,
                            Style::default().fg(colors::USER_TEXT),
                        ))
                        .alignment(Alignment::Right),
                    );
                }
            }
        }
        lines.push(Line::raw(""));
    }

    if app.is_busy() {
        lines.push(Line::from(Span::styled(
            "Generating response...",
            Style::default()
                .fg(colors::STATUS_BUSY)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

fn render_composer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hint = if app.is_busy() {
        "waiting for reply..."
    } else {
        "Enter send · Shift+Enter newline"
    };

    let block = Block::default()
        .title(" Message ")
        .title_bottom(
            Line::from(Span::styled(
                format!(" {hint} "),
                Style::default().fg(colors::TEXT_MUTED),
            ))
            .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text: Vec<Line<'_>> = app
        .composer
        .buffer
        .split('\n')
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors::TEXT_PRIMARY))))
        .collect();
    frame.render_widget(Paragraph::new(text), inner);

    let (row, col) = cursor_line_col(&app.composer.buffer, app.composer.cursor);
    let x = inner.x + u16::try_from(col).unwrap_or(u16::MAX).min(inner.width.saturating_sub(1));
    let y = inner.y
        + u16::try_from(row)
            .unwrap_or(u16::MAX)
            .min(inner.height.saturating_sub(1));
    frame.set_cursor_position((x, y));
}

/// Render the bottom status bar
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let widget = app.ui.status_message.as_deref().map_or_else(
        || status_bar::Widget::hints(app.config.keys.status_hints(), app.is_busy()),
        status_bar::Widget::status,
    );
    frame.render_widget(widget.to_paragraph(), area);
}

/// Composer pane height: one row per buffer line (capped), plus borders
fn composer_height(buffer: &str) -> u16 {
    let rows = buffer.split('\n').count().clamp(1, 5);
    u16::try_from(rows).unwrap_or(1) + 2
}

/// Cursor position within the buffer as (row, column), in characters
fn cursor_line_col(buffer: &str, cursor: usize) -> (usize, usize) {
    let before = &buffer[..cursor.min(buffer.len())];
    let row = before.matches('\n').count();
    let col = before
        .rsplit_once('\n')
        .map_or(before, |(_, last)| last)
        .chars()
        .count();
    (row, col)
}

/// Greedy word wrap to `width` columns, preserving explicit newlines
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.chars().count() <= width {
            wrapped.push(raw_line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0;
        for word in raw_line.split(' ') {
            let word_len = word.chars().count();
            if current_len > 0 && current_len + 1 + word_len > width {
                wrapped.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            // Hard-break words longer than the full width
            if word_len > width {
                for ch in word.chars() {
                    if current_len == width {
                        wrapped.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                    current.push(ch);
                    current_len += 1;
                }
            } else {
                current.push_str(word);
                current_len += word_len;
            }
        }
        wrapped.push(current);
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_short_line_unchanged() {
        assert_eq!(wrap_text("hello", 10), vec!["hello".to_string()]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("one two three", 7),
            vec!["one two".to_string(), "three".to_string()]
        );
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        assert_eq!(
            wrap_text("a\nb", 10),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        assert_eq!(
            wrap_text("abcdefgh", 3),
            vec!["abc".to_string(), "def".to_string(), "gh".to_string()]
        );
    }

    #[test]
    fn test_cursor_line_col() {
        assert_eq!(cursor_line_col("abc", 2), (0, 2));
        assert_eq!(cursor_line_col("ab\ncd", 4), (1, 1));
        assert_eq!(cursor_line_col("", 0), (0, 0));
    }

    #[test]
    fn test_composer_height_grows_with_lines() {
        assert_eq!(composer_height(""), 3);
        assert_eq!(composer_height("a\nb"), 4);
        assert_eq!(composer_height("a\nb\nc\nd\ne\nf\ng"), 7);
    }
}
