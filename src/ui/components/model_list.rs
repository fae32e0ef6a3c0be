//! Sidebar model list widget

use crate::model::{Category, Model};
use crate::tui::render::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Widget for displaying the model registry in the sidebar, grouped by
/// category with the active selection marked
#[derive(Debug, Clone, Copy)]
pub struct Widget {
    selected: usize,
}

impl Widget {
    /// Create a new model list widget with the given selected registry index
    #[must_use]
    pub const fn new(selected: usize) -> Self {
        Self { selected }
    }

    /// Convert to a List widget
    #[must_use]
    pub fn to_list(&self) -> List<'static> {
        let mut items: Vec<ListItem<'static>> = Vec::new();

        for category in [Category::Manual, Category::Auto] {
            if !items.is_empty() {
                items.push(ListItem::new(Line::raw("")));
            }
            items.push(ListItem::new(Line::from(Span::styled(
                format!(" {} ", category.heading()),
                Style::default()
                    .fg(colors::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ))));

            items.extend(
                Model::ALL
                    .iter()
                    .enumerate()
                    .filter(|(_, model)| model.category == category)
                    .map(|(index, model)| self.render_item(index, model)),
            );
        }

        List::new(items).block(
            Block::default()
                .title(" Model Selection ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
    }

    fn render_item(&self, index: usize, model: &Model) -> ListItem<'static> {
        let is_selected = index == self.selected;

        let style = if is_selected {
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .bg(colors::SURFACE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT_PRIMARY)
        };

        let marker = if is_selected { " ✓" } else { "" };

        let content = Line::from(vec![
            Span::styled(" ● ", Style::default().fg(colors::model_color(model.color))),
            Span::styled(model.name.to_string(), style),
            Span::styled(marker.to_string(), Style::default().fg(colors::SELECTED)),
        ]);

        ListItem::new(content).style(style)
    }
}
