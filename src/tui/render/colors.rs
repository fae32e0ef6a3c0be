//! Color palette for the TUI
//!
//! Modern color palette - cohesive, muted colors for a clean look

use ratatui::style::Color;

// UI Chrome
/// Pane and modal border color.
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Accent for the active selection marker.
pub const SELECTED: Color = Color::Rgb(100, 180, 220);
/// Default surface background.
pub const SURFACE: Color = Color::Rgb(30, 32, 40);
/// Highlighted surface background (selected list row).
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

// Text
/// Primary foreground text.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Dimmed foreground text (hints, headings).
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Muted foreground text (timestamps, attribution).
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Status (semantic)
/// Status bar confirmation messages.
pub const STATUS_OK: Color = Color::Rgb(120, 180, 120);
/// Busy indicator while a reply is pending.
pub const STATUS_BUSY: Color = Color::Rgb(200, 180, 100);

// Transcript
/// User message text.
pub const USER_TEXT: Color = Color::Rgb(130, 190, 230);
/// Bot message text.
pub const BOT_TEXT: Color = Color::Rgb(210, 210, 220);

// Modals
/// Help overlay background.
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);

/// Map a model's palette tag to a concrete color.
///
/// Unknown tags fall back to the dim text color so a bad seed entry is
/// visible but harmless.
#[must_use]
pub const fn model_color(tag: &str) -> Color {
    match tag.as_bytes() {
        b"blue" => Color::Rgb(90, 150, 220),
        b"green" => Color::Rgb(110, 180, 120),
        b"purple" => Color::Rgb(160, 120, 210),
        b"orange" => Color::Rgb(220, 150, 80),
        b"red" => Color::Rgb(210, 100, 100),
        b"teal" => Color::Rgb(80, 180, 170),
        b"indigo" => Color::Rgb(120, 130, 220),
        _ => TEXT_DIM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_all_registry_tags_have_colors() {
        for model in Model::ALL {
            assert_ne!(model_color(model.color), TEXT_DIM, "{}", model.id);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(model_color("chartreuse"), TEXT_DIM);
    }
}
