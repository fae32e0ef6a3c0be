//! Keybinding configuration
//!
//! Botdeck keeps the composer focused at all times, so every bound chord
//! carries a modifier (or is a non-character key like `PageUp`). Plain
//! character input and line-editing keys are handled by the composer
//! directly and are not remappable.

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Select the next model in the registry
    NextModel,
    /// Select the previous model in the registry
    PrevModel,
    /// Toggle sidebar visibility
    ToggleSidebar,
    /// Scroll the transcript up
    ScrollUp,
    /// Scroll the transcript down (re-engages follow at the bottom)
    ScrollDown,
    /// Show help
    Help,
    /// Quit application
    Quit,
}

/// Categories for grouping actions in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Model selection actions
    Models,
    /// Transcript navigation actions
    Navigation,
    /// Miscellaneous actions
    Other,
}

impl ActionGroup {
    /// Get the display title for this group
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Models => "Models",
            Self::Navigation => "Navigation",
            Self::Other => "Other",
        }
    }
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NextModel => "Select next model",
            Self::PrevModel => "Select previous model",
            Self::ToggleSidebar => "Toggle sidebar",
            Self::ScrollUp => "Scroll transcript up",
            Self::ScrollDown => "Scroll transcript down",
            Self::Help => "Show this help",
            Self::Quit => "Quit",
        }
    }

    /// Get the group this action belongs to
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::NextModel | Self::PrevModel => ActionGroup::Models,
            Self::ScrollUp | Self::ScrollDown => ActionGroup::Navigation,
            Self::ToggleSidebar | Self::Help | Self::Quit => ActionGroup::Other,
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        // Models
        Self::NextModel,
        Self::PrevModel,
        // Navigation
        Self::ScrollUp,
        Self::ScrollDown,
        // Other
        Self::ToggleSidebar,
        Self::Help,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Ctrl+n".to_string(), Action::NextModel);
        bindings.insert("Ctrl+p".to_string(), Action::PrevModel);
        bindings.insert("Ctrl+b".to_string(), Action::ToggleSidebar);
        bindings.insert("PageUp".to_string(), Action::ScrollUp);
        bindings.insert("PageDown".to_string(), Action::ScrollDown);
        bindings.insert("Ctrl+g".to_string(), Action::Help);
        bindings.insert("Ctrl+q".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "Ctrl+n" or "PageUp")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        keys.sort();
        keys.join("/")
    }

    /// Generate a formatted help line for an action: "  keys    description"
    #[must_use]
    pub fn help_line(&self, action: Action) -> String {
        let keys = self.format_keys(action);
        format!("  {keys:<16} {}", action.description())
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::NextModel, "model"),
            (Action::ToggleSidebar, "sidebar"),
            (Action::Help, "help"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .map(|(action, label)| {
                let key = self
                    .keys_for_action(*action)
                    .into_iter()
                    .min()
                    .unwrap_or_default();
                format!("[{key}]{label}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_keybindings() {
        let keys = KeyBindings::default();

        assert_eq!(
            keys.get_action(KeyCode::Char('n'), KeyModifiers::CONTROL),
            Some(Action::NextModel)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            keys.get_action(KeyCode::PageUp, KeyModifiers::NONE),
            Some(Action::ScrollUp)
        );
    }

    #[test]
    fn test_plain_characters_unbound() {
        let keys = KeyBindings::default();

        assert_eq!(keys.get_action(KeyCode::Char('n'), KeyModifiers::NONE), None);
        assert_eq!(keys.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
        assert_eq!(keys.get_action(KeyCode::Enter, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_merge_defaults_keeps_overrides() {
        let mut keys = KeyBindings {
            bindings: HashMap::new(),
        };
        keys.set("Ctrl+n", Action::Quit);
        keys.merge_defaults();

        assert_eq!(
            keys.get_action(KeyCode::Char('n'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            keys.get_action(KeyCode::Char('p'), KeyModifiers::CONTROL),
            Some(Action::PrevModel)
        );
    }

    #[test]
    fn test_key_to_string_modifiers() {
        assert_eq!(
            key_to_string(KeyCode::Char('b'), KeyModifiers::CONTROL),
            "Ctrl+b"
        );
        assert_eq!(
            key_to_string(KeyCode::PageUp, KeyModifiers::SHIFT),
            "Shift+PageUp"
        );
        assert_eq!(key_to_string(KeyCode::Char('x'), KeyModifiers::NONE), "x");
    }

    #[test]
    fn test_help_lines_cover_all_actions() {
        let keys = KeyBindings::default();
        for action in Action::ALL_FOR_HELP {
            let line = keys.help_line(*action);
            assert!(line.contains(action.description()));
        }
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let keys = KeyBindings::default();
        let json = serde_json::to_string(&keys)?;
        let parsed: KeyBindings = serde_json::from_str(&json)?;
        assert_eq!(keys, parsed);
        Ok(())
    }
}
