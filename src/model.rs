//! Static model registry and selection state.
//!
//! The registry is fixed for the lifetime of the process: models are never
//! added, removed, or mutated. Selection is an index into [`Model::ALL`].

/// How a model entry is routed: hand-picked by the user or chosen by the
/// (mocked) auto-router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// User picks this model explicitly.
    Manual,
    /// Stand-in for an automatic routing slot.
    Auto,
}

impl Category {
    /// Section heading shown in the sidebar.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Manual => "Models",
            Self::Auto => "Auto",
        }
    }
}

/// A selectable model identity.
///
/// Purely cosmetic: no inference is attached. The `color` tag names an entry
/// in the render palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Model {
    /// Stable identifier, unique within the registry.
    pub id: &'static str,
    /// Display name, used for bot reply attribution.
    pub name: &'static str,
    /// Palette tag for the model's color dot.
    pub color: &'static str,
    /// Manual entry or auto-router slot.
    pub category: Category,
}

impl Model {
    /// The fixed registry, in display order.
    pub const ALL: &'static [Self] = &[
        Self {
            id: "gemini",
            name: "Gemini Flash",
            color: "blue",
            category: Category::Manual,
        },
        Self {
            id: "gpt4",
            name: "GPT-4 Mini",
            color: "green",
            category: Category::Manual,
        },
        Self {
            id: "grok",
            name: "Grok AI",
            color: "purple",
            category: Category::Manual,
        },
        Self {
            id: "phi",
            name: "Phi 3.5",
            color: "orange",
            category: Category::Manual,
        },
        Self {
            id: "llama",
            name: "Llama 405B",
            color: "red",
            category: Category::Manual,
        },
        Self {
            id: "auto1",
            name: "Auto Model 1",
            color: "teal",
            category: Category::Auto,
        },
        Self {
            id: "auto2",
            name: "Auto Model 2",
            color: "indigo",
            category: Category::Auto,
        },
    ];
}

/// Currently active model: always exactly one, defaulting to the first
/// registry entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    /// Select the first registry entry.
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// The selected model.
    #[must_use]
    pub const fn current(self) -> &'static Model {
        // `index` is kept in bounds by `select`/`select_next`/`select_prev`.
        &Model::ALL[self.index]
    }

    /// Index of the selected model within [`Model::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Select by registry index. Out-of-range indices are ignored so the
    /// invariant "exactly one valid selection" can never break.
    pub const fn select(&mut self, index: usize) {
        if index < Model::ALL.len() {
            self.index = index;
        }
    }

    /// Select the next registry entry, wrapping at the end.
    pub const fn select_next(&mut self) {
        self.index = (self.index + 1) % Model::ALL.len();
    }

    /// Select the previous registry entry, wrapping at the start.
    pub const fn select_prev(&mut self) {
        self.index = match self.index.checked_sub(1) {
            Some(prev) => prev,
            None => Model::ALL.len() - 1,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_registry_ids_unique() {
        let ids: HashSet<_> = Model::ALL.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), Model::ALL.len());
    }

    #[test]
    fn test_default_selects_first() {
        let selection = Selection::default();
        assert_eq!(selection.current().id, "gemini");
    }

    #[test]
    fn test_select_in_range() {
        let mut selection = Selection::new();
        selection.select(2);
        assert_eq!(selection.current().id, "grok");
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut selection = Selection::new();
        selection.select(1);
        selection.select(Model::ALL.len());
        assert_eq!(selection.current().id, "gpt4");
    }

    #[test]
    fn test_select_next_wraps() {
        let mut selection = Selection::new();
        selection.select(Model::ALL.len() - 1);
        selection.select_next();
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut selection = Selection::new();
        selection.select_prev();
        assert_eq!(selection.index(), Model::ALL.len() - 1);
    }

    #[test]
    fn test_category_headings() {
        assert_eq!(Category::Manual.heading(), "Models");
        assert_eq!(Category::Auto.heading(), "Auto");
    }
}
