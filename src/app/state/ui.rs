//! UI-related state: transcript scroll position and status message

/// UI-related state for the application
#[derive(Debug, Default)]
pub struct UiState {
    /// Transcript scroll offset, counted in lines up from the bottom.
    /// Zero means "follow": the newest message stays visible.
    pub transcript_scroll: usize,

    /// Status message to display in the status bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Create a new UI state with default values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transcript_scroll: 0,
            status_message: None,
        }
    }

    /// Whether the transcript is pinned to the newest message
    #[must_use]
    pub const fn is_following(&self) -> bool {
        self.transcript_scroll == 0
    }

    /// Scroll the transcript up by `lines` (render clamps to content height)
    pub const fn scroll_up(&mut self, lines: usize) {
        self.transcript_scroll = self.transcript_scroll.saturating_add(lines);
    }

    /// Scroll the transcript down by `lines`, re-engaging follow at the bottom
    pub const fn scroll_down(&mut self, lines: usize) {
        self.transcript_scroll = self.transcript_scroll.saturating_sub(lines);
    }
}
