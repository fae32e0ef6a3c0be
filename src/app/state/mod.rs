//! Application state
//!
//! The main [`App`] struct aggregates focused sub-states (composer,
//! pending reply, UI) and owns every state transition. Rendering is a pure
//! projection of this struct; no transition happens during drawing.

mod composer;
mod reply;
mod ui;

pub use composer::Composer;
pub use reply::PendingReply;
pub use ui::UiState;

use crate::config::Config;
use crate::conversation::Conversation;
use crate::model::Selection;
use std::time::{Duration, Instant};
use tracing::debug;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// The conversation transcript (append-only)
    pub conversation: Conversation,

    /// Currently selected model
    pub selection: Selection,

    /// Message composer (buffer + cursor)
    pub composer: Composer,

    /// The in-flight simulated reply, if any. `Some` is the busy state.
    pub pending_reply: Option<PendingReply>,

    /// Whether the sidebar is visible
    pub sidebar_open: bool,

    /// Whether the help overlay is visible
    pub help_open: bool,

    /// UI state (scroll position, status message)
    pub ui: UiState,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application with the given config and the seeded demo
    /// transcript
    #[must_use]
    pub fn new(config: Config) -> Self {
        let sidebar_open = config.sidebar_open;
        Self {
            config,
            conversation: Conversation::seeded(),
            selection: Selection::new(),
            composer: Composer::new(),
            pending_reply: None,
            sidebar_open,
            help_open: false,
            ui: UiState::new(),
            should_quit: false,
        }
    }

    /// Whether a simulated reply is pending. Submission is blocked while
    /// busy; everything else stays live.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending_reply.is_some()
    }

    /// Select a model by registry index. Takes effect for the next
    /// submission; an in-flight reply keeps its original attribution.
    pub fn select_model(&mut self, index: usize) {
        self.selection.select(index);
        self.note_selection();
    }

    /// Select the next model, wrapping at the end of the registry.
    pub fn select_next_model(&mut self) {
        self.selection.select_next();
        self.note_selection();
    }

    /// Select the previous model, wrapping at the start of the registry.
    pub fn select_prev_model(&mut self) {
        self.selection.select_prev();
        self.note_selection();
    }

    fn note_selection(&mut self) {
        let model = self.selection.current();
        debug!(model = model.id, "Model selected");
        self.set_status(format!("Using {}", model.name));
    }

    /// Toggle sidebar visibility. Purely cosmetic.
    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Toggle the help overlay.
    pub const fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
    }

    /// Submit the composer text.
    ///
    /// No-op unless the trimmed text is non-empty and no reply is pending
    /// (the sole guard; nothing is surfaced to the caller beyond the return
    /// value). On success the user message is appended, the composer is
    /// cleared, and a reply attributed to the currently selected model is
    /// scheduled after the configured delay.
    ///
    /// Returns whether a message was submitted.
    pub fn submit_composer(&mut self) -> bool {
        self.submit_at(Instant::now())
    }

    /// Submit with an explicit clock, for deterministic tests.
    pub fn submit_at(&mut self, now: Instant) -> bool {
        if self.is_busy() || self.composer.is_blank() {
            return false;
        }

        let text = std::mem::take(&mut self.composer.buffer);
        self.composer.cursor = 0;
        let id = self.conversation.push_user(text);

        let model = self.selection.current();
        let delay = Duration::from_millis(self.config.reply_delay_ms);
        self.pending_reply = Some(PendingReply::schedule(model.name, now, delay));
        self.ui.transcript_scroll = 0;

        debug!(id, model = model.id, "Message submitted, reply scheduled");
        true
    }

    /// Deliver the pending reply if its delay has elapsed.
    ///
    /// Called from the event-loop tick. Returns whether a reply arrived.
    pub fn poll_reply(&mut self, now: Instant) -> bool {
        let due = self
            .pending_reply
            .as_ref()
            .is_some_and(|reply| reply.is_due(now));
        if !due {
            return false;
        }

        if let Some(reply) = self.pending_reply.take() {
            let id = self
                .conversation
                .push_bot(reply.reply_text(), reply.model_name());
            self.ui.transcript_scroll = 0;
            debug!(id, model_name = reply.model_name(), "Reply delivered");
        }
        true
    }

    /// Set the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status_message = Some(message.into());
    }

    /// Request application shutdown.
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
