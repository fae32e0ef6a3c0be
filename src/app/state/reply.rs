//! Deferred bot reply, represented as data rather than a timer thread.
//!
//! The event loop ticks at the configured poll interval and asks the app to
//! compare `now` against the stored due instant. Keeping the timer as plain
//! data makes the whole submit/reply cycle deterministic under test.

use std::time::{Duration, Instant};

/// A scheduled bot reply.
///
/// The model name is captured at schedule time: changing the selection while
/// the reply is pending does not re-attribute it. At most one reply is ever
/// pending because submission is blocked while busy. There is no
/// cancellation; the reply always arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    model_name: String,
    due_at: Instant,
}

impl PendingReply {
    /// Schedule a reply attributed to `model_name`, due after `delay`.
    pub fn schedule(model_name: impl Into<String>, now: Instant, delay: Duration) -> Self {
        Self {
            model_name: model_name.into(),
            due_at: now + delay,
        }
    }

    /// Whether the simulated delay has elapsed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due_at
    }

    /// The model name captured when the triggering message was submitted.
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The canned reply text.
    #[must_use]
    pub fn reply_text(&self) -> String {
        format!(
            "Response from {}: This is a simulated response.",
            self.model_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_due_before_delay() {
        let now = Instant::now();
        let reply = PendingReply::schedule("Grok AI", now, Duration::from_millis(1500));
        assert!(!reply.is_due(now));
        assert!(!reply.is_due(now + Duration::from_millis(1499)));
    }

    #[test]
    fn test_due_after_delay() {
        let now = Instant::now();
        let reply = PendingReply::schedule("Grok AI", now, Duration::from_millis(1500));
        assert!(reply.is_due(now + Duration::from_millis(1500)));
        assert!(reply.is_due(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_due_immediately_with_zero_delay() {
        let now = Instant::now();
        let reply = PendingReply::schedule("Phi 3.5", now, Duration::ZERO);
        assert!(reply.is_due(now));
    }

    #[test]
    fn test_reply_text() {
        let reply = PendingReply::schedule("Gemini Flash", Instant::now(), Duration::ZERO);
        assert_eq!(
            reply.reply_text(),
            "Response from Gemini Flash: This is a simulated response."
        );
    }
}
