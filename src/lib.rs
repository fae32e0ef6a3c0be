//! Botdeck - terminal chat dashboard with mocked model replies
//!
//! Botdeck renders a single-screen chat: a sidebar of selectable model
//! identities, a transcript pane, and a composer. Replies are simulated
//! locally after a fixed delay and attributed to whichever model was
//! selected when the message was submitted. Nothing leaves the process.

pub mod app;
pub mod config;
pub mod conversation;
pub mod model;
pub mod paths;
pub mod tui;
pub mod ui;

pub use app::{App, Event, Handler};
pub use config::Config;
pub use conversation::{Conversation, Message, Sender};
pub use model::{Category, Model, Selection};
