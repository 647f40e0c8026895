//! Terminal module - the interactive controller
//!
//! Holds the state behind the prompt (history, theme, transcript, input line)
//! and turns key presses into dispatched commands and host events.

pub mod autocomplete;
pub mod controller;
pub mod history;
pub mod key;
pub mod theme;
pub mod transcript;

pub use autocomplete::Completion;
pub use controller::Terminal;
pub use history::History;
pub use key::{Key, KeyOutcome};
pub use theme::ThemeCycle;
pub use transcript::Transcript;
