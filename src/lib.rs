//! termfolio - a terminal-style interactive portfolio
//!
//! Visitors type commands (`help`, `about`, `ls`, `cat README.md`, ...) into a
//! simulated shell prompt and read formatted answers in a scrolling transcript.
//!
//! # Architecture
//!
//! - **Core**: Output types, content markup, configuration, and error handling
//! - **Commands**: Command registry, virtual file table, and handlers
//! - **Terminal**: The controller (dispatch, history, autocomplete, themes)
//! - **CLI**: Terminal host that renders the transcript and reads keys
//!
//! # Usage
//!
//! ```rust,no_run
//! use termfolio::{Config, Terminal};
//!
//! let mut terminal = Terminal::new(&Config::default()).unwrap();
//! terminal.execute("cat README.md");
//! for event in terminal.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod terminal;

// Re-export commonly used items
pub use cli::Repl;
pub use commands::{CommandContext, CommandRegistry, FileTable};
pub use crate::core::{Config, HostEvent, OutputBlock, Result, TermfolioError};
pub use terminal::{Key, KeyOutcome, Terminal};
