//! Commands module - the portfolio's command set
//!
//! Contains the command registry, the virtual file table, the canned content
//! and the built-in handlers.

pub mod builtin;
pub mod content;
pub mod files;
pub mod registry;

pub use files::FileTable;
pub use registry::{CommandContext, CommandRegistry, CommandSpec, Handler};
