//! CLI module - terminal host for the portfolio
//!
//! Contains the REPL loops and the ANSI renderer.

pub mod render;
pub mod repl;

pub use render::{RenderMode, Renderer};
pub use repl::Repl;
