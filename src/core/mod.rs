//! Core module - shared infrastructure for termfolio
//!
//! This module contains output types, the content markup parser, configuration,
//! and error handling used throughout the crate.

pub mod config;
pub mod error;
pub mod markup;
pub mod types;

pub use config::Config;
pub use error::{Result, TermfolioError};
pub use types::*;
