//! Circular theme selection

use crate::core::{Result, TermfolioError};

/// Theme name that maps to no root class
pub const DEFAULT_THEME: &str = "default";

/// Index into a fixed, non-empty list of theme names
#[derive(Debug, Clone)]
pub struct ThemeCycle {
    names: Vec<String>,
    current: usize,
}

impl ThemeCycle {
    /// Create a cycle starting at `initial`
    pub fn new(names: Vec<String>, initial: &str) -> Result<Self> {
        if names.is_empty() {
            return Err(TermfolioError::config("theme list is empty"));
        }
        let current = names
            .iter()
            .position(|n| n == initial)
            .ok_or_else(|| TermfolioError::unknown_theme(initial))?;
        Ok(Self { names, current })
    }

    /// Advance to the next theme, wrapping around
    pub fn advance(&mut self) -> &str {
        self.current = (self.current + 1) % self.names.len();
        self.current()
    }

    pub fn current(&self) -> &str {
        &self.names[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Root class for the current theme, `None` for the default one
    pub fn root_class(&self) -> Option<String> {
        match self.current() {
            DEFAULT_THEME => None,
            name => Some(format!("theme-{}", name)),
        }
    }
}
