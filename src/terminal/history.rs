//! Command history with a recall cursor
//!
//! The cursor ranges over `0..=len`; `len` (one past the newest entry) means
//! "not recalling anything".

/// Append-only list of submitted commands
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor past the end
    ///
    /// Empty lines are not recorded.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if !entry.is_empty() {
            self.entries.push(entry);
        }
        self.reset_cursor();
    }

    /// Step back one entry; `None` when already at the oldest
    pub fn step_back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry
    ///
    /// Past the newest entry the cursor resets and `None` is returned, meaning
    /// the input should be emptied.
    pub fn step_forward(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.reset_cursor();
            None
        }
    }

    fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(entries: &[&str]) -> History {
        let mut history = History::new();
        for entry in entries {
            history.push(*entry);
        }
        history
    }

    #[test]
    fn test_previous_walks_backwards() {
        let mut history = history_of(&["help", "ls", "cat README.md"]);
        assert_eq!(history.step_back(), Some("cat README.md"));
        assert_eq!(history.step_back(), Some("ls"));
        assert_eq!(history.step_back(), Some("help"));
        assert_eq!(history.step_back(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_next_past_newest_resets() {
        let mut history = history_of(&["help", "ls"]);
        history.step_back();
        history.step_back();
        assert_eq!(history.step_forward(), Some("ls"));
        assert_eq!(history.step_forward(), None);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.step_forward(), None);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut history = history_of(&["help", "ls"]);
        history.step_back();
        history.step_back();
        history.push("whoami");
        assert_eq!(history.cursor(), 3);
        assert_eq!(history.step_back(), Some("whoami"));
    }

    #[test]
    fn test_empty_lines_not_recorded() {
        let mut history = History::new();
        history.push("");
        assert!(history.is_empty());
        assert_eq!(history.step_back(), None);
        assert_eq!(history.step_forward(), None);
    }
}
