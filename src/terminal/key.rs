//! Keys the input line reacts to

/// A key press on the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Submit the line
    Enter,
    /// Recall the previous history entry
    ArrowUp,
    /// Recall the next history entry
    ArrowDown,
    /// Complete the command name
    Tab,
    /// Delete the last character
    Backspace,
    /// Type a character
    Char(char),
}

/// What the host should do with the key after the terminal saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the host apply its default behaviour
    Default,
    /// The terminal handled it; suppress the default (focus change, caret jump)
    Suppressed,
}

impl Key {
    /// Keys whose default host action is suppressed
    pub fn suppresses_default(self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown | Key::Tab)
    }
}
