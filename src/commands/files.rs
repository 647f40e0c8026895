//! Virtual file table
//!
//! Fake filenames for `ls` and `cat`. Each file's content is the output of the
//! command it maps to.

/// Static mapping from display filename to command name
#[derive(Debug, Clone)]
pub struct FileTable {
    entries: Vec<(&'static str, &'static str)>,
}

impl FileTable {
    /// The portfolio's files
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ("about.txt", "about"),
                ("skills.txt", "skills"),
                ("experience.txt", "experience"),
                ("contact.txt", "contact"),
                ("README.md", "readme"),
            ],
        }
    }

    /// Command that renders `filename`; names are case-sensitive
    pub fn command_for(&self, filename: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == filename)
            .map(|(_, command)| *command)
    }

    /// Filenames in listing order
    pub fn filenames(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FileTable {
    fn default() -> Self {
        Self::builtin()
    }
}
