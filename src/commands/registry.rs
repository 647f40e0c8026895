//! Command registry - maps command names to handlers
//!
//! Populated once at startup. Lookups are by lowercase name and listing keeps
//! registration order, which is the order autocomplete reports matches in.

use std::collections::HashMap;

use crate::commands::builtin;
use crate::commands::files::FileTable;
use crate::core::OutputBlock;

/// What a handler may do to the terminal it runs in
pub trait CommandContext {
    /// Render a block into the transcript
    fn print(&mut self, block: OutputBlock);

    /// Remove every rendered block
    fn clear_output(&mut self);

    /// Advance to the next theme and return its name
    fn cycle_theme(&mut self) -> String;

    /// Uniform pick in `0..len`; `len` must be non-zero
    fn random_index(&mut self, len: usize) -> usize;

    /// The virtual file table
    fn files(&self) -> &FileTable;

    /// Run another registered command; false if `name` is not registered
    fn invoke(&mut self, name: &str, args: &[&str]) -> bool;

    /// Name the visitor is logged in as
    fn visitor(&self) -> &str;
}

/// Handler bound to a command name
pub type Handler = fn(&mut dyn CommandContext, &[&str]);

/// A registered command
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub handler: Handler,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of available commands
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    /// Commands in registration order
    commands: Vec<CommandSpec>,
    /// Position in `commands` by name
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry with the portfolio's commands
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register("help", builtin::help);
        registry.register("clear", builtin::clear);
        registry.register("about", builtin::about);
        registry.register("skills", builtin::skills);
        registry.register("experience", builtin::experience);
        registry.register("contact", builtin::contact);
        registry.register("ls", builtin::ls);
        registry.register("cat", builtin::cat);
        registry.register("whoami", builtin::whoami);
        registry.register("theme", builtin::theme);
        registry.register("readme", builtin::readme);

        // Easter eggs
        registry.register("sudo", builtin::sudo);
        registry.register("hack", builtin::hack);
        registry.register("matrix", builtin::matrix);
        registry.register("coffee", builtin::coffee);

        registry
    }

    /// Register a command; re-registering a name replaces its handler
    ///
    /// Names must be lowercase since dispatch lowercases the typed token.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        debug_assert!(
            name.chars().all(|c| !c.is_uppercase()),
            "command names are lowercase"
        );

        let spec = CommandSpec { name, handler };
        match self.index.get(name) {
            Some(&pos) => self.commands[pos] = spec,
            None => {
                self.index.insert(name, self.commands.len());
                self.commands.push(spec);
            }
        }
    }

    /// Look up a command by its exact (lowercase) name
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(name).map(|&pos| &self.commands[pos])
    }

    /// Get a handler by name
    pub fn handler(&self, name: &str) -> Option<Handler> {
        self.get(name).map(|spec| spec.handler)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Command names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|spec| spec.name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
