//! Command-name completion

use crate::commands::CommandRegistry;

/// Result of completing a partial command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing to complete
    None,
    /// Exactly one command matches
    Unique(&'static str),
    /// Several commands share the prefix, in registration order
    Ambiguous(Vec<&'static str>),
}

/// Find registered names starting with `partial`, ignoring case
pub fn complete(registry: &CommandRegistry, partial: &str) -> Completion {
    if partial.is_empty() {
        return Completion::None;
    }

    let prefix = partial.to_lowercase();
    let mut matches: Vec<&'static str> = registry
        .names()
        .filter(|name| name.starts_with(&prefix))
        .collect();

    match matches.len() {
        0 => Completion::None,
        1 => Completion::Unique(matches.remove(0)),
        _ => Completion::Ambiguous(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_match() {
        let registry = CommandRegistry::builtin();
        assert_eq!(complete(&registry, "wh"), Completion::Unique("whoami"));
        assert_eq!(complete(&registry, "COF"), Completion::Unique("coffee"));
    }

    #[test]
    fn test_ambiguous_match() {
        let registry = CommandRegistry::builtin();
        assert_eq!(
            complete(&registry, "h"),
            Completion::Ambiguous(vec!["help", "hack"])
        );
        assert_eq!(
            complete(&registry, "c"),
            Completion::Ambiguous(vec!["clear", "contact", "cat", "coffee"])
        );
    }

    #[test]
    fn test_no_match() {
        let registry = CommandRegistry::builtin();
        assert_eq!(complete(&registry, "zzz"), Completion::None);
        assert_eq!(complete(&registry, ""), Completion::None);
    }
}
