//! Terminal session integration tests
//!
//! Drives the controller through key presses the way a visitor would.

use rand::rngs::StdRng;
use rand::SeedableRng;
use termfolio::core::{HostEvent, OutputBlock, Tone};
use termfolio::{Config, Key, Terminal};

/// Terminal with deterministic jokes and no startup README
fn terminal_with_seed(seed: u64) -> Terminal {
    let mut config = Config::default();
    config.theme.initial = "default".to_string();
    config.prompt.user = "visitor".to_string();
    config.session.show_readme = false;
    Terminal::with_rng(&config, StdRng::seed_from_u64(seed)).expect("valid config")
}

fn terminal() -> Terminal {
    terminal_with_seed(42)
}

fn type_text(term: &mut Terminal, text: &str) {
    for c in text.chars() {
        term.handle_key(Key::Char(c));
    }
}

fn submit(term: &mut Terminal, line: &str) {
    type_text(term, line);
    term.handle_key(Key::Enter);
}

/// Blocks produced by the last submission, minus the echo
fn output_of(term: &mut Terminal, line: &str) -> Vec<OutputBlock> {
    let before = term.transcript().len();
    submit(term, line);
    term.transcript().blocks()[before + 1..].to_vec()
}

fn is_not_found(block: &OutputBlock) -> bool {
    block.text().starts_with("Command not found:")
}

#[test]
fn test_every_registered_command_dispatches() {
    let names: Vec<&str> = terminal().registry().names().collect();

    for name in names {
        let mut term = terminal();
        submit(&mut term, name);
        assert!(
            !term.transcript().blocks().iter().any(is_not_found),
            "{} reported as not found",
            name
        );
    }
}

#[test]
fn test_unknown_token_reports_once() {
    for token in ["vim", "rm", "Exit", "ls-la", "café"] {
        let mut term = terminal();
        let out = output_of(&mut term, &format!("{} some args", token));

        let not_found: Vec<_> = out.iter().filter(|b| is_not_found(b)).collect();
        assert_eq!(not_found.len(), 1, "token {}", token);
        assert!(not_found[0].text().contains(token));
        assert_eq!(not_found[0].tone, Tone::Error);
    }
}

#[test]
fn test_history_recall_order() {
    let mut term = terminal();
    let commands = ["help", "ls", "cat README.md", "whoami"];
    for cmd in commands {
        submit(&mut term, cmd);
    }

    for expected in commands.iter().rev() {
        term.handle_key(Key::ArrowUp);
        assert_eq!(term.input(), *expected);
    }

    // Already at the oldest entry
    term.handle_key(Key::ArrowUp);
    assert_eq!(term.input(), "help");

    for expected in &commands[1..] {
        term.handle_key(Key::ArrowDown);
        assert_eq!(term.input(), *expected);
    }

    term.handle_key(Key::ArrowDown);
    assert_eq!(term.input(), "");
    assert_eq!(term.history().cursor(), commands.len());
}

#[test]
fn test_history_skips_empty_lines() {
    let mut term = terminal();
    submit(&mut term, "about");
    submit(&mut term, "   ");
    submit(&mut term, "");

    assert_eq!(term.history().entries(), ["about"]);
}

#[test]
fn test_history_entries_are_trimmed() {
    let mut term = terminal();
    submit(&mut term, "  skills  ");
    term.handle_key(Key::ArrowUp);
    assert_eq!(term.input(), "skills");
}

#[test]
fn test_autocomplete_unique() {
    let mut term = terminal();
    type_text(&mut term, "Exp");
    term.handle_key(Key::Tab);

    assert_eq!(term.input(), "experience");
    assert!(term.transcript().is_empty());
}

#[test]
fn test_autocomplete_ambiguous_lists_matches() {
    let mut term = terminal();
    type_text(&mut term, "h");
    term.drain_events();
    term.handle_key(Key::Tab);

    assert_eq!(term.input(), "h");
    let blocks = term.transcript().blocks();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].text().ends_with(" h"));
    assert_eq!(blocks[1].text(), "help  hack");

    let events = term.drain_events();
    assert_eq!(events.last(), Some(&HostEvent::PromptLine));
}

#[test]
fn test_autocomplete_no_match_does_nothing() {
    let mut term = terminal();
    type_text(&mut term, "xyz");
    term.drain_events();
    term.handle_key(Key::Tab);

    assert_eq!(term.input(), "xyz");
    assert!(term.transcript().is_empty());
    assert!(term.drain_events().is_empty());

    let mut term = terminal();
    term.handle_key(Key::Tab);
    assert!(term.drain_events().is_empty());
}

#[test]
fn test_cat_readme_matches_readme() {
    let mut term = terminal();
    let via_cat = output_of(&mut term, "cat README.md");
    let direct = output_of(&mut term, "readme");

    assert!(!via_cat.is_empty());
    assert_eq!(via_cat, direct);
}

#[test]
fn test_cat_every_file_matches_its_command() {
    let mut term = terminal();
    for (file, command) in [
        ("about.txt", "about"),
        ("skills.txt", "skills"),
        ("experience.txt", "experience"),
        ("contact.txt", "contact"),
    ] {
        let via_cat = output_of(&mut term, &format!("cat {}", file));
        let direct = output_of(&mut term, command);
        assert_eq!(via_cat, direct, "{}", file);
    }
}

#[test]
fn test_cat_unknown_file() {
    let mut term = terminal();
    let theme = term.theme().to_string();
    let out = output_of(&mut term, "cat unknown.txt");

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text(), "cat: unknown.txt: No such file or directory");
    assert_eq!(out[0].tone, Tone::Error);
    assert_eq!(term.theme(), theme);
}

#[test]
fn test_cat_usage() {
    let mut term = terminal();
    let out = output_of(&mut term, "cat");

    assert_eq!(out[0].text(), "Usage: cat [filename]");
    assert_eq!(out[0].tone, Tone::Error);
    assert_eq!(out[1].text(), "Try: cat README.md");
}

#[test]
fn test_theme_cycles_back() {
    let mut term = terminal();
    let initial = term.theme().to_string();
    let count = term.themes().len();

    let mut seen = Vec::new();
    for _ in 0..count {
        submit(&mut term, "theme");
        seen.push(term.theme().to_string());
    }

    assert_eq!(term.theme(), initial);
    assert_eq!(term.theme_class(), None);
    assert_eq!(seen, ["matrix", "cyberpunk", "retro", "default"]);
}

#[test]
fn test_theme_announcement_and_class() {
    let mut term = terminal();
    term.drain_events();
    let out = output_of(&mut term, "theme");

    assert_eq!(out[0].text(), "Theme changed to: matrix");
    assert_eq!(out[0].tone, Tone::Success);
    assert!(term.drain_events().contains(&HostEvent::ThemeClass {
        class: Some("theme-matrix".to_string())
    }));
}

#[test]
fn test_clear_then_keep_working() {
    let mut term = terminal();
    submit(&mut term, "help");
    submit(&mut term, "about");
    assert!(!term.transcript().is_empty());

    submit(&mut term, "clear");
    assert!(term.transcript().is_empty());
    assert_eq!(term.input(), "");

    submit(&mut term, "whoami");
    let blocks = term.transcript().blocks();
    assert!(blocks[0].text().ends_with(" whoami"));
    assert_eq!(blocks[1].text(), "visitor");
}

#[test]
fn test_sudo_is_deterministic_per_seed() {
    let responses = [
        "Nice try! But you're not in the sudoers file. This incident will be reported. 😏",
        "sudo: You have been logged. The authorities have been notified.",
        "With great power comes great responsibility... which you don't have here. 🦸",
    ];

    for seed in 0..8 {
        let first = output_of(&mut terminal_with_seed(seed), "sudo rm -rf /");
        let second = output_of(&mut terminal_with_seed(seed), "sudo rm -rf /");

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].tone, Tone::Warning);
        assert!(responses.contains(&first[0].text().as_str()));
    }
}

#[test]
fn test_submission_event_sequence() {
    let mut term = terminal();
    term.drain_events();
    submit(&mut term, "whoami");

    let events = term.drain_events();
    assert!(matches!(events.first(), Some(HostEvent::Append { .. })));
    let tail = &events[events.len() - 2..];
    assert_eq!(tail, [HostEvent::PromptLine, HostEvent::ScrollToBottom]);
}

#[test]
fn test_host_events_serialize() {
    let mut term = terminal();
    submit(&mut term, "contact");

    for event in term.drain_events() {
        let json = serde_json::to_string(&event).unwrap();
        let back: HostEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
