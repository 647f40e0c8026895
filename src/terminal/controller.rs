//! The terminal controller
//!
//! One object owns the registry, the file table, history, theme state, the
//! transcript and the live input line. Everything runs synchronously inside
//! the key or button event that triggered it.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::commands::{CommandContext, CommandRegistry, FileTable};
use crate::core::{Config, HostEvent, Line, OutputBlock, Result, Segment, Style};
use crate::terminal::autocomplete::{self, Completion};
use crate::terminal::history::History;
use crate::terminal::key::{Key, KeyOutcome};
use crate::terminal::theme::ThemeCycle;
use crate::terminal::transcript::Transcript;

pub struct Terminal {
    registry: CommandRegistry,
    files: FileTable,
    history: History,
    themes: ThemeCycle,
    transcript: Transcript,
    /// Text of the live input line
    input: String,
    /// Marker echoed before each submitted line
    prompt: String,
    visitor: String,
    show_readme: bool,
    /// Source for joke selection
    rng: Box<dyn RngCore>,
}

impl Terminal {
    /// Create a terminal from configuration
    ///
    /// Jokes are picked with `session.seed` when set, OS entropy otherwise.
    pub fn new(config: &Config) -> Result<Self> {
        let rng = match config.session.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a terminal with an explicit randomness source
    pub fn with_rng(config: &Config, rng: impl RngCore + 'static) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            registry: CommandRegistry::builtin(),
            files: FileTable::builtin(),
            history: History::new(),
            themes: ThemeCycle::new(config.theme.names.clone(), &config.theme.initial)?,
            transcript: Transcript::new(),
            input: String::new(),
            prompt: config.prompt_marker(),
            visitor: config.prompt.user.clone(),
            show_readme: config.session.show_readme,
            rng: Box::new(rng),
        })
    }

    /// Render the startup state: root theme class and the README card
    pub fn boot(&mut self) {
        if let Some(class) = self.themes.root_class() {
            self.transcript.set_theme_class(Some(class));
        }
        if self.show_readme {
            self.invoke("readme", &[]);
        }
        tracing::debug!(theme = self.themes.current(), "terminal booted");
    }

    /// React to a key press on the input line
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Enter => self.submit(),
            Key::ArrowUp => self.history_previous(),
            Key::ArrowDown => self.history_next(),
            Key::Tab => self.autocomplete(),
            Key::Backspace => {
                self.input.pop();
            }
            Key::Char(c) => self.input.push(c),
        }

        if key.suppresses_default() {
            KeyOutcome::Suppressed
        } else {
            KeyOutcome::Default
        }
    }

    /// Submit the input line
    ///
    /// Non-empty lines are recorded and executed; an empty line only starts a
    /// new prompt. The input is cleared either way.
    pub fn submit(&mut self) {
        let line = self.input.trim().to_string();
        self.input.clear();

        if line.is_empty() {
            self.transcript.new_prompt_line();
            return;
        }

        self.history.push(line.as_str());
        self.execute(&line);
    }

    /// Echo, dispatch, and start a fresh prompt line
    pub fn execute(&mut self, line: &str) {
        self.echo(line);
        self.dispatch(line);
        self.transcript.new_prompt_line();
        self.transcript.scroll_to_bottom();
    }

    /// Route a line to its handler; only the command token is lowercased
    fn dispatch(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return;
        };
        let args: Vec<&str> = tokens.collect();
        let name = token.to_lowercase();

        if !self.invoke(&name, &args) {
            tracing::debug!(token, "command not found");
            self.transcript.append(not_found(token));
        }
    }

    /// Recall the previous history entry into the input
    pub fn history_previous(&mut self) {
        if let Some(entry) = self.history.step_back() {
            self.input = entry.to_string();
        }
    }

    /// Recall the next history entry, or clear the input past the newest
    pub fn history_next(&mut self) {
        self.input = self.history.step_forward().map(str::to_string).unwrap_or_default();
    }

    /// Complete the input against registered command names
    pub fn autocomplete(&mut self) {
        match autocomplete::complete(&self.registry, &self.input) {
            Completion::None => {}
            Completion::Unique(name) => self.input = name.to_string(),
            Completion::Ambiguous(matches) => {
                let partial = self.input.clone();
                self.echo(&partial);
                self.transcript.append(OutputBlock::from_lines(vec![Line::from_segments(
                    vec![Segment::plain(matches.join("  "))],
                )]));
                self.transcript.new_prompt_line();
            }
        }
    }

    /// The theme button: advance the theme without announcing it
    pub fn press_theme_button(&mut self) -> &str {
        self.themes.advance();
        self.transcript.set_theme_class(self.themes.root_class());
        tracing::info!(theme = self.themes.current(), "theme changed");
        self.themes.current()
    }

    fn echo(&mut self, line: &str) {
        self.transcript
            .append(OutputBlock::from_lines(vec![Line::from_segments(vec![
                Segment::new(self.prompt.clone(), Style::Prompt),
                Segment::plain(format!(" {}", line)),
            ])]));
    }

    /// Text of the live input line
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the live input line
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn theme(&self) -> &str {
        self.themes.current()
    }

    /// Root class for the active theme, `None` for the default one
    pub fn theme_class(&self) -> Option<String> {
        self.themes.root_class()
    }

    pub fn themes(&self) -> &ThemeCycle {
        &self.themes
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Take the host events queued since the last call
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        self.transcript.drain_events()
    }
}

impl CommandContext for Terminal {
    fn print(&mut self, block: OutputBlock) {
        self.transcript.append(block);
    }

    fn clear_output(&mut self) {
        self.transcript.clear();
    }

    fn cycle_theme(&mut self) -> String {
        self.press_theme_button().to_string()
    }

    fn random_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn files(&self) -> &FileTable {
        &self.files
    }

    fn invoke(&mut self, name: &str, args: &[&str]) -> bool {
        match self.registry.handler(name) {
            Some(handler) => {
                tracing::debug!(command = name, args = ?args, "dispatching");
                handler(self, args);
                true
            }
            None => false,
        }
    }

    fn visitor(&self) -> &str {
        &self.visitor
    }
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("input", &self.input)
            .field("theme", &self.themes.current())
            .field("history", &self.history.len())
            .field("blocks", &self.transcript.len())
            .finish_non_exhaustive()
    }
}

/// `Command not found` block naming the token exactly as typed
fn not_found(token: &str) -> OutputBlock {
    OutputBlock::from_lines(vec![Line::from_segments(vec![
        Segment::plain(format!("Command not found: {}. Type '", token)),
        Segment::new("help", Style::Highlight),
        Segment::plain("' for available commands."),
    ])])
    .error()
}
