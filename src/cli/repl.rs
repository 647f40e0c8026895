//! Interactive REPL for termfolio
//!
//! Drives a [`Terminal`] from the keyboard (raw mode) or from lines of text
//! (pipes and `--plain`), rendering its host events as they are produced.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::cli::render::{RenderMode, Renderer};
use crate::core::{Config, Result};
use crate::terminal::{Key, Terminal};

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl {
    terminal: Terminal,
}

/// What a raw key press asks the REPL to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the input line
    Input(Key),
    /// Cycle the theme, as the page's theme button does
    ThemeButton,
    /// Leave the REPL
    Exit,
    /// Not bound
    Ignore,
}

impl Repl {
    /// Create a new REPL with configuration from file and environment
    pub fn new() -> Result<Self> {
        Self::with_config(Config::load())
    }

    /// Create a REPL with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(&config)?,
        })
    }

    /// Wrap an existing terminal
    pub fn with_terminal(terminal: Terminal) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// Run the REPL, interactively when stdin and stdout are terminals
    pub fn run(&mut self, force_lines: bool) -> Result<()> {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();

        if interactive && !force_lines {
            return self.run_interactive();
        }

        let mode = if io::stdout().is_terminal() {
            RenderMode::Line
        } else {
            RenderMode::Plain
        };
        let show_prompt = io::stdin().is_terminal();
        self.run_lines(io::stdin().lock(), io::stdout().lock(), mode, show_prompt)
    }

    /// Raw-mode loop: every key goes through the terminal controller
    pub fn run_interactive(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let _guard = RawModeGuard;

        let mut renderer = Renderer::new(io::stdout().lock(), RenderMode::Raw);
        self.terminal.boot();
        self.present(&mut renderer)?;

        loop {
            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                _ => continue,
            };

            match map_key(key) {
                KeyAction::Input(key) => {
                    self.terminal.handle_key(key);
                }
                KeyAction::ThemeButton => {
                    self.terminal.press_theme_button();
                }
                KeyAction::Exit => break,
                KeyAction::Ignore => continue,
            }

            self.present(&mut renderer)?;
        }

        let mut out = renderer.into_inner();
        write!(out, "\r\nGoodbye!\r\n")?;
        out.flush()?;
        Ok(())
    }

    /// Line loop: each line read is submitted as if typed and entered
    pub fn run_lines<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: W,
        mode: RenderMode,
        show_prompt: bool,
    ) -> Result<()> {
        let mut renderer = Renderer::new(out, mode);
        self.terminal.boot();
        self.present(&mut renderer)?;

        loop {
            if show_prompt {
                renderer.draw_input(self.terminal.prompt(), "")?;
                renderer.flush()?;
            }

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input line");
                    continue;
                }
            }

            self.terminal.set_input(line.trim_end_matches(['\r', '\n']));
            self.terminal.handle_key(Key::Enter);
            self.present(&mut renderer)?;
        }

        Ok(())
    }

    /// Execute one line and return every host event queued so far
    pub fn run_once(&mut self, line: &str) -> Vec<crate::core::HostEvent> {
        self.terminal.set_input(line);
        self.terminal.handle_key(Key::Enter);
        self.terminal.drain_events()
    }

    fn present<W: Write>(&mut self, renderer: &mut Renderer<W>) -> Result<()> {
        let events = self.terminal.drain_events();
        renderer.present(&events, self.terminal.prompt(), self.terminal.input())
    }
}

/// Map a raw key press to a REPL action
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => KeyAction::Exit,
            KeyCode::Char('t') => KeyAction::ThemeButton,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Enter => KeyAction::Input(Key::Enter),
        KeyCode::Up => KeyAction::Input(Key::ArrowUp),
        KeyCode::Down => KeyAction::Input(Key::ArrowDown),
        KeyCode::Tab => KeyAction::Input(Key::Tab),
        KeyCode::Backspace => KeyAction::Input(Key::Backspace),
        KeyCode::Char(c) => KeyAction::Input(Key::Char(c)),
        _ => KeyAction::Ignore,
    }
}

/// Restores cooked mode when the interactive loop ends, even on error
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Failed to restore terminal mode: {}", e);
        }
    }
}
