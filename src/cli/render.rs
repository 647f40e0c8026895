//! Renders host events onto a character terminal
//!
//! Plays the part of the page: blocks are printed above the input line, the
//! theme class picks a colour palette, and `Clear` wipes the screen.

use std::io::Write;

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::core::{HostEvent, Layout, Line, OutputBlock, Result, Style, Tone};

/// How much terminal control the output supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Raw mode: colours, `\r\n` line ends, input line redrawn after each event batch
    Raw,
    /// Cooked terminal: colours and plain line ends
    Line,
    /// No escape sequences at all (pipes, files)
    Plain,
}

impl RenderMode {
    fn ansi(self) -> bool {
        !matches!(self, RenderMode::Plain)
    }

    fn newline(self) -> &'static str {
        match self {
            RenderMode::Raw => "\r\n",
            _ => "\n",
        }
    }
}

/// Colours for each style under one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub prompt: Color,
    pub highlight: Color,
    pub command: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub title: Color,
    pub accent: Color,
    pub tech: Color,
    pub file: Color,
    pub link: Color,
}

impl Palette {
    /// Palette for a theme name; unknown names get the default palette
    pub fn for_theme(name: &str) -> Self {
        match name {
            "matrix" => Self {
                text: Color::Green,
                prompt: Color::Green,
                highlight: Color::White,
                command: Color::Green,
                error: Color::DarkGreen,
                success: Color::Green,
                warning: Color::DarkGreen,
                title: Color::White,
                accent: Color::DarkGreen,
                tech: Color::DarkGreen,
                file: Color::Green,
                link: Color::White,
            },
            "cyberpunk" => Self {
                text: Color::Magenta,
                prompt: Color::Cyan,
                highlight: Color::Yellow,
                command: Color::Cyan,
                error: Color::Red,
                success: Color::Cyan,
                warning: Color::Yellow,
                title: Color::Yellow,
                accent: Color::DarkMagenta,
                tech: Color::DarkCyan,
                file: Color::Cyan,
                link: Color::Yellow,
            },
            "retro" => Self {
                text: Color::DarkYellow,
                prompt: Color::Yellow,
                highlight: Color::Yellow,
                command: Color::Yellow,
                error: Color::Red,
                success: Color::Yellow,
                warning: Color::DarkYellow,
                title: Color::Yellow,
                accent: Color::DarkYellow,
                tech: Color::DarkGrey,
                file: Color::Yellow,
                link: Color::Yellow,
            },
            _ => Self {
                text: Color::Reset,
                prompt: Color::Green,
                highlight: Color::Cyan,
                command: Color::Yellow,
                error: Color::Red,
                success: Color::Green,
                warning: Color::Yellow,
                title: Color::Magenta,
                accent: Color::Blue,
                tech: Color::DarkGrey,
                file: Color::Cyan,
                link: Color::Blue,
            },
        }
    }

    /// Palette for a root class such as `theme-retro`
    pub fn for_class(class: Option<&str>) -> Self {
        let theme = class
            .and_then(|c| c.strip_prefix("theme-"))
            .unwrap_or("default");
        Self::for_theme(theme)
    }

    fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Normal => self.text,
            Tone::Error => self.error,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
        }
    }

    fn style(&self, style: &Style, tone: Tone) -> Color {
        match style {
            Style::Plain => self.tone(tone),
            Style::Prompt => self.prompt,
            Style::Highlight => self.highlight,
            Style::Command => self.command,
            Style::Error => self.error,
            Style::Success => self.success,
            Style::Warning => self.warning,
            Style::Title => self.title,
            Style::Accent => self.accent,
            Style::Tech => self.tech,
            Style::FileItem => self.file,
            Style::Link(_) => self.link,
        }
    }
}

/// Writes host events to a terminal-like sink
pub struct Renderer<W: Write> {
    out: W,
    mode: RenderMode,
    palette: Palette,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, mode: RenderMode) -> Self {
        Self {
            out,
            mode,
            palette: Palette::for_theme("default"),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Apply a batch of events, then redraw the input line in raw mode
    pub fn present(&mut self, events: &[HostEvent], prompt: &str, input: &str) -> Result<()> {
        if self.mode == RenderMode::Raw {
            queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        }
        for event in events {
            self.apply(event)?;
        }
        if self.mode == RenderMode::Raw {
            self.draw_input(prompt, input)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Apply one event
    pub fn apply(&mut self, event: &HostEvent) -> Result<()> {
        match event {
            HostEvent::Append { block } => self.write_block(block),
            HostEvent::Clear => {
                if self.mode.ansi() {
                    queue!(
                        self.out,
                        Clear(ClearType::All),
                        Clear(ClearType::Purge),
                        MoveTo(0, 0)
                    )?;
                }
                Ok(())
            }
            HostEvent::ThemeClass { class } => {
                self.palette = Palette::for_class(class.as_deref());
                Ok(())
            }
            // The terminal scrolls itself and the input line is redrawn by `present`
            HostEvent::PromptLine | HostEvent::ScrollToBottom => Ok(()),
        }
    }

    /// Draw `prompt input` on the current line
    pub fn draw_input(&mut self, prompt: &str, input: &str) -> Result<()> {
        self.write_colored(prompt, self.palette.prompt, false)?;
        self.write_colored(&format!(" {}", input), self.palette.text, false)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn write_block(&mut self, block: &OutputBlock) -> Result<()> {
        let gutter = match block.layout {
            Layout::Card => "│ ",
            Layout::Line | Layout::Preformatted => "",
        };

        for line in &block.lines {
            if !gutter.is_empty() {
                self.write_colored(gutter, self.palette.accent, false)?;
            }
            self.write_line(line, block.tone)?;
            write!(self.out, "{}", self.mode.newline())?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &Line, tone: Tone) -> Result<()> {
        for segment in &line.segments {
            let color = self.palette.style(&segment.style, tone);
            let bold = matches!(segment.style, Style::Title);
            match &segment.style {
                Style::Link(href) if !self.mode.ansi() => {
                    write!(self.out, "{} <{}>", segment.text, href)?;
                }
                _ => self.write_colored(&segment.text, color, bold)?,
            }
        }
        Ok(())
    }

    fn write_colored(&mut self, text: &str, color: Color, bold: bool) -> Result<()> {
        if !self.mode.ansi() {
            write!(self.out, "{}", text)?;
            return Ok(());
        }
        if bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)?;
        if bold {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
