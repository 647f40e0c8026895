//! Shared types used across termfolio modules
//!
//! Contains the rich-text output model and the events a host surface consumes.

use serde::{Deserialize, Serialize};

use crate::core::markup;

/// Cosmetic style carried by a run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "href")]
pub enum Style {
    Plain,
    /// The `user@host:path$` marker on echoed lines
    Prompt,
    Highlight,
    /// A command name the visitor can type
    Command,
    Error,
    Success,
    Warning,
    /// Card heading
    Title,
    Accent,
    /// Dates and tech stacks under a heading
    Tech,
    /// An entry in a file listing
    FileItem,
    /// Hyperlink with its target
    Link(String),
}

impl Style {
    /// Resolve a markup tag name to a style
    pub fn from_tag(tag: &str) -> Option<Self> {
        let style = match tag {
            "hl" => Style::Highlight,
            "cmd" => Style::Command,
            "err" => Style::Error,
            "ok" => Style::Success,
            "warn" => Style::Warning,
            "title" => Style::Title,
            "accent" => Style::Accent,
            "tech" => Style::Tech,
            "item" => Style::FileItem,
            _ => return tag.strip_prefix("link=").map(|url| Style::Link(url.to_string())),
        };
        Some(style)
    }
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    /// Create a segment with an explicit style
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled segment
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Plain)
    }
}

/// One visual line of a block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    /// Create an empty line
    pub fn blank() -> Self {
        Self::default()
    }

    /// Create a line from segments
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Append a segment
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Text without styling
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }
}

/// Overall colouring of a block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Normal,
    Error,
    Success,
    Warning,
}

/// How a block is laid out by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Line,
    /// Framed content card
    Card,
    /// Whitespace-preserving art
    Preformatted,
}

/// A styled unit appended to the transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBlock {
    pub tone: Tone,
    pub layout: Layout,
    pub lines: Vec<Line>,
}

impl OutputBlock {
    /// Block parsed from inline markup (see [`crate::core::markup`])
    pub fn markup(source: &str) -> Self {
        Self {
            lines: markup::parse(source),
            ..Self::default()
        }
    }

    /// Card parsed from inline markup
    pub fn card(source: &str) -> Self {
        Self::markup(source).with_layout(Layout::Card)
    }

    /// Preformatted block; the text is taken literally
    pub fn preformatted(text: &str) -> Self {
        Self {
            layout: Layout::Preformatted,
            lines: text
                .lines()
                .map(|l| Line::from_segments(vec![Segment::plain(l)]))
                .collect(),
            ..Self::default()
        }
    }

    /// Block holding a single empty line
    pub fn blank() -> Self {
        Self {
            lines: vec![Line::blank()],
            ..Self::default()
        }
    }

    /// Block built from pre-styled lines
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn error(self) -> Self {
        self.with_tone(Tone::Error)
    }

    pub fn success(self) -> Self {
        self.with_tone(Tone::Success)
    }

    pub fn warning(self) -> Self {
        self.with_tone(Tone::Warning)
    }

    /// Text without styling, lines joined by newlines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Instruction for the visual host surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum HostEvent {
    /// Insert a block directly above the live input line
    Append { block: OutputBlock },
    /// Remove every rendered block, keeping the input line
    Clear,
    /// Replace the live input line with a fresh, empty one
    PromptLine,
    /// Scroll the transcript container to its bottom
    ScrollToBottom,
    /// Set the class on the visual root (`None` for the default theme)
    ThemeClass { class: Option<String> },
}
