//! Inline markup for canned content
//!
//! Portfolio text is written with lightweight tags instead of hand-built
//! segment vectors:
//!
//! - `[hl]text[/]` switches to a style until `[/]` (tags are listed in
//!   [`Style::from_tag`]); `[link=URL]text[/]` makes a hyperlink
//! - `[[` is a literal `[`
//! - any other bracket is literal text, so `cat [file]` needs no escaping
//!
//! Tags do not nest: opening a tag while another is open replaces it.
//! A style stays active across newlines until closed.

use crate::core::{Line, Segment, Style};

/// Parse markup into styled lines
pub fn parse(source: &str) -> Vec<Line> {
    let mut parser = Parser::default();
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '\n' => {
                parser.break_line();
                rest = &rest[1..];
            }
            '[' => {
                if let Some(after) = rest.strip_prefix("[[") {
                    parser.text.push('[');
                    rest = after;
                } else if let Some(after) = rest.strip_prefix("[/]") {
                    parser.switch(Style::Plain);
                    rest = after;
                } else if let Some((style, after)) = open_tag(rest) {
                    parser.switch(style);
                    rest = after;
                } else {
                    parser.text.push('[');
                    rest = &rest[1..];
                }
            }
            _ => {
                parser.text.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    parser.finish()
}

/// Recognise `[tag]` at the start of `input`
fn open_tag(input: &str) -> Option<(Style, &str)> {
    let close = input.find(']')?;
    let tag = &input[1..close];
    if tag.contains('[') || tag.contains('\n') {
        return None;
    }
    Style::from_tag(tag).map(|style| (style, &input[close + 1..]))
}

#[derive(Default)]
struct Parser {
    lines: Vec<Line>,
    current: Line,
    text: String,
    style: Option<Style>,
}

impl Parser {
    fn style(&self) -> Style {
        self.style.clone().unwrap_or(Style::Plain)
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            let style = self.style();
            self.current.push(Segment::new(text, style));
        }
    }

    fn switch(&mut self, style: Style) {
        self.flush();
        self.style = Some(style);
    }

    fn break_line(&mut self) {
        self.flush();
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn finish(mut self) -> Vec<Line> {
        self.break_line();
        self.lines
    }
}
