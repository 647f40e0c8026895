//! Transcript - the rendered output above the live input line
//!
//! Keeps the blocks currently on screen and queues [`HostEvent`]s for the host
//! surface, which drains them after each interaction.

use crate::core::{HostEvent, OutputBlock};

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    blocks: Vec<OutputBlock>,
    events: Vec<HostEvent>,
    prompt_lines: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block above the input line and scroll to the bottom
    pub fn append(&mut self, block: OutputBlock) {
        self.blocks.push(block.clone());
        self.events.push(HostEvent::Append { block });
        self.events.push(HostEvent::ScrollToBottom);
    }

    /// Remove every block; the input line is untouched
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.events.push(HostEvent::Clear);
    }

    /// Replace the input line with a fresh one
    pub fn new_prompt_line(&mut self) {
        self.prompt_lines += 1;
        self.events.push(HostEvent::PromptLine);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.events.push(HostEvent::ScrollToBottom);
    }

    pub fn set_theme_class(&mut self, class: Option<String>) {
        self.events.push(HostEvent::ThemeClass { class });
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn blocks(&self) -> &[OutputBlock] {
        &self.blocks
    }

    /// Number of prompt lines started so far
    pub fn prompt_lines(&self) -> usize {
        self.prompt_lines
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All block text, one block per line group
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(OutputBlock::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
