//! Built-in command handlers
//!
//! Handlers only talk to the terminal through [`CommandContext`], so they can be
//! exercised against a recording context in tests.

use crate::commands::content;
use crate::commands::registry::CommandContext;
use crate::core::{Line, OutputBlock, Segment, Style};

pub fn help(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.print(OutputBlock::card(content::HELP));
}

pub fn clear(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.clear_output();
}

pub fn about(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.print(OutputBlock::card(content::ABOUT));
}

pub fn skills(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.print(OutputBlock::card(content::SKILLS));
}

pub fn experience(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.print(OutputBlock::card(content::EXPERIENCE));
    ctx.print(OutputBlock::card(content::HONORS));
}

pub fn contact(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.print(OutputBlock::card(content::CONTACT));
}

pub fn readme(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.print(OutputBlock::card(content::README));
}

pub fn ls(ctx: &mut dyn CommandContext, _args: &[&str]) {
    let mut listing = Line::blank();
    let mut total = 0;

    for (i, name) in ctx.files().filenames().enumerate() {
        if i > 0 {
            listing.push(Segment::plain("  "));
        }
        listing.push(Segment::new(name, Style::FileItem));
        total += 1;
    }

    ctx.print(OutputBlock::from_lines(vec![listing]));
    ctx.print(OutputBlock::markup(&format!("\nTotal: {} files", total)));
}

/// `cat <file>`: only the first argument is consulted
pub fn cat(ctx: &mut dyn CommandContext, args: &[&str]) {
    let Some(&filename) = args.first() else {
        ctx.print(OutputBlock::markup("Usage: cat [filename]").error());
        ctx.print(OutputBlock::markup("Try: cat README.md"));
        return;
    };

    match ctx.files().command_for(filename) {
        Some(command) => {
            if !ctx.invoke(command, &[]) {
                tracing::warn!(filename, command, "file maps to an unregistered command");
            }
        }
        None => {
            ctx.print(
                OutputBlock::from_lines(vec![Line::from_segments(vec![Segment::plain(format!(
                    "cat: {}: No such file or directory",
                    filename
                ))])])
                .error(),
            );
        }
    }
}

pub fn whoami(ctx: &mut dyn CommandContext, _args: &[&str]) {
    let visitor = ctx.visitor().to_string();
    ctx.print(OutputBlock::from_lines(vec![Line::from_segments(vec![
        Segment::plain(visitor),
    ])]));
    ctx.print(OutputBlock::blank());
    ctx.print(OutputBlock::markup(&format!(
        "But you're exploring [hl]{}'s[/] portfolio!",
        content::OWNER
    )));
}

pub fn theme(ctx: &mut dyn CommandContext, _args: &[&str]) {
    let name = ctx.cycle_theme();
    ctx.print(
        OutputBlock::from_lines(vec![Line::from_segments(vec![
            Segment::plain("Theme changed to: "),
            Segment::new(name, Style::Highlight),
        ])])
        .success(),
    );
}

pub fn sudo(ctx: &mut dyn CommandContext, _args: &[&str]) {
    let pick = ctx.random_index(content::SUDO_RESPONSES.len());
    ctx.print(OutputBlock::markup(content::SUDO_RESPONSES[pick]).warning());
}

pub fn hack(ctx: &mut dyn CommandContext, _args: &[&str]) {
    print_lines(ctx, content::HACK);
}

pub fn matrix(ctx: &mut dyn CommandContext, _args: &[&str]) {
    print_lines(ctx, content::MATRIX);
}

pub fn coffee(ctx: &mut dyn CommandContext, _args: &[&str]) {
    ctx.print(OutputBlock::preformatted(content::COFFEE_ART));
    print_lines(ctx, content::COFFEE);
}

/// One block per line, the way a typed-out sequence appears
fn print_lines(ctx: &mut dyn CommandContext, source: &str) {
    for line in crate::core::markup::parse(source) {
        ctx.print(OutputBlock::from_lines(vec![line]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::files::FileTable;

    /// Context that records everything handlers do
    struct Recorder {
        blocks: Vec<OutputBlock>,
        cleared: bool,
        themes: Vec<&'static str>,
        theme: usize,
        invoked: Vec<String>,
        files: FileTable,
        next_random: usize,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                blocks: Vec::new(),
                cleared: false,
                themes: vec!["default", "matrix"],
                theme: 0,
                invoked: Vec::new(),
                files: FileTable::builtin(),
                next_random: 0,
            }
        }

        fn text(&self) -> String {
            self.blocks
                .iter()
                .map(OutputBlock::text)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    impl CommandContext for Recorder {
        fn print(&mut self, block: OutputBlock) {
            self.blocks.push(block);
        }

        fn clear_output(&mut self) {
            self.blocks.clear();
            self.cleared = true;
        }

        fn cycle_theme(&mut self) -> String {
            self.theme = (self.theme + 1) % self.themes.len();
            self.themes[self.theme].to_string()
        }

        fn random_index(&mut self, len: usize) -> usize {
            self.next_random % len
        }

        fn files(&self) -> &FileTable {
            &self.files
        }

        fn invoke(&mut self, name: &str, _args: &[&str]) -> bool {
            self.invoked.push(name.to_string());
            true
        }

        fn visitor(&self) -> &str {
            "visitor"
        }
    }

    #[test]
    fn test_cat_without_argument() {
        let mut ctx = Recorder::new();
        cat(&mut ctx, &[]);
        assert_eq!(ctx.blocks.len(), 2);
        assert_eq!(ctx.blocks[0].text(), "Usage: cat [filename]");
        assert_eq!(ctx.blocks[0].tone, crate::core::Tone::Error);
        assert_eq!(ctx.blocks[1].text(), "Try: cat README.md");
    }

    #[test]
    fn test_cat_delegates_to_command() {
        let mut ctx = Recorder::new();
        cat(&mut ctx, &["README.md", "ignored.txt"]);
        assert_eq!(ctx.invoked, vec!["readme"]);
        assert!(ctx.blocks.is_empty());
    }

    #[test]
    fn test_cat_unknown_file() {
        let mut ctx = Recorder::new();
        cat(&mut ctx, &["[hl]x.txt"]);
        assert!(ctx.invoked.is_empty());
        assert_eq!(ctx.blocks.len(), 1);
        assert_eq!(
            ctx.blocks[0].text(),
            "cat: [hl]x.txt: No such file or directory"
        );
    }

    #[test]
    fn test_ls_lists_all_files() {
        let mut ctx = Recorder::new();
        ls(&mut ctx, &[]);
        let text = ctx.text();
        assert!(text.starts_with("about.txt  skills.txt"));
        assert!(text.contains("README.md"));
        assert!(text.ends_with("Total: 5 files"));
        assert!(ctx.blocks[0].lines[0]
            .segments
            .iter()
            .any(|s| s.style == Style::FileItem));
    }

    #[test]
    fn test_theme_announces_new_theme() {
        let mut ctx = Recorder::new();
        theme(&mut ctx, &[]);
        assert_eq!(ctx.text(), "Theme changed to: matrix");
        assert_eq!(ctx.blocks[0].tone, crate::core::Tone::Success);
    }

    #[test]
    fn test_sudo_uses_random_index() {
        let mut ctx = Recorder::new();
        ctx.next_random = 1;
        sudo(&mut ctx, &[]);
        assert_eq!(ctx.text(), content::SUDO_RESPONSES[1]);
        assert_eq!(ctx.blocks[0].tone, crate::core::Tone::Warning);
    }

    #[test]
    fn test_clear() {
        let mut ctx = Recorder::new();
        help(&mut ctx, &[]);
        clear(&mut ctx, &[]);
        assert!(ctx.cleared);
        assert!(ctx.blocks.is_empty());
    }

    #[test]
    fn test_whoami() {
        let mut ctx = Recorder::new();
        whoami(&mut ctx, &[]);
        assert_eq!(ctx.blocks.len(), 3);
        assert_eq!(ctx.blocks[0].text(), "visitor");
        assert!(ctx.blocks[2].text().contains("Jacopo Vendramin's"));
    }

    #[test]
    fn test_coffee_has_art() {
        let mut ctx = Recorder::new();
        coffee(&mut ctx, &[]);
        assert_eq!(ctx.blocks[0].layout, crate::core::Layout::Preformatted);
        assert!(ctx.text().contains("just coffee"));
    }

    #[test]
    fn test_experience_prints_two_cards() {
        let mut ctx = Recorder::new();
        experience(&mut ctx, &[]);
        assert_eq!(ctx.blocks.len(), 2);
        assert!(ctx.blocks[1].text().contains("Honors & Awards"));
    }
}
