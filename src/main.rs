//! termfolio - a terminal-style interactive portfolio
//!
//! Main entry point for the CLI application.

use std::io::{self, IsTerminal, Write};

use clap::Parser;
use termfolio::cli::{RenderMode, Renderer};
use termfolio::{Config, Repl, Terminal};
use tracing_subscriber::EnvFilter;

/// termfolio - a terminal-style interactive portfolio
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial color theme
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Seed for the random joke picker
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the README shown at startup
    #[arg(long)]
    no_readme: bool,

    /// Run a single command line (non-interactive)
    #[arg(long, short = 'c')]
    command: Option<String>,

    /// With --command, print host events as JSON lines
    #[arg(long, requires = "command")]
    json: bool,

    /// Read plain lines instead of raw key presses
    #[arg(long)]
    plain: bool,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    if args.print_config {
        println!("{}", Config::default_config_toml());
        return Ok(());
    }

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref theme) = args.theme {
        config.set_initial_theme(theme)?;
    }

    if args.seed.is_some() {
        config.session.seed = args.seed;
    }

    if args.no_readme {
        config.session.show_readme = false;
    }

    // Single command mode
    if let Some(line) = args.command {
        config.session.show_readme = false;
        let mut terminal = Terminal::new(&config)?;
        terminal.boot();

        let mut repl = Repl::with_terminal(terminal);
        let events = repl.run_once(&line);
        let stdout = io::stdout();

        if args.json {
            let mut out = stdout.lock();
            for event in &events {
                writeln!(out, "{}", serde_json::to_string(event)?)?;
            }
        } else {
            let mode = if stdout.is_terminal() {
                RenderMode::Line
            } else {
                RenderMode::Plain
            };
            let mut renderer = Renderer::new(stdout.lock(), mode);
            renderer.present(&events, repl.terminal().prompt(), "")?;
        }
        return Ok(());
    }

    // Interactive REPL mode
    let mut repl = Repl::with_config(config)?;
    repl.run(args.plain)?;

    Ok(())
}

/// Log to stderr, filtered by `TERMFOLIO_LOG` (e.g. `termfolio=debug`)
fn init_logging(debug: bool) {
    let default = if debug { "termfolio=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TERMFOLIO_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
