use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use growth_calc::{Calculator, Config, LineSource, Session};
use log::{debug, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Growth time calculator for the four-season farming calendar
#[derive(Debug, Parser)]
#[command(name = "growth-calc")]
#[command(about = "Computes in-game growth time between a planted and a harvested timestamp", long_about = None)]
#[command(version)]
struct Cli {
    /// Compute once and exit (if not specified, starts the interactive prompt)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read 12:xx AM as just after midnight instead of just after noon
    #[arg(long)]
    standard_clock: bool,

    /// Reject day numbers outside 1-10
    #[arg(long)]
    strict_days: bool,

    /// TOML file with calculator options; flags take precedence
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute a single growth time
    Once {
        /// Planted time, e.g. "Summer 15 3:30 PM"
        planted: String,
        /// Harvested time, e.g. "Autumn 28 8:45 AM"
        harvested: String,
    },
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(config.with_flags(self.standard_clock, self.strict_days))
    }
}

/// Line editor with history for the interactive prompt
struct Terminal(DefaultEditor);

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.0.readline(prompt) {
            Ok(line) => {
                let _ = self.0.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("Failed to read input"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    run(Cli::parse())
}

/// Errors surface from `main`, so `once` exits non-zero on bad input.
fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    debug!("Using {config:?}");
    let calculator = Calculator::new(config);

    match cli.command {
        Some(Commands::Once { planted, harvested }) => {
            let growth = calculator.growth_time_from_str(&planted, &harvested)?;
            info!("{planted} -> {harvested}: {growth}");
            println!("Growth time was {growth} days.");
            Ok(())
        }
        None => {
            let editor = DefaultEditor::new().context("Failed to start line editor")?;
            Session::new(Terminal(editor), io::stdout(), calculator).run()
        }
    }
}
