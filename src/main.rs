use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pocketcalc::calculator::{CalculatorEngine, parse_keys};
use pocketcalc::config::Config;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Drive the pocket calculator from typed key presses.
#[derive(Debug, Parser)]
#[command(name = "pocketcalc", version, about)]
struct Args {
    /// Path to a config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the display state as JSON.
    #[arg(long)]
    json: bool,

    /// Keys to press, e.g. `12 + 3 =`. Reads stdin line by line when empty.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let mut engine = CalculatorEngine::with_config(&config);
    let mut stdout = io::stdout().lock();

    if !args.keys.is_empty() {
        let keys = parse_keys(&args.keys.join(" ")).context("Invalid key sequence")?;
        for key in keys {
            engine.press(key);
        }
        print_display(&mut stdout, &engine, args.json)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match parse_keys(&line) {
            Ok(keys) => {
                for key in keys {
                    engine.press(key);
                }
            }
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        }
        print_display(&mut stdout, &engine, args.json)?;
    }

    Ok(())
}

fn print_display(out: &mut impl Write, engine: &CalculatorEngine, json: bool) -> Result<()> {
    if json {
        let state = serde_json::to_string(&engine.state())?;
        writeln!(out, "{}", state)?;
    } else {
        writeln!(
            out,
            "[{}] {}",
            engine.clear_button_label(),
            engine.display_text()
        )?;
    }
    out.flush()?;
    Ok(())
}
