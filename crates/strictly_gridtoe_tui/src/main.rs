//! Strictly Gridtoe - M×N tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_gridtoe::{Dimensions, DisplayOrder};
use strictly_gridtoe_tui::{Cli, Command, GameConfig, parse_moves, render_text, run_script, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            rows,
            cols,
            descending,
        } => {
            let dims = resolve_dimensions(&config, rows, cols)?;
            let order = if descending {
                DisplayOrder::Descending
            } else {
                *config.order()
            };
            tui::run_tui(config.log_file(), dims, order)?;
        }
        Command::Script {
            rows,
            cols,
            json,
            moves,
        } => {
            // Script output goes to stdout, so logs go to stderr
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let dims = resolve_dimensions(&config, rows, cols)?;
            let intents = parse_moves(&moves).context("Failed to parse script moves")?;
            info!(%dims, steps = intents.len(), "Running script");
            let view = run_script(dims, &intents);

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", render_text(&view));
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    GameConfig::load(path).with_context(|| match path {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load default config".to_string(),
    })
}

fn resolve_dimensions(
    config: &GameConfig,
    rows: Option<usize>,
    cols: Option<usize>,
) -> Result<Dimensions> {
    config
        .resolve(rows, cols)
        .context("Board size must be 3 to 15 on each side")
}
