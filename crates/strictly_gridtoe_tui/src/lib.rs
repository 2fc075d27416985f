//! Terminal front end and command-line runner for strictly_gridtoe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use script::{ScriptError, parse_moves, render_text, run_script};
