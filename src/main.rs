mod cli_messages;
mod config;
mod consts;
mod controller;
mod events;
mod logging;
mod model;
mod provider;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::model::TimeRange;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for education platform analytics
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Time range to open with: 24h, 7d, 30d or 90d
        #[arg(long, value_name = "RANGE")]
        range: Option<TimeRange>,

        /// Path to the config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Disable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_background: bool,
    },
    /// Load the dashboard once and print it as text
    Snapshot {
        /// Time range to load: 24h, 7d, 30d or 90d
        #[arg(long, value_name = "RANGE")]
        range: Option<TimeRange>,

        /// Path to the config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write the default configuration file
    InitConfig {
        /// Path to the config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            range,
            config,
            no_background,
        } => {
            let mut config = load_config(config)?;
            if no_background {
                config.with_background_color = false;
            }
            run_tui_mode(setup_session(config, range)).await
        }
        Command::Snapshot { range, config } => {
            let config = load_config(config)?;
            run_headless_mode(setup_session(config, range)).await
        }
        Command::InitConfig { config, force } => {
            let path = resolve_config_path(config)?;
            init_config(&path, force)
        }
    }
}

fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf, std::io::Error> {
    match path {
        Some(path) => Ok(path),
        None => get_config_path(),
    }
}

/// Loads the config from `path` or the default location. A missing file means defaults.
fn load_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = resolve_config_path(path)?;
    Config::load_or_default(&path).map_err(|e| {
        let details = format!("{}: {}", path.display(), e);
        crate::print_cmd_error!("Failed to load config", details.as_str());
        e.into()
    })
}

fn init_config(path: &Path, force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        crate::print_cmd_warn!(
            "Config already exists",
            "{} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    crate::print_cmd_info!("Writing default config", "{}", path.display());
    Config::default()
        .save(path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    crate::print_cmd_success!("Config written", "{}", path.display());
    Ok(())
}
