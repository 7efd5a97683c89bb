//! deskboard - terminal project-management dashboard

use anyhow::{Context, Result};
use clap::Parser;
use deskboard_core::{ColorScheme, Preferences};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "deskboard",
    version,
    about = "Terminal project-management dashboard",
    long_about = "A keyboard-driven dashboard for projects, tasks, team, calendar,\n\
                  files, invoices and masterdata, backed by seeded mock collections.\n\
                  \n\
                  Sign in with any well-formed email and a password of at least six\n\
                  characters. All data lives in memory for the session; only the\n\
                  color-scheme preference is persisted.\n\
                  \n\
                  Examples:\n\
                    deskboard                        # Run with defaults\n\
                    deskboard --theme light          # One-off scheme override\n\
                    deskboard --state-dir ~/tmp/db   # Custom preferences location\n\
                  \n\
                  Environment Variables:\n\
                    DESKBOARD_STATE_DIR              # Override the state directory\n\
                    DESKBOARD_LOG                    # Log filter (e.g. debug, deskboard_core=trace)"
)]
struct Cli {
    /// Directory for preferences and logs (default: platform state dir)
    #[arg(long, env = "DESKBOARD_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Color scheme for this run only; does not touch the saved preference
    #[arg(long, value_parser = ["dark", "light"])]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let state_dir = cli
        .state_dir
        .or_else(|| dirs::state_dir().map(|d| d.join("deskboard")))
        .or_else(|| dirs::home_dir().map(|h| h.join(".deskboard")))
        .context("Could not determine a state directory")?;

    init_logging(&state_dir)?;

    let mut preferences = Preferences::load(&state_dir);
    if let Some(theme) = cli.theme.as_deref() {
        preferences.color_scheme = match theme {
            "light" => ColorScheme::Light,
            _ => ColorScheme::Dark,
        };
    }

    deskboard_tui::run(state_dir, preferences).await
}

/// Log to a file under the state dir; stdout belongs to the TUI.
fn init_logging(state_dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(state_dir)
        .with_context(|| format!("Failed to create {}", state_dir.display()))?;
    let log_path = state_dir.join("deskboard.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to open {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DESKBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!(state_dir = %state_dir.display(), "deskboard starting");
    Ok(())
}
