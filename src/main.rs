//! pagebar demo table pager - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Demo table pager for the pagebar pagination widget
#[derive(Parser, Debug)]
#[command(name = "pagebar")]
#[command(version)]
#[command(about = "Pages a ticker table with a responsive pagination bar")]
pub struct Args {
    /// Path to a JSONL row file (generates sample rows if not provided)
    pub file: Option<PathBuf>,

    /// Number of sample rows to generate when no file is given
    #[arg(long)]
    pub rows: Option<usize>,

    /// Rows shown per table page
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Most page buttons shown at once
    #[arg(long)]
    pub group_size: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pagebar::config::load_config_with_precedence(args.config.clone())?;
        let merged = pagebar::config::merge_config(config_file);
        let with_env = pagebar::config::apply_env_overrides(merged);
        pagebar::config::apply_cli_overrides(with_env, args.per_page, args.group_size, args.rows)
    };

    // Initialize tracing with configured log file path
    pagebar::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Load rows: an explicit file wins, otherwise generated sample data.
    // Bad lines inside a file are skipped and logged, not fatal.
    let source = pagebar::source::detect_row_source(args.file.clone(), config.rows);
    let loaded = source.load()?;

    let cli_args = pagebar::view::CliArgs::new(
        config.per_page.max(1),
        pagebar::pager::GroupSize::clamping(config.group_size),
        pagebar::view::ColorConfig::from_env_and_args(args.no_color),
    );

    // Run the TUI with the loaded rows
    pagebar::view::run_with_rows(loaded.rows, cli_args)?;

    Ok(())
}
