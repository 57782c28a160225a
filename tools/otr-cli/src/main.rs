//! OTR CLI - grade swing sensor sessions against level benchmarks.
//!
//! Usage:
//!   otr report [OPTIONS]       Compute and render a player report
//!   otr benchmarks [OPTIONS]   Print the benchmark table
//!   otr levels                 List the selectable levels
//!   otr schema                 Show the CSV column mapping
//!   otr config [--init]        Show or create the config file

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use otr_common::config::AppConfig;
use otr_report::ReportFormat;

mod commands;

#[derive(Parser)]
#[command(
    name = "otr",
    about = "Swing metrics reports graded against level benchmarks",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: $XDG_CONFIG_HOME/otr-metrics/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a player report from sensor exports
    Report {
        /// Bat-speed sensor export (CSV)
        #[arg(long)]
        bat_speed: Option<PathBuf>,

        /// Exit-velocity sensor export (CSV)
        #[arg(long)]
        exit_velocity: Option<PathBuf>,

        /// Bat-speed benchmark level (e.g. "High School")
        #[arg(long)]
        bat_speed_level: Option<String>,

        /// Exit-velocity benchmark level (e.g. "Var/18u")
        #[arg(long)]
        exit_velocity_level: Option<String>,

        /// Player name shown in the report header
        #[arg(long)]
        player: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Benchmark table (JSON) replacing the built-in values
        #[arg(long)]
        benchmarks: Option<PathBuf>,

        /// Preamble lines before the bat-speed header row
        #[arg(long)]
        bat_speed_skip_rows: Option<usize>,
    },

    /// Print benchmark values
    Benchmarks {
        /// Only this bat-speed level
        #[arg(long)]
        bat_speed_level: Option<String>,

        /// Only this exit-velocity level
        #[arg(long)]
        exit_velocity_level: Option<String>,

        /// Benchmark table (JSON) replacing the built-in values
        #[arg(long)]
        benchmarks: Option<PathBuf>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// List selectable levels
    Levels,

    /// Show the CSV column mapping
    Schema {
        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active configuration
    Config {
        /// Write the default config to the standard location
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `otr config` reports a missing file instead of failing on it.
    let allow_missing = matches!(cli.command, Commands::Config { .. });
    let config = load_config(cli.config.as_deref(), allow_missing)?;

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    otr_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Report {
            bat_speed,
            exit_velocity,
            bat_speed_level,
            exit_velocity_level,
            player,
            format,
            output,
            benchmarks,
            bat_speed_skip_rows,
        } => commands::report::run(
            commands::report::ReportArgs {
                bat_speed,
                exit_velocity,
                bat_speed_level,
                exit_velocity_level,
                player,
                format: format.into(),
                output,
                benchmarks,
                bat_speed_skip_rows,
            },
            &config,
        ),
        Commands::Benchmarks {
            bat_speed_level,
            exit_velocity_level,
            benchmarks,
            json,
        } => commands::benchmarks::run(
            bat_speed_level,
            exit_velocity_level,
            benchmarks,
            json,
            &config,
        ),
        Commands::Levels => commands::levels::run(),
        Commands::Schema { json } => commands::schema::run(json),
        Commands::Config { init } => commands::config::run(init, cli.config, &config),
    }
}

fn load_config(explicit: Option<&Path>, allow_missing: bool) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) if allow_missing && !path.exists() => Ok(AppConfig::default()),
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display())),
        None => Ok(AppConfig::load()),
    }
}
