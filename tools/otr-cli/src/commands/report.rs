//! Compute and render a player report.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use otr_common::config::AppConfig;
use otr_ingest::{read_session_file, IngestOptions, IngestedSession};
use otr_metrics_core::{ReportBuilder, ReportRequest};
use otr_report::ReportFormat;
use otr_swing_model::{LevelSelection, SessionKind};

pub struct ReportArgs {
    pub bat_speed: Option<PathBuf>,
    pub exit_velocity: Option<PathBuf>,
    pub bat_speed_level: Option<String>,
    pub exit_velocity_level: Option<String>,
    pub player: Option<String>,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub benchmarks: Option<PathBuf>,
    pub bat_speed_skip_rows: Option<usize>,
}

fn ingest(
    path: &Path,
    kind: SessionKind,
    config: &AppConfig,
    skip_rows: Option<usize>,
) -> anyhow::Result<IngestedSession> {
    let mut options = IngestOptions::for_session(kind, &config.ingest)?;
    if let Some(skip_rows) = skip_rows {
        options = options.with_skip_rows(skip_rows);
    }

    let session = read_session_file(path, kind, &options)
        .with_context(|| format!("Failed to read {} export {}", kind.title(), path.display()))?;

    if session.records.is_empty() {
        tracing::warn!(path = %path.display(), "{} export has no data rows", kind.title());
    }
    if !session.summary.missing_columns.is_empty() {
        tracing::info!(
            path = %path.display(),
            missing = ?session.summary.missing_columns,
            "Optional columns not in export"
        );
    }
    Ok(session)
}

pub fn run(args: ReportArgs, config: &AppConfig) -> anyhow::Result<()> {
    if args.bat_speed.is_none() && args.exit_velocity.is_none() {
        anyhow::bail!("Nothing to report: pass --bat-speed and/or --exit-velocity");
    }

    // Levels and benchmarks are settled before any file is read.
    let levels = LevelSelection::parse(
        args.bat_speed_level
            .as_deref()
            .unwrap_or(&config.levels.bat_speed),
        args.exit_velocity_level
            .as_deref()
            .unwrap_or(&config.levels.exit_velocity),
    )?;
    let table = super::load_benchmarks(args.benchmarks.as_deref(), config)?;

    let bat_speed = args
        .bat_speed
        .as_deref()
        .map(|path| ingest(path, SessionKind::BatSpeed, config, args.bat_speed_skip_rows))
        .transpose()?;
    let exit_velocity = args
        .exit_velocity
        .as_deref()
        .map(|path| ingest(path, SessionKind::ExitVelocity, config, None))
        .transpose()?;

    let date_range = [&bat_speed, &exit_velocity]
        .into_iter()
        .flatten()
        .filter_map(|session| session.summary.date_range)
        .reduce(|a, b| a.merge(b));

    let report = ReportBuilder::new(&table)
        .session(ReportRequest {
            levels,
            bat_speed_rows: bat_speed.as_ref().map(|s| s.records.as_slice()),
            exit_velocity_rows: exit_velocity.as_ref().map(|s| s.records.as_slice()),
            player_name: args.player,
            date_range,
            generated_at: Utc::now(),
        });

    let rendered = args.format.render(&report)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    // Healthy sections are already written; a failed one still fails the run.
    let failures = report.failures();
    for (kind, error) in &failures {
        eprintln!("{} section not computed: {error}", kind.title());
    }
    if !failures.is_empty() {
        anyhow::bail!("{} of the report's sections failed", failures.len());
    }

    tracing::info!(
        bat_speed = %levels.bat_speed,
        exit_velocity = %levels.exit_velocity,
        "Report complete"
    );
    Ok(())
}
