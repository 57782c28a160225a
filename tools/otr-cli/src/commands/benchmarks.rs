//! Print benchmark values.

use std::fmt::Write;
use std::path::PathBuf;

use otr_common::config::AppConfig;
use otr_metrics_core::BenchmarkTable;
use otr_swing_model::{BatSpeedLevel, ExitVelocityLevel, MetricName, SessionKind};

pub fn run(
    bat_speed_level: Option<String>,
    exit_velocity_level: Option<String>,
    benchmarks: Option<PathBuf>,
    json: bool,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let table = super::load_benchmarks(benchmarks.as_deref(), config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    // Typed parsing normalizes the spelling to the table key.
    let bat_speed_level = bat_speed_level
        .map(|s| s.parse::<BatSpeedLevel>().map(|l| l.label().to_string()))
        .transpose()?;
    let exit_velocity_level = exit_velocity_level
        .map(|s| s.parse::<ExitVelocityLevel>().map(|l| l.label().to_string()))
        .transpose()?;

    print!(
        "{}",
        session_listing(&table, SessionKind::BatSpeed, bat_speed_level.as_deref())
    );
    println!();
    print!(
        "{}",
        session_listing(&table, SessionKind::ExitVelocity, exit_velocity_level.as_deref())
    );
    Ok(())
}

/// Benchmarks of one session kind, one line per metric. Override tables may
/// leave metrics out; those print as "-".
fn session_listing(table: &BenchmarkTable, kind: SessionKind, only: Option<&str>) -> String {
    let metrics: Vec<MetricName> = match kind {
        SessionKind::BatSpeed => MetricName::BAT_SPEED.to_vec(),
        SessionKind::ExitVelocity => MetricName::EXIT_VELOCITY
            .into_iter()
            .filter(|m| m.is_benchmarked())
            .collect(),
    };

    let levels: Vec<&str> = match only {
        Some(level) => vec![level],
        None => table.levels(kind).collect(),
    };

    let mut out = format!("{} benchmarks:\n", kind.title());
    for level in levels {
        let _ = writeln!(out, "  {level}");
        for &metric in &metrics {
            let value = match table.lookup(kind, level, metric) {
                Ok(value) => format!(
                    "{:.*}{}",
                    metric.precision().max(2),
                    value,
                    metric.unit().suffix()
                ),
                Err(_) => "-".to_string(),
            };
            let _ = writeln!(out, "    {:<52} {value}", metric.label());
        }
    }
    out
}
