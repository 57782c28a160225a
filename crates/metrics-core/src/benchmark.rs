//! Level benchmark tables.
//!
//! Benchmarks are read-only once constructed. A table is built at startup
//! (from the built-in values or a JSON file) and shared by reference with
//! every report computation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use otr_common::error::{OtrError, OtrResult};
use otr_swing_model::{BatSpeedLevel, ExitVelocityLevel, MetricName, SessionKind};

/// Level label -> metric -> benchmark value.
pub type LevelTable = BTreeMap<String, BTreeMap<MetricName, f64>>;

/// Benchmark values for both session kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTable {
    bat_speed: LevelTable,
    exit_velocity: LevelTable,
}

fn bat_speed_row(avg: f64, p90: f64, time_to_contact: f64, attack_angle: f64) -> BTreeMap<MetricName, f64> {
    BTreeMap::from([
        (MetricName::AvgBatSpeed, avg),
        (MetricName::P90BatSpeed, p90),
        (MetricName::AvgTimeToContact, time_to_contact),
        (MetricName::AvgAttackAngleTop10, attack_angle),
    ])
}

fn exit_velocity_row(avg: f64, top8: f64, avg_la: f64, hard_hit_la: f64) -> BTreeMap<MetricName, f64> {
    BTreeMap::from([
        (MetricName::AvgExitVelocity, avg),
        (MetricName::P92ExitVelocity, top8),
        (MetricName::TotalAvgLaunchAngle, avg_la),
        (MetricName::AvgLaunchAngleTop8, hard_hit_la),
    ])
}

impl BenchmarkTable {
    /// The published benchmark sheet.
    pub fn standard() -> Self {
        let bat_speed = [
            (BatSpeedLevel::Youth, bat_speed_row(49.21, 52.81, 0.19, 11.78)),
            (BatSpeedLevel::HighSchool, bat_speed_row(62.4, 67.02, 0.163, 9.8)),
            (BatSpeedLevel::College, bat_speed_row(67.53, 72.54, 0.154, 10.52)),
            (BatSpeedLevel::Indy, bat_speed_row(69.2, 74.04, 0.154, 10.62)),
            (BatSpeedLevel::Affiliate, bat_speed_row(70.17, 75.14, 0.147, 11.09)),
        ]
        .into_iter()
        .map(|(level, row)| (level.label().to_string(), row))
        .collect();

        let exit_velocity = [
            (ExitVelocityLevel::U10, exit_velocity_row(50.0, 61.0, 12.14, 8.78)),
            (ExitVelocityLevel::U12, exit_velocity_row(59.0, 72.0, 12.14, 8.78)),
            (ExitVelocityLevel::U14, exit_velocity_row(68.0, 80.0, 12.14, 8.78)),
            (ExitVelocityLevel::Jv16u, exit_velocity_row(72.65, 85.0, 16.51, 11.47)),
            (ExitVelocityLevel::Varsity18u, exit_velocity_row(78.0, 91.5, 16.51, 11.47)),
            (ExitVelocityLevel::Youth, exit_velocity_row(58.4, 70.19, 12.14, 8.78)),
            (ExitVelocityLevel::HighSchool, exit_velocity_row(74.54, 86.75, 16.51, 11.47)),
            (ExitVelocityLevel::College, exit_velocity_row(81.57, 94.44, 17.57, 12.86)),
            (ExitVelocityLevel::Indy, exit_velocity_row(85.99, 98.12, 18.68, 14.74)),
            (ExitVelocityLevel::Affiliate, exit_velocity_row(85.49, 98.71, 18.77, 15.55)),
        ]
        .into_iter()
        .map(|(level, row)| (level.label().to_string(), row))
        .collect();

        Self {
            bat_speed,
            exit_velocity,
        }
    }

    /// Build a table from JSON of the shape
    /// `{"bat_speed": {level: {metric: value}}, "exit_velocity": {...}}`.
    ///
    /// Metrics filed under the wrong session kind are rejected.
    pub fn from_json(json: &str) -> OtrResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.check_sessions()?;
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> OtrResult<Self> {
        if !path.exists() {
            return Err(OtrError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            bat_speed_levels = table.bat_speed.len(),
            exit_velocity_levels = table.exit_velocity.len(),
            "Loaded benchmark table"
        );
        Ok(table)
    }

    fn check_sessions(&self) -> OtrResult<()> {
        for (session, table) in [
            (SessionKind::BatSpeed, &self.bat_speed),
            (SessionKind::ExitVelocity, &self.exit_velocity),
        ] {
            for (level, row) in table {
                if let Some(metric) = row.keys().find(|m| m.session() != session) {
                    return Err(OtrError::config(format!(
                        "benchmark '{metric}' for level '{level}' does not belong in the {session} table"
                    )));
                }
            }
        }
        Ok(())
    }

    fn table(&self, session: SessionKind) -> &LevelTable {
        match session {
            SessionKind::BatSpeed => &self.bat_speed,
            SessionKind::ExitVelocity => &self.exit_velocity,
        }
    }

    /// Look up a benchmark by level label.
    ///
    /// Fails with `MissingBenchmark` when the level or the metric is absent.
    /// There is no fallback to another level or a generic average.
    pub fn lookup(&self, session: SessionKind, level: &str, metric: MetricName) -> OtrResult<f64> {
        self.table(session)
            .get(level)
            .and_then(|row| row.get(&metric))
            .copied()
            .ok_or_else(|| OtrError::missing_benchmark(session.as_str(), level, metric.as_str()))
    }

    pub fn bat_speed(&self, level: BatSpeedLevel, metric: MetricName) -> OtrResult<f64> {
        self.lookup(SessionKind::BatSpeed, level.label(), metric)
    }

    pub fn exit_velocity(&self, level: ExitVelocityLevel, metric: MetricName) -> OtrResult<f64> {
        self.lookup(SessionKind::ExitVelocity, level.label(), metric)
    }

    /// Level labels present for a session kind.
    pub fn levels(&self, session: SessionKind) -> impl Iterator<Item = &str> {
        self.table(session).keys().map(String::as_str)
    }

    /// Every benchmark recorded for one level.
    pub fn row(&self, session: SessionKind, level: &str) -> Option<&BTreeMap<MetricName, f64>> {
        self.table(session).get(level)
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::standard()
    }
}
