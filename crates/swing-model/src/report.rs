//! Report data handed to the presentation layer.
//!
//! Everything here is plain data: numbers, grades, and zone counts. No
//! formatting decisions are made at this level.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::level::{BatSpeedLevel, ExitVelocityLevel};
use crate::metric::{Grade, MetricName};
use crate::swing::{SessionKind, ZoneId};

/// A measured metric with its benchmark and grade.
///
/// `benchmark` and `grade` are `None` only for unbenchmarked metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub metric: MetricName,
    pub measured: f64,
    pub benchmark: Option<f64>,
    pub grade: Option<Grade>,
}

/// Outcome of one metric: either a result or an explicit data gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricOutcome {
    Measured(MetricResult),
    InsufficientData { metric: MetricName, reason: String },
}

impl MetricOutcome {
    pub fn metric(&self) -> MetricName {
        match self {
            Self::Measured(result) => result.metric,
            Self::InsufficientData { metric, .. } => *metric,
        }
    }

    pub fn result(&self) -> Option<&MetricResult> {
        match self {
            Self::Measured(result) => Some(result),
            Self::InsufficientData { .. } => None,
        }
    }
}

/// A report section, or the reason it could not be computed.
///
/// `Failed` carries a fatal benchmark error. It only affects its own
/// section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    Ready(T),
    InsufficientData { reason: String },
    Failed { error: String },
}

impl<T> Section<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error.as_str()),
            _ => None,
        }
    }
}

/// Headline metrics of a bat-speed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatSpeedReport {
    pub level: BatSpeedLevel,
    /// Swings with a bat-speed reading.
    pub swing_count: usize,
    /// Swings at or above the 90th percentile.
    pub top_swing_count: usize,
    /// Fewer than two readings backed the percentile.
    pub low_sample: bool,
    pub metrics: Vec<MetricOutcome>,
}

/// Headline metrics and strike-zone grid of an exit-velocity session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitVelocityReport {
    pub level: ExitVelocityLevel,
    /// Batted balls with a positive exit velocity.
    pub batted_ball_count: usize,
    /// Rows dropped for a missing or non-positive exit velocity.
    pub excluded_count: usize,
    /// Batted balls at or above the 92nd percentile.
    pub top_swing_count: usize,
    /// Fewer than two readings backed the percentile.
    pub low_sample: bool,
    pub metrics: Vec<MetricOutcome>,
    pub zone_grid: ZoneGrid,
}

impl BatSpeedReport {
    pub fn get(&self, metric: MetricName) -> Option<&MetricOutcome> {
        self.metrics.iter().find(|o| o.metric() == metric)
    }
}

impl ExitVelocityReport {
    pub fn get(&self, metric: MetricName) -> Option<&MetricOutcome> {
        self.metrics.iter().find(|o| o.metric() == metric)
    }
}

/// Swing counts per strike zone.
///
/// Every zone id `1..=13` is present, with zero for zones nothing landed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneGrid {
    pub counts: BTreeMap<ZoneId, u32>,
    pub max_count: u32,
}

impl ZoneGrid {
    /// A grid with every zone at zero.
    pub fn empty() -> Self {
        Self {
            counts: ZoneId::all().map(|z| (z, 0)).collect(),
            max_count: 0,
        }
    }

    /// Build from sparse counts, filling absent zones with zero.
    pub fn from_counts(sparse: impl IntoIterator<Item = (ZoneId, u32)>) -> Self {
        let mut grid = Self::empty();
        for (zone, count) in sparse {
            *grid.counts.entry(zone).or_insert(0) += count;
        }
        grid.max_count = grid.counts.values().copied().max().unwrap_or(0);
        grid
    }

    pub fn count(&self, zone: ZoneId) -> u32 {
        self.counts.get(&zone).copied().unwrap_or(0)
    }

    /// Count relative to the busiest zone, in `[0.0, 1.0]`.
    pub fn normalized(&self, zone: ZoneId) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.count(zone) as f64 / self.max_count as f64
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl Default for ZoneGrid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Inclusive span of session dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Smallest range covering every date, if any.
    pub fn covering(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        dates.into_iter().fold(None, |range, date| {
            Some(match range {
                None => Self {
                    start: date,
                    end: date,
                },
                Some(Self { start, end }) => Self {
                    start: start.min(date),
                    end: end.max(date),
                },
            })
        })
    }

    /// Smallest range covering both.
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// The complete output of one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub generated_at: DateTime<Utc>,
    pub player_name: Option<String>,
    pub date_range: Option<DateRange>,
    /// `None` when no bat-speed export was supplied.
    pub bat_speed: Option<Section<BatSpeedReport>>,
    /// `None` when no exit-velocity export was supplied.
    pub exit_velocity: Option<Section<ExitVelocityReport>>,
}

impl SessionReport {
    /// Sections that failed, with their errors.
    pub fn failures(&self) -> Vec<(SessionKind, &str)> {
        let bat_speed = self
            .bat_speed
            .as_ref()
            .and_then(Section::failure)
            .map(|e| (SessionKind::BatSpeed, e));
        let exit_velocity = self
            .exit_velocity
            .as_ref()
            .and_then(Section::failure)
            .map(|e| (SessionKind::ExitVelocity, e));
        bat_speed.into_iter().chain(exit_velocity).collect()
    }
}
