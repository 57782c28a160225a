//! Report assembly: aggregation, grading, and heatmap for each session.
//!
//! All benchmarks for a section are resolved and validated before any
//! statistic is computed, so a missing or invalid benchmark never leaves a
//! half-graded section behind.

use chrono::{DateTime, Utc};

use otr_common::error::{OtrError, OtrResult};
use otr_swing_model::{
    BatSpeedLevel, BatSpeedReport, DateRange, ExitVelocityLevel, ExitVelocityReport,
    LevelSelection, MetricName, MetricOutcome, MetricResult, Section, SessionKind,
    SessionReport, SwingRecord,
};

use crate::aggregator::SwingAggregator;
use crate::benchmark::BenchmarkTable;
use crate::grader::Grader;
use crate::zone_heatmap::ZoneHeatmapBuilder;

/// Inputs for one full report run.
#[derive(Debug, Clone)]
pub struct ReportRequest<'a> {
    pub levels: LevelSelection,
    /// `None` when no bat-speed export was supplied.
    pub bat_speed_rows: Option<&'a [SwingRecord]>,
    /// `None` when no exit-velocity export was supplied.
    pub exit_velocity_rows: Option<&'a [SwingRecord]>,
    pub player_name: Option<String>,
    pub date_range: Option<DateRange>,
    pub generated_at: DateTime<Utc>,
}

/// Computes graded report sections against a shared benchmark table.
pub struct ReportBuilder<'t> {
    benchmarks: &'t BenchmarkTable,
    grader: Grader,
    aggregator: SwingAggregator,
    heatmap: ZoneHeatmapBuilder,
}

impl<'t> ReportBuilder<'t> {
    pub fn new(benchmarks: &'t BenchmarkTable) -> Self {
        Self::with_grader(benchmarks, Grader::default())
    }

    pub fn with_grader(benchmarks: &'t BenchmarkTable, grader: Grader) -> Self {
        Self {
            benchmarks,
            grader,
            aggregator: SwingAggregator::with_defaults(),
            heatmap: ZoneHeatmapBuilder::new(),
        }
    }

    /// Resolve and validate every benchmark a section will grade against.
    fn resolve_benchmarks(
        &self,
        session: SessionKind,
        level: &str,
        metrics: &[MetricName],
    ) -> OtrResult<Vec<(MetricName, Option<f64>)>> {
        metrics
            .iter()
            .map(|&metric| {
                if !metric.is_benchmarked() {
                    return Ok((metric, None));
                }
                let benchmark = self.benchmarks.lookup(session, level, metric)?;
                self.grader.check_benchmark(metric, benchmark)?;
                Ok((metric, Some(benchmark)))
            })
            .collect()
    }

    fn outcome(
        &self,
        metric: MetricName,
        measured: Option<f64>,
        benchmark: Option<f64>,
    ) -> OtrResult<MetricOutcome> {
        let Some(measured) = measured else {
            return Ok(MetricOutcome::InsufficientData {
                metric,
                reason: insufficient_reason(metric).to_string(),
            });
        };

        let grade = match benchmark {
            Some(benchmark) => self.grader.grade_metric(metric, measured, benchmark)?,
            None => None,
        };

        Ok(MetricOutcome::Measured(MetricResult {
            metric,
            measured,
            benchmark,
            grade,
        }))
    }

    /// Graded bat-speed section.
    ///
    /// Returns `Err` only for fatal benchmark problems. A session with no
    /// usable bat-speed readings is `Section::InsufficientData`.
    pub fn bat_speed(
        &self,
        level: BatSpeedLevel,
        rows: &[SwingRecord],
    ) -> OtrResult<Section<BatSpeedReport>> {
        let benchmarks =
            self.resolve_benchmarks(SessionKind::BatSpeed, level.label(), &MetricName::BAT_SPEED)?;

        let summary = match self.aggregator.bat_speed(rows) {
            Ok(summary) => summary,
            Err(OtrError::InsufficientData { reason, .. }) => {
                tracing::warn!(%level, rows = rows.len(), "Bat speed section skipped: {reason}");
                return Ok(Section::InsufficientData { reason });
            }
            Err(e) => return Err(e),
        };

        let metrics = benchmarks
            .into_iter()
            .map(|(metric, benchmark)| self.outcome(metric, summary.value(metric), benchmark))
            .collect::<OtrResult<Vec<_>>>()?;

        tracing::info!(%level, swings = summary.swing_count, "Bat speed section graded");

        Ok(Section::Ready(BatSpeedReport {
            level,
            swing_count: summary.swing_count,
            top_swing_count: summary.top_subset.len(),
            low_sample: summary.p90_bat_speed.low_sample,
            metrics,
        }))
    }

    /// Graded exit-velocity section with its strike-zone grid.
    ///
    /// A session without a single struck ball is `Section::InsufficientData`
    /// and carries no grid.
    pub fn exit_velocity(
        &self,
        level: ExitVelocityLevel,
        rows: &[SwingRecord],
    ) -> OtrResult<Section<ExitVelocityReport>> {
        let benchmarks = self.resolve_benchmarks(
            SessionKind::ExitVelocity,
            level.label(),
            &MetricName::EXIT_VELOCITY,
        )?;

        let summary = match self.aggregator.exit_velocity(rows) {
            Ok(summary) => summary,
            Err(OtrError::InsufficientData { reason, .. }) => {
                tracing::warn!(%level, rows = rows.len(), "Exit velocity section skipped: {reason}");
                return Ok(Section::InsufficientData { reason });
            }
            Err(e) => return Err(e),
        };

        let metrics = benchmarks
            .into_iter()
            .map(|(metric, benchmark)| self.outcome(metric, summary.value(metric), benchmark))
            .collect::<OtrResult<Vec<_>>>()?;

        let zone_grid = self.heatmap.build(summary.top_subset.iter().copied());

        tracing::info!(
            %level,
            batted_balls = summary.batted_ball_count,
            excluded = summary.excluded_count,
            "Exit velocity section graded"
        );

        Ok(Section::Ready(ExitVelocityReport {
            level,
            batted_ball_count: summary.batted_ball_count,
            excluded_count: summary.excluded_count,
            top_swing_count: summary.top_subset.len(),
            low_sample: summary.p92_exit_velocity.low_sample,
            metrics,
            zone_grid,
        }))
    }

    /// Compute every supplied section into one report.
    ///
    /// Sections are independent: a fatal benchmark error becomes
    /// `Section::Failed` for that section and the other is still computed.
    pub fn session(&self, request: ReportRequest<'_>) -> SessionReport {
        let bat_speed = request.bat_speed_rows.map(|rows| {
            settle(
                SessionKind::BatSpeed,
                self.bat_speed(request.levels.bat_speed, rows),
            )
        });
        let exit_velocity = request.exit_velocity_rows.map(|rows| {
            settle(
                SessionKind::ExitVelocity,
                self.exit_velocity(request.levels.exit_velocity, rows),
            )
        });

        SessionReport {
            generated_at: request.generated_at,
            player_name: request.player_name,
            date_range: request.date_range,
            bat_speed,
            exit_velocity,
        }
    }
}

fn settle<T>(kind: SessionKind, result: OtrResult<Section<T>>) -> Section<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(%kind, error = %e, "Section not computed");
        Section::Failed {
            error: e.to_string(),
        }
    })
}

fn insufficient_reason(metric: MetricName) -> &'static str {
    match metric {
        MetricName::AvgAttackAngleTop10 => "no attack angle readings among the top 10% bat speed swings",
        MetricName::AvgTimeToContact => "no time to contact readings",
        MetricName::AvgLaunchAngleTop8 => "no launch angle readings among the top 8% exit velocity swings",
        MetricName::TotalAvgLaunchAngle => "no positive launch angle readings",
        MetricName::AvgDistanceTop8 => "no distance readings among the top 8% exit velocity swings",
        _ => "no readings",
    }
}
