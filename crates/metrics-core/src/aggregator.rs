//! Swing aggregation: headline statistics for one session.
//!
//! # Bat-speed sessions
//!
//! 1. Mean and 90th percentile of every bat-speed reading.
//! 2. The **top-10% subset**: swings at or above that percentile.
//! 3. Mean attack angle over the subset, mean time to contact over all swings.
//!
//! # Exit-velocity sessions
//!
//! 1. Drop balls with a missing or non-positive exit velocity. Zero is what
//!    the sensor reports when the ball was not struck, so it is excluded
//!    explicitly rather than averaged in.
//! 2. Mean and 92nd percentile over the struck balls only.
//! 3. The **top-8% subset**: struck balls at or above that percentile.
//! 4. Mean launch angle and distance over the subset; mean launch angle over
//!    struck balls with a positive launch angle.

use otr_common::error::{OtrError, OtrResult};
use otr_swing_model::{MetricName, SwingRecord};

use crate::stats::{finite, mean, percentile, Percentile};

/// Configuration for the swing aggregator.
#[derive(Debug, Clone, Copy)]
pub struct AggregatorConfig {
    /// Percentile fraction bounding the top bat-speed swings.
    pub bat_speed_fraction: f64,

    /// Percentile fraction bounding the top exit-velocity balls.
    pub exit_velocity_fraction: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            bat_speed_fraction: 0.90,
            exit_velocity_fraction: 0.92,
        }
    }
}

/// Headline statistics of a bat-speed session.
///
/// Optional fields are `None` when their column had no usable readings.
#[derive(Debug, Clone, PartialEq)]
pub struct BatSpeedSummary<'a> {
    pub swing_count: usize,
    pub avg_bat_speed: f64,
    pub p90_bat_speed: Percentile,
    pub top_subset: Vec<&'a SwingRecord>,
    pub avg_attack_angle_top10: Option<f64>,
    pub avg_time_to_contact: Option<f64>,
}

/// Headline statistics of an exit-velocity session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitVelocitySummary<'a> {
    pub batted_ball_count: usize,
    pub excluded_count: usize,
    pub avg_exit_velocity: f64,
    pub p92_exit_velocity: Percentile,
    pub top_subset: Vec<&'a SwingRecord>,
    pub avg_launch_angle_top8: Option<f64>,
    pub avg_distance_top8: Option<f64>,
    pub total_avg_launch_angle: Option<f64>,
}

impl BatSpeedSummary<'_> {
    /// Measured value of a bat-speed metric, if it could be computed.
    pub fn value(&self, metric: MetricName) -> Option<f64> {
        match metric {
            MetricName::AvgBatSpeed => Some(self.avg_bat_speed),
            MetricName::P90BatSpeed => Some(self.p90_bat_speed.value),
            MetricName::AvgAttackAngleTop10 => self.avg_attack_angle_top10,
            MetricName::AvgTimeToContact => self.avg_time_to_contact,
            _ => None,
        }
    }
}

impl ExitVelocitySummary<'_> {
    /// Measured value of an exit-velocity metric, if it could be computed.
    pub fn value(&self, metric: MetricName) -> Option<f64> {
        match metric {
            MetricName::AvgExitVelocity => Some(self.avg_exit_velocity),
            MetricName::P92ExitVelocity => Some(self.p92_exit_velocity.value),
            MetricName::AvgLaunchAngleTop8 => self.avg_launch_angle_top8,
            MetricName::TotalAvgLaunchAngle => self.total_avg_launch_angle,
            MetricName::AvgDistanceTop8 => self.avg_distance_top8,
            _ => None,
        }
    }
}

/// The swing aggregator.
pub struct SwingAggregator {
    config: AggregatorConfig,
}

impl SwingAggregator {
    /// Create a new aggregator with the given configuration.
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Create an aggregator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AggregatorConfig::default())
    }

    /// Summarize a bat-speed session.
    ///
    /// Fails with `InsufficientData` when no swing has a bat-speed reading.
    pub fn bat_speed<'a>(&self, records: &'a [SwingRecord]) -> OtrResult<BatSpeedSummary<'a>> {
        let speeds = finite(records.iter().map(|r| r.bat_speed));
        let avg_bat_speed = mean(&speeds).ok_or_else(|| {
            OtrError::insufficient_data(MetricName::AvgBatSpeed.as_str(), "no bat speed readings")
        })?;
        let p90_bat_speed = percentile(&speeds, self.config.bat_speed_fraction)?;

        let top_subset: Vec<&SwingRecord> = records
            .iter()
            .filter(|r| {
                r.bat_speed
                    .is_some_and(|v| v.is_finite() && v >= p90_bat_speed.value)
            })
            .collect();

        let avg_attack_angle_top10 = mean(&finite(top_subset.iter().map(|r| r.attack_angle)));
        let avg_time_to_contact = mean(&finite(records.iter().map(|r| r.time_to_contact)));

        tracing::debug!(
            swings = speeds.len(),
            avg_bat_speed,
            p90 = p90_bat_speed.value,
            top_swings = top_subset.len(),
            "Summarized bat speed session"
        );

        Ok(BatSpeedSummary {
            swing_count: speeds.len(),
            avg_bat_speed,
            p90_bat_speed,
            top_subset,
            avg_attack_angle_top10,
            avg_time_to_contact,
        })
    }

    /// Summarize an exit-velocity session.
    ///
    /// Fails with `InsufficientData` when no ball was struck.
    pub fn exit_velocity<'a>(
        &self,
        records: &'a [SwingRecord],
    ) -> OtrResult<ExitVelocitySummary<'a>> {
        let struck: Vec<&SwingRecord> = records
            .iter()
            .filter(|r| r.struck_exit_velocity().is_some_and(f64::is_finite))
            .collect();
        let excluded_count = records.len() - struck.len();

        let velocities: Vec<f64> = struck
            .iter()
            .filter_map(|r| r.struck_exit_velocity())
            .collect();
        let avg_exit_velocity = mean(&velocities).ok_or_else(|| {
            OtrError::insufficient_data(
                MetricName::AvgExitVelocity.as_str(),
                "no batted balls with a positive exit velocity",
            )
        })?;
        let p92_exit_velocity = percentile(&velocities, self.config.exit_velocity_fraction)?;

        let top_subset: Vec<&SwingRecord> = struck
            .iter()
            .copied()
            .filter(|r| {
                r.struck_exit_velocity()
                    .is_some_and(|v| v >= p92_exit_velocity.value)
            })
            .collect();

        let avg_launch_angle_top8 = mean(&finite(top_subset.iter().map(|r| r.launch_angle)));
        let avg_distance_top8 = mean(&finite(top_subset.iter().map(|r| r.distance)));
        let total_avg_launch_angle = mean(&finite(
            struck
                .iter()
                .map(|r| r.launch_angle.filter(|la| *la > 0.0)),
        ));

        if excluded_count > 0 {
            tracing::debug!(excluded_count, "Dropped rows without a struck ball");
        }
        tracing::debug!(
            batted_balls = velocities.len(),
            avg_exit_velocity,
            p92 = p92_exit_velocity.value,
            top_balls = top_subset.len(),
            "Summarized exit velocity session"
        );

        Ok(ExitVelocitySummary {
            batted_ball_count: velocities.len(),
            excluded_count,
            avg_exit_velocity,
            p92_exit_velocity,
            top_subset,
            avg_launch_angle_top8,
            avg_distance_top8,
            total_avg_launch_angle,
        })
    }
}

impl Default for SwingAggregator {
    fn default() -> Self {
        Self::with_defaults()
    }
}
