//! Grading a measured metric against its benchmark.

use serde::{Deserialize, Serialize};

use otr_common::error::{OtrError, OtrResult};
use otr_swing_model::{Grade, MetricName};

/// How a measurement is compared with its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingPolicy {
    /// Above the benchmark is above average; down to 90% of it is average.
    Standard,
    /// Below the benchmark is above average; up to 110% of it is average.
    LowerIsBetter,
    /// Within a fixed mph band under the benchmark is average.
    ToleranceBand,
}

impl GradingPolicy {
    /// Policy used for a metric, `None` for unbenchmarked metrics.
    pub fn for_metric(metric: MetricName) -> Option<Self> {
        match metric {
            MetricName::AvgBatSpeed
            | MetricName::P90BatSpeed
            | MetricName::AvgAttackAngleTop10
            | MetricName::AvgLaunchAngleTop8
            | MetricName::TotalAvgLaunchAngle => Some(Self::Standard),
            MetricName::AvgTimeToContact => Some(Self::LowerIsBetter),
            MetricName::AvgExitVelocity | MetricName::P92ExitVelocity => Some(Self::ToleranceBand),
            MetricName::AvgDistanceTop8 => None,
        }
    }
}

/// Grading thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grader {
    /// Standard policy: lowest ratio of the benchmark still graded average.
    pub average_floor_ratio: f64,

    /// Lower-is-better policy: highest ratio of the benchmark still graded average.
    pub average_ceiling_ratio: f64,

    /// Tolerance-band policy: width of the average band below the benchmark (mph).
    pub tolerance_mph: f64,
}

impl Default for Grader {
    fn default() -> Self {
        Self {
            average_floor_ratio: 0.9,
            average_ceiling_ratio: 1.1,
            tolerance_mph: 3.0,
        }
    }
}

impl Grader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject benchmarks no policy can grade against.
    pub fn check_benchmark(&self, metric: MetricName, benchmark: f64) -> OtrResult<()> {
        if benchmark.is_finite() && benchmark > 0.0 {
            Ok(())
        } else {
            Err(OtrError::invalid_benchmark(metric.as_str(), benchmark))
        }
    }

    /// Grade a metric with its own policy.
    ///
    /// Unbenchmarked metrics have no grade and yield `Ok(None)`.
    pub fn grade_metric(
        &self,
        metric: MetricName,
        measured: f64,
        benchmark: f64,
    ) -> OtrResult<Option<Grade>> {
        match GradingPolicy::for_metric(metric) {
            Some(policy) => self.grade(policy, metric, measured, benchmark).map(Some),
            None => Ok(None),
        }
    }

    /// Grade a measurement under an explicit policy.
    pub fn grade(
        &self,
        policy: GradingPolicy,
        metric: MetricName,
        measured: f64,
        benchmark: f64,
    ) -> OtrResult<Grade> {
        self.check_benchmark(metric, benchmark)?;
        if !measured.is_finite() {
            return Err(OtrError::insufficient_data(
                metric.as_str(),
                "measured value is not a number",
            ));
        }

        let grade = match policy {
            GradingPolicy::Standard => {
                if measured > benchmark {
                    Grade::AboveAverage
                } else if measured >= benchmark * self.average_floor_ratio {
                    Grade::Average
                } else {
                    Grade::BelowAverage
                }
            }
            GradingPolicy::LowerIsBetter => {
                if measured < benchmark {
                    Grade::AboveAverage
                } else if measured <= benchmark * self.average_ceiling_ratio {
                    Grade::Average
                } else {
                    Grade::BelowAverage
                }
            }
            GradingPolicy::ToleranceBand => {
                if measured > benchmark {
                    Grade::AboveAverage
                } else if measured >= benchmark - self.tolerance_mph {
                    Grade::Average
                } else {
                    Grade::BelowAverage
                }
            }
        };

        tracing::trace!(%metric, measured, benchmark, ?policy, ?grade, "Graded metric");
        Ok(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EV: MetricName = MetricName::AvgExitVelocity;
    const TTC: MetricName = MetricName::AvgTimeToContact;
    const BS: MetricName = MetricName::AvgBatSpeed;

    fn grade(policy: GradingPolicy, metric: MetricName, measured: f64, benchmark: f64) -> Grade {
        Grader::default()
            .grade(policy, metric, measured, benchmark)
            .unwrap()
    }

    #[test]
    fn tolerance_band_edges() {
        let b = 78.0;
        let band = GradingPolicy::ToleranceBand;
        assert_eq!(grade(band, EV, b, b), Grade::Average);
        assert_eq!(grade(band, EV, b - 3.0, b), Grade::Average);
        assert_eq!(grade(band, EV, b - 3.01, b), Grade::BelowAverage);
        assert_eq!(grade(band, EV, b + 0.01, b), Grade::AboveAverage);
    }

    #[test]
    fn lower_is_better_edges() {
        let b = 0.163;
        let lower = GradingPolicy::LowerIsBetter;
        assert_eq!(grade(lower, TTC, b * 1.1, b), Grade::Average);
        assert_eq!(grade(lower, TTC, b * 1.1 + 1e-9, b), Grade::BelowAverage);
        assert_eq!(grade(lower, TTC, b - 0.001, b), Grade::AboveAverage);
        assert_eq!(grade(lower, TTC, b, b), Grade::Average);
    }

    #[test]
    fn standard_edges() {
        let b = 62.4;
        let standard = GradingPolicy::Standard;
        assert_eq!(grade(standard, BS, b + 0.01, b), Grade::AboveAverage);
        assert_eq!(grade(standard, BS, b, b), Grade::Average);
        assert_eq!(grade(standard, BS, b * 0.9, b), Grade::Average);
        assert_eq!(grade(standard, BS, b * 0.9 - 1e-9, b), Grade::BelowAverage);
    }

    #[test]
    fn zero_or_negative_benchmark_is_invalid() {
        let grader = Grader::default();
        for benchmark in [0.0, -1.0, f64::NAN] {
            for policy in [
                GradingPolicy::Standard,
                GradingPolicy::LowerIsBetter,
                GradingPolicy::ToleranceBand,
            ] {
                let err = grader.grade(policy, BS, 60.0, benchmark).unwrap_err();
                assert!(matches!(err, OtrError::InvalidBenchmark { .. }));
            }
        }
    }

    #[test]
    fn nan_measurement_is_insufficient_data() {
        let err = Grader::default()
            .grade(GradingPolicy::Standard, BS, f64::NAN, 62.4)
            .unwrap_err();
        assert!(matches!(err, OtrError::InsufficientData { .. }));
    }

    #[test]
    fn metric_policy_mapping() {
        assert_eq!(
            GradingPolicy::for_metric(MetricName::P92ExitVelocity),
            Some(GradingPolicy::ToleranceBand)
        );
        assert_eq!(GradingPolicy::for_metric(TTC), Some(GradingPolicy::LowerIsBetter));
        assert_eq!(
            GradingPolicy::for_metric(MetricName::TotalAvgLaunchAngle),
            Some(GradingPolicy::Standard)
        );
        assert_eq!(GradingPolicy::for_metric(MetricName::AvgDistanceTop8), None);
    }

    #[test]
    fn grade_metric_skips_unbenchmarked() {
        let grader = Grader::default();
        assert_eq!(
            grader
                .grade_metric(MetricName::AvgDistanceTop8, 310.0, 1.0)
                .unwrap(),
            None
        );
        assert_eq!(
            grader.grade_metric(EV, 70.0, 78.0).unwrap(),
            Some(Grade::BelowAverage)
        );
    }
}
