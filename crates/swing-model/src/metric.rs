//! Metric catalogue and grades.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::swing::SessionKind;

/// Every headline metric a report can carry.
///
/// Serialized names are snake_case; the benchmark-sheet labels are accepted
/// as aliases when reading benchmark files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    #[serde(alias = "Avg BatSpeed")]
    AvgBatSpeed,
    #[serde(alias = "90th% BatSpeed")]
    P90BatSpeed,
    #[serde(alias = "Avg AttackAngle")]
    AvgAttackAngleTop10,
    #[serde(alias = "Avg TimeToContact")]
    AvgTimeToContact,
    #[serde(alias = "Avg EV")]
    AvgExitVelocity,
    #[serde(alias = "Top 8th EV")]
    P92ExitVelocity,
    #[serde(alias = "HHB LA")]
    AvgLaunchAngleTop8,
    #[serde(alias = "Avg LA")]
    TotalAvgLaunchAngle,
    AvgDistanceTop8,
}

/// Measurement unit of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Mph,
    Degrees,
    Seconds,
    Feet,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Mph => " mph",
            Self::Degrees => "°",
            Self::Seconds => " sec",
            Self::Feet => " ft",
        }
    }
}

impl MetricName {
    /// Bat-speed metrics in report order.
    pub const BAT_SPEED: [MetricName; 4] = [
        Self::AvgBatSpeed,
        Self::P90BatSpeed,
        Self::AvgAttackAngleTop10,
        Self::AvgTimeToContact,
    ];

    /// Exit-velocity metrics in report order.
    pub const EXIT_VELOCITY: [MetricName; 5] = [
        Self::AvgExitVelocity,
        Self::P92ExitVelocity,
        Self::AvgLaunchAngleTop8,
        Self::TotalAvgLaunchAngle,
        Self::AvgDistanceTop8,
    ];

    pub fn session(&self) -> SessionKind {
        match self {
            Self::AvgBatSpeed
            | Self::P90BatSpeed
            | Self::AvgAttackAngleTop10
            | Self::AvgTimeToContact => SessionKind::BatSpeed,
            _ => SessionKind::ExitVelocity,
        }
    }

    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AvgBatSpeed => "Player Average Bat Speed",
            Self::P90BatSpeed => "Top 10% Bat Speed",
            Self::AvgAttackAngleTop10 => "Average Attack Angle (Top 10% Bat Speed Swings)",
            Self::AvgTimeToContact => "Average Time to Contact",
            Self::AvgExitVelocity => "Average Exit Velocity",
            Self::P92ExitVelocity => "Top 8% Exit Velocity",
            Self::AvgLaunchAngleTop8 => "Average Launch Angle (On Top 8% Exit Velocity Swings)",
            Self::TotalAvgLaunchAngle => "Total Average Launch Angle (Avg LA)",
            Self::AvgDistanceTop8 => "Average Distance (8% swings)",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Self::AvgBatSpeed
            | Self::P90BatSpeed
            | Self::AvgExitVelocity
            | Self::P92ExitVelocity => Unit::Mph,
            Self::AvgAttackAngleTop10 | Self::AvgLaunchAngleTop8 | Self::TotalAvgLaunchAngle => {
                Unit::Degrees
            }
            Self::AvgTimeToContact => Unit::Seconds,
            Self::AvgDistanceTop8 => Unit::Feet,
        }
    }

    /// Decimal places used when printing values of this metric.
    pub fn precision(&self) -> usize {
        match self {
            Self::AvgTimeToContact => 3,
            _ => 2,
        }
    }

    /// Whether a benchmark exists for this metric.
    pub fn is_benchmarked(&self) -> bool {
        !matches!(self, Self::AvgDistanceTop8)
    }

    /// Stable identifier (the serialized name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AvgBatSpeed => "avg_bat_speed",
            Self::P90BatSpeed => "p90_bat_speed",
            Self::AvgAttackAngleTop10 => "avg_attack_angle_top10",
            Self::AvgTimeToContact => "avg_time_to_contact",
            Self::AvgExitVelocity => "avg_exit_velocity",
            Self::P92ExitVelocity => "p92_exit_velocity",
            Self::AvgLaunchAngleTop8 => "avg_launch_angle_top8",
            Self::TotalAvgLaunchAngle => "total_avg_launch_angle",
            Self::AvgDistanceTop8 => "avg_distance_top8",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state classification of a measured metric against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    AboveAverage,
    Average,
    BelowAverage,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AboveAverage => "Above Average",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogues_are_split_by_session() {
        assert!(MetricName::BAT_SPEED
            .iter()
            .all(|m| m.session() == SessionKind::BatSpeed));
        assert!(MetricName::EXIT_VELOCITY
            .iter()
            .all(|m| m.session() == SessionKind::ExitVelocity));
    }

    #[test]
    fn only_distance_is_unbenchmarked() {
        let unbenchmarked: Vec<_> = MetricName::BAT_SPEED
            .iter()
            .chain(MetricName::EXIT_VELOCITY.iter())
            .filter(|m| !m.is_benchmarked())
            .collect();
        assert_eq!(unbenchmarked, vec![&MetricName::AvgDistanceTop8]);
    }

    #[test]
    fn sheet_labels_deserialize_as_aliases() {
        let parsed: MetricName = serde_json::from_str("\"Top 8th EV\"").unwrap();
        assert_eq!(parsed, MetricName::P92ExitVelocity);
        let parsed: MetricName = serde_json::from_str("\"avg_time_to_contact\"").unwrap();
        assert_eq!(parsed, MetricName::AvgTimeToContact);
    }

    #[test]
    fn as_str_matches_serialized_name() {
        for metric in MetricName::BAT_SPEED
            .iter()
            .chain(MetricName::EXIT_VELOCITY.iter())
        {
            let json = serde_json::to_string(metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.as_str()));
        }
    }
}
