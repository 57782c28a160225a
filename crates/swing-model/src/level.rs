//! Competition levels.
//!
//! Bat-speed and exit-velocity benchmarks are published against different
//! tier lists, so a session selects one level of each kind independently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use otr_common::error::OtrError;

/// Lowercase and drop separators so "High School", "high-school" and
/// "HIGH_SCHOOL" compare equal. "JV/16u" becomes "jv16u".
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Level tiers for bat-speed benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BatSpeedLevel {
    Youth,
    #[serde(rename = "High School")]
    HighSchool,
    College,
    Indy,
    Affiliate,
}

impl BatSpeedLevel {
    /// Every level, in selector order.
    pub const ALL: [BatSpeedLevel; 5] = [
        Self::Youth,
        Self::HighSchool,
        Self::College,
        Self::Indy,
        Self::Affiliate,
    ];

    /// Display label, also the benchmark-table key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Youth => "Youth",
            Self::HighSchool => "High School",
            Self::College => "College",
            Self::Indy => "Indy",
            Self::Affiliate => "Affiliate",
        }
    }
}

impl fmt::Display for BatSpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BatSpeedLevel {
    type Err = OtrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|level| normalize(level.label()) == key)
            .ok_or_else(|| OtrError::unknown_level("bat speed", s))
    }
}

/// Level tiers for exit-velocity benchmarks, including the youth age brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExitVelocityLevel {
    #[serde(rename = "10u")]
    U10,
    #[serde(rename = "12u")]
    U12,
    #[serde(rename = "14u")]
    U14,
    #[serde(rename = "JV/16u")]
    Jv16u,
    #[serde(rename = "Var/18u")]
    Varsity18u,
    Youth,
    #[serde(rename = "High School")]
    HighSchool,
    College,
    Indy,
    Affiliate,
}

impl ExitVelocityLevel {
    /// Every level, in selector order.
    pub const ALL: [ExitVelocityLevel; 10] = [
        Self::U10,
        Self::U12,
        Self::U14,
        Self::Jv16u,
        Self::Varsity18u,
        Self::Youth,
        Self::HighSchool,
        Self::College,
        Self::Indy,
        Self::Affiliate,
    ];

    /// Display label, also the benchmark-table key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::U10 => "10u",
            Self::U12 => "12u",
            Self::U14 => "14u",
            Self::Jv16u => "JV/16u",
            Self::Varsity18u => "Var/18u",
            Self::Youth => "Youth",
            Self::HighSchool => "High School",
            Self::College => "College",
            Self::Indy => "Indy",
            Self::Affiliate => "Affiliate",
        }
    }
}

impl fmt::Display for ExitVelocityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExitVelocityLevel {
    type Err = OtrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|level| normalize(level.label()) == key)
            .ok_or_else(|| OtrError::unknown_level("exit velocity", s))
    }
}

/// The pair of levels chosen for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSelection {
    pub bat_speed: BatSpeedLevel,
    pub exit_velocity: ExitVelocityLevel,
}

impl LevelSelection {
    /// Parse both levels from their labels or slugs.
    pub fn parse(bat_speed: &str, exit_velocity: &str) -> Result<Self, OtrError> {
        Ok(Self {
            bat_speed: bat_speed.parse()?,
            exit_velocity: exit_velocity.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for level in BatSpeedLevel::ALL {
            assert_eq!(level.label().parse::<BatSpeedLevel>().unwrap(), level);
        }
        for level in ExitVelocityLevel::ALL {
            assert_eq!(level.label().parse::<ExitVelocityLevel>().unwrap(), level);
        }
    }

    #[test]
    fn slugs_and_case_are_accepted() {
        assert_eq!(
            "high-school".parse::<BatSpeedLevel>().unwrap(),
            BatSpeedLevel::HighSchool
        );
        assert_eq!(
            "jv-16u".parse::<ExitVelocityLevel>().unwrap(),
            ExitVelocityLevel::Jv16u
        );
        assert_eq!(
            "VAR/18U".parse::<ExitVelocityLevel>().unwrap(),
            ExitVelocityLevel::Varsity18u
        );
    }

    #[test]
    fn age_brackets_are_exit_velocity_only() {
        assert!("12u".parse::<ExitVelocityLevel>().is_ok());
        let err = "12u".parse::<BatSpeedLevel>().unwrap_err();
        assert!(matches!(err, OtrError::UnknownLevel { .. }));
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&ExitVelocityLevel::Jv16u).unwrap();
        assert_eq!(json, "\"JV/16u\"");
        let parsed: BatSpeedLevel = serde_json::from_str("\"High School\"").unwrap();
        assert_eq!(parsed, BatSpeedLevel::HighSchool);
    }

    #[test]
    fn selection_parses_independently() {
        let selection = LevelSelection::parse("College", "14u").unwrap();
        assert_eq!(selection.bat_speed, BatSpeedLevel::College);
        assert_eq!(selection.exit_velocity, ExitVelocityLevel::U14);
        assert!(LevelSelection::parse("Pro", "14u").is_err());
    }
}
