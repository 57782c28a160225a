//! Swing records as produced by ingestion.
//!
//! A record carries every attribute the core consumes. Bat-speed exports
//! fill `bat_speed`, `attack_angle` and `time_to_contact`; exit-velocity
//! exports fill the batted-ball fields. Missing or non-numeric cells are
//! `None`, never zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of sensor session a set of rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    BatSpeed,
    ExitVelocity,
}

impl SessionKind {
    /// Stable identifier used in logs, errors and benchmark files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BatSpeed => "bat_speed",
            Self::ExitVelocity => "exit_velocity",
        }
    }

    /// Human-readable name.
    pub fn title(&self) -> &'static str {
        match self {
            Self::BatSpeed => "Bat Speed",
            Self::ExitVelocity => "Exit Velocity",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of sensor output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwingRecord {
    /// Bat speed at impact (mph).
    #[serde(default)]
    pub bat_speed: Option<f64>,

    /// Attack angle (degrees).
    #[serde(default)]
    pub attack_angle: Option<f64>,

    /// Time from swing start to contact (seconds).
    #[serde(default)]
    pub time_to_contact: Option<f64>,

    /// Batted-ball exit velocity (mph). Zero means the ball was not struck.
    #[serde(default)]
    pub exit_velocity: Option<f64>,

    /// Launch angle (degrees).
    #[serde(default)]
    pub launch_angle: Option<f64>,

    /// Carry distance (feet).
    #[serde(default)]
    pub distance: Option<f64>,

    /// Pitch location zone.
    #[serde(default)]
    pub strike_zone: Option<ZoneId>,
}

impl SwingRecord {
    /// A bat-speed row.
    pub fn bat_speed(
        bat_speed: Option<f64>,
        attack_angle: Option<f64>,
        time_to_contact: Option<f64>,
    ) -> Self {
        Self {
            bat_speed,
            attack_angle,
            time_to_contact,
            ..Default::default()
        }
    }

    /// An exit-velocity row.
    pub fn batted_ball(
        exit_velocity: Option<f64>,
        launch_angle: Option<f64>,
        distance: Option<f64>,
        strike_zone: Option<ZoneId>,
    ) -> Self {
        Self {
            exit_velocity,
            launch_angle,
            distance,
            strike_zone,
            ..Default::default()
        }
    }

    /// Exit velocity if the ball was actually struck (strictly positive).
    pub fn struck_exit_velocity(&self) -> Option<f64> {
        self.exit_velocity.filter(|v| *v > 0.0)
    }

    /// Whether every field is absent.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Strike-zone identifier in `1..=13`.
///
/// Ids 1-9 are the in-zone cells, read left to right and top to bottom.
/// Ids 10-13 are the four chase corners outside the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ZoneId(u8);

impl ZoneId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 13;

    /// Construct a zone id, rejecting values outside `1..=13`.
    pub fn new(id: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&id).then_some(Self(id))
    }

    /// Numeric id.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this is one of the nine in-zone cells.
    pub fn is_in_zone(self) -> bool {
        self.0 <= 9
    }

    /// Every zone id in ascending order.
    pub fn all() -> impl Iterator<Item = ZoneId> {
        (Self::MIN..=Self::MAX).map(ZoneId)
    }
}

impl TryFrom<u8> for ZoneId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("strike zone {value} outside 1..=13"))
    }
}

impl TryFrom<i64> for ZoneId {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| format!("strike zone {value} outside 1..=13"))
    }
}

impl From<ZoneId> for u8 {
    fn from(zone: ZoneId) -> Self {
        zone.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
