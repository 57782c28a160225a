//! Canonical column mapping for sensor exports.

use std::fmt;

use serde::Serialize;

use otr_swing_model::SessionKind;

/// Version of the column mapping below. Bump when an alias is removed or a
/// column changes meaning.
pub const SCHEMA_VERSION: u32 = 1;

/// Record field a column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BatSpeed,
    AttackAngle,
    TimeToContact,
    StrikeZone,
    ExitVelocity,
    LaunchAngle,
    Distance,
    Date,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BatSpeed => "bat_speed",
            Self::AttackAngle => "attack_angle",
            Self::TimeToContact => "time_to_contact",
            Self::StrikeZone => "strike_zone",
            Self::ExitVelocity => "exit_velocity",
            Self::LaunchAngle => "launch_angle",
            Self::Distance => "distance",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of an export.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnSpec {
    pub field: Field,
    /// Accepted header names, preferred spelling first.
    pub headers: &'static [&'static str],
    pub required: bool,
}

impl ColumnSpec {
    /// Whether a header cell names this column (trimmed, case-insensitive).
    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim().trim_start_matches('\u{feff}').trim();
        self.headers.iter().any(|h| h.eq_ignore_ascii_case(header))
    }
}

/// Column layout of one session kind.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionSchema {
    pub kind: SessionKind,
    pub columns: &'static [ColumnSpec],
}

const BAT_SPEED_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        field: Field::BatSpeed,
        headers: &["Bat Speed (mph)", "Bat Speed"],
        required: true,
    },
    ColumnSpec {
        field: Field::AttackAngle,
        headers: &["Attack Angle (deg)", "Attack Angle"],
        required: false,
    },
    ColumnSpec {
        field: Field::TimeToContact,
        headers: &["Time to Contact (sec)", "Time to Contact"],
        required: false,
    },
    ColumnSpec {
        field: Field::Date,
        headers: &["Date"],
        required: false,
    },
];

const EXIT_VELOCITY_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        field: Field::ExitVelocity,
        headers: &["Velo", "Exit Velocity"],
        required: true,
    },
    ColumnSpec {
        field: Field::LaunchAngle,
        headers: &["LA", "Launch Angle"],
        required: false,
    },
    ColumnSpec {
        field: Field::Distance,
        headers: &["Dist", "Distance"],
        required: false,
    },
    ColumnSpec {
        field: Field::StrikeZone,
        headers: &["Strike Zone"],
        required: false,
    },
    ColumnSpec {
        field: Field::Date,
        headers: &["Date"],
        required: false,
    },
];

pub const BAT_SPEED_SCHEMA: SessionSchema = SessionSchema {
    kind: SessionKind::BatSpeed,
    columns: BAT_SPEED_COLUMNS,
};

pub const EXIT_VELOCITY_SCHEMA: SessionSchema = SessionSchema {
    kind: SessionKind::ExitVelocity,
    columns: EXIT_VELOCITY_COLUMNS,
};

impl SessionSchema {
    pub fn for_session(kind: SessionKind) -> &'static SessionSchema {
        match kind {
            SessionKind::BatSpeed => &BAT_SPEED_SCHEMA,
            SessionKind::ExitVelocity => &EXIT_VELOCITY_SCHEMA,
        }
    }

    /// The column whose absence rejects the whole export.
    pub fn primary(&self) -> &ColumnSpec {
        // Each layout lists its required column first.
        &self.columns[0]
    }

    pub fn column(&self, field: Field) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.field == field)
    }
}
