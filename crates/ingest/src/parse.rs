//! Lenient cell parsing.

use chrono::NaiveDate;

use otr_swing_model::ZoneId;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a numeric cell. Blank, non-numeric, and non-finite cells are `None`.
pub fn number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a strike-zone cell: an integral value in `1..=13`.
///
/// Sensors write the zone either as an integer or as a float ("5.0").
pub fn zone(cell: &str) -> Option<ZoneId> {
    let value = number(cell)?;
    if value.fract() != 0.0 || value < f64::from(ZoneId::MIN) || value > f64::from(ZoneId::MAX) {
        return None;
    }
    ZoneId::new(value as u8)
}

/// Parse a date cell, ignoring any time-of-day part.
pub fn date(cell: &str) -> Option<NaiveDate> {
    let day = cell.trim().split([' ', 'T']).next()?;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(day, fmt).ok())
}
