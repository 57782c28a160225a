//! Descriptive statistics over sensor readings.

use serde::{Deserialize, Serialize};

use otr_common::error::{OtrError, OtrResult};

/// Fewer readings than this make a percentile degenerate.
pub const LOW_SAMPLE_THRESHOLD: usize = 2;

/// An interpolated percentile and the sample it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentile {
    pub value: f64,
    pub sample_size: usize,
    /// The sample was too small for the percentile to mean much.
    pub low_sample: bool,
}

/// Keep finite readings only. Missing or non-finite cells are absent, not zero.
pub fn finite(values: impl IntoIterator<Item = Option<f64>>) -> Vec<f64> {
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentile by linear interpolation between order statistics.
///
/// For sorted values `v` and `index = fraction * (n - 1)`, the result is
/// `v[floor] + (v[ceil] - v[floor]) * (index - floor)`. `fraction` is
/// clamped to `[0, 1]`. A single reading is returned as-is and flagged
/// `low_sample`; an empty slice is insufficient data.
pub fn percentile(values: &[f64], fraction: f64) -> OtrResult<Percentile> {
    if values.is_empty() {
        return Err(OtrError::insufficient_data(
            format!("p{:.0}", fraction * 100.0),
            "no readings to rank",
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let fraction = fraction.clamp(0.0, 1.0);
    let index = fraction * (n - 1) as f64;
    let lo = index.floor() as usize;
    let hi = (index.ceil() as usize).min(n - 1);
    let weight = index - lo as f64;
    let value = sorted[lo] + (sorted[hi] - sorted[lo]) * weight;

    Ok(Percentile {
        value,
        sample_size: n,
        low_sample: n < LOW_SAMPLE_THRESHOLD,
    })
}
