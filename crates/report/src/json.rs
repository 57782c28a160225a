//! JSON report output.

use otr_common::error::OtrResult;
use otr_swing_model::SessionReport;

use crate::ReportRenderer;

/// Renders the report as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &SessionReport) -> OtrResult<String> {
        render_json(report)
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// Serialize a session report. Timestamps are RFC 3339.
pub fn render_json(report: &SessionReport) -> OtrResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
