//! OTR Report
//!
//! Presentation of computed session reports:
//!
//! ```text
//! SessionReport ──┬── render_markdown ──> text report + strike-zone grid
//!                 └── render_json ──────> pretty JSON
//! ```
//!
//! The core hands over numbers, grades and zone counts. Layout, rounding
//! and color intensity are decided here.

pub mod json;
pub mod layout;
pub mod markdown;

use serde::{Deserialize, Serialize};

use otr_common::error::OtrResult;
use otr_swing_model::SessionReport;

pub use json::render_json;
pub use layout::{intensity, zone_rows, ZoneCell, ZONE_LAYOUT};
pub use markdown::render_markdown;

/// A report output format.
pub trait ReportRenderer {
    fn render(&self, report: &SessionReport) -> OtrResult<String>;

    /// File extension for saved reports, without the dot.
    fn extension(&self) -> &'static str;

    fn name(&self) -> &str;
}

/// Output formats the CLI can write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            Self::Markdown => Box::new(markdown::MarkdownRenderer),
            Self::Json => Box::new(json::JsonRenderer),
        }
    }

    /// Render with this format.
    pub fn render(&self, report: &SessionReport) -> OtrResult<String> {
        let renderer = self.renderer();
        tracing::debug!(format = renderer.name(), "Rendering report");
        renderer.render(report)
    }
}
