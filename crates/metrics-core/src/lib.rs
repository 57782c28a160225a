//! OTR Metrics Core
//!
//! Turns canonical swing records into graded headline metrics:
//! - **Benchmarks:** Immutable per-level, per-metric reference values
//! - **Grading:** Standard, lower-is-better, and tolerance-band policies
//! - **Aggregation:** Means, interpolated percentiles, and top-percentile subsets
//! - **Zone heatmap:** Strike-zone counts over the hardest-hit balls
//!
//! This crate is pure computation: no I/O, no global state.
//! All inputs are data; all outputs are data.

pub mod aggregator;
pub mod benchmark;
pub mod grader;
pub mod report;
pub mod stats;
pub mod zone_heatmap;

pub use aggregator::SwingAggregator;
pub use benchmark::BenchmarkTable;
pub use grader::{Grader, GradingPolicy};
pub use report::{ReportBuilder, ReportRequest};
pub use zone_heatmap::ZoneHeatmapBuilder;
