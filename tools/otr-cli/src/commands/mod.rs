pub mod benchmarks;
pub mod config;
pub mod levels;
pub mod report;
pub mod schema;

use std::path::Path;

use otr_common::config::AppConfig;
use otr_metrics_core::BenchmarkTable;

/// Benchmark table from an explicit file, the configured file, or the
/// built-in values, in that order.
pub fn load_benchmarks(explicit: Option<&Path>, config: &AppConfig) -> anyhow::Result<BenchmarkTable> {
    match explicit.or(config.benchmarks_file.as_deref()) {
        Some(path) => BenchmarkTable::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load benchmarks {}: {e}", path.display())),
        None => Ok(BenchmarkTable::standard()),
    }
}
