//! Error types shared across OTR metrics crates.

use std::path::PathBuf;

/// Top-level error type for OTR metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum OtrError {
    #[error("No benchmark for {metric} at level '{level}' in the {table} table")]
    MissingBenchmark {
        table: String,
        level: String,
        metric: String,
    },

    #[error("Invalid benchmark for {metric}: {value} (must be a positive, finite number)")]
    InvalidBenchmark { metric: String, value: f64 },

    #[error("Insufficient data for {metric}: {reason}")]
    InsufficientData { metric: String, reason: String },

    #[error("Required column '{column}' not found in {session} export")]
    MissingColumn { column: String, session: String },

    #[error("Unknown {kind} level: '{value}'")]
    UnknownLevel { kind: String, value: String },

    #[error("Ingest error: {message}")]
    Ingest { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using OtrError.
pub type OtrResult<T> = Result<T, OtrError>;

impl OtrError {
    pub fn missing_benchmark(
        table: impl Into<String>,
        level: impl Into<String>,
        metric: impl Into<String>,
    ) -> Self {
        Self::MissingBenchmark {
            table: table.into(),
            level: level.into(),
            metric: metric.into(),
        }
    }

    pub fn invalid_benchmark(metric: impl Into<String>, value: f64) -> Self {
        Self::InvalidBenchmark {
            metric: metric.into(),
            value,
        }
    }

    pub fn insufficient_data(metric: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            metric: metric.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_column(column: impl Into<String>, session: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            session: session.into(),
        }
    }

    pub fn unknown_level(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownLevel {
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error aborts report generation for a whole session.
    ///
    /// Insufficient data only drops the affected metric or section.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InsufficientData { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_is_not_fatal() {
        let err = OtrError::insufficient_data("avg_bat_speed", "no values");
        assert!(!err.is_fatal());
    }

    #[test]
    fn benchmark_errors_are_fatal() {
        assert!(OtrError::missing_benchmark("bat_speed", "Pro", "avg_bat_speed").is_fatal());
        assert!(OtrError::invalid_benchmark("avg_bat_speed", 0.0).is_fatal());
    }

    #[test]
    fn missing_benchmark_message_names_level_and_metric() {
        let err = OtrError::missing_benchmark("exit_velocity", "Pro", "Avg EV");
        let msg = err.to_string();
        assert!(msg.contains("'Pro'"));
        assert!(msg.contains("Avg EV"));
        assert!(msg.contains("exit_velocity"));
    }
}
