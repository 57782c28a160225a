//! OTR Ingest
//!
//! Turns sensor CSV exports into canonical [`SwingRecord`]s.
//!
//! Columns are located by header NAME through one versioned schema, never by
//! position, so exports that reorder or add columns keep working. Cells that
//! are blank or non-numeric become `None`; they are never coerced to zero.
//!
//! [`SwingRecord`]: otr_swing_model::SwingRecord

pub mod parse;
pub mod reader;
pub mod schema;

pub use reader::{
    read_bat_speed, read_exit_velocity, read_session, read_session_file, IngestOptions,
    IngestSummary, IngestedSession,
};
pub use schema::{ColumnSpec, Field, SessionSchema, SCHEMA_VERSION};
