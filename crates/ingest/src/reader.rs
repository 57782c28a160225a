//! CSV reader for sensor exports.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use otr_common::config::IngestDefaults;
use otr_common::error::{OtrError, OtrResult};
use otr_swing_model::{DateRange, SessionKind, SwingRecord};

use crate::parse;
use crate::schema::{Field, SessionSchema, SCHEMA_VERSION};

/// Reader settings for one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Raw lines discarded before the header row.
    pub skip_rows: usize,
    pub delimiter: u8,
}

impl IngestOptions {
    /// Options for a session kind from configured defaults.
    pub fn for_session(kind: SessionKind, defaults: &IngestDefaults) -> OtrResult<Self> {
        let skip_rows = match kind {
            SessionKind::BatSpeed => defaults.bat_speed_skip_rows,
            SessionKind::ExitVelocity => defaults.exit_velocity_skip_rows,
        };
        Ok(Self {
            skip_rows,
            delimiter: defaults.delimiter_byte()?,
        })
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            skip_rows: 0,
            delimiter: b',',
        }
    }
}

/// What happened while reading an export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestSummary {
    pub schema_version: u32,
    pub kind: SessionKind,
    /// Lines after the header, blank ones included.
    pub rows_read: usize,
    /// Rows dropped for holding no values: empty lines and rows of bare
    /// delimiters.
    pub rows_skipped: usize,
    /// Optional columns the export did not carry.
    pub missing_columns: Vec<Field>,
    /// Span of parseable `Date` cells, if any.
    pub date_range: Option<DateRange>,
}

/// Records and summary of one export.
#[derive(Debug, Clone)]
pub struct IngestedSession {
    pub records: Vec<SwingRecord>,
    pub summary: IngestSummary,
}

/// Header positions of each schema field in one export.
#[derive(Debug, Default)]
struct ColumnIndex {
    bat_speed: Option<usize>,
    attack_angle: Option<usize>,
    time_to_contact: Option<usize>,
    strike_zone: Option<usize>,
    exit_velocity: Option<usize>,
    launch_angle: Option<usize>,
    distance: Option<usize>,
    date: Option<usize>,
}

impl ColumnIndex {
    fn resolve(schema: &SessionSchema, headers: &csv::StringRecord) -> OtrResult<(Self, Vec<Field>)> {
        let mut index = Self::default();
        let mut missing = Vec::new();

        for spec in schema.columns {
            let position = headers.iter().position(|h| spec.matches(h));
            if position.is_none() {
                if spec.required {
                    return Err(OtrError::missing_column(
                        spec.headers[0],
                        schema.kind.as_str(),
                    ));
                }
                missing.push(spec.field);
            }
            *index.slot(spec.field) = position;
        }

        Ok((index, missing))
    }

    fn slot(&mut self, field: Field) -> &mut Option<usize> {
        match field {
            Field::BatSpeed => &mut self.bat_speed,
            Field::AttackAngle => &mut self.attack_angle,
            Field::TimeToContact => &mut self.time_to_contact,
            Field::StrikeZone => &mut self.strike_zone,
            Field::ExitVelocity => &mut self.exit_velocity,
            Field::LaunchAngle => &mut self.launch_angle,
            Field::Distance => &mut self.distance,
            Field::Date => &mut self.date,
        }
    }

    fn record(&self, row: &csv::StringRecord) -> SwingRecord {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));
        let number = |idx: Option<usize>| cell(idx).and_then(parse::number);

        SwingRecord {
            bat_speed: number(self.bat_speed),
            attack_angle: number(self.attack_angle),
            time_to_contact: number(self.time_to_contact),
            exit_velocity: number(self.exit_velocity),
            launch_angle: number(self.launch_angle),
            distance: number(self.distance),
            strike_zone: cell(self.strike_zone).and_then(parse::zone),
        }
    }

    fn date(&self, row: &csv::StringRecord) -> Option<NaiveDate> {
        self.date.and_then(|i| row.get(i)).and_then(parse::date)
    }
}

/// Read one export of the given kind.
pub fn read_session<R: Read>(
    reader: R,
    kind: SessionKind,
    options: &IngestOptions,
) -> OtrResult<IngestedSession> {
    let schema = SessionSchema::for_session(kind);
    let mut input = BufReader::new(reader);

    // Preamble lines are skipped raw; they may be blank or hold free text
    // that is not valid CSV.
    let mut line = Vec::new();
    for n in 0..options.skip_rows {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(OtrError::ingest(format!(
                "{kind} export ended after {n} of {} preamble lines",
                options.skip_rows
            )));
        }
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(OtrError::ingest(format!("{kind} export has no header row")));
    }
    let (columns, missing_columns) = ColumnIndex::resolve(schema, &headers)?;
    if !missing_columns.is_empty() {
        tracing::debug!(%kind, missing = ?missing_columns, "Optional columns absent");
    }

    let mut records = Vec::new();
    let mut dates = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    // The csv reader drops bare empty lines on its own; they are recovered
    // from the line count consumed by each record.
    let mut row = csv::StringRecord::new();
    let mut line = csv_reader.position().line();
    loop {
        let more = csv_reader.read_record(&mut row).map_err(|e| {
            OtrError::ingest(format!(
                "{kind} export line {}: {e}",
                options.skip_rows as u64 + line
            ))
        })?;
        if !more {
            break;
        }

        let consumed = csv_reader.position().line() - line;
        line += consumed;
        let embedded: u64 = row
            .iter()
            .map(|cell| cell.matches('\n').count() as u64)
            .sum();
        let empty_lines = consumed.saturating_sub(1 + embedded) as usize;
        rows_read += 1 + empty_lines;
        rows_skipped += empty_lines;

        if row.iter().all(|cell| cell.trim().is_empty()) {
            rows_skipped += 1;
            continue;
        }

        dates.extend(columns.date(&row));
        records.push(columns.record(&row));
    }

    let summary = IngestSummary {
        schema_version: SCHEMA_VERSION,
        kind,
        rows_read,
        rows_skipped,
        missing_columns,
        date_range: DateRange::covering(dates),
    };

    tracing::info!(
        %kind,
        rows = summary.rows_read,
        skipped = summary.rows_skipped,
        records = records.len(),
        "Ingested export"
    );

    Ok(IngestedSession { records, summary })
}

/// Read a bat-speed export.
pub fn read_bat_speed<R: Read>(reader: R, options: &IngestOptions) -> OtrResult<IngestedSession> {
    read_session(reader, SessionKind::BatSpeed, options)
}

/// Read an exit-velocity export.
pub fn read_exit_velocity<R: Read>(
    reader: R,
    options: &IngestOptions,
) -> OtrResult<IngestedSession> {
    read_session(reader, SessionKind::ExitVelocity, options)
}

/// Read an export from disk.
pub fn read_session_file(
    path: &Path,
    kind: SessionKind,
    options: &IngestOptions,
) -> OtrResult<IngestedSession> {
    if !path.exists() {
        return Err(OtrError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), %kind, "Reading export");
    read_session(File::open(path)?, kind, options)
}
