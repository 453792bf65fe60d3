//! CSV codecs for raw listings and canonical fixture files.
//!
//! Headers are matched by name (after stripping a UTF-8 BOM), so column
//! order in a file may differ from the configured schema.

#![allow(clippy::result_large_err)]

use crate::atomic::atomic_write;
use crate::errors::{csv_error, io_error_at, record_error, Result};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use fixwatch_core::report::Extract;
use fixwatch_core::{ExError, Fixture, FixwatchError, RawFixtureRecord, Schema, Snapshot};
use std::path::Path;

fn clean_header(header: &str) -> &str {
    header.trim_matches('\u{feff}').trim()
}

/// Read the raw listing handed over by the extraction step
pub fn read_raw_records(path: &Path) -> Result<Vec<RawFixtureRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| csv_error("read_raw_records", path, e))?;

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| csv_error("read_raw_records", path, e))?
        .iter()
        .map(clean_header)
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error("read_raw_records", path, e))?;
        let raw: RawFixtureRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| csv_error("read_raw_records", path, e))?;
        records.push(raw);
    }
    Ok(records)
}

/// A canonical row that could not be read
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// Line in the file, header being line 1
    pub line: u64,
    pub reason: ExError,
}

/// Outcome of a fail-soft read: the readable records and the skipped rows
#[derive(Debug, Clone, Default)]
pub struct LenientRead {
    pub fixtures: Vec<Fixture>,
    pub skipped: Vec<SkippedRow>,
}

impl LenientRead {
    pub fn into_snapshot(self) -> (Snapshot, Vec<SkippedRow>) {
        (Snapshot::from_fixtures(self.fixtures), self.skipped)
    }
}

/// Every schema header must be present; an empty file has no rows to check
fn check_headers(path: &Path, schema: &Schema, headers: &[String], op: &str) -> Result<()> {
    if headers.iter().all(|h| h.is_empty()) {
        return Ok(());
    }
    match schema
        .columns
        .iter()
        .find(|spec| !headers.iter().any(|h| h == spec.header.trim()))
    {
        Some(spec) => Err(ExError::from(FixwatchError::MissingColumn {
            column: spec.header.trim().to_string(),
        })
        .with_op(op)
        .with_path(path.display().to_string())),
        None => Ok(()),
    }
}

/// Parse every row, keeping per-row failures apart from file-level ones
fn read_canonical_rows(
    path: &Path,
    schema: &Schema,
    op: &str,
) -> Result<Vec<std::result::Result<Fixture, SkippedRow>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(op, path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(op, path, e))?
        .iter()
        .map(|h| clean_header(h).to_string())
        .collect();
    check_headers(path, schema, &headers, op)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let row = match record {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                let cells: Vec<String> = record.iter().map(str::to_string).collect();
                schema
                    .parse_row(&headers, &cells)
                    .map_err(|e| SkippedRow {
                        line,
                        reason: e.into(),
                    })
            }
            Err(e) if e.is_io_error() => return Err(csv_error(op, path, e)),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                Err(SkippedRow {
                    line,
                    reason: csv_error(op, path, e),
                })
            }
        };
        rows.push(row);
    }
    Ok(rows)
}

/// Read a canonical fixture file (baseline or extract)
///
/// Any unreadable row fails the whole read: these files are written by us,
/// so a bad row means corruption rather than noisy input.
pub fn read_fixtures(path: &Path, schema: &Schema) -> Result<Vec<Fixture>> {
    read_canonical_rows(path, schema, "read_fixtures")?
        .into_iter()
        .map(|row| row.map_err(|skipped| record_error(path, skipped.line, skipped.reason)))
        .collect()
}

/// Read the current fixtures file handed over by the extraction step.
///
/// Rows whose date, time or other cells cannot be read are skipped with a
/// warning and the rest of the file is kept. A missing schema column or an
/// unreadable file still fails the read.
pub fn read_fixtures_lenient(path: &Path, schema: &Schema) -> Result<LenientRead> {
    let mut read = LenientRead::default();
    for row in read_canonical_rows(path, schema, "read_fixtures_lenient")? {
        match row {
            Ok(fixture) => read.fixtures.push(fixture),
            Err(skipped) => {
                tracing::warn!(
                    component = module_path!(),
                    op = "read_fixtures_lenient",
                    path = %path.display(),
                    line = skipped.line,
                    reason = %skipped.reason,
                    "skipping unreadable fixture row"
                );
                read.skipped.push(skipped);
            }
        }
    }
    Ok(read)
}

/// Read a canonical fixture file into a snapshot
pub fn read_snapshot(path: &Path, schema: &Schema) -> Result<Snapshot> {
    Ok(Snapshot::from_fixtures(read_fixtures(path, schema)?))
}

fn render<H, R>(path: &Path, headers: &[H], rows: R) -> Result<Vec<u8>>
where
    H: AsRef<str>,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(headers.iter().map(|h| h.as_ref()))
        .map_err(|e| csv_error("render_csv", path, e))?;
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| csv_error("render_csv", path, e))?;
    }
    writer
        .into_inner()
        .map_err(|e| io_error_at("render_csv", path, e.into_error()))
}

/// Atomically write records in schema order, header first
pub fn write_fixtures<'a>(
    path: &Path,
    schema: &Schema,
    fixtures: impl IntoIterator<Item = &'a Fixture>,
) -> Result<()> {
    let bytes = render(
        path,
        &schema.headers(),
        fixtures.into_iter().map(|f| schema.row(f)),
    )?;
    atomic_write(path, &bytes)
}

/// Atomically write a snapshot in key order
pub fn write_snapshot(path: &Path, schema: &Schema, snapshot: &Snapshot) -> Result<()> {
    write_fixtures(path, schema, snapshot.fixtures())
}

/// Atomically write one extract
pub fn write_extract(path: &Path, extract: &Extract) -> Result<()> {
    let bytes = render(path, &extract.headers, extract.rows.iter().cloned())?;
    atomic_write(path, &bytes)
}
