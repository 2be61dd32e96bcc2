use std::collections::HashSet;
use std::io;
use std::path::Path;

use anyhow::{bail, Context};

use super::error::{CurveError, Result};
use super::model::Dataset;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a light curve from a file on disk.
pub fn load_file(path: &Path) -> anyhow::Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "csv" {
        bail!("Unsupported file extension: .{ext} (expected .csv)");
    }

    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let dataset = parse_csv(&bytes).with_context(|| format!("loading {}", path.display()))?;
    Ok(dataset)
}

/// Parse raw CSV bytes into a [`Dataset`].
///
/// The first record is the header. Every following record must have the
/// same number of fields, and the whole input must be valid UTF-8.
pub fn parse_csv(bytes: &[u8]) -> Result<Dataset> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(CurveError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let raw_headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = dedup_headers(raw_headers);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    log::info!("Parsed CSV: {} rows, columns {:?}", rows.len(), columns);
    Ok(Dataset::new(columns, rows))
}

/// Write a dataset back out as CSV: header first, then every row.
pub fn write_csv<W: io::Write>(dataset: &Dataset, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

impl Dataset {
    /// Serialize to CSV in memory.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        write_csv(self, &mut buf)?;
        Ok(buf)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Rename repeated header names the way pandas does: `a, a, a` becomes
/// `a, a.1, a.2`. Names already unique are left untouched.
fn dedup_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut out = Vec::with_capacity(headers.len());

    for name in headers {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        if candidate != name {
            log::debug!("Renamed duplicate column '{name}' to '{candidate}'");
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
