//! JSON and JSONL export/import of project records
//!
//! - **JSON**: one pretty-printed array, the shape the portfolio frontend loads
//! - **JSONL**: one record per line, for clean diffs of curated lists
//!
//! The format of a file is inferred from its extension: `.jsonl` is JSONL,
//! anything else is JSON.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::generator::ProjectRecord;

/// On-disk representation of a record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Jsonl,
}

impl ExportFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") => Self::Jsonl,
            _ => Self::Json,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" => Ok(Self::Jsonl),
            _ => Err(Error::InvalidInput(format!(
                "Unknown export format: {}. Use json or jsonl.",
                s
            ))),
        }
    }
}

/// Write records in the given format; returns the number written
pub fn write_records<W: Write>(
    records: &[ProjectRecord],
    writer: &mut W,
    format: ExportFormat,
) -> Result<usize> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
        }
        ExportFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut *writer, record)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(records.len())
}

/// Read records in the given format
pub fn read_records<R: BufRead>(mut reader: R, format: ExportFormat) -> Result<Vec<ProjectRecord>> {
    match format {
        ExportFormat::Json => {
            let mut contents = String::new();
            reader.read_to_string(&mut contents)?;
            if contents.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_json::from_str(&contents).map_err(|e| Error::Parse {
                line: e.line(),
                message: e.to_string(),
            })
        }
        ExportFormat::Jsonl => {
            let mut records = Vec::new();
            for (index, line) in reader.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let record = serde_json::from_str(&line).map_err(|e| Error::Parse {
                    line: index + 1,
                    message: e.to_string(),
                })?;
                records.push(record);
            }
            Ok(records)
        }
    }
}

/// Save records to `path`, choosing the format from its extension
pub fn save(path: &Path, records: &[ProjectRecord]) -> Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_records(records, &mut writer, ExportFormat::from_path(path))
}

/// Load records from `path`, choosing the format from its extension
pub fn load(path: &Path) -> Result<Vec<ProjectRecord>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file), ExportFormat::from_path(path))
}
