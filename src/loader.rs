//! Process table loader.
//!
//! Reads a whitespace-separated table: one header line, then one row per
//! process with four integer columns.
//!
//! ```text
//! PID Arrival Burst Priority
//! 1   0       5     2
//! 2   1       3     1
//! ```
//!
//! Blank lines are ignored. The header content is not checked.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{Process, ProcessBatch};

const COLUMNS: usize = 4;

/// Errors raised while loading a process table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    MalformedRow { line: usize, message: String },
}

/// Loads a process table from a file.
///
/// # Errors
/// [`LoadError::Io`] if the file cannot be read, [`LoadError::MalformedRow`]
/// for a bad row.
pub fn load_batch(path: impl AsRef<Path>) -> Result<ProcessBatch, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let batch = parse_batch(&contents)?;
    debug!(path = %path.display(), processes = batch.len(), "loaded process table");
    Ok(batch)
}

/// Parses a process table from text.
///
/// A source with only a header (or nothing at all) gives an empty batch.
///
/// # Errors
/// [`LoadError::MalformedRow`] with the 1-based line number of the first
/// row that does not hold exactly four integers.
pub fn parse_batch(source: &str) -> Result<ProcessBatch, LoadError> {
    let mut rows = source
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    // Header
    rows.next();

    rows.map(|(line, text)| parse_row(line, text)).collect()
}

fn parse_row(line: usize, text: &str) -> Result<Process, LoadError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != COLUMNS {
        return Err(LoadError::MalformedRow {
            line,
            message: format!("expected {COLUMNS} columns, found {}", fields.len()),
        });
    }

    let id = parse_field(line, "pid", fields[0])?;
    let arrival_time = parse_field(line, "arrival time", fields[1])?;
    let burst_time = parse_field(line, "burst time", fields[2])?;
    let priority = parse_field(line, "priority", fields[3])?;

    Ok(Process::new(id)
        .with_arrival(arrival_time)
        .with_burst(burst_time)
        .with_priority(priority))
}

fn parse_field<T: std::str::FromStr>(line: usize, name: &str, raw: &str) -> Result<T, LoadError> {
    raw.parse().map_err(|_| LoadError::MalformedRow {
        line,
        message: format!("invalid {name}: {raw:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "PID Arrival Burst Priority\n1 0 5 2\n2 1 3 1\n3 2 8 3\n";

    #[test]
    fn test_parse_table() {
        let batch = parse_batch(TABLE).unwrap();
        assert_eq!(batch.len(), 3);

        let p2 = &batch.processes()[1];
        assert_eq!(p2.id, 2);
        assert_eq!(p2.arrival_time, 1);
        assert_eq!(p2.burst_time, 3);
        assert_eq!(p2.priority, 1);
    }

    #[test]
    fn test_parse_keeps_source_order() {
        let batch = parse_batch("PID AT BT PR\n9 4 1 0\n3 0 2 0\n").unwrap();
        let ids: Vec<u32> = batch.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn test_parse_whitespace_and_blank_lines() {
        let batch = parse_batch("\n  PID\tArrival Burst Priority\n\n 1\t0   5 2 \n\n").unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.processes()[0].burst_time, 5);
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse_batch("PID Arrival Burst Priority\n").unwrap().is_empty());
        assert!(parse_batch("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_wrong_column_count() {
        let err = parse_batch("header\n1 0 5\n").unwrap_err();
        match err {
            LoadError::MalformedRow { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("found 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_integer() {
        let err = parse_batch("header\n1 0 5 2\n2 x 3 1\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: invalid arrival time: \"x\"");
    }

    #[test]
    fn test_parse_accepts_degenerate_values() {
        // Validation is a separate step
        let batch = parse_batch("header\n1 -2 0 -1\n").unwrap();
        assert_eq!(batch.processes()[0].arrival_time, -2);
        assert_eq!(batch.processes()[0].burst_time, 0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_batch("/nonexistent/processes.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/processes.txt"));
    }

    #[test]
    fn test_load_file() {
        let path =
            std::env::temp_dir().join(format!("cpu_schedule_load_{}.txt", std::process::id()));
        fs::write(&path, TABLE).unwrap();
        let batch = load_batch(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(batch.total_burst_time(), Some(16));
    }
}
