// File: crates/chart-gallery/src/dataset.rs
// Summary: Row-by-row validation of fetched JSON arrays; bad rows are skipped and counted.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RecordError;

/// Records that passed validation plus the number of rows dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Parsed<T> {
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn len(&self) -> usize { self.records.len() }
}

/// Deserialize each row as `R` and convert it; a failing row is skipped, not fatal.
pub fn parse_rows<R, T, F>(kind: &str, rows: Vec<Value>, convert: F) -> Parsed<T>
where
    R: DeserializeOwned,
    F: Fn(R) -> Result<T, RecordError>,
{
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for (i, row) in rows.into_iter().enumerate() {
        let parsed = serde_json::from_value::<R>(row)
            .map_err(|e| RecordError::Field(e.to_string()))
            .and_then(&convert);
        match parsed {
            Ok(r) => records.push(r),
            Err(e) => {
                debug!("skipping {kind} row {i}: {e}");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        warn!("skipped {skipped} malformed {kind} row(s); {} kept", records.len());
    }
    Parsed { records, skipped }
}
