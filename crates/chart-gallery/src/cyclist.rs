// File: crates/chart-gallery/src/cyclist.rs
// Summary: Cyclist race-time records: raw JSON shape, validation and derived dates.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::dataset::{parse_rows, Parsed};
use crate::error::RecordError;

/// Row as served by the dataset; `Place`, `Seconds` and `URL` are ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCyclist {
    pub time: String,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    #[serde(default)]
    pub doping: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cyclist {
    pub name: String,
    pub nationality: String,
    pub year: i32,
    /// Finish time as a time of day on 1900-01-01 UTC.
    pub time: DateTime<Utc>,
    /// Allegation text; empty when there is none.
    pub doping: String,
    /// Jan 1 of `year`, UTC.
    pub year_date: DateTime<Utc>,
}

impl Cyclist {
    pub fn has_allegation(&self) -> bool {
        !self.doping.is_empty()
    }

    /// Finish time as `MM:SS`.
    pub fn time_label(&self) -> String {
        self.time.format("%M:%S").to_string()
    }
}

impl TryFrom<RawCyclist> for Cyclist {
    type Error = RecordError;

    fn try_from(raw: RawCyclist) -> Result<Self, Self::Error> {
        let time = parse_race_time(&raw.time)?;
        let year_date = year_start(raw.year)?;
        Ok(Self {
            name: raw.name,
            nationality: raw.nationality,
            year: raw.year,
            time,
            doping: raw.doping.unwrap_or_default(),
            year_date,
        })
    }
}

/// Parse `MM:SS` (minutes and seconds each 0..=59) into 1900-01-01T00:MM:SSZ.
pub fn parse_race_time(s: &str) -> Result<DateTime<Utc>, RecordError> {
    let bad = || RecordError::BadTime(s.to_string());
    let (m, sec) = s.trim().split_once(':').ok_or_else(bad)?;
    let field = |f: &str| -> Option<u32> {
        if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) { return None; }
        f.parse().ok().filter(|v| *v < 60)
    };
    let (m, sec) = (field(m).ok_or_else(bad)?, field(sec).ok_or_else(bad)?);
    Utc.with_ymd_and_hms(1900, 1, 1, 0, m, sec).single().ok_or_else(bad)
}

/// Midnight UTC on Jan 1 of `year`.
pub fn year_start(year: i32) -> Result<DateTime<Utc>, RecordError> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single().ok_or(RecordError::BadYear(year))
}

/// Validate every row of the cyclist array.
pub fn parse_cyclists(rows: Vec<Value>) -> Parsed<Cyclist> {
    parse_rows::<RawCyclist, _, _>("cyclist", rows, Cyclist::try_from)
}
