// File: crates/chart-gallery/src/temperature.rs
// Summary: Monthly global temperature variance dataset: base temperature plus month/year cells.

use serde::Deserialize;
use serde_json::Value;

use crate::dataset::{parse_rows, Parsed};
use crate::error::RecordError;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Top-level document; cells stay raw so one bad cell cannot reject the file.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<Value>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawCell {
    pub year: i32,
    pub month: i64,
    pub variance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureCell {
    pub year: i32,
    /// Calendar month, 1..=12.
    pub month: u32,
    /// Anomaly relative to the dataset's base temperature.
    pub variance: f64,
}

impl TemperatureCell {
    /// 0-based month.
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index() as usize]
    }

    /// Absolute temperature; derived, never stored.
    pub fn temperature(&self, base: f64) -> f64 {
        base + self.variance
    }
}

impl TryFrom<RawCell> for TemperatureCell {
    type Error = RecordError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        if !(1..=12).contains(&raw.month) {
            return Err(RecordError::BadMonth(raw.month));
        }
        if !raw.variance.is_finite() {
            return Err(RecordError::BadVariance(raw.variance));
        }
        Ok(Self { year: raw.year, month: raw.month as u32, variance: raw.variance })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub cells: Parsed<TemperatureCell>,
}

impl TemperatureDataset {
    pub fn from_raw(raw: RawTemperatureDataset) -> Self {
        let cells = parse_rows::<RawCell, _, _>("temperature", raw.monthly_variance, TemperatureCell::try_from);
        Self { base_temperature: raw.base_temperature, cells }
    }

    /// Absolute temperatures of all valid cells.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.records.iter().map(move |c| c.temperature(self.base_temperature))
    }
}
