// File: crates/chart-gallery/src/error.rs
// Summary: Error taxonomy: transport/shape failures, bad record fields, render and output failures.

use std::path::PathBuf;

use chart_core::ChartError;
use thiserror::Error;

/// The dataset as a whole could not be obtained or has the wrong shape.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {location} failed: {message}")]
    Transport { location: String, message: String },

    #[error("{location} answered HTTP {status}")]
    Status { location: String, status: u16 },

    #[error("reading {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected JSON in {location} at `{path}`: {message}")]
    Shape { location: String, path: String, message: String },
}

impl FetchError {
    /// Connection-level failures and server errors; worth one immediate retry.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Io { .. } | FetchError::Shape { .. } => false,
        }
    }
}

/// One row of a dataset is unusable; the row is skipped.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("time `{0}` is not MM:SS")]
    BadTime(String),

    #[error("year {0} is out of range")]
    BadYear(i32),

    #[error("month {0} is outside 1..=12")]
    BadMonth(i64),

    #[error("variance {0} is not finite")]
    BadVariance(f64),

    #[error("{0}")]
    Field(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{chart}: no valid records ({skipped} skipped)")]
    NoRecords { chart: &'static str, skipped: usize },

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
