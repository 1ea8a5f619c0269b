// File: crates/chart-core/src/error.rs
// Summary: Error type shared by scale construction and the raster/SVG writers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("empty domain for {0}")]
    EmptyDomain(&'static str),

    #[error("threshold scale needs {expected} outputs for {breakpoints} breakpoints, got {got}")]
    ThresholdArity { breakpoints: usize, expected: usize, got: usize },

    #[error("threshold breakpoints must be finite and sorted ascending")]
    UnsortedBreakpoints,

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
