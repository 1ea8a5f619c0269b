// File: crates/chart-core/src/format.rs
// Summary: Label and attribute formatting (ISO instants, trimmed floats, signed values).

use chrono::{DateTime, Datelike, Utc};

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`; years outside 0..=9999 use the extended `±YYYYYY` form.
pub fn iso_utc(t: &DateTime<Utc>) -> String {
    let rest = t.format("-%m-%dT%H:%M:%S%.3fZ");
    match t.year() {
        y @ 0..=9999 => format!("{y:04}{rest}"),
        y => format!("{y:+07}{rest}"),
    }
}

/// Shortest decimal for `v` after dropping accumulated float noise (8.66 - 0.68 prints "7.98").
/// Values where rounding to 1e-9 would overflow or change more than the noise print as-is.
pub fn trim_float(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let scaled = (v * 1e9).round();
    let r = scaled / 1e9;
    if scaled.is_finite() && (r - v).abs() <= v.abs() * 1e-9 {
        if r == 0.0 { "0".to_string() } else { format!("{r}") }
    } else {
        format!("{v}")
    }
}

pub fn fixed(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, v)
}

/// Always carries a sign: "+0.45", "-0.68".
pub fn signed(v: f64, decimals: usize) -> String {
    format!("{:+.*}", decimals, v)
}
