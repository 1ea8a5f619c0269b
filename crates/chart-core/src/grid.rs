// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" 1/2/5 tick steps and aligned tick values.

/// Round `span / count` to a step of the form {1, 2, 5} x 10^k.
pub fn nice_step(span: f64, count: usize) -> f64 {
    let raw = span.abs() / count.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 { return 0.0; }
    let base = 10f64.powf(raw.log10().floor());
    let err = raw / base;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Roughly `count` tick values covering [start, stop], aligned to multiples of a nice step.
/// A degenerate range yields the single value.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop { return vec![start]; }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let step = nice_step(hi - lo, count);
    if step <= 0.0 { return Vec::new(); }
    let i0 = (lo / step).ceil() as i64;
    let i1 = (hi / step).floor() as i64;
    let mut out: Vec<f64> = (i0..=i1).map(|i| i as f64 * step).collect();
    if start > stop { out.reverse(); }
    out
}
