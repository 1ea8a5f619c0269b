// File: crates/chart-core/src/scale.rs
// Summary: Continuous (linear, time), banded and threshold scales mapping data to pixels or colors.

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::error::{ChartError, Result};
use crate::grid;

/// General data-to-pixel transform for continuous scales.
pub trait ScaleTransform {
    type Domain;
    fn to_px(&self, value: Self::Domain) -> f32;
}

/// Smallest and largest value of an iterator, or `None` when it is empty.
pub fn extent<T, I>(values: I) -> Option<(T, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut it = values.into_iter();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    }))
}

/// Linear numeric scale mapping `domain` onto `range` (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Tick values across the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleTransform for LinearScale {
    type Domain = f64;

    #[inline]
    fn to_px(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // degenerate domain maps to the middle of the range
        if span.abs() < 1e-12 { return (r0 + r1) * 0.5; }
        r0 + ((v - d0) / span) as f32 * (r1 - r0)
    }
}

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;

/// Fixed-length tick intervals; coarser spans switch to calendar years.
const INTERVALS: [i64; 15] = [
    SECOND, 5 * SECOND, 15 * SECOND, 30 * SECOND,
    MINUTE, 5 * MINUTE, 15 * MINUTE, 30 * MINUTE,
    HOUR, 3 * HOUR, 6 * HOUR, 12 * HOUR,
    DAY, 2 * DAY, WEEK,
];

/// Continuous UTC time scale (linear in milliseconds).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (DateTime<Utc>, DateTime<Utc>),
    pub range: (f32, f32),
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Build from the extent of `values`.
    pub fn from_values<I>(values: I, range: (f32, f32)) -> Result<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let domain = extent(values).ok_or(ChartError::EmptyDomain("time scale"))?;
        Ok(Self::new(domain, range))
    }

    fn linear(&self) -> LinearScale {
        LinearScale::new(
            (self.domain.0.timestamp_millis() as f64, self.domain.1.timestamp_millis() as f64),
            self.range,
        )
    }

    /// Tick instants across the domain. Spans longer than ~`count` months tick on
    /// calendar years with a 1/2/5 step; shorter spans pick the fixed interval whose
    /// length is closest to `span / count`.
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (a, b) = if self.domain.0 <= self.domain.1 {
            (self.domain.0, self.domain.1)
        } else {
            (self.domain.1, self.domain.0)
        };
        let (a_ms, b_ms) = (a.timestamp_millis(), b.timestamp_millis());
        if a_ms == b_ms { return vec![a]; }
        let target = (b_ms - a_ms) as f64 / count.max(1) as f64;

        if target > MONTH as f64 {
            return year_ticks(a, b, count);
        }

        let interval = INTERVALS
            .iter()
            .copied()
            .min_by(|x, y| {
                let rx = (target / *x as f64).ln().abs();
                let ry = (target / *y as f64).ln().abs();
                rx.total_cmp(&ry)
            })
            .unwrap_or(SECOND);

        let mut t = a_ms.div_euclid(interval) * interval;
        if t < a_ms { t += interval; }
        let mut out = Vec::new();
        while t <= b_ms {
            if let Some(dt) = Utc.timestamp_millis_opt(t).single() { out.push(dt); }
            t += interval;
        }
        out
    }
}

impl ScaleTransform for TimeScale {
    type Domain = DateTime<Utc>;

    #[inline]
    fn to_px(&self, t: DateTime<Utc>) -> f32 {
        self.linear().to_px(t.timestamp_millis() as f64)
    }
}

fn year_ticks(a: DateTime<Utc>, b: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    let first = match Utc.with_ymd_and_hms(a.year(), 1, 1, 0, 0, 0).single() {
        Some(jan1) if jan1 == a => a.year(),
        _ => a.year() + 1,
    };
    let last = b.year();
    let step = (grid::nice_step((last - first) as f64, count).round() as i32).max(1);
    (first..=last)
        .filter(|y| y.rem_euclid(step) == 0)
        .filter_map(|y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).single())
        .collect()
}

/// Ordinal scale splitting the range into equal-width, gap-free bands, one per domain value.
#[derive(Clone, Debug)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f32, f32),
}

impl<T: PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> &[T] { &self.domain }

    /// Distance between the starts of adjacent bands; equal to the bandwidth.
    pub fn step(&self) -> f32 {
        (self.range.1 - self.range.0) / self.domain.len().max(1) as f32
    }

    pub fn bandwidth(&self) -> f32 {
        self.step()
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.domain.iter().position(|d| d == value)
    }

    /// Start pixel of the band for `value`, or `None` if it is not in the domain.
    pub fn position(&self, value: &T) -> Option<f32> {
        self.index_of(value).map(|i| self.range.0 + self.step() * i as f32)
    }

    /// Centre pixel of the band for `value`.
    pub fn center(&self, value: &T) -> Option<f32> {
        self.position(value).map(|p| p + self.bandwidth() * 0.5)
    }
}

/// Step function from a continuous domain to discrete outputs via sorted breakpoints.
/// `outputs.len()` is always `breakpoints.len() + 1`.
#[derive(Clone, Debug)]
pub struct ThresholdScale<R> {
    breakpoints: Vec<f64>,
    outputs: Vec<R>,
}

impl<R> ThresholdScale<R> {
    pub fn new(breakpoints: Vec<f64>, outputs: Vec<R>) -> Result<Self> {
        if outputs.len() != breakpoints.len() + 1 {
            return Err(ChartError::ThresholdArity {
                breakpoints: breakpoints.len(),
                expected: breakpoints.len() + 1,
                got: outputs.len(),
            });
        }
        let sorted = breakpoints.iter().all(|b| b.is_finite())
            && breakpoints.windows(2).all(|w| w[0] <= w[1]);
        if !sorted { return Err(ChartError::UnsortedBreakpoints); }
        Ok(Self { breakpoints, outputs })
    }

    /// Split [min, max] into `outputs.len()` equal buckets.
    pub fn uniform(min: f64, max: f64, outputs: Vec<R>) -> Result<Self> {
        let n = outputs.len();
        if n == 0 { return Err(ChartError::EmptyDomain("threshold outputs")); }
        let breakpoints = (1..n)
            .map(|k| min + (max - min) * (k as f64 / n as f64))
            .collect();
        Self::new(breakpoints, outputs)
    }

    pub fn breakpoints(&self) -> &[f64] { &self.breakpoints }
    pub fn outputs(&self) -> &[R] { &self.outputs }
    pub fn len(&self) -> usize { self.outputs.len() }
    pub fn is_empty(&self) -> bool { self.outputs.is_empty() }

    /// Bucket index: the number of breakpoints less than or equal to `v`.
    pub fn bucket(&self, v: f64) -> usize {
        self.breakpoints.partition_point(|b| *b <= v)
    }

    pub fn map(&self, v: f64) -> &R {
        &self.outputs[self.bucket(v)]
    }

    /// Domain bounds of bucket `i`; the outer buckets are open-ended.
    pub fn extent_of(&self, i: usize) -> (Option<f64>, Option<f64>) {
        let lo = if i == 0 { None } else { self.breakpoints.get(i - 1).copied() };
        let hi = self.breakpoints.get(i).copied();
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(s.to_px(3.0), 50.0);
    }

    #[test]
    fn bands_tile_range() {
        let s = BandScale::new(vec![0u32, 1, 2, 3], (0.0, 400.0));
        assert_eq!(s.bandwidth(), 100.0);
        assert_eq!(s.position(&2), Some(200.0));
        assert_eq!(s.position(&9), None);
    }

    #[test]
    fn band_centre_is_half_a_step_in() {
        let s = BandScale::new(vec!['a', 'b'], (10.0, 110.0));
        assert_eq!(s.step(), 50.0);
        assert_eq!(s.center(&'b'), Some(85.0));
    }

    #[test]
    fn threshold_value_on_breakpoint_goes_up() {
        let s = ThresholdScale::new(vec![1.0, 2.0], vec!["lo", "mid", "hi"]).unwrap();
        assert_eq!(*s.map(0.5), "lo");
        assert_eq!(*s.map(1.0), "mid");
        assert_eq!(*s.map(9.0), "hi");
        assert_eq!(s.extent_of(1), (Some(1.0), Some(2.0)));
        assert_eq!(s.extent_of(0), (None, Some(1.0)));
    }

    #[test]
    fn threshold_rejects_arity_mismatch() {
        let err = ThresholdScale::new(vec![1.0, 2.0, 3.0, 4.0], vec![0; 6]).unwrap_err();
        assert!(matches!(err, ChartError::ThresholdArity { expected: 5, got: 6, .. }));
    }

    #[test]
    fn time_ticks_switch_to_years_for_long_spans() {
        let a = Utc.with_ymd_and_hms(1994, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
        let ticks = TimeScale::new((a, b), (0.0, 1.0)).ticks(10);
        let years: Vec<i32> = ticks.iter().map(|t| t.year()).collect();
        assert_eq!(years, vec![1994, 1996, 1998, 2000, 2002, 2004, 2006, 2008, 2010, 2012, 2014]);
    }

    #[test]
    fn time_ticks_use_seconds_for_race_times() {
        let a = Utc.with_ymd_and_hms(1900, 1, 1, 0, 36, 50).unwrap();
        let b = Utc.with_ymd_and_hms(1900, 1, 1, 0, 39, 50).unwrap();
        let ticks = TimeScale::new((a, b), (0.0, 1.0)).ticks(10);
        assert_eq!(ticks.first().copied(), Some(Utc.with_ymd_and_hms(1900, 1, 1, 0, 37, 0).unwrap()));
        assert!(ticks.windows(2).all(|w| (w[1] - w[0]).num_seconds() == 15));
    }
}
