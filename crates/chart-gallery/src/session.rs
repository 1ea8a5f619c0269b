// File: crates/chart-gallery/src/session.rs
// Summary: Per-render session plumbing: hover content contract and render results.

use std::fmt;

use chart_core::{Scene, Tooltip};

/// Produces the tooltip for one record, given the session that owns the scales.
/// Called with the session and record explicitly; no state outlives the render.
pub trait HoverContent<R> {
    fn tooltip_for(&self, record: &R) -> Tooltip;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSummary {
    pub chart: &'static str,
    pub rendered: usize,
    pub skipped: usize,
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} mark(s) rendered, {} row(s) skipped", self.chart, self.rendered, self.skipped)
    }
}

/// Scenes of one chart (the heat map has a second, legend scene) plus counts.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub title: String,
    pub scenes: Vec<Scene>,
    pub summary: RenderSummary,
}

impl RenderOutput {
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }
}
