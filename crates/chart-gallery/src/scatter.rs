// File: crates/chart-gallery/src/scatter.rs
// Summary: Scatter plot of race finish times by year, colored by doping allegation.

use chart_core::format::iso_utc;
use chart_core::{Anchor, Axis, Color, Node, ScaleTransform, Scene, Theme, TimeScale, Tooltip};
use log::info;
use serde_json::Value;

use crate::cyclist::{parse_cyclists, Cyclist};
use crate::dataset::Parsed;
use crate::error::{FetchError, RenderError};
use crate::fetch::{load_json, DataSource};
use crate::session::{HoverContent, RenderOutput, RenderSummary};

pub const CYCLIST_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

pub const SCENE_ID: &str = "scatterplot";
pub const TITLE: &str = "Doping in Professional Bicycle Racing";
pub const ALLEGATION_LABEL: &str = "Riders with doping allegations";
pub const NO_ALLEGATIONS: &str = "No doping allegations";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterConfig {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub radius: f32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self { width: chart_core::types::WIDTH, height: chart_core::types::HEIGHT, padding: 60.0, radius: 6.0 }
    }
}

/// Red for an allegation, green otherwise.
pub fn mark_color(c: &Cyclist) -> Color {
    if c.has_allegation() { Color::RED } else { Color::GREEN }
}

/// Scales and theme for one scatter render.
pub struct ScatterSession {
    pub x: TimeScale,
    pub y: TimeScale,
    pub theme: Theme,
    pub config: ScatterConfig,
}

impl ScatterSession {
    pub fn new(records: &[Cyclist], config: ScatterConfig, theme: Theme) -> Result<Self, RenderError> {
        let p = config.padding;
        let x = TimeScale::from_values(records.iter().map(|c| c.year_date), (p, config.width - p))?;
        // no inversion: faster times sit near the top
        let y = TimeScale::from_values(records.iter().map(|c| c.time), (p, config.height - p))?;
        Ok(Self { x, y, theme, config })
    }

    pub fn x_axis(&self) -> Axis {
        Axis::bottom("x-axis", self.x.range)
            .with_ticks(self.x.ticks(10).into_iter().map(|t| (self.x.to_px(t), t.format("%Y").to_string())))
    }

    pub fn y_axis(&self) -> Axis {
        Axis::left("y-axis", self.y.range)
            .with_ticks(self.y.ticks(10).into_iter().map(|t| (self.y.to_px(t), t.format("%M:%S").to_string())))
    }

    pub fn mark_for(&self, c: &Cyclist) -> Node {
        Node::circle(self.x.to_px(c.year_date), self.y.to_px(c.time), self.config.radius)
            .with_class("dot")
            .fill(mark_color(c))
            .stroke(self.theme.axis_line, 0.5)
            .data("xvalue", iso_utc(&c.year_date))
            .data("yvalue", iso_utc(&c.time))
            .tooltip(self.tooltip_for(c))
    }

    pub fn legend(&self) -> Node {
        let x = self.config.width - 180.0;
        let entries = [(Color::RED, ALLEGATION_LABEL, 100.0), (Color::GREEN, NO_ALLEGATIONS, 120.0)];
        let children = entries
            .into_iter()
            .map(|(color, label, y)| {
                Node::group(vec![
                    Node::rect(x, y, 12.0, 12.0).fill(color),
                    Node::text(x + 20.0, y + 10.0, label, 12.0, Anchor::Start).fill(self.theme.legend_label),
                ])
                .with_class("legend-entry")
            })
            .collect();
        Node::group(children).with_id("legend")
    }
}

impl HoverContent<Cyclist> for ScatterSession {
    fn tooltip_for(&self, c: &Cyclist) -> Tooltip {
        let allegation = if c.has_allegation() { c.doping.as_str() } else { NO_ALLEGATIONS };
        Tooltip::new()
            .heading(format!("{}: {}", c.name, c.nationality))
            .line(format!("Year: {}, Time: {}", c.year, c.time_label()))
            .line(allegation)
            .data("year", iso_utc(&c.year_date))
    }
}

/// Fetch and validate the cyclist dataset.
pub fn load(source: &dyn DataSource, location: &str) -> Result<Parsed<Cyclist>, FetchError> {
    let rows: Vec<Value> = load_json(source, location)?;
    Ok(parse_cyclists(rows))
}

pub fn render(data: &Parsed<Cyclist>, config: ScatterConfig, theme: &Theme) -> Result<RenderOutput, RenderError> {
    if data.is_empty() {
        return Err(RenderError::NoRecords { chart: "scatter", skipped: data.skipped });
    }
    let session = ScatterSession::new(&data.records, config, *theme)?;
    let (w, h, p) = (config.width, config.height, config.padding);

    let mut scene = Scene::new(SCENE_ID, w, h).with_background(theme.background);
    scene.push(Node::text(w * 0.5, 28.0, TITLE, 20.0, Anchor::Middle).with_id("title").fill(theme.title));
    scene.push(
        Node::text(w * 0.5, 48.0, format!("{} fastest times up Alpe d'Huez", data.len()), 13.0, Anchor::Middle)
            .with_id("subtitle")
            .fill(theme.title),
    );
    scene.push(session.x_axis().to_node(0.0, h - p, theme));
    scene.push(session.y_axis().to_node(p, 0.0, theme));
    scene.push(Node::group(data.records.iter().map(|c| session.mark_for(c)).collect()).with_id("dots"));
    scene.push(session.legend());

    let summary = RenderSummary { chart: "scatter", rendered: data.len(), skipped: data.skipped };
    info!("{summary}");
    Ok(RenderOutput { title: TITLE.to_string(), scenes: vec![scene], summary })
}

/// Fetch, validate and render in one pass.
pub fn run(source: &dyn DataSource, location: &str, config: ScatterConfig, theme: &Theme) -> Result<RenderOutput, RenderError> {
    let data = load(source, location)?;
    render(&data, config, theme)
}
