// File: crates/chart-gallery/src/heatmap.rs
// Summary: Heat map of monthly temperature anomalies (year x month grid) with a swatch legend.

use std::collections::BTreeSet;

use chart_core::format::{fixed, signed, trim_float};
use chart_core::scale::extent;
use chart_core::{
    Anchor, Axis, BandScale, ChartError, Color, Insets, LinearScale, Node, PlotRect, ScaleTransform, Scene, Theme,
    ThresholdScale, Tooltip,
};
use log::info;

use crate::error::{FetchError, RenderError};
use crate::fetch::{load_json, DataSource};
use crate::session::{HoverContent, RenderOutput, RenderSummary};
use crate::temperature::{RawTemperatureDataset, TemperatureCell, TemperatureDataset, MONTH_NAMES};

pub const TEMPERATURE_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

pub const SCENE_ID: &str = "heatmap";
pub const LEGEND_ID: &str = "legend";
pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Cold to hot; one threshold bucket per color.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(69, 117, 180),
        Color::rgb(171, 217, 233),
        Color::rgb(255, 255, 191),
        Color::rgb(253, 174, 97),
        Color::rgb(215, 48, 39),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapConfig {
    pub width: f32,
    pub height: f32,
    pub insets: Insets,
    pub legend_width: f32,
    pub legend_height: f32,
    pub palette: Vec<Color>,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 540.0,
            insets: Insets::new(110, 40, 80, 60),
            legend_width: 400.0,
            legend_height: 60.0,
            palette: default_palette(),
        }
    }
}

/// Years shown as x-axis ticks: decades only.
pub fn decade_ticks(years: &[i32]) -> Vec<i32> {
    years.iter().copied().filter(|y| y.rem_euclid(10) == 0).collect()
}

/// Threshold color scale over absolute temperatures, one equal-width bucket per color.
pub fn color_scale(min: f64, max: f64, palette: Vec<Color>) -> Result<ThresholdScale<Color>, ChartError> {
    ThresholdScale::uniform(min, max, palette)
}

/// Scales, color function and theme for one heat-map render.
pub struct HeatmapSession {
    pub x: BandScale<i32>,
    pub y: BandScale<u32>,
    pub color: ThresholdScale<Color>,
    pub base_temperature: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub theme: Theme,
}

impl HeatmapSession {
    pub fn new(data: &TemperatureDataset, config: &HeatmapConfig, theme: Theme) -> Result<Self, RenderError> {
        let plot = PlotRect::inset(config.width, config.height, &config.insets);
        let years: Vec<i32> = data.cells.records.iter().map(|c| c.year).collect::<BTreeSet<_>>().into_iter().collect();
        let x = BandScale::new(years, plot.x_range());
        let y = BandScale::new((0u32..12).collect(), plot.y_range());
        let (min_temp, max_temp) = extent(data.temperatures()).ok_or(ChartError::EmptyDomain("temperature"))?;
        let color = color_scale(min_temp, max_temp, config.palette.clone())?;
        Ok(Self { x, y, color, base_temperature: data.base_temperature, min_temp, max_temp, theme })
    }

    pub fn x_axis(&self) -> Axis {
        let ticks = decade_ticks(self.x.domain())
            .into_iter()
            .filter_map(|y| self.x.center(&y).map(|px| (px, y.to_string())));
        Axis::bottom("x-axis", self.x_range()).with_ticks(ticks)
    }

    pub fn y_axis(&self) -> Axis {
        let ticks = (0u32..12).filter_map(|m| self.y.center(&m).map(|py| (py, MONTH_NAMES[m as usize])));
        Axis::left("y-axis", self.y_range()).with_ticks(ticks)
    }

    fn x_range(&self) -> (f32, f32) {
        let first = self.x.domain().first().and_then(|y| self.x.position(y)).unwrap_or(0.0);
        (first, first + self.x.step() * self.x.domain().len() as f32)
    }

    fn y_range(&self) -> (f32, f32) {
        let top = self.y.position(&0).unwrap_or(0.0);
        (top, top + self.y.step() * 12.0)
    }

    pub fn mark_for(&self, cell: &TemperatureCell) -> Option<Node> {
        let px = self.x.position(&cell.year)?;
        let py = self.y.position(&cell.month_index())?;
        let temp = cell.temperature(self.base_temperature);
        Some(
            Node::rect(px, py, self.x.bandwidth(), self.y.bandwidth())
                .with_class("cell")
                .fill(*self.color.map(temp))
                .data("month", cell.month_index().to_string())
                .data("year", cell.year.to_string())
                .data("temp", trim_float(temp))
                .tooltip(self.tooltip_for(cell)),
        )
    }

    /// Separate legend surface: one swatch per color, axis ticks at the breakpoints and the maximum.
    pub fn legend(&self, config: &HeatmapConfig) -> Scene {
        let pad = 20.0;
        let swatch_h = 20.0;
        let (lo, hi) = (pad, config.legend_width - pad);
        let scale = LinearScale::new((self.min_temp, self.max_temp), (lo, hi));
        let n = self.color.len();
        let w = (hi - lo) / n as f32;

        let mut scene = Scene::new(LEGEND_ID, config.legend_width, config.legend_height).with_background(self.theme.background);
        let swatches = self
            .color
            .outputs()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let (from, to) = self.color.extent_of(i);
                Node::rect(lo + w * i as f32, 4.0, w, swatch_h)
                    .with_class("swatch")
                    .fill(*c)
                    .stroke(self.theme.axis_line, 0.5)
                    .data("from", fixed(from.unwrap_or(self.min_temp), 1))
                    .data("to", fixed(to.unwrap_or(self.max_temp), 1))
            })
            .collect();
        scene.push(Node::group(swatches).with_id("legend-swatches"));

        let ticks = self
            .color
            .breakpoints()
            .iter()
            .copied()
            .chain(std::iter::once(self.max_temp))
            .map(|v| (scale.to_px(v), fixed(v, 1)));
        scene.push(Axis::bottom("legend-axis", (lo, hi)).with_ticks(ticks).to_node(0.0, 4.0 + swatch_h, &self.theme));
        scene
    }
}

impl HoverContent<TemperatureCell> for HeatmapSession {
    fn tooltip_for(&self, cell: &TemperatureCell) -> Tooltip {
        let temp = cell.temperature(self.base_temperature);
        Tooltip::new()
            .heading(format!("{} - {}", cell.year, cell.month_name()))
            .line(format!("{}℃", fixed(temp, 2)))
            .line(format!("{}℃", signed(cell.variance, 2)))
            .data("year", cell.year.to_string())
    }
}

/// Fetch and validate the temperature dataset.
pub fn load(source: &dyn DataSource, location: &str) -> Result<TemperatureDataset, FetchError> {
    let raw: RawTemperatureDataset = load_json(source, location)?;
    Ok(TemperatureDataset::from_raw(raw))
}

pub fn render(data: &TemperatureDataset, config: &HeatmapConfig, theme: &Theme) -> Result<RenderOutput, RenderError> {
    if data.cells.is_empty() {
        return Err(RenderError::NoRecords { chart: "heatmap", skipped: data.cells.skipped });
    }
    let session = HeatmapSession::new(data, config, *theme)?;
    let (w, h) = (config.width, config.height);
    let plot = PlotRect::inset(w, h, &config.insets);

    let mut scene = Scene::new(SCENE_ID, w, h).with_background(theme.background);
    scene.push(Node::text(w * 0.5, 30.0, TITLE, 20.0, Anchor::Middle).with_id("title").fill(theme.title));
    let years = session.x.domain();
    let description = format!(
        "{}-{}: base temperature {}℃",
        years.first().copied().unwrap_or_default(),
        years.last().copied().unwrap_or_default(),
        trim_float(data.base_temperature)
    );
    scene.push(Node::text(w * 0.5, 54.0, description, 14.0, Anchor::Middle).with_id("description").fill(theme.title));

    let cells: Vec<Node> = data.cells.records.iter().filter_map(|c| session.mark_for(c)).collect();
    let rendered = cells.len();
    scene.push(Node::group(cells).with_id("cells"));
    scene.push(session.x_axis().to_node(0.0, plot.bottom, theme));
    scene.push(session.y_axis().to_node(plot.left, 0.0, theme));

    let legend = session.legend(config);

    let summary = RenderSummary { chart: "heatmap", rendered, skipped: data.cells.skipped };
    info!("{summary}");
    Ok(RenderOutput { title: TITLE.to_string(), scenes: vec![scene, legend], summary })
}

/// Fetch, validate and render in one pass.
pub fn run(source: &dyn DataSource, location: &str, config: &HeatmapConfig, theme: &Theme) -> Result<RenderOutput, RenderError> {
    let data = load(source, location)?;
    render(&data, config, theme)
}
