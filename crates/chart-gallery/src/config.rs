// File: crates/chart-gallery/src/config.rs
// Summary: Command-line / environment configuration.

use std::fmt;
use std::path::PathBuf;

use chart_core::{theme, Theme};
use clap::{Parser, ValueEnum};

use crate::heatmap::TEMPERATURE_URL;
use crate::output::Format;
use crate::scatter::CYCLIST_URL;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Scatter,
    Heatmap,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Heatmap,
}

impl ChartKind {
    /// Output file stem; also the id of the chart's main surface.
    pub fn stem(&self) -> &'static str {
        match self {
            ChartKind::Scatter => crate::scatter::SCENE_ID,
            ChartKind::Heatmap => crate::heatmap::SCENE_ID,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Scatter => f.write_str("scatter"),
            ChartKind::Heatmap => f.write_str("heatmap"),
        }
    }
}

/// Render the cyclist scatter plot and/or the global temperature heat map.
#[derive(Clone, Debug, Parser)]
#[command(name = "chart-gallery", version, about)]
pub struct Config {
    /// Which chart(s) to render.
    #[arg(value_enum, default_value_t = Target::All)]
    pub target: Target,

    /// Cyclist dataset: http(s) URL, file:// URL or local path.
    #[arg(long, env = "CHART_CYCLIST_URL", default_value = CYCLIST_URL)]
    pub cyclist_url: String,

    /// Temperature dataset: http(s) URL, file:// URL or local path.
    #[arg(long, env = "CHART_TEMPERATURE_URL", default_value = TEMPERATURE_URL)]
    pub temperature_url: String,

    #[arg(long, env = "CHART_OUT_DIR", default_value = "target/out")]
    pub out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Color theme (light, dark).
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Skip text when rasterising PNG output.
    #[arg(long)]
    pub no_labels: bool,
}

impl Config {
    pub fn charts(&self) -> Vec<ChartKind> {
        match self.target {
            Target::Scatter => vec![ChartKind::Scatter],
            Target::Heatmap => vec![ChartKind::Heatmap],
            Target::All => vec![ChartKind::Scatter, ChartKind::Heatmap],
        }
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn location(&self, kind: ChartKind) -> &str {
        match kind {
            ChartKind::Scatter => &self.cyclist_url,
            ChartKind::Heatmap => &self.temperature_url,
        }
    }
}
