// File: crates/chart-gallery/src/lib.rs
// Summary: Library entry point; fetch → validate → render → write for each chart.

pub mod config;
pub mod cyclist;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod heatmap;
pub mod output;
pub mod scatter;
pub mod session;
pub mod temperature;

use std::path::PathBuf;

use chart_core::Theme;
use log::{error, info};

pub use config::{ChartKind, Config};
pub use error::{FetchError, RecordError, RenderError};
pub use session::{RenderOutput, RenderSummary};

use fetch::DataSource;
use heatmap::HeatmapConfig;
use output::{write_output, write_unavailable, OutputOptions};
use scatter::ScatterConfig;

#[derive(Clone, Debug)]
pub struct ChartReport {
    pub summary: RenderSummary,
    pub files: Vec<PathBuf>,
}

/// Render one chart from `source`. On failure the "dataset unavailable" state is
/// written in place of the chart before the error is returned.
pub fn run_chart_with(
    kind: ChartKind,
    source: &dyn DataSource,
    location: &str,
    opts: &OutputOptions<'_>,
) -> Result<ChartReport, RenderError> {
    let (rendered, title, size) = match kind {
        ChartKind::Scatter => {
            let cfg = ScatterConfig::default();
            (scatter::run(source, location, cfg, opts.theme), scatter::TITLE, (cfg.width, cfg.height))
        }
        ChartKind::Heatmap => {
            let cfg = HeatmapConfig::default();
            (heatmap::run(source, location, &cfg, opts.theme), heatmap::TITLE, (cfg.width, cfg.height))
        }
    };

    match rendered {
        Ok(out) => {
            let files = write_output(opts, kind.stem(), &out)?;
            Ok(ChartReport { summary: out.summary, files })
        }
        Err(e) => {
            error!("{kind}: {e}");
            match write_unavailable(opts, kind.stem(), title, size, &e.to_string()) {
                Ok(files) => info!("{kind}: wrote error state to {}", files.iter().map(|f| f.display().to_string()).collect::<Vec<_>>().join(", ")),
                Err(write_err) => error!("{kind}: could not write error state: {write_err}"),
            }
            Err(e)
        }
    }
}

/// Render one chart using the source and options named by `config`.
pub fn run_chart(kind: ChartKind, config: &Config, theme: &Theme) -> Result<ChartReport, RenderError> {
    let location = config.location(kind);
    let source = fetch::source_for(location);
    let opts = OutputOptions {
        out_dir: &config.out_dir,
        format: config.format,
        theme,
        draw_labels: !config.no_labels,
    };
    run_chart_with(kind, source.as_ref(), location, &opts)
}
