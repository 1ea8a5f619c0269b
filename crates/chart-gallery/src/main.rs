// File: crates/chart-gallery/src/main.rs
// Summary: CLI: fetch the datasets, render the requested charts, write them to the output directory.

use anyhow::{bail, Context, Result};
use chart_gallery::{run_chart, Config};
use clap::Parser;
use log::error;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let theme = config.theme();
    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating output directory {}", config.out_dir.display()))?;

    let mut failed = Vec::new();
    for kind in config.charts() {
        match run_chart(kind, &config, &theme) {
            Ok(report) => {
                for f in &report.files {
                    println!("Wrote {}", f.display());
                }
            }
            Err(e) => {
                error!("{kind} chart not rendered: {e}");
                failed.push(kind.to_string());
            }
        }
    }

    if !failed.is_empty() {
        bail!("failed to render: {}", failed.join(", "));
    }
    Ok(())
}
