// File: crates/chart-gallery/tests/pipeline.rs
// Purpose: Fetch -> validate -> render -> write, using local fixtures and a scratch output dir.
// Behavior:
// - HTML output inlines the scenes and the tooltip element.
// - PNG output decodes at the scene size; the heat map legend gets its own file.
// - Fetch or shape failures write the "Dataset unavailable" state and still return the error.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chart_core::Theme;
use chart_gallery::fetch::FileSource;
use chart_gallery::output::{Format, OutputOptions};
use chart_gallery::{run_chart_with, ChartKind, FetchError, RenderError};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn scratch_dir(tag: &str) -> PathBuf {
    static N: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "chart-gallery-{tag}-{}-{}",
        std::process::id(),
        N.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn opts<'a>(dir: &'a Path, format: Format, theme: &'a Theme) -> OutputOptions<'a> {
    OutputOptions { out_dir: dir, format, theme, draw_labels: false }
}

#[test]
fn scatter_html_page() {
    let dir = scratch_dir("scatter-html");
    let theme = Theme::light();
    let report = run_chart_with(ChartKind::Scatter, &FileSource, &fixture("cyclists.json"), &opts(&dir, Format::Html, &theme))
        .expect("scatter renders");
    assert_eq!(report.summary.rendered, 5);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.files, vec![dir.join("scatterplot.html")]);

    let html = std::fs::read_to_string(&report.files[0]).expect("read page");
    assert!(html.contains("id=\"scatterplot\""));
    assert!(html.contains("<div id=\"tooltip\"></div>"));
    assert_eq!(html.matches("class=\"dot\"").count(), 5);
    assert_eq!(html.matches("class=\"legend-entry\"").count(), 2);
    assert!(html.contains("data-tooltip-year=\"1995-01-01T00:00:00.000Z\""));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn heatmap_png_writes_chart_and_legend() {
    let dir = scratch_dir("heatmap-png");
    let theme = Theme::dark();
    let location = format!("file://{}", fixture("temperature.json"));
    let report = run_chart_with(ChartKind::Heatmap, &FileSource, &location, &opts(&dir, Format::Png, &theme))
        .expect("heatmap renders");
    assert_eq!(report.files, vec![dir.join("heatmap.png"), dir.join("heatmap-legend.png")]);

    let chart = image::open(&report.files[0]).expect("decode chart");
    assert_eq!((chart.width(), chart.height()), (1200, 540));
    let legend = image::open(&report.files[1]).expect("decode legend");
    assert_eq!((legend.width(), legend.height()), (400, 60));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn heatmap_svg_files_are_standalone() {
    let dir = scratch_dir("heatmap-svg");
    let theme = Theme::light();
    let report = run_chart_with(ChartKind::Heatmap, &FileSource, &fixture("temperature.json"), &opts(&dir, Format::Svg, &theme))
        .expect("heatmap renders");
    assert_eq!(report.files.len(), 2);
    let chart = std::fs::read_to_string(&report.files[0]).expect("read svg");
    assert!(chart.starts_with("<?xml"));
    assert_eq!(chart.matches("class=\"cell\"").count(), 8);
    let legend = std::fs::read_to_string(&report.files[1]).expect("read legend");
    assert!(legend.contains("id=\"legend\""));
    assert_eq!(legend.matches("class=\"swatch\"").count(), 5);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_dataset_writes_error_page() {
    let dir = scratch_dir("missing");
    let theme = Theme::light();
    let err = run_chart_with(ChartKind::Scatter, &FileSource, &fixture("no-such-file.json"), &opts(&dir, Format::Html, &theme))
        .expect_err("missing file fails");
    assert!(matches!(err, RenderError::Fetch(FetchError::Io { .. })), "{err:?}");

    let html = std::fs::read_to_string(dir.join("scatterplot.html")).expect("error page written");
    assert!(html.contains("id=\"error\""));
    assert!(html.contains("Dataset unavailable"));
    assert!(!html.contains("class=\"dot\""));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn wrong_shape_reports_json_path() {
    let dir = scratch_dir("shape");
    let theme = Theme::light();
    let err = run_chart_with(
        ChartKind::Heatmap,
        &FileSource,
        &fixture("temperature_bad_shape.json"),
        &opts(&dir, Format::Svg, &theme),
    )
    .expect_err("bad shape fails");
    match err {
        RenderError::Fetch(FetchError::Shape { path, .. }) => assert_eq!(path, "baseTemperature"),
        other => panic!("expected a shape error, got {other:?}"),
    }
    let svg = std::fs::read_to_string(dir.join("heatmap.svg")).expect("error scene written");
    assert!(svg.contains("Dataset unavailable"));
    let _ = std::fs::remove_dir_all(&dir);
}
