// File: crates/chart-gallery/tests/heatmap.rs
// Purpose: Heat map output contract: cell attributes, band placement, decade ticks, color buckets, legend.

use chart_core::{Shape, Theme};
use chart_gallery::heatmap::{self, default_palette, HeatmapConfig, HeatmapSession};
use chart_gallery::session::HoverContent;
use chart_gallery::temperature::{RawTemperatureDataset, TemperatureDataset};
use serde_json::json;

fn dataset(base: f64, cells: Vec<serde_json::Value>) -> TemperatureDataset {
    TemperatureDataset::from_raw(RawTemperatureDataset { base_temperature: base, monthly_variance: cells })
}

fn fixture() -> TemperatureDataset {
    let body = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/temperature.json")).expect("fixture");
    TemperatureDataset::from_raw(serde_json::from_str(&body).expect("fixture json"))
}

#[test]
fn end_to_end_single_cell() {
    let data = dataset(8.66, vec![json!({"year": 1900, "month": 1, "variance": -0.68})]);
    let cfg = HeatmapConfig::default();
    let out = heatmap::render(&data, &cfg, &Theme::light()).expect("render");
    let scene = out.scene(heatmap::SCENE_ID).expect("heatmap scene");

    let cells = scene.by_class("cell");
    assert_eq!(cells.len(), 1);
    let cell = cells[0];
    assert_eq!(cell.data_value("temp"), Some("7.98"));
    assert_eq!(cell.data_value("month"), Some("0"));
    assert_eq!(cell.data_value("year"), Some("1900"));
    match cell.shape {
        Shape::Rect { x, y, .. } => {
            assert!((x - cfg.insets.left as f32).abs() < 1e-3, "x = {x}");
            assert!((y - cfg.insets.top as f32).abs() < 1e-3, "y = {y}");
        }
        _ => panic!("cell is not a rect"),
    }
}

#[test]
fn cell_attributes_follow_records() {
    let data = fixture();
    assert_eq!(data.cells.skipped, 1, "month 0 is rejected");
    let out = heatmap::render(&data, &HeatmapConfig::default(), &Theme::light()).expect("render");
    let cells = out.scenes[0].by_class("cell");
    assert_eq!(cells.len(), data.cells.len());
    for (node, rec) in cells.iter().zip(&data.cells.records) {
        let temp: f64 = node.data_value("temp").unwrap().parse().unwrap();
        assert!((temp - (data.base_temperature + rec.variance)).abs() < 1e-9);
        assert_eq!(node.data_value("month"), Some((rec.month - 1).to_string().as_str()));
    }
}

#[test]
fn x_axis_ticks_only_decades() {
    let data = fixture();
    let session = HeatmapSession::new(&data, &HeatmapConfig::default(), Theme::light()).expect("session");
    assert_eq!(session.x_axis().labels(), vec!["1990", "2000", "2010"]);
    assert_eq!(session.y_axis().labels().len(), 12);
    assert_eq!(session.y_axis().labels()[0], "January");
}

#[test]
fn color_buckets_never_decrease_with_temperature() {
    let data = fixture();
    let session = HeatmapSession::new(&data, &HeatmapConfig::default(), Theme::light()).expect("session");
    let mut temps: Vec<f64> = data.temperatures().collect();
    temps.sort_by(|a, b| a.total_cmp(b));
    let buckets: Vec<usize> = temps.iter().map(|t| session.color.bucket(*t)).collect();
    assert!(buckets.windows(2).all(|w| w[0] <= w[1]), "{buckets:?}");
    assert_eq!(buckets.first().copied(), Some(0));
    assert_eq!(buckets.last().copied(), Some(default_palette().len() - 1));
}

#[test]
fn legend_has_one_swatch_per_color_and_max_tick() {
    let data = fixture();
    let out = heatmap::render(&data, &HeatmapConfig::default(), &Theme::light()).expect("render");
    let legend = out.scene(heatmap::LEGEND_ID).expect("legend scene");
    assert_eq!(legend.by_class("swatch").len(), default_palette().len());

    let axis = legend.find_by_id("legend-axis").expect("legend axis");
    let labels: Vec<String> = axis
        .children()
        .iter()
        .filter(|n| n.has_class("tick"))
        .filter_map(|t| t.children().iter().find_map(|c| match &c.shape {
            Shape::Text { content, .. } => Some(content.clone()),
            _ => None,
        }))
        .collect();
    // 4 breakpoints + the maximum (8.66 + 1.9)
    assert_eq!(labels.len(), 5);
    assert_eq!(labels.last().map(String::as_str), Some("10.6"));
}

#[test]
fn tooltip_shows_month_and_signed_variance() {
    let data = dataset(8.66, vec![json!({"year": 1900, "month": 3, "variance": 0.4})]);
    let session = HeatmapSession::new(&data, &HeatmapConfig::default(), Theme::light()).expect("session");
    let t = session.tooltip_for(&data.cells.records[0]);
    assert_eq!(t.heading.as_deref(), Some("1900 - March"));
    assert_eq!(t.lines, vec!["9.06℃".to_string(), "+0.40℃".to_string()]);
    assert_eq!(t.data_value("year"), Some("1900"));
}

#[test]
fn title_and_description_present() {
    let out = heatmap::render(&fixture(), &HeatmapConfig::default(), &Theme::light()).expect("render");
    let scene = &out.scenes[0];
    assert!(scene.find_by_id("title").is_some());
    match &scene.find_by_id("description").expect("description").shape {
        Shape::Text { content, .. } => assert_eq!(content, "1990-2015: base temperature 8.66℃"),
        _ => panic!("description is not text"),
    }
}
