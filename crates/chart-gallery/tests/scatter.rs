// File: crates/chart-gallery/tests/scatter.rs
// Purpose: Scatter plot output contract: data attributes, colors, positions, legend and tooltips.

use chart_core::format::iso_utc;
use chart_core::{Color, Shape, Theme};
use chart_gallery::cyclist::{parse_cyclists, Cyclist};
use chart_gallery::scatter::{self, ScatterConfig, ScatterSession, ALLEGATION_LABEL, NO_ALLEGATIONS};
use chart_gallery::session::HoverContent;
use chart_gallery::RenderError;
use serde_json::json;

fn fixture() -> Vec<serde_json::Value> {
    let body = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cyclists.json")).expect("fixture");
    serde_json::from_str(&body).expect("fixture json")
}

fn two_riders() -> Vec<serde_json::Value> {
    vec![
        json!({"Time": "36:50", "Name": "A", "Year": 1994, "Nationality": "ITA", "Doping": ""}),
        json!({"Time": "36:15", "Name": "B", "Year": 2015, "Nationality": "USA", "Doping": "EPO"}),
    ]
}

#[test]
fn end_to_end_two_records() {
    let data = parse_cyclists(two_riders());
    let cfg = ScatterConfig::default();
    let out = scatter::render(&data, cfg, &Theme::light()).expect("render");
    let scene = out.scene(scatter::SCENE_ID).expect("scatter scene");

    let dots = scene.by_class("dot");
    assert_eq!(dots.len(), 2);

    let cx = |i: usize| match dots[i].shape {
        Shape::Circle { cx, .. } => cx,
        _ => panic!("dot is not a circle"),
    };
    assert_eq!(cx(0), cfg.padding);
    assert_eq!(cx(1), cfg.width - cfg.padding);
    assert_eq!(dots[0].fill, Some(Color::GREEN));
    assert_eq!(dots[1].fill, Some(Color::RED));

    let legend = scene.find_by_id("legend").expect("legend");
    assert_eq!(legend.children().iter().filter(|n| n.has_class("legend-entry")).count(), 2);
    assert_eq!(out.summary.rendered, 2);
    assert_eq!(out.summary.skipped, 0);
}

#[test]
fn legend_and_axes_are_placed() {
    let data = parse_cyclists(two_riders());
    let cfg = ScatterConfig::default();
    let out = scatter::render(&data, cfg, &Theme::light()).expect("render");
    let scene = &out.scenes[0];

    let legend = scene.find_by_id("legend").expect("legend");
    let entries: Vec<_> = legend.children().iter().filter(|n| n.has_class("legend-entry")).collect();
    let want = [(Color::RED, 100.0, ALLEGATION_LABEL), (Color::GREEN, 120.0, NO_ALLEGATIONS)];
    for (entry, (color, want_y, want_label)) in entries.iter().zip(want) {
        let parts = entry.children();
        match parts[0].shape {
            Shape::Rect { x, y, width, height } => {
                assert_eq!((x, y, width, height), (cfg.width - 180.0, want_y, 12.0, 12.0));
            }
            _ => panic!("legend swatch is not a rect"),
        }
        assert_eq!(parts[0].fill, Some(color));
        match &parts[1].shape {
            Shape::Text { x, content, .. } => {
                assert_eq!(*x, cfg.width - 160.0);
                assert_eq!(content, want_label);
            }
            _ => panic!("legend label is not text"),
        }
    }
    assert_eq!(entries.len(), 2);

    let x_axis = scene.find_by_id("x-axis").expect("x axis");
    assert_eq!(x_axis.translate, Some((0.0, cfg.height - cfg.padding)));
    let y_axis = scene.find_by_id("y-axis").expect("y axis");
    assert_eq!(y_axis.translate, Some((cfg.padding, 0.0)));
}

#[test]
fn faster_times_sit_higher() {
    let data = parse_cyclists(two_riders());
    let cfg = ScatterConfig::default();
    let out = scatter::render(&data, cfg, &Theme::light()).expect("render");
    let dots = out.scenes[0].by_class("dot");
    let cy: Vec<f32> = dots
        .iter()
        .map(|d| match d.shape {
            Shape::Circle { cy, .. } => cy,
            _ => unreachable!(),
        })
        .collect();
    // 36:15 is the minimum time -> top of the range
    assert_eq!(cy[1], cfg.padding);
    assert_eq!(cy[0], cfg.height - cfg.padding);
}

#[test]
fn data_attributes_match_records() {
    let data = parse_cyclists(fixture());
    assert_eq!(data.skipped, 1, "the malformed time row is dropped");
    let out = scatter::render(&data, ScatterConfig::default(), &Theme::light()).expect("render");
    let dots = out.scenes[0].by_class("dot");
    assert_eq!(dots.len(), data.records.len());

    for (dot, rec) in dots.iter().zip(&data.records) {
        assert_eq!(dot.data_value("xvalue"), Some(iso_utc(&rec.year_date).as_str()));
        assert_eq!(dot.data_value("yvalue"), Some(iso_utc(&rec.time).as_str()));
        let want = if rec.doping.is_empty() { Color::GREEN } else { Color::RED };
        assert_eq!(dot.fill, Some(want));
    }
    assert_eq!(dots[0].data_value("xvalue"), Some("1995-01-01T00:00:00.000Z"));
    assert_eq!(dots[0].data_value("yvalue"), Some("1900-01-01T00:36:50.000Z"));
}

#[test]
fn axes_use_year_and_minute_labels() {
    let data = parse_cyclists(fixture());
    let session = ScatterSession::new(&data.records, ScatterConfig::default(), Theme::light()).expect("session");
    let x = session.x_axis();
    assert!(x.labels().iter().all(|l| l.len() == 4 && l.parse::<i32>().is_ok()), "{:?}", x.labels());
    let y = session.y_axis();
    assert!(!y.labels().is_empty());
    assert!(y.labels().iter().all(|l| l.len() == 5 && &l[2..3] == ":"), "{:?}", y.labels());
}

#[test]
fn tooltip_names_rider_and_allegation() {
    let data = parse_cyclists(fixture());
    let session = ScatterSession::new(&data.records, ScatterConfig::default(), Theme::light()).expect("session");

    let pantani: &Cyclist = &data.records[0];
    let t = session.tooltip_for(pantani);
    assert_eq!(t.heading.as_deref(), Some("Marco Pantani: ITA"));
    assert_eq!(t.lines[0], "Year: 1995, Time: 36:50");
    assert!(t.lines[1].starts_with("Alleged drug use"));
    assert_eq!(t.data_value("year"), Some("1995-01-01T00:00:00.000Z"));

    let clean = data.records.iter().find(|c| c.doping.is_empty()).expect("clean rider");
    assert_eq!(session.tooltip_for(clean).lines[1], NO_ALLEGATIONS);
}

#[test]
fn no_valid_rows_is_an_error() {
    let data = parse_cyclists(vec![json!({"Time": "??", "Name": "X", "Year": 2000, "Nationality": "X"})]);
    match scatter::render(&data, ScatterConfig::default(), &Theme::light()) {
        Err(RenderError::NoRecords { skipped, .. }) => assert_eq!(skipped, 1),
        other => panic!("expected NoRecords, got {:?}", other.map(|o| o.summary)),
    }
}
