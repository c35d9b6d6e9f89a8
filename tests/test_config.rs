//! Integration tests for layout configuration documents.

mod common;

use common::RecordingEngine;
use pdf_grid::{Align, LayoutConfig, Orientation, PageSize, Report, Unit};

const LAYOUT: &str = r#"{
    "orientation": "portrait",
    "page_size": "letter",
    "unit": "pt",
    "margin": 36.0,
    "column_count": 12,
    "gutter_width": 12.0,
    "line_height": 12.0,
    "styles": {
        "header": {
            "font_family": "Helvetica",
            "font_style": "B",
            "font_size": 24.0,
            "alignment": "CENTER | TOP"
        },
        "body": {
            "font_family": "Helvetica",
            "font_size": 11.0,
            "alignment": "LEFT | TOP"
        }
    },
    "blocks": {
        "banner": { "width": 12, "height": 2 },
        "para": { "width": 8, "height": 1 }
    }
}"#;

#[test]
fn test_apply_layout_sets_grid_and_registries() {
    common::init_logging();
    let layout = LayoutConfig::from_json(LAYOUT).expect("valid layout document");
    assert_eq!(layout.orientation, Orientation::Portrait);
    assert_eq!(layout.page_size, PageSize::Letter);
    assert_eq!(layout.unit, Unit::Pt);

    let mut report = Report::new(RecordingEngine::new());
    report.apply_layout(&layout).expect("layout applies cleanly");

    assert_eq!(report.grid.column_width, 34.0);
    assert_eq!(report.grid.gutter_count, 11);

    let header = report.style("header").expect("header registered");
    assert_eq!(header.font_style, "B");
    assert_eq!(header.alignment, Align::CENTER | Align::TOP);
    assert_eq!(report.style("body").expect("body registered").font_style, "");

    let banner = report.block("banner").expect("banner registered");
    assert_eq!((banner.width, banner.height), (12, 2));
}

#[test]
fn test_apply_layout_then_place_content() {
    let layout = LayoutConfig::from_json(LAYOUT).expect("valid layout document");
    let mut report = Report::new(RecordingEngine::new());
    report.apply_layout(&layout).expect("layout applies cleanly");

    report.add_page();
    let lines = report
        .content(1, 1, "banner", "header", "Quarterly Report")
        .expect("names come from the layout");
    assert_eq!(lines, 2);
}

#[test]
fn test_apply_layout_rejects_incomplete_grid() {
    let layout = LayoutConfig::from_json(
        r#"{
            "page_size": "a4",
            "margin": 10.0,
            "column_count": 0,
            "gutter_width": 4.0,
            "line_height": 5.0
        }"#,
    )
    .expect("parses even when geometrically degenerate");

    let mut report = Report::new(RecordingEngine::new());
    assert!(report.apply_layout(&layout).is_err());
}
