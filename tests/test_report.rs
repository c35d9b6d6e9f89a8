//! Integration tests for grid setup and content placement through the
//! engine seam.

mod common;

use common::{Call, RecordingEngine};
use pdf_grid::{Align, Error, Orientation, PageSize, Report, Unit};

fn letter_report() -> Report<RecordingEngine> {
    common::init_logging();
    let mut report = Report::new(RecordingEngine::new());
    report
        .set_grid(
            Orientation::Portrait,
            PageSize::Letter,
            Unit::Pt,
            36.0,
            12,
            12.0,
            12.0,
        )
        .expect("letter grid parameters are complete");
    report
}

#[test]
fn test_set_grid_initializes_engine_document() {
    let report = letter_report();
    let calls = &report.engine().calls;

    assert_eq!(
        calls[0],
        Call::Init {
            orientation: "Portrait".to_string(),
            unit: "pt".to_string(),
            page_size: "Letter".to_string(),
            font_dir: std::path::PathBuf::new(),
        }
    );
    assert_eq!(
        calls[1],
        Call::SetMargins {
            left: 36.0,
            top: 36.0,
            right: 36.0
        }
    );
}

#[test]
fn test_set_grid_reads_page_size_from_engine() {
    let report = letter_report();
    assert_eq!(report.grid.page_width, 612.0);
    assert_eq!(report.grid.page_height, 792.0);
    assert_eq!(report.grid.column_width, 34.0);
    assert_eq!(report.grid.gutter_count, 11);
}

#[test]
fn test_content_delegates_font_cursor_and_cell() {
    let mut report = letter_report();
    report.add_style("header", "Helvetica", "B", 18.0, Align::LEFT | Align::TOP);
    report.add_block("title", 5, 2);
    report.add_page();

    let lines = report
        .content(3, 3, "title", "header", "Hello")
        .expect("registered names");

    // 5 chars at width 1 wrap into one line of the 218pt cell, times the
    // block height of 2.
    assert_eq!(lines, 2);

    let calls = &report.engine().calls;
    let tail = &calls[calls.len() - 3..];
    assert_eq!(
        tail[0],
        Call::SetFont {
            family: "Helvetica".to_string(),
            style: "B".to_string(),
            size: 18.0
        }
    );
    assert_eq!(tail[1], Call::SetXy { x: 128.0, y: 60.0 });
    assert_eq!(
        tail[2],
        Call::MultiCell {
            width: 218.0,
            height: 24.0,
            text: "Hello".to_string(),
            border: String::new(),
            align: "LT".to_string(),
            fill: false,
        }
    );
}

#[test]
fn test_content_line_estimate_for_wrapped_text() {
    let mut report = letter_report();
    report.add_style("body", "Helvetica", "", 11.0, Align::LEFT | Align::TOP);
    report.add_block("para", 5, 2); // cell width 218

    // 300 monospaced units wrap into ceil(300/218) = 2 lines, times height 2.
    let long_line = "x".repeat(300);
    let lines = report
        .content(1, 1, "para", "body", &long_line)
        .expect("registered names");
    assert_eq!(lines, 4);
}

#[test]
fn test_content_line_estimate_sums_physical_lines() {
    let mut report = letter_report();
    report.add_style("body", "Helvetica", "", 11.0, Align::LEFT | Align::TOP);
    report.add_block("para", 5, 2);

    // ceil(300/218) + ceil(10/218) = 2 + 1, times height 2.
    let text = format!("{}\n{}", "x".repeat(300), "y".repeat(10));
    let lines = report
        .content(1, 1, "para", "body", &text)
        .expect("registered names");
    assert_eq!(lines, 6);
}

#[test]
fn test_content_empty_text_consumes_no_lines() {
    let mut report = letter_report();
    report.add_style("body", "Helvetica", "", 11.0, Align::LEFT | Align::TOP);
    report.add_block("para", 5, 2);

    let lines = report
        .content(1, 1, "para", "body", "")
        .expect("registered names");
    assert_eq!(lines, 0);
}

#[test]
fn test_content_unknown_block_leaves_engine_untouched() {
    let mut report = letter_report();
    report.add_style("body", "Helvetica", "", 11.0, Align::LEFT | Align::TOP);

    let before = report.engine().calls.len();
    let err = report
        .content(1, 1, "missing", "body", "text")
        .expect_err("unregistered block");
    assert!(matches!(err, Error::UnknownBlock(name) if name == "missing"));
    assert_eq!(report.engine().calls.len(), before);
}

#[test]
fn test_content_unknown_style_leaves_engine_untouched() {
    let mut report = letter_report();
    report.add_block("para", 5, 2);

    let before = report.engine().calls.len();
    let err = report
        .content(1, 1, "para", "missing", "text")
        .expect_err("unregistered style");
    assert!(matches!(err, Error::UnknownStyle(name) if name == "missing"));
    assert_eq!(report.engine().calls.len(), before);
}

#[test]
fn test_add_page_delegates() {
    let mut report = letter_report();
    report.add_page();
    assert!(report.engine().calls.contains(&Call::AddPage));
}

#[test]
fn test_alignment_codes_reach_the_engine() {
    let mut report = letter_report();
    report.add_block("cell", 1, 1);
    report.add_style("rb", "Helvetica", "", 10.0, Align::RIGHT | Align::BOTTOM);

    report
        .content(1, 1, "cell", "rb", "x")
        .expect("registered names");

    let cells = report.engine().multi_cells();
    let Call::MultiCell { align, .. } = cells[0] else {
        panic!("expected a MultiCell call");
    };
    assert!(align.contains('R') && align.contains('B'));
    assert_eq!(align.len(), 2);
}
