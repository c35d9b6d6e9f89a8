//! Integration tests for font registration and the compiled-font cache.

mod common;

use common::{Call, RecordingEngine};
use pdf_grid::{Error, Report};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn font_report() -> (Report<RecordingEngine>, TempDir) {
    common::init_logging();
    let dir = TempDir::new().expect("tempdir");
    let mut report = Report::new(RecordingEngine::new());
    report
        .set_font_path(dir.path())
        .expect("font path setup should create the cache dir");
    (report, dir)
}

#[test]
fn test_set_font_path_prepares_cache_and_engine() {
    let (report, dir) = font_report();
    let compiled = dir.path().join("_compiled");
    assert!(compiled.is_dir());
    assert!(report
        .engine()
        .calls
        .contains(&Call::SetFontLocation(compiled)));
}

#[test]
fn test_add_font_compiles_and_registers() {
    let (mut report, dir) = font_report();
    fs::write(dir.path().join("OpenSans-Bold.ttf"), b"\0\x01\0\0").expect("write font");

    report
        .add_font("OpenSans-Bold.ttf", "cp1252")
        .expect("sourced font with supported encoding");

    let compiled = dir.path().join("_compiled");
    assert!(compiled.join("cp1252.map").is_file());

    let calls = &report.engine().calls;
    assert!(calls.contains(&Call::MakeFont {
        source: dir.path().join("OpenSans-Bold.ttf"),
        encoding_map: compiled.join("cp1252.map"),
        out_dir: compiled,
    }));
    assert!(calls.contains(&Call::AddFont {
        family: "OpenSans-Bold".to_string(),
        style: String::new(),
        path: PathBuf::from("OpenSans-Bold.json"),
    }));
}

#[test]
fn test_add_font_source_missing() {
    let (mut report, _dir) = font_report();
    let err = report
        .add_font("Missing.ttf", "cp1252")
        .expect_err("no such source font");
    assert!(matches!(err, Error::FontSourceMissing(name) if name == "Missing.ttf"));
}

#[test]
fn test_add_font_unsupported_encoding() {
    let (mut report, dir) = font_report();
    fs::write(dir.path().join("OpenSans.ttf"), b"\0\x01\0\0").expect("write font");

    let err = report
        .add_font("OpenSans.ttf", "cp866")
        .expect_err("encoding outside the embedded set");
    assert!(matches!(err, Error::UnsupportedEncoding(name) if name == "cp866"));

    // The compiler must not have been invoked.
    assert!(!report
        .engine()
        .calls
        .iter()
        .any(|call| matches!(call, Call::MakeFont { .. })));
}

#[test]
fn test_add_font_compiler_failure() {
    let (mut report, dir) = font_report();
    fs::write(dir.path().join("OpenSans.ttf"), b"\0\x01\0\0").expect("write font");
    report.engine_mut().fail_make_font = true;

    let err = report
        .add_font("OpenSans.ttf", "cp1252")
        .expect_err("engine compiler failure propagates");
    assert!(matches!(err, Error::FontCompile(_)));
}

#[test]
fn test_add_font_precompiled_json_missing() {
    let (mut report, _dir) = font_report();
    let err = report
        .add_font("Cached.json", "cp1252")
        .expect_err("compiled file absent from cache");
    assert!(matches!(err, Error::FontCacheMissing(name) if name == "Cached.json"));
}

#[test]
fn test_add_font_precompiled_json_present() {
    let (mut report, dir) = font_report();
    fs::write(dir.path().join("_compiled").join("Cached.json"), b"{}").expect("write compiled");

    report
        .add_font("Cached.json", "cp1252")
        .expect("cached compiled font registers directly");

    let calls = &report.engine().calls;
    assert!(calls.contains(&Call::AddFont {
        family: "Cached".to_string(),
        style: String::new(),
        path: PathBuf::from("Cached.json"),
    }));
    // No compilation for a pre-compiled file.
    assert!(!calls.iter().any(|call| matches!(call, Call::MakeFont { .. })));
}

#[test]
fn test_encoding_map_reused_across_fonts() {
    let (mut report, dir) = font_report();
    fs::write(dir.path().join("A.ttf"), b"\0").expect("write font");
    fs::write(dir.path().join("B.ttf"), b"\0").expect("write font");

    report.add_font("A.ttf", "iso-8859-2").expect("first font");
    let map = dir.path().join("_compiled").join("iso-8859-2.map");
    let first = fs::read(&map).expect("map written");

    report.add_font("B.ttf", "iso-8859-2").expect("second font");
    assert_eq!(fs::read(&map).expect("map still present"), first);
}
