//! A recording fake of the rendering engine.
//!
//! Records every call the report makes so tests can assert on the exact
//! delegation, measures text as a monospaced renderer would (one
//! `char_width` per character), and can be told to fail font compilation.

#![allow(dead_code)] // Each test binary uses a subset of the fake.

use pdf_grid::{Error, PdfEngine, Result};
use std::path::{Path, PathBuf};

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init {
        orientation: String,
        unit: String,
        page_size: String,
        font_dir: PathBuf,
    },
    AddPage,
    SetMargins {
        left: f64,
        top: f64,
        right: f64,
    },
    SetFont {
        family: String,
        style: String,
        size: f64,
    },
    SetXy {
        x: f64,
        y: f64,
    },
    MultiCell {
        width: f64,
        height: f64,
        text: String,
        border: String,
        align: String,
        fill: bool,
    },
    AddFont {
        family: String,
        style: String,
        path: PathBuf,
    },
    SetFontLocation(PathBuf),
    MakeFont {
        source: PathBuf,
        encoding_map: PathBuf,
        out_dir: PathBuf,
    },
}

#[derive(Debug)]
pub struct RecordingEngine {
    pub calls: Vec<Call>,
    /// Measured width per character; the fake wraps like a monospaced font.
    pub char_width: f64,
    /// Page dimensions reported back to the report.
    pub page: (f64, f64),
    /// When set, `make_font` fails like a broken engine compiler.
    pub fail_make_font: bool,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            char_width: 1.0,
            page: (612.0, 792.0),
            fail_make_font: false,
        }
    }
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded `MultiCell` calls, in order.
    pub fn multi_cells(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::MultiCell { .. }))
            .collect()
    }
}

impl PdfEngine for RecordingEngine {
    fn init(&mut self, orientation: &str, unit: &str, page_size: &str, font_dir: &Path) {
        self.calls.push(Call::Init {
            orientation: orientation.to_string(),
            unit: unit.to_string(),
            page_size: page_size.to_string(),
            font_dir: font_dir.to_path_buf(),
        });
    }

    fn add_page(&mut self) {
        self.calls.push(Call::AddPage);
    }

    fn set_margins(&mut self, left: f64, top: f64, right: f64) {
        self.calls.push(Call::SetMargins { left, top, right });
    }

    fn set_font(&mut self, family: &str, style: &str, size: f64) {
        self.calls.push(Call::SetFont {
            family: family.to_string(),
            style: style.to_string(),
            size,
        });
    }

    fn set_xy(&mut self, x: f64, y: f64) {
        self.calls.push(Call::SetXy { x, y });
    }

    fn multi_cell(
        &mut self,
        width: f64,
        height: f64,
        text: &str,
        border: &str,
        align: &str,
        fill: bool,
    ) {
        self.calls.push(Call::MultiCell {
            width,
            height,
            text: text.to_string(),
            border: border.to_string(),
            align: align.to_string(),
            fill,
        });
    }

    fn string_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn add_font(&mut self, family: &str, style: &str, path: &Path) {
        self.calls.push(Call::AddFont {
            family: family.to_string(),
            style: style.to_string(),
            path: path.to_path_buf(),
        });
    }

    fn set_font_location(&mut self, dir: &Path) {
        self.calls.push(Call::SetFontLocation(dir.to_path_buf()));
    }

    fn page_size(&self) -> (f64, f64) {
        self.page
    }

    fn make_font(&mut self, source: &Path, encoding_map: &Path, out_dir: &Path) -> Result<()> {
        self.calls.push(Call::MakeFont {
            source: source.to_path_buf(),
            encoding_map: encoding_map.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
        });
        if self.fail_make_font {
            return Err(Error::FontCompile("engine compiler refused".to_string()));
        }
        Ok(())
    }
}

/// Initialize test logging once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
