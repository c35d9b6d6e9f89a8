//! The rendering-engine seam.
//!
//! Everything this crate needs from a PDF engine is the narrow capability
//! set below: document construction, page management, cursor and font state,
//! wrapped text cells, text measurement, and font registration/compilation.
//! The grid and report logic never touch PDF structure themselves, which
//! keeps them testable against a fake engine that only has to measure text
//! and record draw calls.

use crate::error::Result;
use std::path::Path;

/// Consumed capability set of the external PDF rendering engine.
///
/// Coordinates, sizes, and font sizes are in the unit system the document
/// was initialized with. Methods have no return channel unless the
/// underlying operation can fail in a way the report must react to; engines
/// that buffer errors internally (a common PDF-writer pattern) surface them
/// when the document is finalized, outside this crate.
pub trait PdfEngine {
    /// Construct the underlying document. Called once, by
    /// [`Report::set_grid`](crate::Report::set_grid), with the engine wire
    /// tokens for orientation, unit, and page size, plus the font search
    /// path.
    fn init(&mut self, orientation: &str, unit: &str, page_size: &str, font_dir: &Path);

    /// Start a new page; subsequent placement lands on it.
    fn add_page(&mut self);

    /// Set the page margins.
    fn set_margins(&mut self, left: f64, top: f64, right: f64);

    /// Select the current font by family, style modifier, and size.
    fn set_font(&mut self, family: &str, style: &str, size: f64);

    /// Move the text cursor to an absolute position.
    fn set_xy(&mut self, x: f64, y: f64);

    /// Draw a wrapped multi-line text block of the given cell size at the
    /// current cursor, honoring the border spec, alignment code, and fill
    /// flag.
    fn multi_cell(
        &mut self,
        width: f64,
        height: f64,
        text: &str,
        border: &str,
        align: &str,
        fill: bool,
    );

    /// Measured width of a single line in the current font.
    fn string_width(&self, text: &str) -> f64;

    /// Register a compiled font under a family name and style modifier.
    fn add_font(&mut self, family: &str, style: &str, path: &Path);

    /// Point the engine's font search path at a directory.
    fn set_font_location(&mut self, dir: &Path);

    /// Physical (width, height) of the current page size.
    fn page_size(&self) -> (f64, f64);

    /// Compile a source font file into the engine's intermediate format,
    /// using the given encoding map, writing into `out_dir`.
    fn make_font(&mut self, source: &Path, encoding_map: &Path, out_dir: &Path) -> Result<()>;
}
