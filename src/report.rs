//! Report orchestration: named styles and blocks, grid setup, and content
//! placement delegated to the rendering engine.

use crate::engine::PdfEngine;
use crate::error::{Error, Result};
use crate::fonts::{compiled_name, strip_extension, FontCache};
use crate::grid::{Block, Grid};
use crate::page::{Orientation, PageSize, Unit};
use crate::style::{Align, Style};
use std::collections::HashMap;
use std::path::Path;

/// Holds everything needed to generate one document: the grid, the named
/// style and block registries, the font cache, and the rendering engine.
///
/// A report is built by one producer, sequentially: configure the grid,
/// register styles and blocks, then alternate [`Report::add_page`] and
/// [`Report::content`] calls.
///
/// ```no_run
/// use pdf_grid::{Align, Orientation, PageSize, Report, Unit};
/// # use pdf_grid::PdfEngine;
/// # fn demo<E: PdfEngine>(engine: E) -> pdf_grid::Result<()> {
/// let mut report = Report::new(engine);
/// report.set_grid(Orientation::Portrait, PageSize::Letter, Unit::Pt, 36.0, 12, 12.0, 12.0)?;
/// report.add_style("header", "Helvetica", "B", 24.0, Align::CENTER | Align::TOP);
/// report.add_block("banner", 12, 2);
/// report.add_page();
/// let lines = report.content(1, 1, "banner", "header", "Quarterly Report")?;
/// # let _ = lines;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Report<E: PdfEngine> {
    /// The grid coordinate system, set by [`Report::set_grid`].
    pub grid: Grid,
    engine: E,
    styles: HashMap<String, Style>,
    blocks: HashMap<String, Block>,
    fonts: FontCache,
}

impl<E: PdfEngine> Report<E> {
    /// Create a blank report around a rendering engine. The engine document
    /// itself is constructed by [`Report::set_grid`].
    pub fn new(engine: E) -> Self {
        Self {
            grid: Grid::default(),
            engine,
            styles: HashMap::new(),
            blocks: HashMap::new(),
            fonts: FontCache::default(),
        }
    }

    /// Set all page and grid specifications required to place content, and
    /// construct the engine document. Must be called before any
    /// [`Report::content`] call.
    ///
    /// The page dimensions are read back from the engine, then the column
    /// widths are derived; [`Error::IncompleteGrid`] is returned when
    /// `column_count` or `gutter_width` is zero.
    pub fn set_grid(
        &mut self,
        orientation: Orientation,
        page_size: PageSize,
        unit: Unit,
        margin: f64,
        column_count: u32,
        gutter_width: f64,
        line_height: f64,
    ) -> Result<()> {
        self.grid = Grid {
            orientation,
            page_size,
            unit,
            column_count,
            gutter_width,
            margin,
            line_height,
            ..Grid::default()
        };

        self.engine.init(
            orientation.token(),
            unit.token(),
            page_size.token(),
            self.fonts.source_dir(),
        );
        self.engine.set_margins(margin, margin, margin);
        let (page_width, page_height) = self.engine.page_size();
        self.grid.page_width = page_width;
        self.grid.page_height = page_height;
        self.grid.calculate_columns()?;
        log::debug!(
            "grid ready: {} columns of {} over a {}x{} {} page",
            self.grid.column_count,
            self.grid.column_width,
            page_width,
            page_height,
            page_size.token(),
        );
        Ok(())
    }

    /// Register a style under a name. Registering the same name again
    /// overwrites the previous style.
    ///
    /// All specs are pinned per style, so even small differences require
    /// separate styles:
    ///
    /// ```text
    /// report.add_style("header", "OpenSans", "", 24.0, Align::CENTER | Align::TOP);
    /// report.add_style("subheader", "OpenSans", "", 18.0, Align::LEFT | Align::TOP);
    /// ```
    pub fn add_style(
        &mut self,
        name: impl Into<String>,
        font_family: impl Into<String>,
        font_style: impl Into<String>,
        font_size: f64,
        alignment: Align,
    ) {
        self.styles.insert(
            name.into(),
            Style::new(font_family, font_style, font_size, alignment),
        );
    }

    /// Register a block specification under a name: `width` columns wide and
    /// `height` line-heights tall. Registering the same name again
    /// overwrites the previous block.
    pub fn add_block(&mut self, name: impl Into<String>, width: u32, height: u32) {
        self.blocks.insert(name.into(), Block { width, height });
    }

    /// Look up a registered style.
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Look up a registered block.
    pub fn block(&self, name: &str) -> Option<Block> {
        self.blocks.get(name).copied()
    }

    /// Start a new page; the previous page is final and all subsequent
    /// placement lands on the new one.
    pub fn add_page(&mut self) {
        self.engine.add_page();
    }

    /// Place a string at the 1-based (column, row) grid coordinate using the
    /// named block and style.
    ///
    /// Returns an estimate of the line count consumed (which can differ from
    /// the block height), to help place following content dynamically: the
    /// text is split on newlines and each physical line contributes
    /// `ceil(measured_width / cell_width)` wrapped lines, the total scaled
    /// by the block height. The estimate assumes the engine wraps like a
    /// monospaced renderer; for proportional fonts with word wrap it is
    /// approximate. That is a documented limitation of the heuristic.
    ///
    /// Unknown block or style names fail with [`Error::UnknownBlock`] /
    /// [`Error::UnknownStyle`] before the engine is touched.
    pub fn content(
        &mut self,
        x: u32,
        y: u32,
        block_name: &str,
        style_name: &str,
        text: &str,
    ) -> Result<usize> {
        let block = self
            .blocks
            .get(block_name)
            .copied()
            .ok_or_else(|| Error::UnknownBlock(block_name.to_string()))?;
        let style = self
            .styles
            .get(style_name)
            .cloned()
            .ok_or_else(|| Error::UnknownStyle(style_name.to_string()))?;

        let point = self.grid.point(x, y);
        let cell = self.grid.cell(block);

        self.engine
            .set_font(&style.font_family, &style.font_style, style.font_size);
        self.engine.set_xy(point.x, point.y);
        self.engine
            .multi_cell(cell.width, cell.height, text, "", &style.alignment_code(), false);
        log::trace!(
            "placed {} chars at ({}, {}) in block {:?}",
            text.len(),
            x,
            y,
            block_name
        );

        let mut line_count = 0usize;
        for line in text.split('\n') {
            let width = self.engine.string_width(line);
            line_count += (width / cell.width).ceil() as usize;
        }
        Ok(line_count * block.height as usize)
    }

    /// Tell the report where to find fonts named in [`Report::add_font`].
    /// Creates the compiled cache directory and points the engine's font
    /// search path at it.
    pub fn set_font_path(&mut self, source_dir: impl AsRef<Path>) -> Result<()> {
        self.fonts = FontCache::new(source_dir.as_ref());
        self.fonts.prepare()?;
        self.engine.set_font_location(self.fonts.compiled_dir());
        Ok(())
    }

    /// Register a font with the engine, compiling it into the cache first if
    /// needed.
    ///
    /// The filename's extension is stripped to form the font family name
    /// used by [`Report::add_style`]:
    ///
    /// ```text
    /// report.add_font("OpenSans-Bold.ttf", "cp1252")?;
    /// report.add_style("header", "OpenSans-Bold", "", 64.0, Align::TOP | Align::LEFT);
    /// ```
    ///
    /// A `.json` filename is treated as already compiled and is registered
    /// straight from the cache ([`Error::FontCacheMissing`] if absent).
    /// Anything else must exist in the font source directory
    /// ([`Error::FontSourceMissing`]) and is compiled with the map for
    /// `encoding` (see [`crate::encodings::names`] for the supported set).
    pub fn add_font(&mut self, filename: &str, encoding: &str) -> Result<()> {
        self.fonts.prepare()?;

        let family = strip_extension(filename).to_string();

        if filename.ends_with(".json") {
            // Pre-compiled file named directly; nothing to compile.
            if self.fonts.has_compiled(filename) {
                self.engine.add_font(&family, "", Path::new(filename));
            } else {
                return Err(Error::FontCacheMissing(filename.to_string()));
            }
        } else if self.fonts.has_source(filename) {
            let compiled = self.compile_font(filename, encoding)?;
            self.engine.add_font(&family, "", Path::new(&compiled));
        } else {
            return Err(Error::FontSourceMissing(filename.to_string()));
        }
        log::debug!("registered font family {:?}", family);
        Ok(())
    }

    /// Compile a source font into the cache, returning the compiled
    /// filename.
    fn compile_font(&mut self, filename: &str, encoding: &str) -> Result<String> {
        let source = self.fonts.source_path(filename);
        let compiled = compiled_name(filename);
        let encoding_map = self.fonts.encoding_map(encoding)?;
        self.engine
            .make_font(&source, &encoding_map, self.fonts.compiled_dir())
            .map_err(|err| Error::FontCompile(err.to_string()))?;
        Ok(compiled)
    }

    /// Access the underlying engine, e.g. to finalize and write the
    /// document.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the underlying engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct NullEngine;

    impl PdfEngine for NullEngine {
        fn init(&mut self, _: &str, _: &str, _: &str, _: &Path) {}
        fn add_page(&mut self) {}
        fn set_margins(&mut self, _: f64, _: f64, _: f64) {}
        fn set_font(&mut self, _: &str, _: &str, _: f64) {}
        fn set_xy(&mut self, _: f64, _: f64) {}
        fn multi_cell(&mut self, _: f64, _: f64, _: &str, _: &str, _: &str, _: bool) {}
        fn string_width(&self, text: &str) -> f64 {
            text.chars().count() as f64
        }
        fn add_font(&mut self, _: &str, _: &str, _: &Path) {}
        fn set_font_location(&mut self, _: &Path) {}
        fn page_size(&self) -> (f64, f64) {
            (612.0, 792.0)
        }
        fn make_font(&mut self, _: &Path, _: &Path, _: &Path) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_add_block_stores_and_overwrites() {
        let mut report = Report::new(NullEngine);
        report.add_block("test", 1, 2);
        assert_eq!(report.block("test"), Some(Block { width: 1, height: 2 }));

        report.add_block("test", 3, 4);
        assert_eq!(report.block("test"), Some(Block { width: 3, height: 4 }));

        report.add_block("new test", 5, 6);
        assert_eq!(report.block("new test"), Some(Block { width: 5, height: 6 }));
    }

    #[test]
    fn test_add_style_stores_and_overwrites() {
        let mut report = Report::new(NullEngine);
        let alignment = Align::LEFT | Align::TOP;

        report.add_style("test", "foo", "", 12.0, alignment);
        assert_eq!(
            report.style("test"),
            Some(&Style::new("foo", "", 12.0, alignment))
        );

        report.add_style("test", "foo bar", "", 24.0, alignment);
        assert_eq!(
            report.style("test"),
            Some(&Style::new("foo bar", "", 24.0, alignment))
        );

        report.add_style("new test", "foo bar", "", 24.0, alignment);
        assert_eq!(
            report.style("new test"),
            Some(&Style::new("foo bar", "", 24.0, alignment))
        );
    }

    #[test]
    fn test_unknown_names_return_none() {
        let report = Report::new(NullEngine);
        assert!(report.style("missing").is_none());
        assert!(report.block("missing").is_none());
    }

    #[test]
    fn test_set_grid_derives_columns() {
        let mut report = Report::new(NullEngine);
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
            .expect("grid parameters are complete");

        let expected = Grid {
            column_count: 12,
            column_width: 34.0,
            gutter_count: 11,
            gutter_width: 12.0,
            line_height: 12.0,
            margin: 36.0,
            orientation: Orientation::Portrait,
            page_width: 612.0,
            page_height: 792.0,
            page_size: PageSize::Letter,
            unit: Unit::Pt,
        };
        assert_eq!(report.grid, expected);
    }

    #[test]
    fn test_set_grid_rejects_incomplete_parameters() {
        let mut report = Report::new(NullEngine);
        let err = report
            .set_grid(
                Orientation::Portrait,
                PageSize::Letter,
                Unit::Pt,
                36.0,
                0,
                12.0,
                12.0,
            )
            .expect_err("zero columns cannot be derived");
        assert!(matches!(err, Error::IncompleteGrid));
    }
}
