//! # pdf_grid
//!
//! Spreadsheet-like grid placement for PDF report generation.
//!
//! This crate hides the point-coordinate bookkeeping of low-level PDF
//! engines behind a grid specification: page margins, a number of columns,
//! the gutter between them, and a line height. From those it derives a
//! coordinate system similar to a spreadsheet, and content placement is done
//! with a (column, row) coordinate plus a named block (how many columns and
//! lines to span) and a named style (font and alignment).
//!
//! The actual document rendering, font embedding, and text measurement are
//! delegated to an external engine behind the narrow [`PdfEngine`] trait; no
//! PDF bytes are produced here.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_grid::{Align, Orientation, PageSize, PdfEngine, Report, Unit};
//!
//! # fn demo<E: PdfEngine>(engine: E) -> pdf_grid::Result<()> {
//! let mut report = Report::new(engine);
//! report.set_grid(Orientation::Portrait, PageSize::Letter, Unit::Pt, 36.0, 12, 12.0, 12.0)?;
//!
//! report.add_style("header", "Helvetica", "B", 24.0, Align::CENTER | Align::TOP);
//! report.add_style("body", "Helvetica", "", 11.0, Align::LEFT | Align::TOP);
//! report.add_block("banner", 12, 2);
//! report.add_block("para", 8, 1);
//!
//! report.add_page();
//! report.content(1, 1, "banner", "header", "Quarterly Report")?;
//! let consumed = report.content(1, 3, "para", "body", "All figures in points.")?;
//! report.content(1, 3 + consumed as u32, "para", "body", "Continued below.")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Grid coordinate system
pub mod grid;
pub mod page;
pub mod style;

// Rendering engine seam
pub mod engine;

// Font bookkeeping
pub mod encodings;
pub mod fonts;

// Orchestration
pub mod config;
pub mod report;

// Re-exports
pub use config::{BlockConfig, LayoutConfig, StyleConfig};
pub use engine::PdfEngine;
pub use error::{Error, Result};
pub use fonts::FontCache;
pub use grid::{Block, Cell, Grid, Point};
pub use page::{Orientation, PageSize, Unit};
pub use report::Report;
pub use style::{Align, Style};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pdf_grid");
    }
}
