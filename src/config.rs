//! Layout configuration files.
//!
//! A deployment usually pins its grid, styles, and blocks in a JSON document
//! rather than in code. [`LayoutConfig`] mirrors the full
//! [`Report::set_grid`](crate::Report::set_grid) parameter set plus the
//! named style and block registries, and
//! [`Report::apply_layout`](crate::Report::apply_layout) applies it in one
//! call.
//!
//! ```
//! use pdf_grid::LayoutConfig;
//!
//! let config = LayoutConfig::from_json(r#"{
//!     "orientation": "portrait",
//!     "page_size": "letter",
//!     "unit": "pt",
//!     "margin": 36.0,
//!     "column_count": 12,
//!     "gutter_width": 12.0,
//!     "line_height": 12.0,
//!     "styles": {
//!         "body": { "font_family": "Helvetica", "font_size": 11.0, "alignment": "LEFT | TOP" }
//!     },
//!     "blocks": {
//!         "full": { "width": 12, "height": 1 }
//!     }
//! }"#).unwrap();
//! assert_eq!(config.column_count, 12);
//! ```

use crate::engine::PdfEngine;
use crate::error::Result;
use crate::page::{Orientation, PageSize, Unit};
use crate::report::Report;
use crate::style::Align;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named style as written in a layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Font family, as registered with the engine.
    pub font_family: String,
    /// Font style modifier; empty for regular.
    #[serde(default)]
    pub font_style: String,
    /// Font size in the grid's unit system.
    pub font_size: f64,
    /// Alignment flag set, e.g. `"LEFT | TOP"`.
    pub alignment: Align,
}

/// A named block as written in a layout document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Columns spanned.
    pub width: u32,
    /// Line-height multiples.
    pub height: u32,
}

/// The full layout of a report: grid parameters plus named styles and
/// blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Page orientation.
    #[serde(default)]
    pub orientation: Orientation,
    /// Page size.
    pub page_size: PageSize,
    /// Measurement unit.
    #[serde(default)]
    pub unit: Unit,
    /// Page margin, all sides.
    pub margin: f64,
    /// Number of columns.
    pub column_count: u32,
    /// Space between adjacent columns.
    pub gutter_width: f64,
    /// Height of one grid row.
    pub line_height: f64,
    /// Named styles to register.
    #[serde(default)]
    pub styles: HashMap<String, StyleConfig>,
    /// Named blocks to register.
    #[serde(default)]
    pub blocks: HashMap<String, BlockConfig>,
}

impl LayoutConfig {
    /// Parse a layout document from JSON.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serialize the layout back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<E: PdfEngine> Report<E> {
    /// Apply a layout document: set the grid, then register every style and
    /// block it names.
    pub fn apply_layout(&mut self, layout: &LayoutConfig) -> Result<()> {
        self.set_grid(
            layout.orientation,
            layout.page_size,
            layout.unit,
            layout.margin,
            layout.column_count,
            layout.gutter_width,
            layout.line_height,
        )?;
        for (name, style) in &layout.styles {
            self.add_style(
                name.clone(),
                style.font_family.clone(),
                style.font_style.clone(),
                style.font_size,
                style.alignment,
            );
        }
        for (name, block) in &layout.blocks {
            self.add_block(name.clone(), block.width, block.height);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const LAYOUT: &str = r#"{
        "orientation": "landscape",
        "page_size": "a4",
        "unit": "mm",
        "margin": 10.0,
        "column_count": 6,
        "gutter_width": 4.0,
        "line_height": 5.0,
        "styles": {
            "body": {
                "font_family": "OpenSans",
                "font_size": 11.0,
                "alignment": "LEFT | TOP"
            }
        },
        "blocks": {
            "half": { "width": 3, "height": 1 }
        }
    }"#;

    #[test]
    fn test_parse_layout() {
        let layout = LayoutConfig::from_json(LAYOUT).expect("valid layout");
        assert_eq!(layout.orientation, Orientation::Landscape);
        assert_eq!(layout.page_size, PageSize::A4);
        assert_eq!(layout.unit, Unit::Mm);
        assert_eq!(layout.column_count, 6);
        let body = &layout.styles["body"];
        assert_eq!(body.font_family, "OpenSans");
        assert_eq!(body.font_style, "");
        assert_eq!(body.alignment, Align::LEFT | Align::TOP);
        assert_eq!(layout.blocks["half"], BlockConfig { width: 3, height: 1 });
    }

    #[test]
    fn test_parse_error_is_recoverable() {
        let err = LayoutConfig::from_json("{ not json").expect_err("malformed document");
        assert!(matches!(err, Error::LayoutConfig(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let layout = LayoutConfig::from_json(LAYOUT).expect("valid layout");
        let json = layout.to_json().expect("serialize");
        let reparsed = LayoutConfig::from_json(&json).expect("reparse");
        assert_eq!(layout, reparsed);
    }
}
