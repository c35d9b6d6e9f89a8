//! The grid coordinate system.
//!
//! A [`Grid`] turns a page specification (size, margins, column count, gutter
//! width, line height) into a spreadsheet-like coordinate system. Content is
//! addressed by 1-based (column, row) coordinates and sized in whole columns
//! and line-height multiples; the grid converts both into the physical units
//! the rendering engine works in.
//!
//! ```text
//! |<-margin->|  col 1  |gutter|  col 2  |gutter|  col 3  |<-margin->|
//! ```

use crate::error::{Error, Result};
use crate::page::{Orientation, PageSize, Unit};
use serde::{Deserialize, Serialize};

/// Page and grid specification required to place content.
///
/// Constructed once per document; the derived fields (`column_width`,
/// `gutter_count`) are filled in by [`Grid::calculate_columns`] and the grid
/// is immutable afterwards, short of re-running setup.
///
/// By construction the column math satisfies
/// `column_width * column_count + gutter_width * (column_count - 1)
/// + 2 * margin == page_width` (within floating-point tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Number of columns on the page.
    pub column_count: u32,
    /// Width of a single column, derived by [`Grid::calculate_columns`].
    pub column_width: f64,
    /// Number of gutters (`column_count - 1`), derived.
    pub gutter_count: u32,
    /// Fixed space between adjacent columns.
    pub gutter_width: f64,
    /// Height of one grid row.
    pub line_height: f64,
    /// Page margin, applied on all sides.
    pub margin: f64,
    /// Page orientation.
    pub orientation: Orientation,
    /// Physical page width, as reported by the engine.
    pub page_width: f64,
    /// Physical page height, as reported by the engine.
    pub page_height: f64,
    /// Page size.
    pub page_size: PageSize,
    /// Measurement unit for every dimension above.
    pub unit: Unit,
}

/// Physical (x, y) origin of a grid coordinate, in the grid's unit system.
///
/// Computed on demand by [`Grid::point`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

/// Physical (width, height) of a [`Block`] under a grid, in the grid's unit
/// system.
///
/// Computed on demand by [`Grid::cell`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Width spanning the block's columns and internal gutters.
    pub width: f64,
    /// Height in line-height multiples.
    pub height: f64,
}

/// A placement footprint in grid units.
///
/// `width` is the number of columns spanned, inclusive of the gutters between
/// them; `height` is a multiple of the grid's line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Columns spanned.
    pub width: u32,
    /// Line-height multiples.
    pub height: u32,
}

impl Grid {
    /// Derive `gutter_count` and `column_width` from the remaining fields.
    ///
    /// Fails with [`Error::IncompleteGrid`] when `column_count` or
    /// `gutter_width` is zero. No other validation is performed; callers own
    /// the plausibility of their margins and page sizes.
    pub fn calculate_columns(&mut self) -> Result<()> {
        if self.column_count == 0 || self.gutter_width == 0.0 {
            return Err(Error::IncompleteGrid);
        }
        self.gutter_count = self.column_count - 1;
        let mut width = self.page_width;
        width -= self.margin * 2.0;
        width -= f64::from(self.gutter_count) * self.gutter_width;
        self.column_width = width / f64::from(self.column_count);
        Ok(())
    }

    /// Physical origin of the 1-based (column, row) coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_grid::Grid;
    ///
    /// let mut grid = Grid {
    ///     column_count: 12,
    ///     gutter_width: 12.0,
    ///     line_height: 12.0,
    ///     margin: 36.0,
    ///     page_width: 612.0,
    ///     page_height: 792.0,
    ///     ..Grid::default()
    /// };
    /// grid.calculate_columns().unwrap();
    ///
    /// let point = grid.point(3, 3);
    /// assert_eq!(point.x, 128.0);
    /// assert_eq!(point.y, 60.0);
    /// ```
    pub fn point(&self, x: u32, y: u32) -> Point {
        let mut point = Point { x: self.margin, y: self.margin };

        point.x += self.column_width * (f64::from(x) - 1.0);
        point.x += self.gutter_width * (f64::from(x) - 1.0);

        point.y += self.line_height * (f64::from(y) - 1.0);

        point
    }

    /// Physical dimensions of a block under this grid.
    ///
    /// The width covers `block.width` columns plus the `block.width - 1`
    /// gutters between them.
    pub fn cell(&self, block: Block) -> Cell {
        let mut cell = Cell { width: 0.0, height: 0.0 };

        cell.width = self.column_width * f64::from(block.width);
        cell.width += self.gutter_width * (f64::from(block.width) - 1.0);

        cell.height = self.line_height * f64::from(block.height);

        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_grid() -> Grid {
        let mut grid = Grid {
            column_count: 12,
            gutter_width: 12.0,
            line_height: 12.0,
            margin: 36.0,
            orientation: Orientation::Portrait,
            page_width: 612.0,
            page_height: 792.0,
            page_size: PageSize::Letter,
            unit: Unit::Pt,
            ..Grid::default()
        };
        grid.calculate_columns().expect("letter grid parameters are complete");
        // column_width == 34.0
        grid
    }

    #[test]
    fn test_calculate_columns() {
        let mut grid = Grid {
            column_count: 6,
            margin: 20.0,
            page_width: 240.0,
            ..Grid::default()
        };

        assert!(grid.calculate_columns().is_err());

        grid.gutter_width = 10.0;
        grid.calculate_columns()
            .expect("calculation should succeed once required params are set");

        assert_eq!(grid.gutter_count, 5);
        assert_eq!(grid.column_width, 25.0);
    }

    #[test]
    fn test_calculate_columns_requires_column_count() {
        let mut grid = Grid {
            gutter_width: 10.0,
            margin: 20.0,
            page_width: 240.0,
            ..Grid::default()
        };
        assert!(matches!(grid.calculate_columns(), Err(Error::IncompleteGrid)));
    }

    #[test]
    fn test_letter_grid_column_width() {
        let grid = letter_grid();
        assert_eq!(grid.gutter_count, 11);
        assert_eq!(grid.column_width, 34.0);
    }

    #[test]
    fn test_column_math_covers_page_width() {
        // column_width*count + gutter_width*(count-1) + 2*margin == page_width
        let cases = [
            (6u32, 10.0f64, 20.0f64, 240.0f64),
            (12, 12.0, 36.0, 612.0),
            (3, 4.25, 18.0, 595.0),
            (1, 6.0, 10.0, 210.0),
        ];
        for (columns, gutter, margin, page_width) in cases {
            let mut grid = Grid {
                column_count: columns,
                gutter_width: gutter,
                margin,
                page_width,
                ..Grid::default()
            };
            grid.calculate_columns().expect("valid parameters");
            let covered = grid.column_width * f64::from(columns)
                + gutter * f64::from(columns - 1)
                + margin * 2.0;
            assert!(
                (covered - page_width).abs() < 1e-9,
                "columns {} gutter {} margin {}: covered {} != page {}",
                columns,
                gutter,
                margin,
                covered,
                page_width
            );
        }
    }

    #[test]
    fn test_cell() {
        let grid = letter_grid();
        let cell = grid.cell(Block { width: 5, height: 2 });
        assert_eq!(cell.width, 218.0); // 34*5 + 12*4
        assert_eq!(cell.height, 24.0);
    }

    #[test]
    fn test_single_column_cell_has_no_gutter() {
        let grid = letter_grid();
        let cell = grid.cell(Block { width: 1, height: 1 });
        assert_eq!(cell.width, 34.0);
        assert_eq!(cell.height, 12.0);
    }

    #[test]
    fn test_point() {
        let grid = letter_grid();
        let point = grid.point(3, 3);
        assert_eq!(point.x, 128.0); // 36 + 34*2 + 12*2
        assert_eq!(point.y, 60.0); // 36 + 12*2
    }

    #[test]
    fn test_origin_point_is_margin() {
        let grid = letter_grid();
        let point = grid.point(1, 1);
        assert_eq!(point.x, 36.0);
        assert_eq!(point.y, 36.0);
    }
}
