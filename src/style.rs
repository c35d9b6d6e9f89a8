//! Content styles and alignment flags.
//!
//! Every content placement names a [`Style`]; styles cannot be provided
//! inline. A style pins down the font family, font style, size, and the
//! alignment of text inside its cell.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Alignment of text within a cell, as a set of flags.
    ///
    /// Horizontal and vertical flags combine, e.g.
    /// `Align::LEFT | Align::TOP`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Align: u8 {
        /// Align text to the left edge of the cell.
        const LEFT = 1 << 0;
        /// Center text horizontally.
        const CENTER = 1 << 1;
        /// Align text to the right edge of the cell.
        const RIGHT = 1 << 2;
        /// Align text to the top of the cell.
        const TOP = 1 << 3;
        /// Center text vertically.
        const MIDDLE = 1 << 4;
        /// Align text to the bottom of the cell.
        const BOTTOM = 1 << 5;
    }
}

// Declaration order is the wire order: the engine expects horizontal codes
// before vertical ones, e.g. "LT" never "TL".
const ALIGN_CODES: [(Align, char); 6] = [
    (Align::LEFT, 'L'),
    (Align::CENTER, 'C'),
    (Align::RIGHT, 'R'),
    (Align::TOP, 'T'),
    (Align::MIDDLE, 'M'),
    (Align::BOTTOM, 'B'),
];

impl Align {
    /// Render the flag set as the engine's short alignment code ("LT", "RB",
    /// ...). Output order follows the fixed code table, so it is
    /// deterministic for any flag combination.
    pub fn code(self) -> String {
        let mut value = String::new();
        for (flag, code) in ALIGN_CODES {
            if self.contains(flag) {
                value.push(code);
            }
        }
        value
    }
}

/// A named specification of content visuals.
///
/// All fields participate in identity, so even small differences (one point
/// of font size, a different vertical alignment) require separate styles:
///
/// ```
/// use pdf_grid::{Align, Style};
///
/// let header = Style::new("OpenSans", "", 24.0, Align::CENTER | Align::TOP);
/// let body = Style::new("OpenSans", "", 11.0, Align::LEFT | Align::TOP);
/// assert_ne!(header, body);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Font family, as registered with the engine.
    pub font_family: String,
    /// Font style modifier ("B", "I", ...), engine-defined; empty for
    /// regular.
    pub font_style: String,
    /// Font size in the grid's unit system.
    pub font_size: f64,
    /// Text alignment within the cell.
    pub alignment: Align,
}

impl Style {
    /// Create a new style.
    pub fn new(
        font_family: impl Into<String>,
        font_style: impl Into<String>,
        font_size: f64,
        alignment: Align,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            font_style: font_style.into(),
            font_size,
            alignment,
        }
    }

    /// The engine alignment code for this style.
    pub fn alignment_code(&self) -> String {
        self.alignment.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_codes() {
        // Expected codes are order-insensitive per flag; the implementation
        // output itself must stay deterministic.
        let cases = [
            (Align::LEFT, "L"),
            (Align::LEFT | Align::TOP, "LT"),
            (Align::BOTTOM | Align::RIGHT, "RB"),
            (Align::MIDDLE, "M"),
        ];
        for (alignment, expected) in cases {
            let code = alignment.code();
            for ch in expected.chars() {
                assert!(
                    code.contains(ch),
                    "alignment code {:?} missing '{}' (expected {:?})",
                    code,
                    ch,
                    expected
                );
            }
            assert_eq!(code.len(), expected.len());
        }
    }

    #[test]
    fn test_alignment_code_is_deterministic() {
        let alignment = Align::TOP | Align::LEFT;
        assert_eq!(alignment.code(), "LT");
        assert_eq!(alignment.code(), (Align::LEFT | Align::TOP).code());
    }

    #[test]
    fn test_empty_alignment_has_empty_code() {
        assert_eq!(Align::empty().code(), "");
    }

    #[test]
    fn test_style_alignment_code() {
        let style = Style::new("OpenSans", "B", 12.0, Align::CENTER | Align::MIDDLE);
        assert_eq!(style.alignment_code(), "CM");
    }
}
