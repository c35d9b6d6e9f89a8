//! Page-level enumerations and their engine wire tokens.
//!
//! Orientation, page size, and measurement unit are passed to the rendering
//! engine as short string tokens ("Portrait", "A4", "pt", ...). The token
//! tables are immutable ordered statics constructed at compile time; lookup
//! by raw value returns an empty string for anything outside the table, with
//! no error. That silent fallback is part of the engine wire contract and is
//! covered by tests.

use serde::{Deserialize, Serialize};

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Portrait (default)
    #[default]
    Portrait = 0,
    /// Landscape
    Landscape = 1,
}

/// Standard page sizes understood by the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// A3 (297mm x 420mm)
    #[default]
    A3 = 0,
    /// A4 (210mm x 297mm)
    A4 = 1,
    /// A5 (148mm x 210mm)
    A5 = 2,
    /// US Letter (8.5" x 11")
    Letter = 3,
    /// US Legal (8.5" x 14")
    Legal = 4,
}

/// Measurement unit for all grid and page dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Points (default; 1 inch = 72 points)
    #[default]
    Pt = 0,
    /// Millimeters
    Mm = 1,
    /// Centimeters
    Cm = 2,
    /// Inches
    In = 3,
}

static ORIENTATION_TOKENS: &[(i32, &str)] = &[(0, "Portrait"), (1, "Landscape")];

static PAGE_SIZE_TOKENS: &[(i32, &str)] =
    &[(0, "A3"), (1, "A4"), (2, "A5"), (3, "Letter"), (4, "Legal")];

static UNIT_TOKENS: &[(i32, &str)] = &[(0, "pt"), (1, "mm"), (2, "cm"), (3, "in")];

fn token_for(table: &[(i32, &'static str)], value: i32) -> &'static str {
    table
        .iter()
        .find(|(raw, _)| *raw == value)
        .map(|(_, token)| *token)
        .unwrap_or("")
}

/// Engine token for a raw orientation value; `""` if the value is unknown.
pub fn orientation_token(value: i32) -> &'static str {
    token_for(ORIENTATION_TOKENS, value)
}

/// Engine token for a raw page-size value; `""` if the value is unknown.
pub fn page_size_token(value: i32) -> &'static str {
    token_for(PAGE_SIZE_TOKENS, value)
}

/// Engine token for a raw unit value; `""` if the value is unknown.
pub fn unit_token(value: i32) -> &'static str {
    token_for(UNIT_TOKENS, value)
}

impl Orientation {
    /// The token the rendering engine expects for this orientation.
    pub fn token(self) -> &'static str {
        orientation_token(self as i32)
    }
}

impl PageSize {
    /// The token the rendering engine expects for this page size.
    pub fn token(self) -> &'static str {
        page_size_token(self as i32)
    }
}

impl Unit {
    /// The token the rendering engine expects for this unit.
    pub fn token(self) -> &'static str {
        unit_token(self as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_tokens() {
        assert_eq!(Orientation::Portrait.token(), "Portrait");
        assert_eq!(Orientation::Landscape.token(), "Landscape");
    }

    #[test]
    fn test_page_size_tokens() {
        assert_eq!(PageSize::A3.token(), "A3");
        assert_eq!(PageSize::A4.token(), "A4");
        assert_eq!(PageSize::A5.token(), "A5");
        assert_eq!(PageSize::Letter.token(), "Letter");
        assert_eq!(PageSize::Legal.token(), "Legal");
    }

    #[test]
    fn test_unit_tokens() {
        assert_eq!(Unit::Pt.token(), "pt");
        assert_eq!(Unit::Mm.token(), "mm");
        assert_eq!(Unit::Cm.token(), "cm");
        assert_eq!(Unit::In.token(), "in");
    }

    #[test]
    fn test_unknown_values_map_to_empty_string() {
        assert_eq!(orientation_token(-1), "");
        assert_eq!(orientation_token(99), "");
        assert_eq!(page_size_token(-1), "");
        assert_eq!(page_size_token(5), "");
        assert_eq!(unit_token(-1), "");
        assert_eq!(unit_token(4), "");
    }

    #[test]
    fn test_tokens_round_trip_raw_values() {
        for (raw, token) in super::PAGE_SIZE_TOKENS {
            assert_eq!(page_size_token(*raw), *token);
        }
        for (raw, token) in super::UNIT_TOKENS {
            assert_eq!(unit_token(*raw), *token);
        }
        for (raw, token) in super::ORIENTATION_TOKENS {
            assert_eq!(orientation_token(*raw), *token);
        }
    }
}
