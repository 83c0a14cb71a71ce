//! Output row types
//!
//! Every projection call produces at most one [`OutputRow`]. Each renderer
//! invocation produces exactly one [`Rendered`] value; `Paired` carries a
//! formatted display string together with the untouched raw value so the
//! consumer can show a primary/secondary pair.

use serde::{Deserialize, Serialize};

/// Placeholder for "no value" cells
///
/// Deliberately not the empty string: an empty cell means "the renderer
/// produced nothing, fall back to the raw stored value", while this marker
/// means "there is nothing to show".
pub const EMPTY_TEXT: &str = "-";

/// Result of rendering one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rendered {
    /// A single display string
    Plain(String),
    /// A formatted display string plus the untouched raw value
    Paired {
        /// Formatted primary text
        display: String,
        /// Raw stored value, shown as secondary text
        raw: String,
    },
}

impl Rendered {
    /// Shorthand for `Rendered::Plain`
    pub fn plain(text: impl Into<String>) -> Rendered {
        Rendered::Plain(text.into())
    }

    /// The empty placeholder as a rendered value
    pub fn empty() -> Rendered {
        Rendered::Plain(EMPTY_TEXT.to_string())
    }
}

/// One column entry of an output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Display header the cell was rendered for
    pub header: String,
    /// Primary display text
    pub text: String,
    /// Secondary text (e.g. the raw value behind a formatted date)
    pub secondary: Option<String>,
}

impl Cell {
    /// Create a cell with primary text only
    pub fn plain(header: impl Into<String>, text: impl Into<String>) -> Cell {
        Cell {
            header: header.into(),
            text: text.into(),
            secondary: None,
        }
    }

    /// Create a cell with primary and secondary text
    pub fn paired(
        header: impl Into<String>,
        text: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Cell {
        Cell {
            header: header.into(),
            text: text.into(),
            secondary: Some(secondary.into()),
        }
    }
}

/// The flat, renderable projection of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Opaque value token: the canonical URI of the projected instance
    pub value: String,
    /// Row header: the record's name
    pub header: String,
    /// Icon reference of the record
    pub icon: String,
    /// Ordered column entries
    pub cells: Vec<Cell>,
}

impl OutputRow {
    /// Create a row with no cells yet
    pub fn new(
        value: impl Into<String>,
        header: impl Into<String>,
        icon: impl Into<String>,
    ) -> OutputRow {
        OutputRow {
            value: value.into(),
            header: header.into(),
            icon: icon.into(),
            cells: Vec::new(),
        }
    }

    /// Whether a cell with this header already exists
    pub fn has_column(&self, header: &str) -> bool {
        self.cells.iter().any(|cell| cell.header == header)
    }

    /// Append a cell; duplicate headers are dropped (first writer wins)
    pub fn push(&mut self, cell: Cell) {
        if !self.has_column(&cell.header) {
            self.cells.push(cell);
        }
    }

    /// Cell for a header, if present
    pub fn cell(&self, header: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.header == header)
    }
}
