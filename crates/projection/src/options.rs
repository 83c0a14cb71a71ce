//! Projection options: the `columns` / `headers` / `maxlength` surface
//!
//! Options arrive as loosely-typed name/value parameters from the report
//! configuration layer. The length budget is parsed once on first use and
//! cached for the lifetime of the options value; a missing or unparsable
//! `maxlength` falls back to [`DEFAULT_MAX_LENGTH`].

use std::collections::HashMap;

use once_cell::sync::OnceCell;

/// Parameter name for the ordered column list
pub const COLUMNS_PARAMETER: &str = "columns";
/// Parameter name for the parallel header list
pub const HEADERS_PARAMETER: &str = "headers";
/// Parameter name for the length budget
pub const MAX_LENGTH_PARAMETER: &str = "maxlength";

/// Length budget applied when `maxlength` is absent or unparsable
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// One requested column: field (or reserved) name plus display header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field or reserved column name to render
    pub name: String,
    /// Display header; defaults to the name when no header is configured
    pub header: String,
}

/// Loosely-typed projection parameters with typed accessors
///
/// Options are read-only once handed to a projector: after the length
/// budget has been read once, later parameter changes are not observed.
#[derive(Debug, Clone, Default)]
pub struct ProjectionOptions {
    params: HashMap<String, String>,
    max_length: OnceCell<usize>,
}

impl ProjectionOptions {
    /// Create empty options (no columns, default length budget)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `name=value|name=value` parameter string
    ///
    /// Entries without `=` are skipped; later duplicates overwrite earlier
    /// ones.
    pub fn parse(raw: &str) -> Self {
        let mut options = Self::new();
        for entry in raw.split('|') {
            if let Some((name, value)) = entry.split_once('=') {
                options
                    .params
                    .insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
            }
        }
        options
    }

    /// Set a parameter, builder style
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.params
            .insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        self
    }

    /// Raw parameter value, if set
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(&name.trim().to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The requested columns, in configured order
    ///
    /// `columns` and `headers` are parallel comma-separated lists; a column
    /// without a matching header entry uses its name as the header.
    pub fn columns(&self) -> Vec<Column> {
        let headers: Vec<&str> = self
            .get(HEADERS_PARAMETER)
            .map(|raw| raw.split(',').map(str::trim).collect())
            .unwrap_or_default();

        self.get(COLUMNS_PARAMETER)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .enumerate()
                    .map(|(index, name)| Column {
                        name: name.to_string(),
                        header: match headers.get(index) {
                            Some(header) if !header.is_empty() => (*header).to_string(),
                            _ => name.to_string(),
                        },
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The length budget, parsed once and cached
    pub fn max_length(&self) -> usize {
        *self.max_length.get_or_init(|| {
            self.get(MAX_LENGTH_PARAMETER)
                .and_then(|raw| raw.parse::<usize>().ok())
                .unwrap_or(DEFAULT_MAX_LENGTH)
        })
    }
}
