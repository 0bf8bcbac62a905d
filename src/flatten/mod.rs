// src/flatten/mod.rs

//! Projection of API responses onto flat, string-valued rows.
//!
//! Both flatteners are total: a failed fetch is just another input and
//! produces a placeholder row instead of an error.

use std::collections::HashMap;

use serde_json::value::RawValue;

use crate::schema::ColumnSchema;

pub mod detail;
pub mod search;

pub use detail::{filing_year, flatten_detail, DuplicateYearPolicy, FlattenOptions};
pub use search::flatten_search;

/// One output row, keyed by column name.
///
/// Columns the row never set are read back as `""` when the row is projected
/// onto a [`ColumnSchema`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRow {
    cells: HashMap<String, String>,
}

impl FlatRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Set a column only if nothing has been stored under it yet.
    pub fn insert_if_absent(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells
            .entry(column.into())
            .or_insert_with(|| value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Value for `column`, or `""` if the row never set it.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in schema order. Columns outside the schema are not emitted.
    pub fn project<'a>(&'a self, schema: &'a ColumnSchema) -> impl Iterator<Item = &'a str> + 'a {
        schema.iter().map(move |col| self.value(col))
    }
}

impl<K, V> FromIterator<(K, V)> for FlatRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Text written for a JSON value: strings unescaped, `null` as empty,
/// everything else (numbers, booleans, nested values) exactly as received.
pub fn render_value(raw: &RawValue) -> String {
    let text = raw.get().trim();
    if text == "null" {
        String::new()
    } else if text.starts_with('"') {
        serde_json::from_str::<String>(text).unwrap_or_else(|_| text.to_string())
    } else {
        text.to_string()
    }
}
