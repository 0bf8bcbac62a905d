// src/table/reader.rs

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, instrument};

use crate::error::InputError;

/// Where the keys live in the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyColumn {
    /// File starts with a header row; take the column with this name.
    Named(String),
    /// File is a bare list without a header; take the field at this index.
    Position(usize),
}

impl KeyColumn {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

/// Read the key column of a CSV file, in file order.
///
/// Cells are returned exactly as written. Blank records are skipped. Ragged
/// records are accepted; one too short to reach the key column contributes an
/// empty key so row counts still line up.
#[instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_keys<P: AsRef<Path>>(path: P, column: &KeyColumn) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let has_headers = matches!(column, KeyColumn::Named(_));
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_path(path)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let index = match column {
        KeyColumn::Position(i) => *i,
        KeyColumn::Named(name) => {
            let headers = rdr.headers().map_err(|source| InputError::Csv {
                path: path.to_path_buf(),
                record: 0,
                source,
            })?;
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| InputError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.clone(),
                })?
        }
    };

    let mut keys = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            record: idx + usize::from(has_headers),
            source,
        })?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        keys.push(record.get(index).unwrap_or("").to_string());
    }

    debug!(count = keys.len(), "read keys");
    Ok(keys)
}
