// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Reading the key list failed. Always fatal for a run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open input {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("input {path:?} has no column named {column:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("malformed CSV in {path:?} at record {record}: {source}")]
    Csv {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },
}

/// Writing the output table failed. Always fatal for a run.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot open output {path:?} for writing: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("writing {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("flushing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("header of {path:?} does not match schema: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Why one key produced no data. Never propagated past the pipeline loop.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("empty key, request skipped")]
    EmptyKey,

    #[error("cannot build request URL: {0}")]
    Url(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An environment setting could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value:?}")]
    BadUrl { var: &'static str, value: String },

    #[error("{var} is not a year: {value:?}")]
    BadYear { var: &'static str, value: String },

    #[error("year {year} is outside {min}..={max}")]
    YearOutOfBounds { year: i64, min: i64, max: i64 },

    #[error("year range is empty: {first} > {last}")]
    EmptyYearRange { first: i64, last: i64 },

    #[error("{var} must be `first` or `last`, got {value:?}")]
    BadDuplicatePolicy { var: &'static str, value: String },
}
