// src/flatten/search.rs

use super::{render_value, FlatRow};
use crate::error::FetchFailure;
use crate::fetch::SearchResponse;
use crate::schema::NOT_FOUND;

/// Resolve a name query to an `entity`/`ein` pair.
///
/// The API's top hit is taken as the match. With no hit, or no response at
/// all, the query itself is kept as `entity` and `ein` is [`NOT_FOUND`].
pub fn flatten_search(query: &str, fetched: &Result<SearchResponse, FetchFailure>) -> FlatRow {
    let top = fetched
        .as_ref()
        .ok()
        .and_then(|resp| resp.organizations.first());

    let mut row = FlatRow::new();
    match top {
        Some(org) => {
            let field = |key: &str| {
                org.get(key)
                    .map(|v| render_value(v))
                    .unwrap_or_else(|| NOT_FOUND.to_string())
            };
            row.insert("entity", field("name"));
            row.insert("ein", field("ein"));
        }
        None => {
            row.insert("entity", query);
            row.insert("ein", NOT_FOUND);
        }
    }
    row
}
