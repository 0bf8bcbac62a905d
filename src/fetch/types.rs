// src/fetch/types.rs

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;

/// A JSON object as returned by the API. Member values keep their raw JSON
/// text so numbers can be written out exactly as they were received.
pub type JsonObject = HashMap<String, Box<RawValue>>;

/// Body of `search.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organizations: Vec<JsonObject>,
}

/// Body of `organizations/{ein}.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationResponse {
    #[serde(default)]
    pub organization: JsonObject,
    #[serde(default)]
    pub filings_with_data: Vec<JsonObject>,
}
