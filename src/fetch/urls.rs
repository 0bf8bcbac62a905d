// src/fetch/urls.rs
use url::Url;

use crate::error::FetchFailure;

/// `{base}organizations/{ein}.json`, the EIN encoded as a single path segment.
pub fn organization_url(base: &Url, ein: &str) -> Result<Url, FetchFailure> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchFailure::Url(format!("{} cannot be a base", base)))?
        .pop_if_empty()
        .push("organizations")
        .push(&format!("{}.json", ein));
    Ok(url)
}

/// `{base}search.json?q={name}`, the name form-encoded.
pub fn search_url(base: &Url, name: &str) -> Result<Url, FetchFailure> {
    let mut url = base
        .join("search.json")
        .map_err(|e| FetchFailure::Url(e.to_string()))?;
    url.query_pairs_mut().clear().append_pair("q", name);
    Ok(url)
}
