// src/pipeline.rs

use std::{path::Path, time::Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::{
    config::Config,
    error::FetchFailure,
    fetch::ApiClient,
    flatten::{flatten_detail, flatten_search},
    schema::ColumnSchema,
    table::{read_keys, KeyColumn, RowWriter},
};

/// Header of the EIN column read by [`fetch_details`].
pub const EIN_COLUMN: &str = "ein";

/// Counts for one run. `rows` always equals the number of input keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub fetched: usize,
    pub failed: usize,
}

/// Names (first column, no header) → `entity,ein`.
#[instrument(level = "info", skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub async fn resolve_names(
    api: &ApiClient,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<RunSummary> {
    let keys = read_keys(input.as_ref(), &KeyColumn::Position(0)).context("reading names")?;
    let schema = ColumnSchema::search();
    let mut writer = RowWriter::create(output.as_ref(), &schema).context("opening output")?;
    info!(keys = keys.len(), "resolving names");

    let start = Instant::now();
    let mut summary = RunSummary::default();
    for name in &keys {
        let fetched = api.search(name).await;
        match &fetched {
            Ok(resp) if !resp.organizations.is_empty() => {
                debug!(name = %name, hits = resp.organizations.len(), "resolved");
                summary.fetched += 1;
            }
            Ok(_) => {
                warn!(
                    name = %name,
                    url = %request_url(api.search_url(name)),
                    "no search results"
                );
                summary.failed += 1;
            }
            Err(e) => {
                warn!(
                    name = %name,
                    url = %request_url(api.search_url(name)),
                    error = %e,
                    "search failed"
                );
                summary.failed += 1;
            }
        }
        writer.write_row(&flatten_search(name, &fetched))?;
    }

    summary.rows = writer.finish()?;
    info!(?summary, elapsed = ?start.elapsed(), "names resolved");
    Ok(summary)
}

/// EINs (the `ein` column) → one wide row of organization and per-year filing data.
#[instrument(level = "info", skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub async fn fetch_details(
    api: &ApiClient,
    config: &Config,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<RunSummary> {
    let keys = read_keys(input.as_ref(), &KeyColumn::named(EIN_COLUMN)).context("reading EINs")?;
    let opts = config.flatten_options();
    let schema = ColumnSchema::detail(opts.years);
    let mut writer = RowWriter::create(output.as_ref(), &schema).context("opening output")?;
    info!(
        keys = keys.len(),
        columns = schema.len(),
        first_year = opts.years.first(),
        last_year = opts.years.last(),
        "fetching organization details"
    );

    let start = Instant::now();
    let mut summary = RunSummary::default();
    for ein in &keys {
        let fetched = api.organization(ein).await;
        match &fetched {
            Ok(resp) => {
                debug!(ein = %ein, filings = resp.filings_with_data.len(), "fetched");
                summary.fetched += 1;
            }
            Err(e) => {
                warn!(
                    ein = %ein,
                    url = %request_url(api.organization_url(ein)),
                    error = %e,
                    "fetch failed; writing empty row"
                );
                summary.failed += 1;
            }
        }
        writer.write_row(&flatten_detail(&fetched, &opts))?;
    }

    summary.rows = writer.finish()?;
    info!(?summary, elapsed = ?start.elapsed(), "details fetched");
    Ok(summary)
}

/// URL for a log line; blank when no request could be built for the key.
fn request_url(url: Result<Url, FetchFailure>) -> String {
    url.map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;

    #[test]
    fn test_request_url_for_failure_logs() {
        let api = ApiClient::new(
            Client::new(),
            Url::parse("http://127.0.0.1:8080/api/").unwrap(),
        );
        assert_eq!(
            request_url(api.organization_url("530196605")),
            "http://127.0.0.1:8080/api/organizations/530196605.json"
        );
        assert_eq!(
            request_url(api.search_url("red cross")),
            "http://127.0.0.1:8080/api/search.json?q=red+cross"
        );
        assert_eq!(request_url(api.organization_url("  ")), "");
    }
}
