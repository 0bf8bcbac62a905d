// src/flatten/detail.rs

use tracing::trace;

use super::{render_value, FlatRow};
use crate::error::FetchFailure;
use crate::fetch::{JsonObject, OrganizationResponse};
use crate::schema::{
    filing_column, YearRange, FILING_FIELDS, FILING_YEAR_FIELD, ORGANIZATION_FIELDS,
};

/// Which filing fills a year's columns when the API returns several filings
/// tagged with the same `tax_prd_yr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateYearPolicy {
    /// The filing that appears later in `filings_with_data` overwrites earlier ones.
    #[default]
    LastWins,
    /// The first filing for a year is kept; later ones are ignored.
    FirstWins,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    pub years: YearRange,
    pub duplicate_years: DuplicateYearPolicy,
}

/// The year a filing belongs to, if it carries one we can read.
/// Accepts a JSON integer or a string holding one.
pub fn filing_year(filing: &JsonObject) -> Option<i64> {
    let text = filing.get(FILING_YEAR_FIELD)?.get().trim();
    if text.starts_with('"') {
        serde_json::from_str::<String>(text).ok()?.trim().parse().ok()
    } else {
        text.parse().ok()
    }
}

/// Flatten one organization response into a row.
///
/// A failed fetch yields an empty row; every column reads back as `""`.
pub fn flatten_detail(
    fetched: &Result<OrganizationResponse, FetchFailure>,
    opts: &FlattenOptions,
) -> FlatRow {
    match fetched {
        Ok(resp) => flatten_detail_with(resp, ORGANIZATION_FIELDS, FILING_FIELDS, opts),
        Err(_) => FlatRow::new(),
    }
}

/// Same as [`flatten_detail`] over explicit field lists.
pub fn flatten_detail_with(
    resp: &OrganizationResponse,
    org_fields: &[&str],
    filing_fields: &[&str],
    opts: &FlattenOptions,
) -> FlatRow {
    let mut row = FlatRow::new();

    for &field in org_fields {
        let value = resp
            .organization
            .get(field)
            .map(|v| render_value(v))
            .unwrap_or_default();
        row.insert(field, value);
    }

    for filing in &resp.filings_with_data {
        let year = match filing_year(filing) {
            Some(y) if opts.years.contains(y) => y,
            other => {
                trace!(year = ?other, "dropping filing outside year range");
                continue;
            }
        };
        for &field in filing_fields {
            let column = filing_column(field, year);
            let value = filing
                .get(field)
                .map(|v| render_value(v))
                .unwrap_or_default();
            match opts.duplicate_years {
                DuplicateYearPolicy::LastWins => row.insert(column, value),
                DuplicateYearPolicy::FirstWins => row.insert_if_absent(column, value),
            }
        }
    }

    row
}
