// src/schema/fields.rs

/// Attributes taken from the `organization` object, in output order.
pub const ORGANIZATION_FIELDS: &[&str] = &[
    "id",
    "ein",
    "name",
    "careofname",
    "address",
    "city",
    "state",
    "zipcode",
    "exemption_number",
    "subsection_code",
    "affiliation_code",
    "classification_codes",
    "ruling_date",
    "deductibility_code",
    "foundation_code",
    "activity_codes",
    "organization_code",
    "exempt_organization_status_code",
    "tax_period",
    "asset_code",
    "income_code",
    "filing_requirement_code",
    "pf_filing_requirement_code",
    "accounting_period",
    "asset_amount",
    "income_amount",
    "revenue_amount",
    "ntee_code",
    "sort_name",
    "created_at",
    "updated_at",
    "data_source",
    "have_extracts",
    "have_pdfs",
    "latest_object_id",
];

/// Attributes taken from each `filings_with_data` entry, in output order.
/// Each one becomes a `{field}_{year}` column per year of the range.
pub const FILING_FIELDS: &[&str] = &[
    "ein",
    "formtype",
    "pct_compnsatncurrofcr",
    "pdf_url",
    "tax_prd",
    "tax_prd_yr",
    "totassetsend",
    "totfuncexpns",
    "totliabend",
    "totrevenue",
    "updated",
];

/// Key inside a filing that tags it with its tax year.
pub const FILING_YEAR_FIELD: &str = "tax_prd_yr";

/// Columns of the name → EIN table.
pub const SEARCH_FIELDS: &[&str] = &["entity", "ein"];

/// Written in place of an EIN when the search came back empty.
pub const NOT_FOUND: &str = "Not Found";
