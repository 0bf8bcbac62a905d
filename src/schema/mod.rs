pub mod columns;
pub mod fields;

pub use columns::{filing_column, ColumnSchema, YearRange};
pub use fields::{
    FILING_FIELDS, FILING_YEAR_FIELD, NOT_FOUND, ORGANIZATION_FIELDS, SEARCH_FIELDS,
};
