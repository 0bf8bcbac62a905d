// src/schema/columns.rs

use std::ops::RangeInclusive;

use super::fields::{FILING_FIELDS, ORGANIZATION_FIELDS, SEARCH_FIELDS};
use crate::error::ConfigError;

/// Inclusive range of filing years that get their own columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    first: i64,
    last: i64,
}

impl YearRange {
    pub const DEFAULT_FIRST: i64 = 2011;
    pub const DEFAULT_LAST: i64 = 2020;
    /// Earliest and latest years a range may reach.
    pub const MIN_YEAR: i64 = 1900;
    pub const MAX_YEAR: i64 = 2100;

    pub fn new(first: i64, last: i64) -> Result<Self, ConfigError> {
        for year in [first, last] {
            if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
                return Err(ConfigError::YearOutOfBounds {
                    year,
                    min: Self::MIN_YEAR,
                    max: Self::MAX_YEAR,
                });
            }
        }
        if first > last {
            return Err(ConfigError::EmptyYearRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.last
    }

    pub fn contains(&self, year: i64) -> bool {
        (self.first..=self.last).contains(&year)
    }

    pub fn years(&self) -> RangeInclusive<i64> {
        self.first..=self.last
    }

    /// Number of years covered.
    pub fn span(&self) -> usize {
        self.last
            .checked_sub(self.first)
            .and_then(|d| usize::try_from(d).ok())
            .map_or(0, |d| d + 1)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            first: Self::DEFAULT_FIRST,
            last: Self::DEFAULT_LAST,
        }
    }
}

/// Name of the column holding `field` for the filing of `year`.
pub fn filing_column(field: &str, year: i64) -> String {
    format!("{}_{}", field, year)
}

/// Fixed, ordered list of output columns shared by every row of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// `entity`, `ein`.
    pub fn search() -> Self {
        Self::new(SEARCH_FIELDS.iter().copied())
    }

    /// Organization fields, then every filing field for each year in ascending order.
    pub fn detail(years: YearRange) -> Self {
        Self::detail_from(ORGANIZATION_FIELDS, FILING_FIELDS, years)
    }

    pub fn detail_from(base: &[&str], filing: &[&str], years: YearRange) -> Self {
        let mut columns = Vec::with_capacity(base.len() + filing.len() * years.span());
        columns.extend(base.iter().map(|f| f.to_string()));
        for year in years.years() {
            columns.extend(filing.iter().map(|f| filing_column(f, year)));
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_detail_schema_layout() {
        let schema = ColumnSchema::detail(YearRange::default());

        assert_eq!(
            schema.len(),
            ORGANIZATION_FIELDS.len() + FILING_FIELDS.len() * 10
        );
        assert_eq!(&schema.columns()[0], "id");
        assert_eq!(&schema.columns()[ORGANIZATION_FIELDS.len() - 1], "latest_object_id");
        assert_eq!(&schema.columns()[ORGANIZATION_FIELDS.len()], "ein_2011");
        assert_eq!(schema.columns().last().map(String::as_str), Some("updated_2020"));

        // years are grouped: all of 2011 before any of 2012
        let first_2012 = schema.iter().position(|c| c.ends_with("_2012")).unwrap();
        let last_2011 = schema
            .columns()
            .iter()
            .rposition(|c| c.ends_with("_2011"))
            .unwrap();
        assert!(last_2011 < first_2012);
    }

    #[test]
    fn test_detail_schema_has_no_duplicate_columns() {
        let schema = ColumnSchema::detail(YearRange::default());
        let unique: HashSet<&str> = schema.iter().collect();
        assert_eq!(unique.len(), schema.len());
    }

    #[test]
    fn test_schema_stays_inside_year_range() {
        let schema = ColumnSchema::detail(YearRange::new(2015, 2016).unwrap());
        assert!(schema.iter().any(|c| c == "totrevenue_2015"));
        assert!(schema.iter().any(|c| c == "totrevenue_2016"));
        assert!(!schema.iter().any(|c| c == "totrevenue_2014"));
        assert!(!schema.iter().any(|c| c == "totrevenue_2017"));
    }

    #[test]
    fn test_year_range_rejects_inverted_bounds() {
        assert!(YearRange::new(2020, 2011).is_err());
        let single = YearRange::new(2019, 2019).unwrap();
        assert!(single.contains(2019));
        assert!(!single.contains(2020));
    }

    #[test]
    fn test_year_range_is_bounded() {
        assert!(matches!(
            YearRange::new(i64::MIN, i64::MAX),
            Err(ConfigError::YearOutOfBounds { year: i64::MIN, .. })
        ));
        assert!(matches!(
            YearRange::new(0, 999_999_999),
            Err(ConfigError::YearOutOfBounds { year: 0, .. })
        ));
        assert!(matches!(
            YearRange::new(2011, 2101),
            Err(ConfigError::YearOutOfBounds { year: 2101, .. })
        ));

        let widest = YearRange::new(YearRange::MIN_YEAR, YearRange::MAX_YEAR).unwrap();
        assert_eq!(widest.span(), 201);
        let schema = ColumnSchema::detail(widest);
        assert_eq!(
            schema.len(),
            ORGANIZATION_FIELDS.len() + FILING_FIELDS.len() * 201
        );
        assert_eq!(YearRange::default().span(), 10);
    }

    #[test]
    fn test_search_schema() {
        assert_eq!(ColumnSchema::search().columns(), &["entity", "ein"]);
    }
}
