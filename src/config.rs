// src/config.rs

use std::env;

use url::Url;

use crate::error::ConfigError;
use crate::flatten::{DuplicateYearPolicy, FlattenOptions};
use crate::schema::YearRange;

/// ProPublica Nonprofit Explorer, v2.
pub const DEFAULT_API_BASE: &str = "https://projects.propublica.org/nonprofits/api/v2/";

pub const ENV_API_BASE: &str = "NONPROFIT_API_BASE";
pub const ENV_FIRST_YEAR: &str = "NONPROFIT_FIRST_YEAR";
pub const ENV_LAST_YEAR: &str = "NONPROFIT_LAST_YEAR";
pub const ENV_DUPLICATE_YEARS: &str = "NONPROFIT_DUPLICATE_YEARS";

/// Everything a run needs besides its input and output paths.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub years: YearRange,
    pub duplicate_years: DuplicateYearPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base should parse"),
            years: YearRange::default(),
            duplicate_years: DuplicateYearPolicy::default(),
        }
    }
}

impl Config {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_API_BASE) {
            config.api_base = parse_base(&value).ok_or(ConfigError::BadUrl {
                var: ENV_API_BASE,
                value,
            })?;
        }

        let first = match get(ENV_FIRST_YEAR) {
            Some(v) => parse_year(ENV_FIRST_YEAR, v)?,
            None => YearRange::DEFAULT_FIRST,
        };
        let last = match get(ENV_LAST_YEAR) {
            Some(v) => parse_year(ENV_LAST_YEAR, v)?,
            None => YearRange::DEFAULT_LAST,
        };
        config.years = YearRange::new(first, last)?;

        if let Some(value) = get(ENV_DUPLICATE_YEARS) {
            config.duplicate_years = match value.trim().to_ascii_lowercase().as_str() {
                "last" => DuplicateYearPolicy::LastWins,
                "first" => DuplicateYearPolicy::FirstWins,
                _ => {
                    return Err(ConfigError::BadDuplicatePolicy {
                        var: ENV_DUPLICATE_YEARS,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            years: self.years,
            duplicate_years: self.duplicate_years,
        }
    }
}

/// Endpoint paths are joined onto the base, so it must end in `/`.
fn parse_base(value: &str) -> Option<Url> {
    let trimmed = value.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }
    Some(url)
}

fn parse_year(var: &'static str, value: String) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::BadYear { var, value })
}
