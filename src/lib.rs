pub mod config;
pub mod error;
pub mod fetch;
pub mod flatten;
pub mod pipeline;
pub mod schema;
pub mod table;

pub use config::Config;
pub use error::{ConfigError, FetchFailure, InputError, OutputError};
pub use pipeline::{fetch_details, resolve_names, RunSummary};
