// src/bin/verify_output.rs

use anyhow::{bail, Context, Result};
use npscraper::{
    pipeline::EIN_COLUMN,
    schema::ColumnSchema,
    table::{read_keys, verify_header, KeyColumn},
    Config,
};
use std::{env, path::PathBuf};

const USAGE: &str = "usage: verify_output <resolve|details> OUTPUT [INPUT]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);

    // 1) Which table are we checking, and against which schema
    let (schema, key_column) = match args.next().as_deref() {
        Some("resolve") => (ColumnSchema::search(), KeyColumn::Position(0)),
        Some("details") => {
            let config = Config::from_env().context("reading configuration")?;
            (
                ColumnSchema::detail(config.years),
                KeyColumn::named(EIN_COLUMN),
            )
        }
        _ => bail!(USAGE),
    };
    let output = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!(USAGE),
    };
    let input = args.next().map(PathBuf::from);

    // 2) Header must match the schema exactly
    let rows = verify_header(&output, &schema)
        .with_context(|| format!("verifying {}", output.display()))?;

    // 3) Optionally: one output row per input key
    let expected = match &input {
        Some(path) => Some(
            read_keys(path, &key_column)
                .with_context(|| format!("reading {}", path.display()))?
                .len(),
        ),
        None => None,
    };

    // 4) Print summary
    println!("{: <25} {:>15}", "Check", "Result");
    println!("{:-<41}", "");
    println!("{: <25} {:>15}", "header columns", schema.len());
    println!("{: <25} {:>15}", "data rows", rows);
    if let Some(expected) = expected {
        println!("{: <25} {:>15}", "input keys", expected);
        if expected != rows {
            bail!(
                "{} has {} rows but {} lists {} keys",
                output.display(),
                rows,
                input.map(|p| p.display().to_string()).unwrap_or_default(),
                expected
            );
        }
    }
    println!("ok");

    Ok(())
}
