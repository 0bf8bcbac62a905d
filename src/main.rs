use anyhow::{bail, Context, Result};
use npscraper::{fetch::ApiClient, fetch_details, resolve_names, Config};
use reqwest::Client;
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage:
  npscraper resolve [INPUT=list.csv] [OUTPUT=ein.csv]
  npscraper details [INPUT=ein.csv] [OUTPUT=nonprofit_data.csv]";

enum Command {
    Resolve,
    Details,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| {
            env::var("LOG_LEVEL")
                .ok()
                .and_then(|level| EnvFilter::try_new(level).ok())
        })
        .unwrap_or_else(|| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) parse args ───────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let (command, default_in, default_out) = match args.next().as_deref() {
        Some("resolve") => (Command::Resolve, "list.csv", "ein.csv"),
        Some("details") => (Command::Details, "ein.csv", "nonprofit_data.csv"),
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => bail!("{}", USAGE),
    };
    let input = PathBuf::from(args.next().unwrap_or_else(|| default_in.to_string()));
    let output = PathBuf::from(args.next().unwrap_or_else(|| default_out.to_string()));
    if args.next().is_some() {
        bail!("too many arguments\n{}", USAGE);
    }

    // ─── 3) configure ────────────────────────────────────────────────
    let config = Config::from_env().context("reading configuration")?;
    info!(api = %config.api_base, "startup");
    let api = ApiClient::new(Client::new(), config.api_base.clone());

    // ─── 4) run ──────────────────────────────────────────────────────
    let summary = match command {
        Command::Resolve => resolve_names(&api, &input, &output).await?,
        Command::Details => fetch_details(&api, &config, &input, &output).await?,
    };
    info!(rows = summary.rows, failed = summary.failed, "all done");

    println!("Data saved to {}", output.display());
    Ok(())
}
