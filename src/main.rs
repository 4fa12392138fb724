use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::{env, io::Write, path::PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};
use worldleaders::{Config, Leaders};

/// Print current heads of state and government as JSON.
#[derive(Parser, Debug)]
struct Args {
    /// Only print this country (exact name, e.g. "United States")
    country: Option<String>,

    /// YAML file overriding the default source and retry settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // logs go to stderr so stdout stays valid JSON
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    info!(source = %config.source_url, "startup");

    let leaders = Leaders::from_config(Client::new(), config)?;

    let json = match &args.country {
        Some(name) => {
            let record = leaders
                .country(name)
                .await
                .with_context(|| format!("looking up {}", name))?;
            to_json(&record, args.pretty)?
        }
        None => {
            let roster = leaders.all().await.context("extracting leader roster")?;
            info!(countries = roster.len(), "done");
            to_json(&roster, args.pretty)?
        }
    };

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", json)?;
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
