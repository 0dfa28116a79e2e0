use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use vigil_core::aggregate::Report;
use vigil_core::config::Config;
use vigil_core::{filter, normalizer, Event, FilterSpec, Layout};

#[derive(Parser)]
#[command(name = "vigil", about = "vigil — connection-log dashboard core")]
struct Cli {
    /// Input file: a delimited table or a raw log file, per --layout.
    file: PathBuf,

    /// Input layout ("structured" or "log-lines"); defaults to the
    /// configured one.
    #[arg(long)]
    layout: Option<Layout>,

    /// Cell delimiter for the structured layout.
    #[arg(long)]
    delimiter: Option<char>,

    /// Inclusive start of the date range; defaults to the first observed date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    from: Option<NaiveDate>,

    /// Inclusive end of the date range; defaults to the last observed date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    to: Option<NaiveDate>,

    /// Keep only these users (repeatable); defaults to every observed user.
    #[arg(long = "user", value_name = "NAME")]
    users: Vec<String>,

    /// Keep only these source addresses (repeatable); defaults to every
    /// observed address.
    #[arg(long = "ip", value_name = "ADDR")]
    addresses: Vec<String>,

    /// Free-text search over user (case-insensitive) and address.
    #[arg(long)]
    search: Option<String>,

    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let layout = cli.layout.unwrap_or(config.input.layout);
    let delimiter = cli.delimiter.unwrap_or(config.input.delimiter);

    let raw = vigil_input::load(&cli.file, layout, delimiter)?;
    let events = normalizer::normalize(&raw)
        .with_context(|| format!("could not normalize {}", cli.file.display()))?;
    if events.is_empty() {
        tracing::warn!(file = %cli.file.display(), "input holds no parseable events");
    } else {
        tracing::info!(events = events.len(), %layout, "input normalized");
    }

    let filtered = match build_spec(&cli, &events) {
        Some(spec) => {
            let filtered = filter::apply(&events, &spec);
            tracing::info!(
                kept = filtered.len(),
                dropped = events.len() - filtered.len(),
                "filter applied"
            );
            filtered
        }
        None => Vec::new(),
    };

    let report = Report::compute(&filtered);
    let json = if config.report.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

/// Start from the everything-selected spec (the dashboard's widget
/// defaults) and narrow it with whatever flags were given.
fn build_spec(cli: &Cli, events: &[Event]) -> Option<FilterSpec> {
    let mut spec = FilterSpec::covering(events)?;
    if let Some(from) = cli.from {
        spec.date_from = from;
    }
    if let Some(to) = cli.to {
        spec.date_to = to;
    }
    if !cli.users.is_empty() {
        spec.users = cli.users.iter().cloned().collect();
    }
    if !cli.addresses.is_empty() {
        spec.addresses = cli.addresses.iter().cloned().collect();
    }
    spec.search_text = cli.search.clone();
    Some(spec)
}
