//! Fleetboard Report - Headless snapshot generator
//!
//! Seeds a demo delivery session and prints the derived metrics as JSON, or
//! the raw delivery table as CSV. Useful for piping the same numbers the
//! dashboard renders into scripts.
//!
//! # Usage
//! ```sh
//! cargo run --bin report -- --records 100 --seed 42 --format json
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use fleetboard::application::export::write_csv;
use fleetboard::application::session::DeliverySession;
use fleetboard::config::Config;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "report", about = "Print derived delivery metrics without the GUI")]
struct Args {
    /// Number of demo rows to seed (defaults to DEMO_RECORDS)
    #[arg(long)]
    records: Option<usize>,

    /// RNG seed for reproducible demo data (defaults to DEMO_SEED)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "json")]
    format: Format,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let records = args.records.unwrap_or(config.demo_records);
    let seed = args.seed.or(config.demo_seed);

    let mut session = DeliverySession::new(config.rates.clone());
    session.seed_demo(records, seed);
    info!("Seeded {} records (seed: {:?})", records, seed);

    match args.format {
        Format::Json => {
            let snapshot = session.snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Format::Csv => {
            write_csv(session.records(), std::io::stdout().lock())?;
        }
    }

    Ok(())
}
