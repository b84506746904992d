use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sarank::{collect_records, input, sort_by_sensitivity, write_top};

/// Print the most sensitive edges from an osmABTS report
#[derive(Parser, Debug)]
#[command(name = "sarank")]
#[command(about = "Print the most sensitive edges from an osmABTS report", long_about = None)]
struct Args {
    /// Report file to read, `-` for standard input
    file: PathBuf,

    /// Number of top records to print
    #[arg(short, long, default_value_t = 15, allow_negative_numbers = true)]
    number: i64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout carries nothing but the report lines
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting sarank v{}", env!("CARGO_PKG_VERSION"));
    info!("Report file: {:?}", args.file);

    let reader = input::open(&args.file)?;
    let mut records = collect_records(reader)?;
    info!("Parsed {} sensitivity records", records.len());

    sort_by_sensitivity(&mut records);

    let mut out = io::stdout().lock();
    let printed = write_top(&mut out, &records, args.number)?;
    info!("Printed top {} of {} records", printed, records.len());

    Ok(())
}
