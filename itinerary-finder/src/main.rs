use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use itinerary_finder::loader::load_records;
use itinerary_finder::search::{ItinerarySearch, SearchConfig};

/// Exit code for malformed input records.
const EXIT_BAD_INPUT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Two-line blocks: header, then route and price tiers
    Text,
    /// One JSON object per itinerary
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "itinerary-finder",
    about = "Enumerate multi-leg flight itineraries with baggage pricing"
)]
struct Opt {
    /// CSV flight records; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum number of legs per itinerary
    #[arg(long, default_value_t = SearchConfig::default().max_depth)]
    max_depth: usize,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let opt = Opt::parse();
    init_tracing(opt.verbose);

    let input = match open_input(opt.input.as_deref().and_then(|p| p.to_str())) {
        Ok(reader) => reader,
        Err(e) => {
            error!("failed to open input: {e}");
            return ExitCode::FAILURE;
        }
    };

    // A malformed record fails the whole run; nothing is printed.
    let records = match load_records(input) {
        Ok(records) => records,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };
    debug!(count = records.len(), "searching for combinations");

    let config = SearchConfig::new(opt.max_depth);
    let search = ItinerarySearch::new(&records, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for summary in search.enumerate() {
        let written = match opt.format {
            OutputFormat::Text => writeln!(out, "{summary}"),
            OutputFormat::Json => serde_json::to_writer(&mut out, &summary)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(out)),
        };
        if let Err(e) = written.and_then(|()| out.flush()) {
            error!("failed to write output: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn open_input(path: Option<&str>) -> io::Result<Box<dyn Read>> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdin())),
        Some(path) => Ok(Box::new(File::open(path)?)),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("itinerary_finder={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
