use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rentroll::application::registry::ApartmentRegistry;
use rentroll::interfaces::console::ConsoleSession;
use rentroll::interfaces::csv::apartment_reader::ApartmentReader;
use rentroll::telemetry;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "Interactive apartment rent tracker", long_about = None)]
struct Cli {
    /// CSV file (type,name,rent) to preload apartments from
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Log filter for diagnostics written to stderr
    #[arg(long, env = "RENTROLL_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level).into_diagnostic()?;

    let mut registry = ApartmentRegistry::new();

    if let Some(seed) = cli.seed {
        let file = File::open(&seed).into_diagnostic()?;
        let reader = ApartmentReader::new(file);
        for apartment in reader.apartments().into_diagnostic()? {
            match apartment {
                Ok(a) => registry.add(a.unit_type, a.name, a.rent),
                Err(e) => eprintln!("Error reading apartment: {}", e),
            }
        }
        info!(path = %seed.display(), apartments = registry.len(), "seed imported");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    ConsoleSession::new(registry, stdin.lock(), stdout.lock())
        .run()
        .into_diagnostic()?;

    Ok(())
}
