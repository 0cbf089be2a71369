//! Circuitgen - circuit diagram dataset generator
//!
//! Generates synthetic circuit structures and writes them as circuitikz
//! documents, named by content hash, alongside the formulas/index ledger
//! files the downstream training pipeline consumes.
//!
//! # Usage
//!
//! ```bash
//! circuitgen --count 1000 --out data --seed 42
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use circuitgen_core::{
    error::{CircuitgenError, Result},
    ledger::Ledger,
    markup, Generator, GeneratorConfig,
};

/// Redraw budget when a connected circuit is required.
const MAX_CONNECTED_ATTEMPTS: usize = 100;

/// Circuit diagram dataset generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of circuits to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Directory where markup files and ledgers are written
    #[arg(short, long, default_value = "data")]
    out: PathBuf,

    /// Seed for the random generator; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Redraw circuits until the segment graph is connected
    #[arg(long)]
    require_connected: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'info' instead.", args.log_level);
        LevelFilter::Info
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if args.require_connected {
        config.require_connected = true;
    }

    let generator = Generator::new(config)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!("generating {} circuits with seed {seed}", args.count);

    std::fs::create_dir_all(&args.out).map_err(|e| CircuitgenError::MarkupWrite {
        path: args.out.display().to_string(),
        source: e,
    })?;
    let mut ledger = Ledger::open(args.out.join("formulas.lst"), args.out.join("index.lst"))?;

    for i in 0..args.count {
        let circuit = if generator.config().require_connected {
            generator.generate_connected(&mut rng, MAX_CONNECTED_ATTEMPTS)?
        } else {
            generator.generate(&mut rng)
        };

        let body = markup::serialize_body(&circuit)?;
        let document = markup::serialize(&circuit)?;
        let filename = markup::content_filename(&body);

        let path = args.out.join(format!("{filename}.tex"));
        std::fs::write(&path, document).map_err(|e| CircuitgenError::MarkupWrite {
            path: path.display().to_string(),
            source: e,
        })?;
        let line = ledger.append(&body, &filename)?;

        info!(
            "[{}/{}] {} segments -> {} (ledger line {line})",
            i + 1,
            args.count,
            circuit.len(),
            path.display()
        );
    }

    Ok(())
}
