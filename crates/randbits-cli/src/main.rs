#![doc = include_str!("../README.md")]

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::config::{CliArgs, GeneratorConfig, OutputTarget};
use cli::telemetry::init_telemetry;
use randbits::{BitSequence, BitStringGenerator, Report, StdRandom};
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = GeneratorConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let seq = run(&config)?;

    if config.report {
        let report = Report::evaluate(&seq);
        tracing::info!(passed = report.passed(), "Evaluated randomness tests");
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{report}").context("failed to write report")?;
    }

    Ok(())
}

fn run(config: &GeneratorConfig) -> anyhow::Result<BitSequence> {
    match &config.output {
        OutputTarget::Stdout => {
            randbits::generate_and_print(config.seed).context("failed to generate bit string")
        }
        OutputTarget::File(path) => {
            let rng = StdRandom::from_optional_seed(config.seed)
                .context("failed to initialize random source")?;
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let seq = BitStringGenerator::new(rng)
                .write_sequence(&mut out)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote bit string");
            Ok(seq)
        }
    }
}

fn log_startup_info(config: &GeneratorConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Generating bit string with full config: {:#?}", config);
    } else {
        tracing::debug!(seeded = config.seed.is_some(), "Generating bit string");
    }
}
