use anyhow::bail;
use clap::Parser;
use std::path::PathBuf;

/// Runtime configuration for the `randbits` binary.
///
/// With no arguments the binary prints one entropy-seeded line to stdout.
/// Every option can also come from an environment variable or a `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "randbits",
    version,
    about = "Print a random 128-bit binary string"
)]
pub struct CliArgs {
    /// Seed for the random source.
    ///
    /// When set, output is reproducible across runs. When unset, the generator
    /// is seeded from operating system entropy.
    ///
    /// Environment variable: `RANDBITS_SEED`
    #[arg(long, env = "RANDBITS_SEED")]
    pub seed: Option<u64>,

    /// Write the line to this file instead of standard output.
    ///
    /// Environment variable: `RANDBITS_OUTPUT`
    #[arg(short, long, env = "RANDBITS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Run the frequency, runs, and longest-run tests on the generated
    /// sequence and print the results to standard error.
    ///
    /// Environment variable: `RANDBITS_REPORT`
    #[arg(long, env = "RANDBITS_REPORT", default_value_t = false)]
    pub report: bool,
}

/// Where the generated line is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Validated settings derived from [`CliArgs`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
    pub output: OutputTarget,
    pub report: bool,
}

impl TryFrom<CliArgs> for GeneratorConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let output = match args.output {
            None => OutputTarget::Stdout,
            Some(path) if path.as_os_str().is_empty() => {
                bail!("output path must not be empty")
            }
            Some(path) if path.is_dir() => {
                bail!("output path ({}) is a directory", path.display())
            }
            Some(path) => OutputTarget::File(path),
        };

        Ok(Self {
            seed: args.seed,
            output,
            report: args.report,
        })
    }
}
