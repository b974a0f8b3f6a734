//! nucleokit - DNA/RNA sequence primitives on the command line
//!
//! ## Usage
//!
//! ```bash
//! nucleokit count ACGTACGT
//! nucleokit revcomp GATTACA -w 60
//! nucleokit motif GATATATGCATATACTT ATAT
//! nucleokit translate AUGGCCUAA -g 2
//! nucleokit random -n 1000 --seed 7 -o random.txt
//! ```
//!
//! Results go to stdout (or `-o FILE`); diagnostics go to stderr through
//! `tracing`, controlled by `-v` or `RUST_LOG`.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};

use anyhow::{anyhow, bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nucleokit::report::format_positions;
use nucleokit::simulate::{mutate, random_sequence};
use nucleokit::{
    is_supported_alphabet, Analyzer, GeneticCodes, NucleicAcidType, Outcome, TracingReporter,
    Translator,
};

/// nucleokit - DNA/RNA sequence primitives
///
/// Sequences are given as plain arguments over the alphabet ACGT (DNA) or
/// ACGU (RNA), in any case. Sequence results are printed in lower case.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-", global = true)]
    output: String,

    /// Wrap sequence output at this many columns (0: no wrapping)
    #[arg(short = 'w', long = "width", default_value = "0", global = true)]
    width: usize,

    /// Genetic code for translation (NCBI id, default: 1 = Standard)
    #[arg(short = 'g', long = "genetic-code", default_value = "1", global = true)]
    genetic_code: u8,

    /// Increase diagnostic output (-v: info, -vv: debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count A, C, G, T and U
    Count { sequence: String },

    /// Transcribe DNA to RNA (T -> U)
    Transcribe { sequence: String },

    /// Base-paired complement
    Complement {
        sequence: String,
        /// Pairing used when the sequence has neither T nor U (DNA or RNA)
        #[arg(short = 't', long = "type", default_value = "dna")]
        kind: NucleicAcidType,
    },

    /// Reverse complement
    Revcomp { sequence: String },

    /// Hamming distance between two equal-length sequences
    Hamming { first: String, second: String },

    /// 1-based positions of a motif, overlapping matches included
    Motif { sequence: String, motif: String },

    /// Translate RNA to protein, stopping at the first stop codon
    Translate { sequence: String },

    /// GC content, in percent
    Gc { sequence: String },

    /// Generate a random sequence
    Random {
        /// Sequence length
        #[arg(short = 'n', long = "length")]
        length: usize,
        /// Alphabet to draw from (DNA or RNA)
        #[arg(short = 't', long = "type", default_value = "dna")]
        kind: NucleicAcidType,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available genetic codes
    Codes,

    /// Change exactly K positions of a sequence
    Mutate {
        sequence: String,
        /// Number of positions to change
        #[arg(short = 'k', long = "mutations")]
        k: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Installs the stderr diagnostic subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Rejects characters the core does not accept.
fn checked(sequence: &str) -> Result<&str> {
    if !is_supported_alphabet(sequence) {
        bail!("Sequence contains characters outside ACGTU: {}", sequence);
    }
    Ok(sequence)
}

/// Unwraps a successful outcome, turning the other tiers into errors.
fn require<T>(outcome: Outcome<T>) -> Result<T> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Absent => bail!("No sequence provided"),
        Outcome::Invalid(reason) => bail!("Invalid input: {}", reason),
    }
}

fn wrap(sequence: &str, width: usize) -> String {
    if width == 0 || sequence.is_empty() {
        return sequence.to_string();
    }
    textwrap::wrap(sequence, textwrap::Options::new(width).break_words(true)).join("\n")
}

/// Runs one subcommand and renders its result as text.
fn run_command(args: &Args, analyzer: &Analyzer<TracingReporter>) -> Result<String> {
    let rendered = match &args.command {
        Command::Count { sequence } => {
            require(analyzer.count_nucleotides(checked(sequence)?))?.to_string()
        }
        Command::Transcribe { sequence } => {
            wrap(&require(analyzer.transcribe(checked(sequence)?))?, args.width)
        }
        Command::Complement { sequence, kind } => {
            wrap(&require(analyzer.complement(checked(sequence)?, Some(*kind)))?, args.width)
        }
        Command::Revcomp { sequence } => {
            wrap(&require(analyzer.reverse_complement(checked(sequence)?))?, args.width)
        }
        Command::Hamming { first, second } => {
            require(analyzer.hamming_distance(checked(first)?, checked(second)?))?.to_string()
        }
        Command::Motif { sequence, motif } => {
            format_positions(&require(analyzer.find_motif(sequence, motif))?)
        }
        Command::Translate { sequence } => {
            wrap(&require(analyzer.translate(checked(sequence)?))?, args.width)
        }
        Command::Gc { sequence } => {
            format!("{:.4}", require(analyzer.gc_content(checked(sequence)?))?)
        }
        Command::Random { length, kind, seed } => {
            wrap(&random_sequence(&mut rng_from(*seed), *kind, *length), args.width)
        }
        Command::Codes => GeneticCodes::new()
            .all()
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Mutate { sequence, k, seed } => {
            wrap(&mutate(&mut rng_from(*seed), sequence, *k)?, args.width)
        }
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let codes = GeneticCodes::new();
    let code = codes
        .get(args.genetic_code)
        .ok_or_else(|| anyhow!("Unknown genetic code: {}", args.genetic_code))?;
    debug!(genetic_code = %code, "selected genetic code");

    let analyzer = Analyzer::new(TracingReporter).with_translator(Translator::new(code.clone()));
    let rendered = run_command(&args, &analyzer)?;

    if args.output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", rendered)?;
    } else {
        let mut file = std::fs::File::create(&args.output)?;
        writeln!(file, "{}", rendered)?;
        eprintln!("Wrote result to {}", args.output);
    }

    Ok(())
}
