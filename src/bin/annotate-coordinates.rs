//! A binary for annotating genomic coordinates against a feature annotation
//! table.
//!
//! ```shell
//! cargo run --release --bin=annotate-coordinates --features=binaries -- \
//!     coordinates.tsv annotations.tsv
//! ```
//!
//! The coordinates file is tab-separated with two columns (chromosome and
//! position); the annotations file is tab-separated with the fixed
//! ten-column feature layout. Either file may be gzip-compressed (`*.gz`).
//! The output is a tab-separated table with exactly one row per input
//! coordinate, in input order: coordinates that cannot be resolved
//! unambiguously receive a descriptive sentinel in place of an annotation
//! and never abort the run.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;
use std::path::PathBuf;

use annofile::Reader;
use annofile::Writer;
use annofile::annotate::Annotation;
use annofile::annotate::machine;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use tracing::info;
use tracing::warn;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Matches chromosomes and coordinates to feature annotations.
#[derive(Parser)]
struct Args {
    /// The path to the coordinates file.
    coordinates: PathBuf,

    /// The path to the annotations file.
    annotations: PathBuf,

    /// The output file.
    #[arg(short, long, default_value = "./annotated_coordinates")]
    output: PathBuf,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Opens a possibly gzip-compressed table for buffered reading.
fn open(path: &Path) -> Result<Reader<Box<dyn BufRead>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let inner: Box<dyn BufRead> = match path.extension().is_some_and(|ext| ext == "gz") {
        true => Box::new(BufReader::new(GzDecoder::new(file))),
        false => Box::new(BufReader::new(file)),
    };

    Ok(Reader::new(inner))
}

/// Per-outcome tallies across a run.
#[derive(Default)]
struct Tallies {
    /// Queries resolved to a feature annotation.
    annotated: usize,

    /// Queries whose chromosome was absent from the annotation table.
    missing_chromosome: usize,

    /// Queries matching more than one feature boundary.
    ambiguous: usize,

    /// Queries past the last boundary of their chromosome.
    beyond_range: usize,

    /// Queries whose position was not a valid integer.
    invalid_position: usize,
}

impl Tallies {
    /// Tallies one annotation outcome.
    fn record(&mut self, annotation: &Annotation) {
        match annotation {
            Annotation::Feature(_) => self.annotated += 1,
            Annotation::ChromosomeNotFound => self.missing_chromosome += 1,
            Annotation::MoreThanOneMatch(_) => self.ambiguous += 1,
            Annotation::BeyondKnownRange => self.beyond_range += 1,
            Annotation::InvalidPosition(_) => self.invalid_position += 1,
        }
    }

    /// The total number of queries tallied.
    fn total(&self) -> usize {
        self.annotated
            + self.missing_chromosome
            + self.ambiguous
            + self.beyond_range
            + self.invalid_position
    }
}

fn annotate(args: &Args) -> Result<()> {
    info!("annotations: reading {}", args.annotations.display());

    let machine = machine::Builder::default()
        .try_build_from(open(&args.annotations)?)
        .context("building the annotation index")?;

    info!(
        "annotations: indexed {} chromosome(s)",
        machine.chromosomes().count()
    );

    let mut reader = open(&args.coordinates)?;

    let mut writer = File::create(&args.output)
        .map(BufWriter::new)
        .map(Writer::new)
        .with_context(|| format!("creating {}", args.output.display()))?;

    writer.write_header().context("writing the output header")?;

    info!("coordinates: matching against feature boundaries");

    let mut tallies = Tallies::default();

    for result in reader.queries() {
        let query = result.context("reading the coordinates file")?;
        let annotation = machine.annotate(&query);

        tallies.record(&annotation);

        writer
            .write_record(&query, &annotation)
            .context("writing an output row")?;
    }

    writer.flush().context("flushing the output file")?;

    info!(
        "coordinates: annotated {} of {} queries",
        tallies.annotated,
        tallies.total()
    );

    if tallies.missing_chromosome > 0 {
        warn!(
            "coordinates: {} queries named a chromosome missing from the annotation file",
            tallies.missing_chromosome
        );
    }

    if tallies.ambiguous > 0 {
        warn!(
            "coordinates: {} queries matched more than one feature boundary",
            tallies.ambiguous
        );
    }

    if tallies.beyond_range > 0 {
        warn!(
            "coordinates: {} queries fell beyond the known range of their chromosome",
            tallies.beyond_range
        );
    }

    if tallies.invalid_position > 0 {
        warn!(
            "coordinates: {} queries carried a position that was not a valid integer",
            tallies.invalid_position
        );
    }

    info!("results written to {}", args.output.display());

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    annotate(&args)
}
