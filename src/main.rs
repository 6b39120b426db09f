use std::io::{self, Write};

use anyhow::Context;
use charnorm::alphabet::Alphabet;
use charnorm::normalization::CharNormalizer;
use charnorm::reader::Reader;
use stopwatch::Stopwatch;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, StructOpt)]
struct Opt {
    /// Input file (newline-separated text)
    path: String,

    /// Fail on the first character outside the recognized alphabet
    /// instead of dropping it
    #[structopt(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries nothing but normalized lines.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let Opt { path, strict } = Opt::from_args();

    let normalizer = CharNormalizer::new(Alphabet::printable())?;
    let reader = Reader::open(&path).with_context(|| format!("unable to open {}", path))?;

    let watch = Stopwatch::start_new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = charnorm::process(&normalizer, reader.lines(), &mut out, strict)?;
    out.flush()?;

    tracing::info!(
        "normalized {} of {} lines in {}ms ({} characters dropped)",
        stats.lines_written,
        stats.lines_read,
        watch.elapsed_ms(),
        stats.chars_dropped
    );

    Ok(())
}
