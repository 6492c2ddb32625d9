use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

use pernorm::{Normalizer, NormalizerConfig, Stage, VerbLexicon};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "normalize", about = "A program to normalize Persian text line by line.")]
struct Args {
    /// Verb stem file, one stem per line.
    /// The bundled stems are used if not specified.
    #[clap(short = 'l', long)]
    verbs_in: Option<PathBuf>,

    /// Stage to be skipped (e.g., number-to-words). Can be repeated.
    #[clap(short = 'd', long)]
    disable: Vec<Stage>,

    /// Prints debug logs.
    #[clap(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let verbs = match &args.verbs_in {
        Some(path) => VerbLexicon::from_path_or_empty(path),
        None => VerbLexicon::bundled(),
    };
    let config = args
        .disable
        .iter()
        .fold(NormalizerConfig::new(), |config, &stage| config.enable(stage, false));

    eprintln!("Loading the normalizer with {} verb stems...", verbs.len());
    let normalizer = Normalizer::new(config, verbs)?;
    eprintln!("Ready to normalize :)");

    let mut out = BufWriter::new(std::io::stdout().lock());
    #[allow(clippy::significant_drop_in_scrutinee)]
    for (i, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line?;
        match normalizer.normalize(&line) {
            Ok(normalized) => writeln!(out, "{}", normalized)?,
            Err(e) => {
                tracing::warn!(line = i + 1, error = %e, "failed to normalize; writing the line as is");
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}
