use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use pernorm::{Normalizer, NormalizerConfig, Stage, VerbLexicon};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "prepare",
    about = "A program to build a normalized sentence corpus for training."
)]
struct Args {
    /// Corpus file, one document per line.
    #[clap(short = 'i', long)]
    corpus_in: PathBuf,

    /// File to which the sentences are output, one per line.
    #[clap(short = 'o', long)]
    sentences_out: PathBuf,

    /// Verb stem file, one stem per line.
    /// The bundled stems are used if not specified.
    #[clap(short = 'l', long)]
    verbs_in: Option<PathBuf>,

    /// Sentences with this many tokens or fewer are discarded.
    #[clap(long, default_value = "15")]
    min_tokens: usize,

    /// Sentences with this many tokens or more are discarded.
    #[clap(long, default_value = "100")]
    max_tokens: usize,

    /// Maximum number of documents to be processed.
    #[clap(long)]
    limit: Option<usize>,

    /// Stage to be skipped (e.g., number-to-words). Can be repeated.
    #[clap(short = 'd', long)]
    disable: Vec<Stage>,

    /// Prints debug logs.
    #[clap(short = 'v', long)]
    verbose: bool,
}

/// Splits a document after sentence-final marks followed by whitespace.
fn split_sentences(document: &str) -> Vec<&str> {
    let mut sentences = vec![];
    let mut start = 0;
    let mut it = document.char_indices().peekable();
    while let Some((i, c)) = it.next() {
        if !matches!(c, '.' | '!' | '?' | '؟') {
            continue;
        }
        if let Some(&(j, next)) = it.peek() {
            if next.is_whitespace() {
                sentences.push(&document[start..j]);
                start = j;
            }
        } else {
            sentences.push(&document[start..i + c.len_utf8()]);
            start = document.len();
        }
    }
    sentences.push(&document[start..]);
    sentences.retain(|s| !s.trim().is_empty());
    sentences
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

    eprintln!("Loading the normalizer...");
    let verbs = match &args.verbs_in {
        Some(path) => VerbLexicon::from_path_or_empty(path),
        None => VerbLexicon::bundled(),
    };
    let config = args
        .disable
        .iter()
        .fold(NormalizerConfig::new(), |config, &stage| config.enable(stage, false));
    let normalizer = Normalizer::new(config, verbs)?;

    eprintln!("Processing documents...: {:?}", &args.corpus_in);
    let start = Instant::now();
    let reader = BufReader::new(File::open(&args.corpus_in)?);
    let mut writer = BufWriter::new(File::create(&args.sentences_out)?);
    let mut num_documents = 0;
    let mut num_kept = 0;
    let mut num_failed = 0;
    for (i, line) in reader.lines().enumerate() {
        if args.limit.map_or(false, |limit| i >= limit) {
            break;
        }
        let line = line?;
        num_documents += 1;
        for sentence in split_sentences(&line) {
            let normalized = match normalizer.normalize(sentence) {
                Ok(normalized) => normalized,
                Err(e) => {
                    tracing::warn!(document = i + 1, error = %e, "skipping a sentence");
                    num_failed += 1;
                    continue;
                }
            };
            let num_tokens = normalized.split_whitespace().count();
            if args.min_tokens < num_tokens && num_tokens < args.max_tokens {
                writeln!(writer, "{}", normalized.replace('\n', " "))?;
                num_kept += 1;
            }
        }
        if num_documents % 1000 == 0 {
            eprintln!("Processed {} documents, kept {} sentences...", num_documents, num_kept);
        }
    }
    writer.flush()?;
    eprintln!("{} seconds", start.elapsed().as_secs_f64());

    eprintln!("Processed documents: {}", num_documents);
    eprintln!("Kept sentences: {}", num_kept);
    eprintln!("Failed sentences: {}", num_failed);
    eprintln!("Saved to: {:?}", &args.sentences_out);

    Ok(())
}
