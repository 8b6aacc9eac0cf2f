//! `corpus_tagger` CLI entrypoint.
//!
//! Writes part-of-speech tags for all `.txt` files of a directory. Every
//! input `name.txt` gets a `name.txt.pos` companion holding one sentence per
//! line, each token rendered as `word/TAG`. Existing outputs are never
//! overwritten.
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use corpus_tagger::batch::{BatchOptions, BatchTagger};
use corpus_tagger::tagger::{SennaTagger, TaggerSettings};

#[derive(Parser)]
#[command(
  name = "corpus_tagger",
  version,
  about = "Write part-of-speech tags for all plain-text files in a directory",
  long_about = "Write part-of-speech tags for all plain-text files in a directory.\n\n\
                The files are assumed to have a `.txt' extension, to be in plain text format \
                and to contain English text. Output files are given a `.pos' extension \
                appended to the identical filename. Tagging uses Senna's default tagger and \
                the Penn Treebank tagset."
)]
struct CliArgs {
  /// Directory containing the files to tag
  directory: PathBuf,

  /// Directory holding the Senna models (defaults to the bundled installation)
  #[arg(long, env = "SENNA_PATH")]
  senna_path: Option<String>,

  /// Suffix of the input files
  #[arg(long, default_value = ".txt")]
  extension: String,

  /// Suffix appended to input file names for the outputs
  #[arg(long, default_value = ".pos")]
  suffix: String,

  /// Transliterate input text to ASCII before tagging
  #[arg(long, default_value_t = false)]
  normalize_unicode: bool,

  /// Enable debug logging
  #[arg(short, long, default_value_t = false)]
  verbose: bool,
}

fn parse_args() -> CliArgs {
  match CliArgs::try_parse() {
    Ok(args) => args,
    Err(e) => match e.kind() {
      ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
      _ => {
        eprintln!("{}", e);
        println!("{}", CliArgs::command().render_long_help());
        process::exit(1);
      },
    },
  }
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .without_time()
    .with_writer(std::io::stdout)
    .init();
}

fn main() {
  let args = parse_args();
  init_logging(args.verbose);

  let options = BatchOptions {
    extension: args.extension,
    output_suffix: args.suffix,
    normalize_unicode: args.normalize_unicode,
  };
  let batch = match BatchTagger::new(&args.directory, options) {
    Ok(batch) => batch,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    },
  };

  let mut tagger = SennaTagger::new(TaggerSettings {
    senna_path: args.senna_path,
  });
  match batch.run(&mut tagger) {
    Ok(report) => tracing::info!(
      "Done: {} tagged, {} skipped, {} failed",
      report.tagged(),
      report.skipped(),
      report.failed()
    ),
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    },
  }
}
