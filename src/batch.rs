//! Tags every plain-text file of a corpus directory, writing `<name>.pos`
//! companions next to the inputs.
//!
//! Files that are not regular files, or whose output already exists, are
//! skipped with a warning. A failure to write an output is reported for that
//! file only. Reading and tagging failures abort the whole run.
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::corpus::{Corpus, CorpusFile};
use crate::error::Result;
use crate::tagger::{TaggedSentence, Tagger};

/// Naming conventions of a batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
  /// suffix of the files to tag
  pub extension: String,
  /// suffix appended to an input file name to obtain its output name
  pub output_suffix: String,
  /// transliterate inputs to ASCII before tagging
  pub normalize_unicode: bool,
}

impl Default for BatchOptions {
  fn default() -> BatchOptions {
    BatchOptions {
      extension: ".txt".to_string(),
      output_suffix: ".pos".to_string(),
      normalize_unicode: false,
    }
  }
}

/// What happened to a single candidate file
#[derive(Debug)]
pub enum FileOutcome {
  /// The output was written with this many sentence lines
  Tagged {
    /// number of lines written
    sentences: usize,
  },
  /// The candidate is a directory or some other non-regular entry
  NotRegularFile,
  /// The output file already existed and was left alone
  OutputExists,
  /// The output could not be written
  WriteFailed(io::Error),
}

impl FileOutcome {
  /// whether the file was skipped before tagging
  pub fn is_skipped(&self) -> bool {
    matches!(self, FileOutcome::NotRegularFile | FileOutcome::OutputExists)
  }
}

/// Summary of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
  /// Number of candidate files found in the directory
  pub files_found: usize,
  /// Outcome per candidate file name, in processing order
  pub outcomes: Vec<(String, FileOutcome)>,
}

impl BatchReport {
  /// number of files that received a fresh output
  pub fn tagged(&self) -> usize {
    self
      .outcomes
      .iter()
      .filter(|(_, outcome)| matches!(outcome, FileOutcome::Tagged { .. }))
      .count()
  }
  /// number of files skipped before tagging
  pub fn skipped(&self) -> usize { self.outcomes.iter().filter(|(_, o)| o.is_skipped()).count() }
  /// number of files whose output could not be written
  pub fn failed(&self) -> usize {
    self
      .outcomes
      .iter()
      .filter(|(_, outcome)| matches!(outcome, FileOutcome::WriteFailed(_)))
      .count()
  }
  /// the outcome recorded for `name`
  pub fn outcome(&self, name: &str) -> Option<&FileOutcome> {
    self
      .outcomes
      .iter()
      .find(|(file_name, _)| file_name == name)
      .map(|(_, outcome)| outcome)
  }
}

/// Tags a corpus directory file by file
pub struct BatchTagger {
  corpus: Corpus,
  options: BatchOptions,
}

impl BatchTagger {
  /// Prepares a batch over `directory`, failing if it is not a directory
  pub fn new<P: AsRef<Path>>(directory: P, options: BatchOptions) -> Result<Self> {
    let mut corpus = Corpus::open(directory)?;
    corpus.extension = options.extension.clone();
    corpus.normalize_unicode = options.normalize_unicode;
    Ok(BatchTagger { corpus, options })
  }

  /// The corpus being processed
  pub fn corpus(&self) -> &Corpus { &self.corpus }

  /// The output path for a candidate file
  pub fn output_path(&self, file: &CorpusFile) -> PathBuf {
    self.corpus.path.join(self.output_name(file))
  }

  fn output_name(&self, file: &CorpusFile) -> String {
    format!("{}{}", file.name, self.options.output_suffix)
  }

  /// Processes every candidate file with `tagger`. Per-file problems are recorded in
  /// the report; errors from reading or tagging abort the run.
  pub fn run<T: Tagger>(&self, tagger: &mut T) -> Result<BatchReport> {
    info!("Processing directory {}", self.corpus.path.display());
    let files = self.corpus.files()?;
    info!("{} files found", files.len());

    let mut report = BatchReport {
      files_found: files.len(),
      outcomes: Vec::with_capacity(files.len()),
    };
    for (index, file) in files.iter().enumerate() {
      info!("Processing file {} of {}: {}", index + 1, files.len(), file.name);
      let outcome = self.process_file(tagger, file)?;
      report.outcomes.push((file.name.clone(), outcome));
    }
    debug!(
      "tagged {}, skipped {}, failed {}",
      report.tagged(),
      report.skipped(),
      report.failed()
    );
    Ok(report)
  }

  /// Applies the skip rules to one candidate, then tags and writes it
  pub fn process_file<T: Tagger>(&self, tagger: &mut T, file: &CorpusFile) -> Result<FileOutcome> {
    if !file.is_regular_file() {
      warn!("{} is not a regular file. Skipping", file.name);
      return Ok(FileOutcome::NotRegularFile);
    }
    let output_name = self.output_name(file);
    let output_path = self.output_path(file);
    // symlink_metadata, so that dangling links also count as existing
    if fs::symlink_metadata(&output_path).is_ok() {
      warn!("{} already exists. Skipping", output_name);
      return Ok(FileOutcome::OutputExists);
    }

    let document = self.corpus.load_doc(&file.path)?;
    let mut tagged = Vec::new();
    for sentence in document.sentence_iter() {
      tagged.push(tagger.tag(sentence.get_plaintext())?);
    }

    match write_tagged(&output_path, &tagged) {
      Ok(()) => {
        debug!("wrote {} sentences to {}", tagged.len(), output_name);
        Ok(FileOutcome::Tagged {
          sentences: tagged.len(),
        })
      },
      Err(e) => {
        error!("could not write to file {}. Skipping: {}", output_name, e);
        Ok(FileOutcome::WriteFailed(e))
      },
    }
  }
}

/// Writes one line per sentence, `word/TAG` tokens separated by spaces.
/// Never replaces an existing entry at `path`; a partial output this call
/// created is removed again when writing fails.
pub fn write_tagged(path: &Path, sentences: &[TaggedSentence]) -> io::Result<()> {
  let file = OpenOptions::new().write(true).create_new(true).open(path)?;
  let result = write_lines(BufWriter::new(file), sentences);
  if result.is_err() {
    if let Err(cleanup) = fs::remove_file(path) {
      debug!("could not remove partial output {}: {}", path.display(), cleanup);
    }
  }
  result
}

fn write_lines<W: Write>(mut output: W, sentences: &[TaggedSentence]) -> io::Result<()> {
  for sentence in sentences {
    writeln!(output, "{}", sentence)?;
  }
  output.flush()
}
