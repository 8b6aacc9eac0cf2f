//! Data structures and iterators for reading a directory of plain-text files
use std::fs;
use std::path::{Path, PathBuf};
use std::vec::IntoIter;

use tracing::{debug, warn};
use unidecode::unidecode;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::range::TextRange;
use crate::tokenizer::Tokenizer;

/// A flat directory of plain-text documents
pub struct Corpus {
  /// root directory
  pub path: PathBuf,
  /// File name suffix selecting corpus files, `.txt` by default
  pub extension: String,
  /// sentence splitter
  pub tokenizer: Tokenizer,
  /// Transliterate the loaded text to ASCII before segmentation
  pub normalize_unicode: bool,
}

/// A directory entry selected by the corpus extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
  /// The file name, as listed in the directory
  pub name: String,
  /// The full path of the entry
  pub path: PathBuf,
}

/// One plain-text document of the corpus
pub struct Document<'d> {
  /// The file path of the document
  pub path: PathBuf,
  /// The full text of the document
  pub plaintext: String,
  /// A reference to the corpus containing this document
  pub corpus: &'d Corpus,
}

/// An iterator over the sentences of a document
pub struct SentenceIterator<'iter> {
  walker: IntoIter<TextRange<'iter>>,
}

/// A sentence in a document
#[derive(Debug, Clone, Copy)]
pub struct Sentence<'s> {
  /// The range of the sentence
  pub range: TextRange<'s>,
}

impl Corpus {
  /// Opens the corpus rooted at `dirpath`, which has to be an existing directory
  pub fn open<P: AsRef<Path>>(dirpath: P) -> Result<Self> {
    let path = dirpath.as_ref().to_path_buf();
    if !path.is_dir() {
      return Err(Error::NotADirectory(path));
    }
    Ok(Corpus {
      path,
      extension: ".txt".to_string(),
      tokenizer: Tokenizer::default(),
      normalize_unicode: false,
    })
  }

  /// Lists the entries directly inside the corpus directory whose names end with the
  /// extension, sorted by name. Non-regular entries are included.
  pub fn files(&self) -> Result<Vec<CorpusFile>> {
    let walker = WalkDir::new(&self.path)
      .min_depth(1)
      .max_depth(1)
      .sort_by(|a, b| a.file_name().cmp(b.file_name()));
    let mut files = Vec::new();
    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        // depth 0 errors mean the directory itself is unreadable
        Err(e) if e.depth() == 0 => {
          return Err(Error::Listing {
            path: self.path.clone(),
            source: e,
          })
        },
        Err(e) => {
          warn!("Error while listing entry: {}", e);
          continue;
        },
      };
      let name = entry.file_name().to_string_lossy().into_owned();
      if name.ends_with(&self.extension) {
        files.push(CorpusFile {
          name,
          path: entry.into_path(),
        });
      } else {
        debug!("Ignoring {}", name);
      }
    }
    Ok(files)
  }

  /// Load a specific document of the corpus
  pub fn load_doc<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
    let path = path.as_ref().to_path_buf();
    let bytes = fs::read(&path).map_err(|source| Error::Read {
      path: path.clone(),
      source,
    })?;
    let mut plaintext = String::from_utf8_lossy(&bytes).into_owned();
    if self.normalize_unicode {
      plaintext = unidecode(&plaintext);
    }
    Ok(Document {
      path,
      plaintext,
      corpus: self,
    })
  }
}

impl CorpusFile {
  /// Whether the entry is a regular file, following symbolic links
  pub fn is_regular_file(&self) -> bool {
    fs::metadata(&self.path)
      .map(|meta| meta.is_file())
      .unwrap_or(false)
  }
}

impl<'d> Document<'d> {
  /// Get an iterator over the sentences of the document
  pub fn sentence_iter(&self) -> SentenceIterator {
    SentenceIterator {
      walker: self.corpus.tokenizer.sentences(&self.plaintext).into_iter(),
    }
  }
}

impl<'iter> Iterator for SentenceIterator<'iter> {
  type Item = Sentence<'iter>;
  fn next(&mut self) -> Option<Sentence<'iter>> {
    loop {
      let range = self.walker.next()?;
      if !range.is_empty() {
        return Some(Sentence { range });
      }
    }
  }
}

impl<'s> Sentence<'s> {
  /// The text of the sentence
  pub fn get_plaintext(&self) -> &'s str { self.range.get_plaintext() }
}
