//! Part-of-speech tagging of single sentences.
//!
//! The `Tagger` trait is the seam between the batch processor and the NLP
//! toolkit doing the actual work; `SennaTagger` implements it with `rust-senna`.
use std::fmt;
use std::path::PathBuf;

use senna::senna::{Senna, SennaParseOptions};
use senna::sennapath::SENNA_PATH;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// A word together with its part-of-speech label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
  /// surface form of the token
  pub word: String,
  /// part-of-speech label from the tagger's tagset
  pub tag: String,
}

/// The tagged tokens of one sentence, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedSentence {
  /// the tokens
  pub tokens: Vec<TaggedToken>,
}

/// Anything that can split a sentence into tokens and label them
pub trait Tagger {
  /// tokenizes and tags a single sentence
  fn tag(&mut self, sentence: &str) -> Result<TaggedSentence>;
}

impl TaggedToken {
  /// convenience constructor
  pub fn new<W: Into<String>, T: Into<String>>(word: W, tag: T) -> Self {
    TaggedToken {
      word: word.into(),
      tag: tag.into(),
    }
  }
}

impl fmt::Display for TaggedToken {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}/{}", self.word, self.tag) }
}

impl TaggedSentence {
  /// Number of tokens
  pub fn len(&self) -> usize { self.tokens.len() }
  /// Whether the tagger found no tokens at all
  pub fn is_empty(&self) -> bool { self.tokens.is_empty() }
}

impl fmt::Display for TaggedSentence {
  /// `word/TAG` tokens joined by single spaces
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for (index, token) in self.tokens.iter().enumerate() {
      if index > 0 {
        f.write_str(" ")?;
      }
      write!(f, "{}", token)?;
    }
    Ok(())
  }
}

/// Settings for the `SennaTagger`
#[derive(Debug, Clone, Default)]
pub struct TaggerSettings {
  /// Don't use the default senna path
  pub senna_path: Option<String>,
}

impl TaggerSettings {
  /// The model directory Senna will be loaded from
  pub fn model_path(&self) -> String {
    match self.senna_path {
      Some(ref path) => path.clone(),
      None => SENNA_PATH.to_string(),
    }
  }
}

/// Tags sentences with Senna's default POS tagger (Penn Treebank tagset).
/// The models are loaded on the first call to `tag`.
pub struct SennaTagger {
  settings: TaggerSettings,
  senna: Option<Senna>,
}

impl Default for SennaTagger {
  fn default() -> SennaTagger { SennaTagger::new(TaggerSettings::default()) }
}

impl SennaTagger {
  /// construct a new `SennaTagger` with some settings
  pub fn new(settings: TaggerSettings) -> SennaTagger {
    SennaTagger {
      settings,
      senna: None,
    }
  }

  /// whether the Senna models have been loaded yet
  pub fn is_loaded(&self) -> bool { self.senna.is_some() }

  fn load(&self) -> Result<Senna> {
    let model_path = self.settings.model_path();
    if !PathBuf::from(&model_path).is_dir() {
      return Err(Error::MissingModels(PathBuf::from(model_path)));
    }
    info!("Loading Senna from {}", model_path);
    Ok(Senna::new(model_path))
  }
}

impl Tagger for SennaTagger {
  fn tag(&mut self, sentence: &str) -> Result<TaggedSentence> {
    if self.senna.is_none() {
      self.senna = Some(self.load()?);
    }
    let senna = match self.senna.as_mut() {
      Some(senna) => senna,
      None => return Err(Error::MissingModels(PathBuf::from(self.settings.model_path()))),
    };
    let parsed = senna.parse(sentence, SennaParseOptions { pos: true, psg: false });
    let tokens: Vec<TaggedToken> = parsed
      .get_words()
      .iter()
      .filter(|word| !word.get_string().trim().is_empty())
      .map(|word| TaggedToken::new(word.get_string().trim(), word.get_pos().to_str()))
      .collect();
    debug!("tagged {} tokens", tokens.len());
    Ok(TaggedSentence { tokens })
  }
}
