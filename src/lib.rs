//! # corpus-tagger
//! Batch part-of-speech tagging for directories of plain-text English documents.
//!
//! A `corpus::Corpus` lists and loads the `.txt` files of one directory and
//! splits them into sentences, a `tagger::Tagger` labels each sentence's
//! tokens, and `batch::BatchTagger` ties both together, writing a `.pos`
//! companion file per input.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

pub mod batch;
pub mod corpus;
pub mod error;
pub mod range;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use crate::error::{Error, Result};
