//! The `range` module provides a light-weight handle for indexing into a document's plaintext

/// Very often we'll talk about substrings of the plaintext - sentences, words, etc.
/// A `TextRange` stores the byte offsets of such a substring together with a
/// reference to the full plaintext it was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange<'text> {
  /// Byte offset of the beginning of the range
  pub start: usize,
  /// Byte offset of the end of the range
  pub end: usize,
  /// Plaintext containing this range
  pub text: &'text str,
}

impl<'text> TextRange<'text> {
  /// A range covering all of `text`
  pub fn full(text: &'text str) -> Self {
    TextRange {
      start: 0,
      end: text.len(),
      text,
    }
  }

  /// Get the plaintext substring corresponding to the range
  pub fn get_plaintext(&self) -> &'text str { &self.text[self.start..self.end] }

  /// Returns a `TextRange` with the leading and trailing whitespaces removed
  pub fn trim(&self) -> TextRange<'text> {
    let range_text = self.get_plaintext();
    let leading = range_text.len() - range_text.trim_start().len();
    let trailing = range_text.len() - range_text.trim_end().len();
    // whitespace-only input collapses to the 0-width range at the original end marker
    if leading == range_text.len() {
      return TextRange {
        start: self.end,
        end: self.end,
        text: self.text,
      };
    }
    TextRange {
      start: self.start + leading,
      end: self.end - trailing,
      text: self.text,
    }
  }

  /// returns a subrange, with byte offsets relative to the beginning of `self`
  pub fn get_subrange(&self, rel_start: usize, rel_end: usize) -> TextRange<'text> {
    TextRange {
      start: self.start + rel_start,
      end: self.start + rel_end,
      text: self.text,
    }
  }

  /// checks whether the range is empty
  pub fn is_empty(&self) -> bool { self.start >= self.end }
}
