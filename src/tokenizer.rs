//! Provides functionality for splitting plain text into sentences
use crate::range::TextRange;
use crate::stopwords;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::vec_deque::VecDeque;
use std::collections::HashSet;
use std::iter::Peekable;
use std::str::Chars;

/// size of the longest abbreviation + 1
const WINDOW_SIZE: usize = 12;

lazy_static! {
  static ref ABBREVIATIONS: Regex = Regex::new(r"^(?:C(?:[ft]|o(?:n[jn]|lo?|rp)?|a(?:l(?:if)?|pt)|mdr|p?l|res)|M(?:[dst]|a(?:[jnry]|ss)|i(?:ch|nn|ss)|o(?:nt)?|ex?|rs?)|A(?:r(?:[ck]|iz)|l(?:t?a)?|ttys?|ssn|dm|pr|ug|ve)|c(?:o(?:rp|l)?|(?:ap)?t|mdr|p?l|res|f)|S(?:e(?:ns?|pt?|c)|(?:up|g)?t|ask|r)|s(?:e(?:ns?|pt?|c)|(?:up|g)?t|r)|a(?:ttys?|ssn|dm|pr|rc|ug|ve|l)|P(?:enna?|-a.s|de?|lz?|rof|a)|D(?:e(?:[cfl]|p?t)|ist|ak|r)|I(?:[as]|n[cd]|da?|.e|ll)|F(?:e[bd]|w?y|ig|la|t)|O(?:k(?:la)?|[cn]t|re)|d(?:e(?:p?t|c)|ist|r)|E(?:xpy?|.g|sp|tc|qs?)|R(?:e(?:ps?|sp|v)|d)|T(?:e(?:nn|x)|ce|hm)|e(?:xpy?|.g|sp|tc|qs?)|m(?:[st]|a[jry]|rs?)|r(?:e(?:ps?|sp|v)|d)|N(?:e(?:br?|v)|ov?)|W(?:isc?|ash|yo?)|f(?:w?y|eb|ig|t)|p(?:de?|lz?|rof)|J(?:u[ln]|an|r)|U(?:SAFA|niv|t)|j(?:u[ln]|an|r)|K(?:ans?|en|y)|B(?:lv?d|ros)|b(?:lv?d|ros)|G(?:en|ov|a)|L(?:td?|a)|g(?:en|ov)|i(?:.e|nc)|l(?:td?|a)|[Hh]wa?y|V[ast]|Que|nov?|univ|Yuk|oct|tce|vs)\s?$").unwrap();
}

/// Stores auxiliary resources required by the tokenizer so that they need to be initialized only
/// once
pub struct Tokenizer {
  /// set of stopwords
  pub stopwords: HashSet<&'static str>,
  /// regular expression for abbreviations
  pub abbreviations: Regex,
}
impl Default for Tokenizer {
  fn default() -> Tokenizer {
    Tokenizer {
      stopwords: stopwords::load(),
      abbreviations: ABBREVIATIONS.clone(),
    }
  }
}

impl Tokenizer {
  fn abbreviation_check(&self, left_window: &VecDeque<char>) -> bool {
    let lw_string: String = left_window.iter().collect();
    let lw_str = lw_string.trim();
    let lw_word = lw_str
      .split(|c: char| !c.is_alphabetic())
      .last()
      .unwrap_or(lw_str);
    // Single letters followed by a dot are initials, except for "I"
    ((lw_word.chars().count() == 1) && (lw_word != "I")) || self.abbreviations.is_match(lw_word)
  }

  /// gets the sentences of a plaintext, as trimmed non-empty ranges
  pub fn sentences<'a>(&self, text: &'a str) -> Vec<TextRange<'a>> {
    let mut sentences: Vec<TextRange<'a>> = Vec::new();
    let mut text_iterator = text.chars().peekable();
    let mut start = 0;
    let mut end = 0;
    let mut left_window: VecDeque<char> = VecDeque::with_capacity(WINDOW_SIZE);

    macro_rules! break_sentence {
      () => {{
        left_window.clear();
        sentences.push(TextRange { start, end, text }.trim());
        start = end;
      }};
    }

    while let Some(sentence_char) = text_iterator.next() {
      end += sentence_char.len_utf8();

      match sentence_char {
        '.' | ':' => {
          end += skip_whitespace_and_quotes(&mut text_iterator);
          if text_iterator.peek().is_none() {
            break;
          }
          if wordlike_with_upper_next(text_iterator.clone()) {
            let (next_word, next_word_length) = next_word_with_length(&mut text_iterator);
            // a stopword always opens a new sentence, anything else needs a non-abbreviation
            if self.stopwords.contains(next_word.to_lowercase().as_str())
              || !self.abbreviation_check(&left_window)
            {
              break_sentence!();
            } else {
              push_window(&mut left_window, '.');
            }
            for next_word_char in next_word.chars() {
              push_window(&mut left_window, next_word_char);
            }
            end += next_word_length;
          } else {
            match text_iterator.peek() {
              Some(&'*') | Some(&'"') | Some(&'(') => break_sentence!(),
              _ => push_window(&mut left_window, '.'),
            }
          }
        },
        '?' | '!' => {
          let next = text_iterator.peek();
          let repeated = matches!(next, Some(&'?') | Some(&'!') | Some(&'.'));
          if !repeated && !is_bounded(left_window.back(), next) {
            // closing quotes and brackets belong to the sentence they end
            end += skip_closers(&mut text_iterator);
            break_sentence!();
          }
        },
        '\r' => push_window(&mut left_window, ' '),
        '\n' => {
          end += skip_carriage_returns(&mut text_iterator);
          if let Some(&'\n') = text_iterator.peek() {
            // blank line
            end += skip_whitespace_and_quotes(&mut text_iterator);
            if text_iterator.peek().is_none() {
              break;
            }
            let (next_word, next_word_length) = next_word_with_length(&mut text_iterator);
            // a blank line before a capitalized word is a paragraph break
            let continues = match next_word.chars().next() {
              None => true,
              Some(first) => first.is_lowercase(),
            };
            if !continues {
              break_sentence!();
            }
            for next_word_char in next_word.chars() {
              push_window(&mut left_window, next_word_char);
            }
            end += next_word_length;
          } else {
            push_window(&mut left_window, ' ');
          }
        },
        other_char => push_window(&mut left_window, other_char),
      }
    }

    let tail = TextRange {
      start,
      end: text.len(),
      text,
    };
    if tail.get_plaintext().chars().any(char::is_alphanumeric) {
      sentences.push(tail.trim());
    }

    // Filter out edge cases that return empty ranges
    sentences.into_iter().filter(|range| !range.is_empty()).collect()
  }
}

fn push_window(left_window: &mut VecDeque<char>, c: char) {
  left_window.push_back(c);
  if left_window.len() >= WINDOW_SIZE {
    left_window.pop_front();
  }
}

/// consumes whitespace and single quotes, returning the number of bytes skipped
fn skip_whitespace_and_quotes(text_iterator: &mut Peekable<Chars>) -> usize {
  let mut skipped = 0;
  while let Some(&c) = text_iterator.peek() {
    if !(c.is_whitespace() || c == '\'') {
      break;
    }
    skipped += c.len_utf8();
    text_iterator.next();
  }
  skipped
}

/// consumes `\r` characters, returning the number of bytes skipped
fn skip_carriage_returns(text_iterator: &mut Peekable<Chars>) -> usize {
  let mut skipped = 0;
  while let Some(&'\r') = text_iterator.peek() {
    skipped += 1;
    text_iterator.next();
  }
  skipped
}

/// consumes closing quotation marks and brackets, returning the number of bytes skipped
fn skip_closers(text_iterator: &mut Peekable<Chars>) -> usize {
  let mut skipped = 0;
  while let Some(&c) = text_iterator.peek() {
    if !matches!(c, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')' | ']' | '}') {
      break;
    }
    skipped += c.len_utf8();
    text_iterator.next();
  }
  skipped
}

/// detects a wordlike sequence with *any* uppercase char, such as "foobaR"
fn wordlike_with_upper_next(peekable: Peekable<Chars>) -> bool {
  for c in peekable {
    if !c.is_alphabetic() {
      return false;
    }
    if c.is_uppercase() {
      return true;
    }
  }
  false
}

/// checks whether two characters are matching brackets or quotation marks
fn is_bounded(left: Option<&char>, right: Option<&char>) -> bool {
  matches!(
    (left, right),
    (Some(&'['), Some(&']'))
      | (Some(&'('), Some(&')'))
      | (Some(&'{'), Some(&'}'))
      | (Some(&'\''), Some(&'\''))
      | (Some(&'"'), Some(&'"'))
  )
}

/// Obtains the next word from the `Peekable<Chars>` iterator, where only
/// alphabetic characters are accepted, and a max length of 20 bytes is imposed
fn next_word_with_length(text_iterator: &mut Peekable<Chars>) -> (String, usize) {
  let mut next_word = String::new();
  while next_word.len() < 20 {
    match text_iterator.peek() {
      Some(&c) if c.is_alphabetic() => {
        next_word.push(c);
        text_iterator.next();
      },
      _ => break,
    }
  }
  let next_word_length = next_word.len();
  (next_word, next_word_length)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn window(s: &str) -> VecDeque<char> { s.chars().collect() }

  #[test]
  fn detects_abbreviations_and_initials() {
    let tokenizer = Tokenizer::default();
    assert!(tokenizer.abbreviation_check(&window("met with Mr")));
    assert!(tokenizer.abbreviation_check(&window("written by J")));
    assert!(!tokenizer.abbreviation_check(&window("and then I")));
    assert!(!tokenizer.abbreviation_check(&window("the big dog")));
  }

  #[test]
  fn brackets_bound_question_marks() {
    assert!(is_bounded(Some(&'('), Some(&')')));
    assert!(!is_bounded(Some(&'t'), Some(&' ')));
    assert!(!is_bounded(None, Some(&')')));
  }

  #[test]
  fn next_word_stops_at_non_alphabetic() {
    let text = "Kemperman, in [2]";
    let mut chars = text.chars().peekable();
    let (word, length) = next_word_with_length(&mut chars);
    assert_eq!(word, "Kemperman");
    assert_eq!(length, 9);
    assert_eq!(chars.next(), Some(','));
  }
}
