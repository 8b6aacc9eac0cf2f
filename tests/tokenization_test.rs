//! Tests for the sentence tokenizer

use corpus_tagger::range::TextRange;
use corpus_tagger::tokenizer::Tokenizer;

fn sentence_texts(text: &str) -> Vec<String> {
  let tokenizer = Tokenizer::default();
  tokenizer
    .sentences(text)
    .iter()
    .map(|range| range.get_plaintext().to_string())
    .collect()
}

#[test]
/// Test sentence tokenization of a simple document
fn test_sentence_tokenization_simple() {
  let simple_text = "This note was written to clarify for myself and my colleagues certain properties \
   of Bernstein approximations that are useful in investigating copulas. We derive some of the basic properties \
   of the Bernstein approximation for functions of n variables and then show that the Bernstein approximation of \
   a copula is again a copula. Unorthodox beginnings of sentences can also occur. Deciphering Eqn. 1 is sometimes. difficult Prof. Automation, isn't it? \
   Our most significant result is a stochastic interpretation of the Bernstein \
   approximation of a copula. This interpretation was communicated to us by J. H. B. Kemperman in [2] for \
   2-copulas and we are not aware of its publication elsewhere.";
  let simple_tokenizer = Tokenizer::default();
  let ranges: Vec<TextRange> = simple_tokenizer.sentences(simple_text);
  assert_eq!(ranges.len(), 6);
  assert_eq!(
    ranges[3].get_plaintext(),
    "Deciphering Eqn. 1 is sometimes. difficult Prof. Automation, isn't it?"
  );
  assert!(ranges[5].get_plaintext().ends_with("elsewhere."));
}

#[test]
fn single_sentence_is_kept_whole() {
  assert_eq!(sentence_texts("The dog runs."), vec!["The dog runs."]);
  assert_eq!(sentence_texts("  The dog runs.  \n"), vec!["The dog runs."]);
}

#[test]
fn abbreviations_do_not_split() {
  assert_eq!(
    sentence_texts("I met Mr. Smith today. He was late."),
    vec!["I met Mr. Smith today.", "He was late."]
  );
}

#[test]
fn bracketed_question_mark_does_not_split() {
  assert_eq!(
    sentence_texts("The value (?) is unknown! Nobody knows it."),
    vec!["The value (?) is unknown!", "Nobody knows it."]
  );
}

#[test]
fn blank_line_before_capital_splits() {
  assert_eq!(
    sentence_texts("A heading without a dot\n\nThe body starts here."),
    vec!["A heading without a dot", "The body starts here."]
  );
  assert_eq!(
    sentence_texts("a wrapped line\n\ncontinues in lowercase."),
    vec!["a wrapped line\n\ncontinues in lowercase."]
  );
}

#[test]
fn repeated_punctuation_stays_with_its_sentence() {
  assert_eq!(
    sentence_texts("Really?! Yes."),
    vec!["Really?!", "Yes."]
  );
}

#[test]
fn empty_and_punctuation_only_text_has_no_sentences() {
  assert!(sentence_texts("").is_empty());
  assert!(sentence_texts("   \n\n  ").is_empty());
  assert!(sentence_texts(" ... ").is_empty());
}

#[test]
fn crlf_blank_line_before_capital_splits() {
  assert_eq!(
    sentence_texts("A heading without a dot\r\n\r\nThe body starts here.\r\n"),
    vec!["A heading without a dot", "The body starts here."]
  );
  assert_eq!(
    sentence_texts("a wrapped\r\nline continues."),
    vec!["a wrapped\r\nline continues."]
  );
}

#[test]
fn closing_quote_stays_with_its_sentence() {
  assert_eq!(
    sentence_texts("He asked \"why?\" Then he left."),
    vec!["He asked \"why?\"", "Then he left."]
  );
  assert_eq!(
    sentence_texts("It worked (finally!) Nobody cared."),
    vec!["It worked (finally!)", "Nobody cared."]
  );
}
