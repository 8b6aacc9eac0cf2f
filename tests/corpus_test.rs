use std::fs;

use corpus_tagger::corpus::Corpus;
use corpus_tagger::Error;

#[test]
fn rejects_missing_directory() {
  match Corpus::open("tests/resources/no-such-directory") {
    Err(Error::NotADirectory(path)) => assert!(path.ends_with("no-such-directory")),
    _ => panic!("expected NotADirectory"),
  }
}

#[test]
fn rejects_regular_file() {
  assert!(matches!(
    Corpus::open("tests/resources/bernstein.txt"),
    Err(Error::NotADirectory(_))
  ));
}

#[test]
fn lists_only_txt_entries_sorted() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("b.txt"), "Second.").unwrap();
  fs::write(dir.path().join("a.txt"), "First.").unwrap();
  fs::write(dir.path().join("a.txt.pos"), "First/NNP ./.\n").unwrap();
  fs::write(dir.path().join("notes.md"), "# notes").unwrap();
  fs::create_dir(dir.path().join("folder.txt")).unwrap();
  fs::create_dir_all(dir.path().join("nested")).unwrap();
  fs::write(dir.path().join("nested").join("deep.txt"), "Hidden.").unwrap();

  let corpus = Corpus::open(dir.path()).unwrap();
  let files = corpus.files().unwrap();
  let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
  assert_eq!(names, vec!["a.txt", "b.txt", "folder.txt"]);
  assert!(files[0].is_regular_file());
  assert!(!files[2].is_regular_file());
}

#[test]
fn honours_custom_extension() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("a.txt"), "First.").unwrap();
  fs::write(dir.path().join("b.text"), "Second.").unwrap();
  let mut corpus = Corpus::open(dir.path()).unwrap();
  corpus.extension = ".text".to_string();
  let files = corpus.files().unwrap();
  assert_eq!(files.len(), 1);
  assert_eq!(files[0].name, "b.text");
}

#[test]
fn can_iterate_sentences_of_a_document() {
  let corpus = Corpus::open("tests/resources").unwrap();
  let document = corpus.load_doc("tests/resources/bernstein.txt").unwrap();
  let sentences: Vec<&str> = document
    .sentence_iter()
    .map(|sentence| sentence.get_plaintext())
    .collect();
  assert_eq!(sentences.len(), 6);
  assert!(sentences[0].starts_with("This note was written"));
  assert!(sentences.iter().all(|s| !s.is_empty()));
}

#[test]
fn tolerates_invalid_utf8() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("latin1.txt");
  fs::write(&path, b"Caf\xe9 au lait.").unwrap();
  let corpus = Corpus::open(dir.path()).unwrap();
  let document = corpus.load_doc(&path).unwrap();
  assert_eq!(document.plaintext, "Caf\u{fffd} au lait.");
}

#[test]
fn can_transliterate_to_ascii() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("cafe.txt");
  fs::write(&path, "Café au lait.").unwrap();
  let mut corpus = Corpus::open(dir.path()).unwrap();
  corpus.normalize_unicode = true;
  let document = corpus.load_doc(&path).unwrap();
  assert_eq!(document.plaintext, "Cafe au lait.");
}

#[test]
fn missing_file_is_a_read_error() {
  let corpus = Corpus::open("tests/resources").unwrap();
  assert!(matches!(
    corpus.load_doc("tests/resources/missing.txt"),
    Err(Error::Read { .. })
  ));
}
