//! English stopwords, used by the sentence splitter to recognize sentence openings
use std::collections::HashSet;

static STOPWORDS: &[&str] = &[
  "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
  "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
  "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around",
  "as", "at", "be", "became", "because", "become", "becomes", "becoming", "been", "before",
  "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond", "both",
  "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "during",
  "each", "either", "else", "elsewhere", "enough", "even", "ever", "every", "everyone",
  "everything", "everywhere", "except", "few", "for", "former", "formerly", "from", "further",
  "furthermore", "had", "has", "have", "having", "he", "hence", "her", "here", "hereafter",
  "hereby", "herein", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if",
  "in", "indeed", "into", "is", "it", "its", "itself", "just", "last", "latter", "least", "less",
  "many", "may", "me", "meanwhile", "might", "more", "moreover", "most", "mostly", "much",
  "must", "my", "myself", "namely", "neither", "never", "nevertheless", "next", "no", "nobody",
  "none", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
  "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
  "over", "own", "perhaps", "rather", "same", "several", "she", "should", "since", "so", "some",
  "somehow", "someone", "something", "sometimes", "somewhere", "still", "such", "than", "that",
  "the", "their", "theirs", "them", "themselves", "then", "thence", "there", "thereafter",
  "thereby", "therefore", "therein", "these", "they", "this", "those", "though", "through",
  "throughout", "thus", "to", "together", "too", "toward", "towards", "under", "unless",
  "until", "up", "upon", "us", "very", "was", "we", "well", "were", "what", "whatever", "when",
  "whence", "whenever", "where", "whereas", "whereby", "wherein", "whether", "which", "while",
  "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
  "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Loads the stopword set
pub fn load() -> HashSet<&'static str> { STOPWORDS.iter().copied().collect() }
