//! Term extraction and stop-word filtering shared by every analyzer.
//!
//! Pure and stateless beyond the static stop-word tables. Tokens are
//! lower-cased alphabetic runs (hyphen allowed word-internally), kept when at
//! least `MIN_TERM_LEN` characters and not on the locale's stop-word list.
//! Accented letters are retained so non-English text survives extraction.

use std::collections::HashSet;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Minimum token length kept by default.
pub const MIN_TERM_LEN: usize = 4;

/// High-frequency English words excluded from term extraction.
const STOP_WORDS_EN: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "people", "into", "year", "your",
    "good", "some", "could", "them", "see", "other", "than", "then", "now", "look", "only",
    "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us", "must", "should", "very", "such", "here", "through", "where",
];

/// Spanish variant of the stop-word table.
const STOP_WORDS_ES: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o", "este",
    "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también", "hasta", "hay",
    "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les", "contra",
    "otros", "ese", "eso", "ante", "ellos", "esto", "antes", "algunos", "unos", "otro", "otras",
    "otra", "tanto", "esa", "estos", "mucho", "quienes", "nada", "muchos", "cual", "poco",
    "ella", "estar", "estas", "algunas", "algo", "nosotros", "tiene", "tienen", "hacer", "cada",
    "siendo", "pueden", "sido", "tener",
];

/// Language of the stop-word table used for term extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => bail!("unsupported locale '{other}'"),
        }
    }
}

/// Stop-word filter and tokenizer. Loaded once, shared read-only across
/// analyzers and concurrent calls.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    stop_words: HashSet<&'static str>,
    min_term_len: usize,
}

impl Vocabulary {
    pub fn new(locale: Locale) -> Self {
        Self::with_min_len(locale, MIN_TERM_LEN)
    }

    /// Builds a vocabulary with a custom minimum token length.
    pub fn with_min_len(locale: Locale, min_term_len: usize) -> Self {
        let table = match locale {
            Locale::En => STOP_WORDS_EN,
            Locale::Es => STOP_WORDS_ES,
        };
        Vocabulary {
            stop_words: table.iter().copied().collect(),
            min_term_len,
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Splits text into normalized terms, in document order, duplicates kept.
    /// Empty input yields an empty list.
    pub fn extract_terms(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphabetic() || c == '-'))
            .map(|raw| raw.trim_matches('-').to_lowercase())
            .filter(|term| term.chars().count() >= self.min_term_len)
            .filter(|term| term.chars().next().is_some_and(|c| c.is_alphabetic()))
            .filter(|term| !self.stop_words.contains(term.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_list() {
        let vocab = Vocabulary::new(Locale::En);
        assert!(vocab.extract_terms("").is_empty());
    }

    #[test]
    fn test_terms_are_lowercased_and_ordered() {
        let vocab = Vocabulary::new(Locale::En);
        let terms = vocab.extract_terms("Python Engineer with Docker");
        assert_eq!(terms, vec!["python", "engineer", "docker"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let vocab = Vocabulary::new(Locale::En);
        let terms = vocab.extract_terms("go run the big app fast");
        assert!(!terms.contains(&"app".to_string()), "3-char token kept: {terms:?}");
        assert!(terms.contains(&"fast".to_string()));
    }

    #[test]
    fn test_stop_words_filtered() {
        let vocab = Vocabulary::new(Locale::En);
        let terms = vocab.extract_terms("this should work because experience matters most");
        assert!(!terms.contains(&"this".to_string()));
        assert!(!terms.contains(&"should".to_string()));
        assert!(!terms.contains(&"because".to_string()));
        assert!(terms.contains(&"experience".to_string()));
        assert!(terms.contains(&"matters".to_string()));
    }

    #[test]
    fn test_accented_characters_retained() {
        let vocab = Vocabulary::new(Locale::En);
        let terms = vocab.extract_terms("experiencia en programación avanzada");
        assert!(terms.contains(&"programación".to_string()), "got {terms:?}");
    }

    #[test]
    fn test_spanish_locale_filters_spanish_stop_words() {
        let vocab = Vocabulary::new(Locale::Es);
        let terms = vocab.extract_terms("experiencia sobre todos los sistemas durante años");
        assert!(!terms.contains(&"sobre".to_string()));
        assert!(!terms.contains(&"todos".to_string()));
        assert!(!terms.contains(&"durante".to_string()));
        assert!(terms.contains(&"experiencia".to_string()));
        assert!(terms.contains(&"sistemas".to_string()));
    }

    #[test]
    fn test_hyphenated_tokens_survive() {
        let vocab = Vocabulary::new(Locale::En);
        let terms = vocab.extract_terms("detail-oriented problem-solving approach");
        assert!(terms.contains(&"detail-oriented".to_string()));
        assert!(terms.contains(&"problem-solving".to_string()));
    }

    #[test]
    fn test_custom_min_len() {
        let vocab = Vocabulary::with_min_len(Locale::En, 6);
        let terms = vocab.extract_terms("short words versus lengthier vocabulary");
        assert!(!terms.contains(&"short".to_string()));
        assert!(terms.contains(&"lengthier".to_string()));
    }

    #[test]
    fn test_punctuation_and_digits_split_tokens() {
        let vocab = Vocabulary::new(Locale::En);
        let terms = vocab.extract_terms("node.js, docker/kubernetes; ci4cd!");
        assert!(terms.contains(&"docker".to_string()));
        assert!(terms.contains(&"kubernetes".to_string()));
        assert!(!terms.iter().any(|t| t.contains('.')), "got {terms:?}");
    }
}
