//! Text tokenization and cleanup.

use crate::config::TextConfig;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Runs of word characters.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Anything that is not an ASCII letter, digit, or whitespace.
static SPECIAL_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());

/// Runs of whitespace.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase `text` and split it into word tokens.
///
/// # Examples
///
/// ```
/// use prepkit_core::text::special_tokenization;
///
/// assert_eq!(
///     special_tokenization("Hello, World! This is a test."),
///     vec!["hello", "world", "this", "is", "a", "test"]
/// );
/// ```
pub fn special_tokenization(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<String> = WORD
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect();
    debug!(tokens = tokens.len(), "Tokenized text");
    tokens
}

/// Strip special characters and collapse whitespace.
///
/// # Examples
///
/// ```
/// use prepkit_core::text::clean_text;
///
/// assert_eq!(clean_text("Hello,   World! This is a test."), "Hello World This is a test");
/// ```
pub fn clean_text(text: &str) -> String {
    let stripped = SPECIAL_CHARS.replace_all(text, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Remove words whose lowercase form appears in `stopwords`.
///
/// Words are whitespace-delimited, so attached punctuation is part of the
/// word. Stopwords themselves are matched as given.
///
/// # Examples
///
/// ```
/// use prepkit_core::text::clean_stop_words;
/// use std::collections::HashSet;
///
/// let stopwords: HashSet<String> =
///     ["is", "a", "the", "this"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(
///     clean_stop_words("This is a test of the stopword removal.", &stopwords),
///     "test of stopword removal."
/// );
/// ```
pub fn clean_stop_words(text: &str, stopwords: &HashSet<String>) -> String {
    text.split_whitespace()
        .filter(|word| !stopwords.contains(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a comma-separated stopword list. An empty string yields no stopwords.
pub fn parse_stopwords(spec: &str) -> HashSet<String> {
    if spec.is_empty() {
        return HashSet::new();
    }
    spec.split(TextConfig::STOPWORD_SEPARATOR)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenization() {
        assert_eq!(
            special_tokenization("Hello, world! This is a test."),
            vec!["hello", "world", "this", "is", "a", "test"]
        );
        assert!(special_tokenization("  ...  ").is_empty());
    }

    #[test]
    fn test_tokenization_keeps_underscores_and_digits() {
        assert_eq!(special_tokenization("snake_case v2"), vec!["snake_case", "v2"]);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text(" Hello, World! "), "Hello World");
        assert_eq!(clean_text("  Hello!!! This is a TEST...  "), "Hello This is a TEST");
        assert_eq!(clean_text("!!!"), "");
    }

    #[test]
    fn test_clean_stop_words() {
        let stopwords = set(&["this", "is", "a", ",", "!"]);
        assert_eq!(
            clean_stop_words("Hello, world! This is a test.", &stopwords),
            "Hello, world! test."
        );
    }

    #[test]
    fn test_clean_stop_words_case() {
        // Uppercase stopwords never match, since words are lowercased first.
        let stopwords = set(&["This"]);
        assert_eq!(clean_stop_words("This is it", &stopwords), "This is it");
    }

    #[test]
    fn test_parse_stopwords() {
        assert!(parse_stopwords("").is_empty());
        assert_eq!(parse_stopwords("is,a,with"), set(&["is", "a", "with"]));
    }
}
