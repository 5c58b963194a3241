//! Minimal boundary tokenizer.
//!
//! The production pipeline supplies pre-tokenized words for body parts;
//! the subject line has no part of its own and is split here on demand.

use super::types::Word;

/// Split arbitrary text into scorer-shaped words on non-alphanumeric
/// boundaries.
pub fn tokenize_text(text: &str) -> Vec<Word> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(Word::text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        let words = tokenize_text("Hello, cruel world!");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].bytes, b"Hello");
        assert_eq!(words[2].bytes, b"world");
    }

    #[test]
    fn test_keeps_mixed_script_words_whole() {
        let words = tokenize_text("buy \u{03c9}indow now");
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].bytes, "\u{03c9}indow".as_bytes());
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_text("").is_empty());
        assert!(tokenize_text("  \t ").is_empty());
    }
}
