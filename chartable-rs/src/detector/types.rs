//! Message-model boundary types.
//!
//! These are the shapes the detector consumes from the surrounding
//! pipeline: pre-tokenized words per body part, the raw subject line, and
//! the discovered URL/email hosts. The pipeline owns their production; the
//! detector only reads them (and bumps the per-part capital-letter
//! counter).

use serde::{Deserialize, Serialize};

/// One normalized word produced by the tokenizer.
#[derive(Debug, Clone)]
pub struct Word {
    /// Raw bytes of the normalized word
    pub bytes: Vec<u8>,
    /// Whether the token carries textual content (as opposed to e.g. a
    /// number or separator run the tokenizer kept)
    pub is_text: bool,
}

impl Word {
    /// Textual word from a string slice.
    pub fn text(s: &str) -> Self {
        Self {
            bytes: s.as_bytes().to_vec(),
            is_text: true,
        }
    }

    /// Non-textual token (counted in aggregation, never scored).
    pub fn non_text(s: &str) -> Self {
        Self {
            bytes: s.as_bytes().to_vec(),
            is_text: false,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A tokenized body part.
#[derive(Debug, Clone, Default)]
pub struct TextPart {
    /// Ordered normalized words of the part
    pub words: Vec<Word>,
    /// Whether the part content decoded as valid UTF-8
    pub is_utf: bool,
    /// Running uppercase-letter counter consumed by downstream heuristics
    pub capital_letters: u32,
}

impl TextPart {
    pub fn new(words: Vec<Word>, is_utf: bool) -> Self {
        Self {
            words,
            is_utf,
            capital_letters: 0,
        }
    }
}

/// A discovered URL or email address, reduced to its host component.
#[derive(Debug, Clone, Default)]
pub struct HostEntry {
    /// Host string; may be empty when the pipeline found none
    pub host: String,
}

impl HostEntry {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

/// Everything the detector needs from one message scan.
#[derive(Debug, Clone, Default)]
pub struct ScanTask {
    /// Tokenized body parts
    pub text_parts: Vec<TextPart>,
    /// Raw subject line, when the message has one
    pub subject: Option<String>,
    /// Hosts of discovered URLs
    pub urls: Vec<HostEntry>,
    /// Hosts of discovered email addresses
    pub emails: Vec<HostEntry>,
}

/// A named detection reported to the result sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Symbol name
    pub symbol: String,
    /// Aggregate badness that crossed the threshold
    pub score: f64,
    /// Context label (`"subject"` for subject detections)
    pub context: Option<String>,
}

/// Result sink a scan reports into, at most once per entry point.
pub trait DetectionSink {
    fn insert(&mut self, detection: Detection);
}

impl DetectionSink for Vec<Detection> {
    fn insert(&mut self, detection: Detection) {
        self.push(detection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_constructors() {
        let word = Word::text("hello");
        assert!(word.is_text);
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());

        let token = Word::non_text("1234");
        assert!(!token.is_text);
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<Detection> = Vec::new();
        // Dispatch through the trait; Vec has an inherent insert(index, ..)
        let dyn_sink: &mut dyn DetectionSink = &mut sink;
        dyn_sink.insert(Detection {
            symbol: "R_MIXED_CHARSET".to_string(),
            score: 0.5,
            context: None,
        });
        DetectionSink::insert(
            &mut sink,
            Detection {
                symbol: "R_MIXED_CHARSET".to_string(),
                score: 0.7,
                context: None,
            },
        );
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].symbol, "R_MIXED_CHARSET");
        assert_eq!(sink[1].score, 0.7);
    }
}
