//! Detection entry points and score aggregation.
//!
//! The external scheduler calls each entry point once per message; each
//! reports at most one detection into the sink.

use tracing::{debug, info};

use super::scorer::{score_word_bytes, score_word_unicode};
use super::tokenize::tokenize_text;
use super::types::{Detection, DetectionSink, ScanTask, TextPart};
use crate::config::ChartableConfig;

/// Cap on any per-invocation aggregate (part/subject average, hostname sum).
const MAX_AGGREGATE_SCORE: f64 = 2.0;

/// The script-mixing detector. Holds the immutable module configuration;
/// everything else lives per call, so one instance serves any number of
/// concurrent message scans.
pub struct ChartableDetector {
    config: ChartableConfig,
}

impl ChartableDetector {
    pub fn new(config: ChartableConfig) -> Self {
        info!(
            symbol = %config.symbol,
            url_symbol = %config.url_symbol,
            "init chartable detector"
        );
        Self { config }
    }

    pub fn config(&self) -> &ChartableConfig {
        &self.config
    }

    /// Body-text entry point: scores every text-bearing word of every body
    /// part and reports the highest per-part average, when it crosses the
    /// threshold. Also feeds each part's uppercase-outside-Latin count
    /// back into its running capital-letter counter.
    pub fn check_body(&self, task: &mut ScanTask, sink: &mut dyn DetectionSink) {
        let mut best: f64 = 0.0;

        for part in &mut task.text_parts {
            if let Some(score) = self.process_part(part) {
                best = best.max(score);
            }
        }

        if best > self.config.threshold {
            sink.insert(Detection {
                symbol: self.config.symbol.clone(),
                score: best,
                context: None,
            });
        }
    }

    /// Subject entry point: the subject line is not part of the body token
    /// set, so it is tokenized here and always scored on the Unicode path.
    pub fn check_subject(&self, task: &ScanTask, sink: &mut dyn DetectionSink) {
        let Some(subject) = task.subject.as_deref() else {
            return;
        };

        let words = tokenize_text(subject);
        if words.is_empty() {
            return;
        }

        let mut score = 0.0;
        for word in &words {
            score += score_word_unicode(&word.bytes, false, None, &self.config);
        }

        score /= words.len() as f64;
        score = score.min(MAX_AGGREGATE_SCORE);

        debug!(score, "checked subject");

        if score > self.config.threshold {
            sink.insert(Detection {
                symbol: self.config.symbol.clone(),
                score,
                context: Some("subject".to_string()),
            });
        }
    }

    /// Hostname entry point: one shared running sum over the URL hosts and
    /// then the email hosts, each loop short-circuiting once the sum hits
    /// the cap. The sum deliberately carries over from the URL loop into
    /// the email loop.
    pub fn check_hostnames(&self, task: &ScanTask, sink: &mut dyn DetectionSink) {
        let mut score = 0.0;

        for set in [&task.urls, &task.emails] {
            for entry in set {
                if entry.host.is_empty() {
                    continue;
                }

                let host = entry.host.as_bytes();
                score += if std::str::from_utf8(host).is_ok() {
                    score_word_unicode(host, true, None, &self.config)
                } else {
                    score_word_bytes(host, true, &self.config)
                };

                if score > MAX_AGGREGATE_SCORE {
                    score = MAX_AGGREGATE_SCORE;
                    break;
                }
            }
        }

        if score > self.config.threshold {
            sink.insert(Detection {
                symbol: self.config.url_symbol.clone(),
                score,
                context: None,
            });
        }
    }

    /// Average badness of one part. Empty and non-textual words are never
    /// scored, but the average divides by the full token count, not just
    /// the scored words.
    fn process_part(&self, part: &mut TextPart) -> Option<f64> {
        if part.words.is_empty() {
            return None;
        }

        let mut score = 0.0;
        let mut ncap = 0u32;

        for word in &part.words {
            if word.is_empty() || !word.is_text {
                continue;
            }

            score += if part.is_utf {
                score_word_unicode(&word.bytes, false, Some(&mut ncap), &self.config)
            } else {
                score_word_bytes(&word.bytes, false, &self.config)
            };
        }

        part.capital_letters += ncap;

        score /= part.words.len() as f64;

        Some(score.min(MAX_AGGREGATE_SCORE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::types::{HostEntry, Word};

    fn detector() -> ChartableDetector {
        ChartableDetector::new(ChartableConfig::default())
    }

    fn utf_part(words: &[&str]) -> TextPart {
        TextPart::new(words.iter().map(|w| Word::text(w)).collect(), true)
    }

    #[test]
    fn test_body_detection_for_disguised_word() {
        let mut task = ScanTask {
            text_parts: vec![utf_part(&["\u{03c9}indow"])],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_body(&mut task, &mut sink);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].symbol, "R_MIXED_CHARSET");
        assert!(sink[0].score > 0.1);
        assert_eq!(sink[0].context, None);
    }

    #[test]
    fn test_body_no_detection_for_plain_ascii() {
        let mut task = ScanTask {
            text_parts: vec![utf_part(&["plain", "english", "words", "here"])],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_body(&mut task, &mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_body_at_most_one_detection_across_parts() {
        let mut task = ScanTask {
            text_parts: vec![utf_part(&["p\u{0430}ypal"]), utf_part(&["\u{03c9}indow"])],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_body(&mut task, &mut sink);

        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_denominator_counts_unscored_tokens() {
        // One scoring word plus three skipped tokens: the average divides
        // by four, not one
        let mut scoring_only = ScanTask {
            text_parts: vec![utf_part(&["p\u{0430}"])],
            ..Default::default()
        };
        let mut padded = ScanTask {
            text_parts: vec![TextPart::new(
                vec![
                    Word::text("p\u{0430}"),
                    Word::non_text("123"),
                    Word::non_text("456"),
                    Word::text(""),
                ],
                true,
            )],
            ..Default::default()
        };

        let mut sink_a = Vec::new();
        let mut sink_b = Vec::new();
        detector().check_body(&mut scoring_only, &mut sink_a);
        detector().check_body(&mut padded, &mut sink_b);

        assert_eq!(sink_a[0].score, 1.0);
        assert_eq!(sink_b[0].score, 0.25);
    }

    #[test]
    fn test_body_feeds_capital_letter_counter() {
        // Uppercase Cyrillic Д counts even though the part scores nothing
        let mut task = ScanTask {
            text_parts: vec![utf_part(&["\u{0414}\u{0430}\u{0447}\u{0430}"])],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_body(&mut task, &mut sink);

        assert_eq!(task.text_parts[0].capital_letters, 1);
    }

    #[test]
    fn test_byte_path_part() {
        // Part not valid UTF-8: high-byte runs scored by the byte fallback
        let part = TextPart::new(
            vec![Word {
                bytes: vec![b'a', 0xd0, b'b'],
                is_text: true,
            }],
            false,
        );
        let mut task = ScanTask {
            text_parts: vec![part],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_body(&mut task, &mut sink);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].score, 2.0);
    }

    #[test]
    fn test_subject_detection_labeled() {
        let task = ScanTask {
            subject: Some("re: \u{03c9}indow offer".to_string()),
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_subject(&task, &mut sink);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].symbol, "R_MIXED_CHARSET");
        assert_eq!(sink[0].context.as_deref(), Some("subject"));
    }

    #[test]
    fn test_missing_subject_is_a_noop() {
        let task = ScanTask::default();
        let mut sink = Vec::new();

        detector().check_subject(&task, &mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_hostname_detection_uses_url_symbol() {
        let task = ScanTask {
            urls: vec![HostEntry::new("p\u{0430}ypal.com")],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_hostnames(&task, &mut sink);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].symbol, "R_MIXED_CHARSET_URL");
        assert_eq!(sink[0].context, None);
    }

    #[test]
    fn test_ascii_hostnames_are_clean() {
        let task = ScanTask {
            urls: vec![HostEntry::new("paypal.com"), HostEntry::new("example.org")],
            emails: vec![HostEntry::new("mail.example.org")],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_hostnames(&task, &mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_hostname_sum_clamped_at_cap() {
        // Each host contributes 2.0; the shared sum never reports above 2.0
        let task = ScanTask {
            urls: vec![
                HostEntry::new("p\u{0430}ypal.com"),
                HostEntry::new("g\u{043e}ogle.com"),
                HostEntry::new("\u{0430}pple.com"),
            ],
            emails: vec![HostEntry::new("y\u{0430}hoo.com")],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_hostnames(&task, &mut sink);

        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].score, 2.0);
    }

    #[test]
    fn test_empty_hosts_skipped() {
        let task = ScanTask {
            urls: vec![HostEntry::new(""), HostEntry::new("")],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_hostnames(&task, &mut sink);

        assert!(sink.is_empty());
    }

    #[test]
    fn test_empty_part_is_a_noop() {
        let mut task = ScanTask {
            text_parts: vec![TextPart::default()],
            ..Default::default()
        };
        let mut sink = Vec::new();

        detector().check_body(&mut task, &mut sink);

        assert!(sink.is_empty());
    }
}
