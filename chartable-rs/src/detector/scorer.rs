//! Per-word script-mixing scorer.
//!
//! One state machine, two classification strategies: a Unicode-aware path
//! for parts that decoded as valid UTF-8, and a byte-heuristic fallback for
//! everything else. Both emit a bounded per-word badness value.

use tracing::debug;
use unicode_script::{Script, UnicodeScript};

use super::confusable::is_confusable;
use crate::config::ChartableConfig;

/// Penalty for an alphabetic character terminating a digit run.
const DIGIT_ALPHA_PENALTY: f64 = 0.25;
/// Per-word badness cap.
const MAX_WORD_BADNESS: f64 = 4.0;

/// Classification of one scanned unit (a code point or a raw byte).
#[derive(Debug, Clone, Copy)]
enum CharKind {
    Alpha {
        /// Script bucket: Latin-ish (byte path: low ASCII) or not.
        latin: bool,
        /// Draws the digit-run penalty when it terminates a digit run.
        after_digit_penalty: bool,
        /// Draws the run-switch penalty when it breaks a run of the
        /// opposite bucket.
        switch_penalty: bool,
        /// Uppercase letter outside the Latin bucket (Unicode path only).
        foreign_upper: bool,
    },
    Digit,
    Other,
}

/// Which condition gates the digit-run penalty.
#[derive(Debug, Clone, Copy)]
enum DigitGate {
    /// The state before the digit run must not be the initial state
    /// (Unicode path: digits at the very start of a word are benign).
    PrevState,
    /// An alphabetic unit must have been seen earlier in the word
    /// (byte path).
    SeenAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Start,
    Alpha,
    Digit,
    Unknown,
}

#[derive(Debug, Default)]
struct ScanOutcome {
    badness: f64,
    /// Scored units (code points or bytes).
    nsym: usize,
    /// Uppercase letters found outside the Latin script.
    foreign_upper: u32,
}

/// The shared scoring state machine. Classification is injected as an
/// already-resolved stream of [`CharKind`] units, so both scorer paths run
/// the exact same transition logic.
fn scan(kinds: impl Iterator<Item = CharKind>, is_url: bool, gate: DigitGate) -> ScanOutcome {
    let mut out = ScanOutcome::default();
    let mut state = State::Start;
    let mut prev_state = State::Start;
    let mut seen_alpha = false;
    // Length of the current same-bucket alphabetic run; `run_latin` is only
    // meaningful while run_len > 0.
    let mut run_len: usize = 0;
    let mut run_latin = false;

    for kind in kinds {
        match kind {
            CharKind::Alpha {
                latin,
                after_digit_penalty,
                switch_penalty,
                foreign_upper,
            } => {
                if foreign_upper {
                    out.foreign_upper += 1;
                }

                if state == State::Digit {
                    // Penalize digit -> alpha translations
                    let gated = match gate {
                        DigitGate::PrevState => prev_state != State::Start,
                        DigitGate::SeenAlpha => seen_alpha,
                    };
                    if !is_url && gated && after_digit_penalty {
                        out.badness += DIGIT_ALPHA_PENALTY;
                    }
                }

                if run_len > 0 {
                    if latin != run_latin {
                        // Shorter runs before a switch weigh more
                        if switch_penalty {
                            out.badness += 1.0 / run_len as f64;
                        }
                        run_latin = latin;
                        run_len = 1;
                    } else {
                        run_len += 1;
                    }
                } else {
                    run_latin = latin;
                    run_len = 1;
                }

                seen_alpha = true;
                prev_state = state;
                state = State::Alpha;
            }
            CharKind::Digit => {
                if state != State::Digit {
                    prev_state = state;
                }
                state = State::Digit;
                run_len = 0;
            }
            CharKind::Other => {
                // Punctuation, symbols and whitespace break script
                // continuity but score nothing themselves
                if state != State::Unknown {
                    prev_state = state;
                }
                state = State::Unknown;
                run_len = 0;
            }
        }

        out.nsym += 1;
    }

    out
}

/// Unicode classification: resolve the script of alphabetic code points,
/// folding Common and Inherited (accents, IPA, modifier and combining
/// marks) into the Latin bucket so they never register as a script switch.
fn classify_char(ch: char) -> CharKind {
    if ch.is_alphabetic() {
        let latin = matches!(
            ch.script(),
            Script::Latin | Script::Common | Script::Inherited
        );
        CharKind::Alpha {
            latin,
            after_digit_penalty: !latin,
            // Leaving a Latin run only counts when the incoming character
            // is a known Latin lookalike; falling back to Latin after a
            // foreign run always counts.
            switch_penalty: latin || is_confusable(ch),
            foreign_upper: !latin && ch.is_uppercase(),
        }
    } else if ch.is_numeric() {
        CharKind::Digit
    } else {
        CharKind::Other
    }
}

/// Byte classification: anything with the high bit set is treated as
/// alphabetic in the non-ASCII bucket, no decoding attempted.
fn classify_byte(b: u8) -> CharKind {
    if b.is_ascii_alphabetic() || b >= 0x80 {
        CharKind::Alpha {
            latin: b.is_ascii(),
            after_digit_penalty: !b.is_ascii_hexdigit(),
            switch_penalty: true,
            foreign_upper: false,
        }
    } else if b.is_ascii_digit() {
        CharKind::Digit
    } else {
        CharKind::Other
    }
}

/// Longest valid UTF-8 prefix of `raw`. An invalid sequence silently ends
/// the scan for that word; whatever scored before it still counts.
fn valid_prefix(raw: &[u8]) -> &str {
    match std::str::from_utf8(raw) {
        Ok(s) => s,
        Err(err) => std::str::from_utf8(&raw[..err.valid_up_to()]).unwrap_or(""),
    }
}

/// Score one word on the Unicode path.
///
/// `ncap`, when supplied, accumulates uppercase letters found outside the
/// Latin script; it is updated even for words the length guard discards.
pub fn score_word_unicode(
    word: &[u8],
    is_url: bool,
    ncap: Option<&mut u32>,
    config: &ChartableConfig,
) -> f64 {
    let text = valid_prefix(word);
    let outcome = scan(text.chars().map(classify_char), is_url, DigitGate::PrevState);

    if let Some(ncap) = ncap {
        *ncap += outcome.foreign_upper;
    }

    // Try to avoid false positives for long words
    let badness = if outcome.nsym > config.max_word_len {
        0.0
    } else {
        outcome.badness.min(MAX_WORD_BADNESS)
    };

    debug!(word = %String::from_utf8_lossy(word), badness, "scored word");

    badness
}

/// Score one word on the byte path. Words over the length limit are
/// excluded before any scanning happens.
pub fn score_word_bytes(word: &[u8], is_url: bool, config: &ChartableConfig) -> f64 {
    if word.len() > config.max_word_len {
        return 0.0;
    }

    let outcome = scan(
        word.iter().map(|&b| classify_byte(b)),
        is_url,
        DigitGate::SeenAlpha,
    );
    let badness = outcome.badness.min(MAX_WORD_BADNESS);

    debug!(word = %String::from_utf8_lossy(word), badness, "scored word");

    badness
}
