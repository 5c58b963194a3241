//! chartable-rs: mixed-script content obfuscation detector
//!
//! A mail-scanning component that flags text mixing character scripts the
//! way spam and phishing evasion does — substituting Cyrillic, Greek or
//! mathematical-alphanumeric lookalikes for Latin letters to slip past
//! keyword filters.
//!
//! # How it works
//!
//! - A static table of Latin-confusable code points backs a membership test
//! - A per-word state machine tracks script-run continuity and accumulates
//!   a bounded badness value (a Unicode-aware path, plus a byte-heuristic
//!   fallback for parts that are not valid UTF-8)
//! - Three entry points — body text, subject line, URL/email hostnames —
//!   aggregate per-word scores, cap them, and report at most one named
//!   detection each when the configured threshold is exceeded
//!
//! # Example
//!
//! ```
//! use chartable_rs::config::ChartableConfig;
//! use chartable_rs::detector::{ChartableDetector, Detection, HostEntry, ScanTask};
//!
//! let detector = ChartableDetector::new(ChartableConfig::default());
//!
//! let task = ScanTask {
//!     urls: vec![HostEntry::new("p\u{0430}ypal.com")], // Cyrillic а
//!     ..Default::default()
//! };
//!
//! let mut detections: Vec<Detection> = Vec::new();
//! detector.check_hostnames(&task, &mut detections);
//! assert_eq!(detections[0].symbol, "R_MIXED_CHARSET_URL");
//! ```
//!
//! # Modules
//!
//! - [`config`]: Module configuration (symbols, threshold, word length cap)
//! - [`error`]: Error types and handling
//! - [`detector`]: Confusable table, word scorers and detection entry points

pub mod config;
pub mod detector;
pub mod error;

// Re-export commonly used types
pub use config::ChartableConfig;
pub use detector::{ChartableDetector, Detection, DetectionSink, ScanTask};
pub use error::{ChartableError, Result};
