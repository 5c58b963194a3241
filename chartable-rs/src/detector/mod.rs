//! Script-mixing detection engine
//!
//! Scores normalized words for confusable-character substitution and
//! reports named detections when a per-message aggregate crosses the
//! configured threshold.

pub mod confusable;
pub mod manager;
pub mod scorer;
pub mod tokenize;
pub mod types;

pub use manager::ChartableDetector;
pub use tokenize::tokenize_text;
pub use types::*;
