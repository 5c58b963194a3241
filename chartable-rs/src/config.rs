use crate::error::{ChartableError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const DEFAULT_SYMBOL: &str = "R_MIXED_CHARSET";
pub const DEFAULT_URL_SYMBOL: &str = "R_MIXED_CHARSET_URL";
pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MAX_WORD_LEN: usize = 10;

/// Module configuration, read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartableConfig {
    /// Symbol reported for body and subject detections
    pub symbol: String,
    /// Symbol reported for URL/email hostname detections
    pub url_symbol: String,
    /// Score threshold a per-message aggregate must exceed
    pub threshold: f64,
    /// Words longer than this are excluded from scoring
    pub max_word_len: usize,
}

impl Default for ChartableConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            url_symbol: DEFAULT_URL_SYMBOL.to_string(),
            threshold: DEFAULT_THRESHOLD,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl ChartableConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| ChartableError::Config(e.to_string()))?;
        Ok(raw.resolve())
    }
}

/// Loose form of the options; `threshold` is accepted as any TOML value so a
/// non-numeric entry degrades to the default instead of failing the load.
#[derive(Debug, Deserialize)]
struct RawConfig {
    symbol: Option<String>,
    url_symbol: Option<String>,
    threshold: Option<toml::Value>,
    max_word_len: Option<usize>,
}

impl RawConfig {
    fn resolve(self) -> ChartableConfig {
        let threshold = match self.threshold {
            Some(toml::Value::Float(v)) => v,
            Some(toml::Value::Integer(v)) => v as f64,
            Some(_) => {
                warn!("invalid numeric value for threshold, using default");
                DEFAULT_THRESHOLD
            }
            None => DEFAULT_THRESHOLD,
        };

        ChartableConfig {
            symbol: self.symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            url_symbol: self
                .url_symbol
                .unwrap_or_else(|| DEFAULT_URL_SYMBOL.to_string()),
            threshold,
            max_word_len: self.max_word_len.unwrap_or(DEFAULT_MAX_WORD_LEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChartableConfig::default();
        assert_eq!(config.symbol, "R_MIXED_CHARSET");
        assert_eq!(config.url_symbol, "R_MIXED_CHARSET_URL");
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.max_word_len, 10);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ChartableConfig::from_toml_str("").unwrap();
        assert_eq!(config.symbol, "R_MIXED_CHARSET");
        assert_eq!(config.threshold, 0.1);
    }

    #[test]
    fn test_explicit_options() {
        let config = ChartableConfig::from_toml_str(
            r#"
symbol = "MY_MIXED"
url_symbol = "MY_MIXED_URL"
threshold = 0.25
max_word_len = 20
"#,
        )
        .unwrap();
        assert_eq!(config.symbol, "MY_MIXED");
        assert_eq!(config.url_symbol, "MY_MIXED_URL");
        assert_eq!(config.threshold, 0.25);
        assert_eq!(config.max_word_len, 20);
    }

    #[test]
    fn test_integer_threshold_accepted() {
        let config = ChartableConfig::from_toml_str("threshold = 1").unwrap();
        assert_eq!(config.threshold, 1.0);
    }

    #[test]
    fn test_invalid_threshold_falls_back_to_default() {
        let config = ChartableConfig::from_toml_str(r#"threshold = "high""#).unwrap();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
    }
}
