//! Configuration for the linkifier and its WASM facade

use serde::{Deserialize, Serialize};

/// Which detectors run, and the caller-side input cap.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LinkifyConfig {
    #[serde(default = "default_true")]
    pub detect_urls: bool,
    #[serde(default = "default_true")]
    pub detect_emails: bool,
    /// Scan only the first `max_chars` code points. Applied by `LinkCortex`,
    /// never by the core scan.
    #[serde(default)]
    pub max_chars: Option<usize>,
}

fn default_true() -> bool { true }

impl Default for LinkifyConfig {
    fn default() -> Self {
        Self {
            detect_urls: true,
            detect_emails: true,
            max_chars: None,
        }
    }
}

impl LinkifyConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LinkifyConfig = serde_json::from_str(json)
            .map_err(|e| format!("Invalid config JSON: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.detect_urls && !self.detect_emails {
            return Err("At least one of detect_urls / detect_emails must be enabled".to_string());
        }
        if self.max_chars == Some(0) {
            return Err("max_chars must be at least 1".to_string());
        }
        Ok(())
    }
}
