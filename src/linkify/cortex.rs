//! LinkCortex: WASM-facing linkification scanner
//!
//! Wraps a configured [`Linkifier`], applies the input cap, and reports
//! counts and timings. Designed for a single cross-boundary call per scan.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::charset::is_hard_terminator;
use super::config::LinkifyConfig;
use super::linkifier::{char_offsets, default_linkifier, LinkKind, Linkifier, MatchSpan};
use super::segment::{build_segments, Segment};

// =============================================================================
// Types
// =============================================================================

/// Scan statistics. Lengths are in code points.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LinkScanStats {
    pub total_us: u64,
    pub text_length: usize,
    pub scanned_length: usize,
    /// True when `max_chars` cut the input short
    pub truncated: bool,
    pub url_count: usize,
    pub email_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkScanResult {
    pub matches: Vec<MatchSpan>,
    pub stats: LinkScanStats,
}

// =============================================================================
// LinkCortex
// =============================================================================

#[wasm_bindgen]
pub struct LinkCortex {
    linkifier: Linkifier,
    config: LinkifyConfig,
    scan_count: u64,
}

impl Default for LinkCortex {
    fn default() -> Self {
        Self::from_config(LinkifyConfig::default())
    }
}

#[wasm_bindgen]
impl LinkCortex {
    /// Create a LinkCortex; `null`/`undefined` config means defaults
    #[wasm_bindgen(constructor)]
    pub fn js_new(config: JsValue) -> Result<LinkCortex, JsValue> {
        let config: LinkifyConfig = if config.is_null() || config.is_undefined() {
            LinkifyConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Self::new(config).map_err(|e| JsValue::from_str(&e))
    }

    /// Scan text, returning `{ matches, stats }`
    #[wasm_bindgen(js_name = scan)]
    pub fn js_scan(&mut self, text: &str) -> JsValue {
        let result = self.scan(text);
        to_js(&result)
    }

    /// Scan text, returning plain-text and link segments
    #[wasm_bindgen(js_name = segments)]
    pub fn js_segments(&mut self, text: &str) -> JsValue {
        let segments = self.segments(text);
        to_js(&segments)
    }

    /// Active configuration
    #[wasm_bindgen(js_name = config)]
    pub fn js_config(&self) -> JsValue {
        to_js(&self.config)
    }

    #[wasm_bindgen(js_name = scanCount)]
    pub fn scan_count(&self) -> u64 {
        self.scan_count
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.scan_count = 0;
    }
}

impl LinkCortex {
    /// Validate `config` and build the scanner
    pub fn new(config: LinkifyConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: LinkifyConfig) -> Self {
        Self {
            linkifier: Linkifier::with_config(&config),
            config,
            scan_count: 0,
        }
    }

    pub fn config(&self) -> &LinkifyConfig {
        &self.config
    }

    pub fn scan(&mut self, text: &str) -> LinkScanResult {
        let overall_start = instant::Instant::now();
        self.scan_count += 1;

        let (scanned, text_length) = self.capped(text);
        let matches = self.linkifier.scan(scanned);

        let mut stats = LinkScanStats {
            text_length,
            scanned_length: scanned.chars().count(),
            truncated: scanned.len() < text.len(),
            ..Default::default()
        };
        for m in &matches {
            match m.kind {
                LinkKind::Url => stats.url_count += 1,
                LinkKind::Email => stats.email_count += 1,
            }
        }
        stats.total_us = u64::try_from(overall_start.elapsed().as_micros()).unwrap_or(u64::MAX);

        LinkScanResult { matches, stats }
    }

    /// Segments of the scanned region; anything past `max_chars` becomes
    /// one trailing text segment.
    pub fn segments(&mut self, text: &str) -> Vec<Segment> {
        let result = self.scan(text);
        build_segments(text, &result.matches)
    }

    /// Apply `max_chars`. Returns the region to scan and the full length.
    ///
    /// The cut lands on the last hard terminator at or before `max_chars`, so
    /// no link is split: every span in the region is the span a full scan
    /// would report. Without such a terminator nothing is scanned.
    fn capped<'t>(&self, text: &'t str) -> (&'t str, usize) {
        let offsets = char_offsets(text);
        let text_length = offsets.len() - 1;

        match self.config.max_chars {
            Some(max) if text_length > max => {
                let cut = (0..=max)
                    .rev()
                    .find(|&k| matches!(text[offsets[k]..].chars().next(), Some(ch) if is_hard_terminator(ch)))
                    .unwrap_or(0);

                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "[LinkCortex] Input truncated: {} of {} chars scanned (cap {})",
                    cut, text_length, max
                )));
                (&text[..offsets[cut]], text_length)
            }
            _ => (text, text_length),
        }
    }
}

/// Scan with the default config, returning the spans only
#[wasm_bindgen(js_name = linkify)]
pub fn js_linkify(text: &str) -> JsValue {
    to_js(&default_linkifier().scan(text))
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(v) => v,
        Err(_e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("[LinkCortex] Serialization failed: {:?}", _e).into());
            JsValue::NULL
        }
    }
}
