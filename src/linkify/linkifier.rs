//! Linkifier: single-pass URL + email scanner
//!
//! Walks the input once, left to right. At each code point it tries an
//! email match, then a URL match (optional scheme + domain), and extends
//! URL matches through a trailing-content scan that decides how much of the
//! following path, punctuation and brackets belongs to the link.
//!
//! All exposed offsets are code-point offsets. Pattern matching runs on the
//! UTF-8 suffix at the current position, anchored with `^`.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, Anchored, Input, MatchKind, StartKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::charset::{classify, is_hard_terminator, is_soft_terminator, CharClass, DEFAULT_SCHEME, URL_SCHEMES};
use super::config::LinkifyConfig;
use super::segment::{build_segments, Segment};

// =============================================================================
// Types
// =============================================================================

/// Kind of link detected
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Url,
    Email,
}

/// A detected link.
///
/// `start`/`end` are a half-open code-point range into the scanned input.
/// For schemeless URLs `text` is `http://` + the literal range, so it does
/// not equal `input[start..end]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub kind: LinkKind,
    pub text: String,
}

impl MatchSpan {
    /// Link target: `mailto:` for emails, the resolved text for URLs.
    pub fn href(&self) -> String {
        match self.kind {
            LinkKind::Email => format!("mailto:{}", self.text),
            LinkKind::Url => self.text.clone(),
        }
    }
}

// =============================================================================
// Linkifier
// =============================================================================

/// URL + email scanner. Immutable after construction; share freely.
pub struct Linkifier {
    email_re: Regex,
    domain_re: Regex,
    schemes: AhoCorasick,
    detect_urls: bool,
    detect_emails: bool,
}

impl Default for Linkifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Linkifier {
    /// Linkifier with every detector enabled
    pub fn new() -> Self {
        Self::with_config(&LinkifyConfig::default())
    }

    pub fn with_config(config: &LinkifyConfig) -> Self {
        // local-part@ followed by the domain grammar below
        let email_re = Regex::new(r"^[\p{L}\p{N}._\-]+@(?:[\p{L}\p{N}\-]+\.)+\p{L}{2,}")
            .expect("Email regex should compile");

        // (label.)+ then a final label of 2+ letters, any script
        let domain_re = Regex::new(r"^(?:[\p{L}\p{N}\-]+\.)+\p{L}{2,}")
            .expect("Domain regex should compile");

        // Prefixes are disjoint, leftmost-first keeps the listed priority anyway
        let schemes = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostFirst)
            .start_kind(StartKind::Anchored)
            .build(URL_SCHEMES)
            .expect("Scheme automaton should build");

        Self {
            email_re,
            domain_re,
            schemes,
            detect_urls: config.detect_urls,
            detect_emails: config.detect_emails,
        }
    }

    /// Find every link in `text`, in order, non-overlapping.
    pub fn scan(&self, text: &str) -> Vec<MatchSpan> {
        let chars: Vec<char> = text.chars().collect();
        let offsets = char_offsets(text);
        let n = chars.len();

        let mut matches = Vec::new();
        let mut i = 0;

        while i < n {
            if self.detect_emails {
                if let Some(span) = self.match_email(text, &offsets, i) {
                    i = span.end;
                    matches.push(span);
                    continue;
                }
            }

            if self.detect_urls {
                if let Some(span) = self.match_url(text, &chars, &offsets, i) {
                    i = span.end;
                    matches.push(span);
                    continue;
                }
            }

            i += 1;
        }

        matches
    }

    /// Split `text` into plain-text and link segments
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let spans = self.scan(text);
        build_segments(text, &spans)
    }

    fn match_email(&self, text: &str, offsets: &[usize], i: usize) -> Option<MatchSpan> {
        let from = offsets[i];
        let m = self.email_re.find(&text[from..])?;

        Some(MatchSpan {
            start: i,
            end: char_index(offsets, from + m.end()),
            kind: LinkKind::Email,
            text: m.as_str().to_string(),
        })
    }

    fn match_url(&self, text: &str, chars: &[char], offsets: &[usize], i: usize) -> Option<MatchSpan> {
        let from = offsets[i];
        let scheme_len = self
            .schemes
            .find(Input::new(&text[from..]).anchored(Anchored::Yes))
            .map(|m| m.end());

        let domain_from = from + scheme_len.unwrap_or(0);
        let domain = self.domain_re.find(&text[domain_from..])?;

        let core_end = char_index(offsets, domain_from + domain.end());
        let end = trailing_end(chars, core_end);
        let literal = &text[from..offsets[end]];

        let resolved = match scheme_len {
            Some(_) => literal.to_string(),
            None => format!("{}{}", DEFAULT_SCHEME, literal),
        };

        Some(MatchSpan {
            start: i,
            end,
            kind: LinkKind::Url,
            text: resolved,
        })
    }
}

/// Extend a URL past its domain. Returns the last safe end.
fn trailing_end(chars: &[char], core_end: usize) -> usize {
    let mut open_stack: Vec<char> = Vec::new();
    let mut last_safe = core_end;

    for j in core_end..chars.len() {
        match classify(chars[j]) {
            CharClass::Hard => break,
            CharClass::PathQueryFragment => {}
            CharClass::Soft => match chars.get(j + 1) {
                // Trailing punctuation: end of input or another terminator follows
                None => break,
                Some(&next) if is_hard_terminator(next) || is_soft_terminator(next) => break,
                Some(_) => {}
            },
            CharClass::Close(open) => {
                if open_stack.last() == Some(&open) {
                    open_stack.pop();
                } else {
                    break;
                }
            }
            CharClass::Open => open_stack.push(chars[j]),
            CharClass::Ordinary => {}
        }
        last_safe = j + 1;
    }

    last_safe
}

/// Byte offset of every code point, plus `text.len()` as the final entry.
pub(crate) fn char_offsets(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Code-point index of a byte offset on a char boundary.
fn char_index(offsets: &[usize], byte: usize) -> usize {
    offsets.binary_search(&byte).unwrap_or_else(|idx| idx)
}

// =============================================================================
// Shared default instance
// =============================================================================

static DEFAULT_LINKIFIER: OnceLock<Linkifier> = OnceLock::new();

/// Process-wide linkifier with the default config
pub fn default_linkifier() -> &'static Linkifier {
    DEFAULT_LINKIFIER.get_or_init(Linkifier::new)
}

/// Scan with the default linkifier
pub fn scan(text: &str) -> Vec<MatchSpan> {
    default_linkifier().scan(text)
}

/// Segment with the default linkifier
pub fn segments(text: &str) -> Vec<Segment> {
    default_linkifier().segments(text)
}
