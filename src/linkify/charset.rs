//! Character classes used by the trailing-content scan.
//!
//! Every table here is fixed; classification is a pure lookup per code point.

/// Recognized scheme prefixes, in priority order.
pub const URL_SCHEMES: [&str; 5] = ["http://", "https://", "ftp://", "ftps://", "mailto:"];

/// Prefix stored in front of schemeless URL matches.
pub const DEFAULT_SCHEME: &str = "http://";

/// Whitespace plus the bidi formatting controls (LRM, RLM, LRE, RLE, PDF, LRO, RLO).
const HARD_TERMINATORS: [char; 11] = [
    ' ', '\n', '\t', '\r',
    '\u{200E}', '\u{200F}', '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
];

const SOFT_TERMINATORS: [char; 18] = [
    '.', ',', ':', ';', '?', '!', '\'', '"',
    '«', '»', '‘', '’', '“', '”', '‚', '„', '‹', '›',
];

const PATH_QUERY_FRAGMENT: [char; 3] = ['/', '?', '#'];

/// Class of a single code point, as seen from inside a candidate link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Hard,
    /// `/ ? #` - always safe to include
    PathQueryFragment,
    Soft,
    Open,
    /// Carries the opener it pairs with.
    Close(char),
    Ordinary,
}

pub fn is_hard_terminator(ch: char) -> bool {
    HARD_TERMINATORS.contains(&ch)
}

pub fn is_soft_terminator(ch: char) -> bool {
    SOFT_TERMINATORS.contains(&ch)
}

/// Matching opener for a closing bracket.
pub fn opener_for(ch: char) -> Option<char> {
    match ch {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

pub fn is_opening_bracket(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

/// Classify a code point. `?` is both a query indicator and a soft
/// terminator; the path class is checked first and wins.
pub fn classify(ch: char) -> CharClass {
    if is_hard_terminator(ch) {
        CharClass::Hard
    } else if PATH_QUERY_FRAGMENT.contains(&ch) {
        CharClass::PathQueryFragment
    } else if is_soft_terminator(ch) {
        CharClass::Soft
    } else if let Some(open) = opener_for(ch) {
        CharClass::Close(open)
    } else if is_opening_bracket(ch) {
        CharClass::Open
    } else {
        CharClass::Ordinary
    }
}
