//! Segmenter: splits text into alternating plain-text and link pieces.
//!
//! No markup is produced. Callers turn `Link` segments into anchors however
//! they render.

use serde::{Deserialize, Serialize};

use super::linkifier::{char_offsets, LinkKind, MatchSpan};

/// One piece of the input. Offsets are code points.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text {
        start: usize,
        end: usize,
        text: String,
    },
    Link {
        start: usize,
        end: usize,
        kind: LinkKind,
        /// Resolved link text (with `http://` for schemeless URLs)
        text: String,
        href: String,
    },
}

impl Segment {
    pub fn start(&self) -> usize {
        match self {
            Segment::Text { start, .. } | Segment::Link { start, .. } => *start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Segment::Text { end, .. } | Segment::Link { end, .. } => *end,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }
}

/// Interleave `spans` with the gaps between them.
///
/// `spans` must be sorted and non-overlapping, as `Linkifier::scan` returns them.
/// Spans reaching past the end of `text` are clamped.
pub fn build_segments(text: &str, spans: &[MatchSpan]) -> Vec<Segment> {
    let offsets = char_offsets(text);
    let n = offsets.len() - 1;
    let slice = |start: usize, end: usize| text[offsets[start]..offsets[end]].to_string();

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;

    for span in spans {
        let start = span.start.min(n);
        let end = span.end.min(n);
        if start < last || start >= end {
            continue;
        }

        if last < start {
            segments.push(Segment::Text { start: last, end: start, text: slice(last, start) });
        }

        segments.push(Segment::Link {
            start,
            end,
            kind: span.kind,
            text: span.text.clone(),
            href: span.href(),
        });
        last = end;
    }

    if last < n {
        segments.push(Segment::Text { start: last, end: n, text: slice(last, n) });
    }

    segments
}
