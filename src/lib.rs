//! LinkCore: URL + Email Linkification Scanner
//!
//! A Rust/WASM implementation of the KittClouds link finder.
//!
//! # Architecture
//!
//! ## Linkify Components
//! - `linkifier.rs` - Linkifier: single-pass URL/email scanner (code-point spans)
//! - `charset.rs` - Hard/soft terminators, brackets, scheme prefixes
//! - `segment.rs` - Segmenter: plain-text / link pieces with `mailto:` targets
//! - `config.rs` - LinkifyConfig: detectors and input cap
//! - `cortex.rs` - LinkCortex: WASM facade with stats and timings
//!
//! # Usage (Rust)
//! ```rust
//! let spans = linkcore::scan("contact me at user@example.com or visit example.org.");
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[1].text, "http://example.org");
//! ```
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { LinkCortex } from 'linkcore';
//!
//! await init();
//!
//! const cortex = new LinkCortex({ max_chars: 100000 });
//! const result = cortex.scan("See (https://example.com/a(b)c) now");
//!
//! console.log(result.matches); // [{ start: 5, end: 30, kind: 'url', text: 'https://example.com/a(b)c' }]
//! console.log(result.stats);   // counts + timing
//!
//! const segments = cortex.segments("Mail user@example.com");
//! // [{ type: 'text', ... }, { type: 'link', href: 'mailto:user@example.com', ... }]
//! ```

pub mod linkify;

pub use linkify::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("linkcore v{}", env!("CARGO_PKG_VERSION"))
}
