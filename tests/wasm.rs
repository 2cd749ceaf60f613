//! Browser-side checks of the JS surface (`wasm-pack test --headless --chrome`)

#![cfg(target_arch = "wasm32")]

use serde::Serialize;
use linkcore::{js_linkify, LinkCortex, LinkScanResult, MatchSpan, Segment};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_linkify_returns_spans() {
    let value = js_linkify("contact me at user@example.com today");
    let spans: Vec<MatchSpan> = serde_wasm_bindgen::from_value(value).unwrap();

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "user@example.com");
}

#[wasm_bindgen_test]
fn test_cortex_default_config() {
    let mut cortex = LinkCortex::js_new(JsValue::UNDEFINED).unwrap();
    let result: LinkScanResult = serde_wasm_bindgen::from_value(cortex.js_scan("Visit example.com.")).unwrap();

    assert_eq!(result.matches[0].text, "http://example.com");
    assert_eq!(cortex.scan_count(), 1);
}

#[wasm_bindgen_test]
fn test_cortex_rejects_bad_config() {
    let config = serde_json::json!({ "detect_urls": false, "detect_emails": false })
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();
    assert!(LinkCortex::js_new(config).is_err());
}

#[wasm_bindgen_test]
fn test_cortex_segments() {
    let mut cortex = LinkCortex::js_new(JsValue::NULL).unwrap();
    let segments: Vec<Segment> = serde_wasm_bindgen::from_value(cortex.js_segments("Mail a@b.co")).unwrap();

    assert_eq!(segments.len(), 2);
    assert!(segments[1].is_link());
}
