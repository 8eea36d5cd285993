//! Integration tests for the bundled regression fixtures.
//!
//! These exercise the same path as `quokka check`: deserialize a laid-out
//! page from JSON, render it, and hold it against its expected pattern.

use quokka_paint::{BoxNode, SamplingImagePainter, SolidFragmentPainter, render_page};
use quokka_pattern::{PixelPattern, assert_pixels};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    #[serde(default)]
    hinting: Option<bool>,
    page: BoxNode,
    #[serde(default)]
    expected: Option<String>,
}

fn load(name: &str) -> Fixture {
    let path = format!("{}/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(&path).expect("fixture file should be readable");
    serde_json::from_str(&text).expect("fixture should deserialize")
}

#[test]
fn test_minimal_fixture_matches_its_pattern() {
    let fixture = load("minimal.json");
    assert_eq!(fixture.name, "minimal");

    let pixels = render_page(
        fixture.page,
        fixture.hinting.unwrap_or(true),
        &SolidFragmentPainter,
        &SamplingImagePainter,
    )
    .expect("render should succeed");

    let expected = fixture.expected.expect("fixture should carry a pattern");
    let pattern = PixelPattern::parse(&expected).expect("pattern should parse");
    assert_eq!(assert_pixels(&fixture.name, &pattern, &pixels), Ok(()));
}

#[test]
fn test_tampered_pixels_fail_the_check() {
    let fixture = load("minimal.json");
    let pixels = render_page(
        fixture.page,
        true,
        &SolidFragmentPainter,
        &SamplingImagePainter,
    )
    .expect("render should succeed");

    // A pattern of the right size but the wrong content must fail with
    // a located first mismatch, never pass silently.
    let blank = PixelPattern::parse(
        "
        _________
        _________
        _________
        _________
        _________
        _________
        _________
        ",
    )
    .expect("pattern should parse");
    let error = assert_pixels("tampered", &blank, &pixels)
        .expect_err("differing pixels must fail");
    assert!(matches!(
        error,
        quokka_pattern::CompareError::PixelMismatch { x: 1, y: 1, .. }
    ));
}
