//! Document Integration Tests
//!
//! Renders whole documents through the facade with options built in code
//! and loaded from TOML.
//!
//! Test Categories:
//! 1. Options - doctype, lang, charset and title applied at render time
//! 2. Configuration - options read from TOML text

#![cfg(feature = "document")]

use markup::prelude::*;
use markup_integration_tests::{SAMPLE_HEAD_HTML, sample_head};
use rstest::{fixture, rstest};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn page() -> Element {
	Element::new("html")
		.child(sample_head())
		.child(Element::new("body"))
}

// ============================================================================
// Options
// ============================================================================

#[rstest]
fn test_document_wraps_tree(page: Element) {
	let doc = Document::with_options(page, DocumentOptions::new().lang("en"));

	let rendered = doc.render();
	assert_eq!(
		rendered,
		format!("<!DOCTYPE html><html lang=\"en\">{SAMPLE_HEAD_HTML}<body></body></html>")
	);
	assert!(!rendered.contains('\n'));
}

#[rstest]
fn test_title_option_replaces_existing_title(page: Element) {
	let doc = Document::with_options(page, DocumentOptions::new().title("Home").no_doctype());

	let rendered = doc.render();
	assert!(rendered.starts_with("<html><head><title>Home</title><meta charset=\"utf-8\">"));
	assert_eq!(rendered.matches("<title>").count(), 1);
}

// ============================================================================
// Configuration
// ============================================================================

#[rstest]
fn test_options_from_toml() {
	let options = DocumentOptions::from_toml(
		r#"
doctype = false
lang = "fr"
charset = "utf-8"
"#,
	)
	.unwrap();

	let root = Element::new("html").child(Element::new("body"));
	let doc = Document::with_options(root, options);
	assert_eq!(
		doc.render(),
		"<html lang=\"fr\"><head><meta charset=\"utf-8\"></head><body></body></html>"
	);
}
