//! Element Tree Integration Tests
//!
//! Builds complete pages through the public facade and checks the rendered
//! markup end to end.
//!
//! Test Categories:
//! 1. Document Structure - html/head/body assembly
//! 2. Composition - operators and chained mutation
//! 3. Lookup - positional and id-based access
//! 4. Tag Reference - the `Tag` enum is never enforced

use markup::prelude::*;
use markup_integration_tests::{SAMPLE_HEAD_HTML, sample_head};
use rstest::{fixture, rstest};

// ============================================================================
// Fixtures
// ============================================================================

/// The head used by every page in this suite.
#[fixture]
fn head() -> Element {
	sample_head()
}

// ============================================================================
// Document Structure
// ============================================================================

#[rstest]
fn test_end_to_end_page() {
	let mut html = Element::with_attributes("html", [("lang", "en")]);
	html.add_child(Element::new("head").child(Element::new("title").text("Example")))
		.add_child(Element::new("body"));

	let content = Element::with_id("div", "content").child(Element::new("h1").text("Hello"));
	html[1].add_child(content);

	assert_eq!(
		html.render(),
		"<html lang=\"en\"><head><title>Example</title></head><body><div id=\"content\"><h1>Hello</h1></div></body></html>"
	);
}

#[rstest]
fn test_page_with_void_metadata(head: Element) {
	let html = Element::new("html")
		.attr("lang", "en")
		.child(head)
		.child(Element::new("body"));

	assert_eq!(
		html.render(),
		format!("<html lang=\"en\">{SAMPLE_HEAD_HTML}<body></body></html>")
	);
}

// ============================================================================
// Composition
// ============================================================================

#[rstest]
fn test_operators_match_add_child() {
	let mut by_method = Element::new("ul");
	by_method
		.add_child(Element::new("li").text("a"))
		.add_child(Element::new("li").text("b"));

	let mut by_assign = Element::new("ul");
	by_assign += Element::new("li").text("a");
	by_assign += Element::new("li").text("b");

	let by_add = Element::new("ul") + Element::new("li").text("a") + Element::new("li").text("b");

	assert_eq!(by_method, by_assign);
	assert_eq!(by_method.render(), by_add.render());
}

#[rstest]
fn test_descend_and_append_builds_single_path() {
	let page = Element::new("html")
		<< Element::new("body")
		<< Element::with_id("div", "content")
		<< Element::new("h1").text("Hello");

	assert_eq!(
		page.render(),
		"<html><body><div id=\"content\"><h1>Hello</h1></div></body></html>"
	);
	assert_eq!(page.deepest_last_descendant().depth(), 3);
}

#[rstest]
fn test_child_is_copied_on_insert() {
	let mut section = Element::new("section");
	section.add_class("intro");

	let page = Element::new("main").child(section.clone());
	section.add_class("changed");

	assert_eq!(page[0].classes(), "intro");
	assert_eq!(section.classes(), "intro changed");
}

#[rstest]
fn test_classes_and_boolean_attributes() {
	let mut input = Element::new("input");
	input
		.add_class("field")
		.add_class("wide")
		.set_attribute("type", "text")
		.set_attribute("required", "");

	assert_eq!(
		input.render(),
		"<input class=\"field wide\" required type=\"text\">"
	);
}

// ============================================================================
// Lookup
// ============================================================================

#[rstest]
fn test_positional_lookup_out_of_range() {
	let mut node = Element::new("div");
	node.add_child(Element::new("a")).add_child(Element::new("b"));

	assert_eq!(node.child_at(0).unwrap().tag(), "a");
	assert_eq!(node.child_at(1).unwrap().tag(), "b");
	assert!(matches!(
		node.child_at(2),
		Err(ElementError::OutOfRange { index: 2, len: 2 })
	));
}

#[rstest]
fn test_id_lookup_miss_returns_same_node(head: Element) {
	let html = Element::new("html").child(head);
	assert!(std::ptr::eq(&html["nowhere"], &html));
	assert!(std::ptr::eq(html.at("nowhere"), &html));
}

#[rstest]
fn test_id_lookup_then_mutate() {
	let mut html = Element::new("html")
		.child(Element::new("body").child(Element::with_id("div", "content")));

	// only the recursive search reaches grandchildren
	html["content"].add_class("missed");
	html.at_mut("content").set_inner_text_escaped("<Hi>");

	assert_eq!(html.classes(), "missed");
	assert_eq!(
		html.render(),
		"<html class=\"missed\"><body><div id=\"content\">&ltHi&gt</div></body></html>"
	);
}

#[rstest]
fn test_last_child_on_empty_node() {
	assert!(matches!(
		Element::new("p").last_child(),
		Err(ElementError::NoChildren)
	));
}

// ============================================================================
// Tag Reference
// ============================================================================

#[rstest]
fn test_tag_enum_is_reference_only() {
	let custom = Element::new("my-widget");
	assert_eq!(custom.render(), "<my-widget></my-widget>");
	assert!("my-widget".parse::<Tag>().is_err());
	assert_eq!(Element::from(Tag::Hr).render(), "<hr>");
}
