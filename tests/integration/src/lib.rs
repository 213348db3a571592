//! Integration test utilities for markup-web
//!
//! Shared page fragments used by the integration suites under
//! `integration/tests/`.

use markup::Element;

/// A `<head>` with a title and two `<meta>` elements.
pub fn sample_head() -> Element {
	Element::new("head")
		.child(Element::new("title").text("example"))
		.child(Element::with_attributes("meta", [("charset", "utf-8")]))
		.child(Element::with_attributes(
			"meta",
			[("name", "description"), ("content", "example doc")],
		))
}

/// The rendered form of [`sample_head`].
pub const SAMPLE_HEAD_HTML: &str = "<head><title>example</title><meta charset=\"utf-8\">\
	<meta content=\"example doc\" name=\"description\"></head>";
