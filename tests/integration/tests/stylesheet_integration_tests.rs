//! Stylesheet Integration Tests
//!
//! Rendered rule sets and media groups embedded into element trees.

#![cfg(feature = "css")]

use markup::prelude::*;
use rstest::rstest;

// ============================================================================
// Stylesheets
// ============================================================================

#[rstest]
fn test_embedded_stylesheet() {
	let mut css = RuleSet::new();
	css.add("#content", [("border", "1px solid #000")]);

	let mut media = MediaGroup::new();
	media.add(
		"max-width:600px",
		RuleSet::new().rule("#content", [("border", "none")]),
	);

	let mut style = css.render().to_string();
	style.push_str(media.render());

	let head = Element::new("head").child(Element::style_sheet(style));
	assert_eq!(
		head.render(),
		"<head><style>#content{border:1px solid #000;}\
		 @media(max-width:600px){#content{border:none;}}</style></head>"
	);
}


#[rstest]
fn test_stylesheet_rerenders_after_mutation() {
	let mut css = RuleSet::new().rule("p", [("margin", "0")]);
	let before = Element::style_sheet(css.render());

	css.add("h1", [("font-size", "2em")]);
	let after = Element::style_sheet(css.render());

	assert_eq!(before.render(), "<style>p{margin:0;}</style>");
	assert_eq!(after.render(), "<style>h1{font-size:2em;}p{margin:0;}</style>");
}
