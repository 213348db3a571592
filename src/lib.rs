//! # Markup
//!
//! A fluent builder for HTML element trees and CSS rule sets that renders to
//! markup strings.
//!
//! Trees are assembled by chained mutation and rendered once, at the end, to a
//! single unbroken line. Nothing is validated: unknown tags, odd attribute
//! names and malformed selectors render exactly as given.
//!
//! ## Feature Flags
//!
//! - `minimal` - The element tree only
//! - `css` - [`RuleSet`] and [`MediaGroup`]
//! - `document` - [`Document`] and its TOML-loadable [`DocumentOptions`]
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```rust
//! use markup::prelude::*;
//!
//! let mut html = Element::new("html").attr("lang", "en");
//! html += Element::new("head").child(Element::new("title").text("Example"));
//! html += Element::new("body");
//!
//! html[1] += Element::with_id("div", "content").child(Element::new("h1").text("Hello"));
//!
//! assert_eq!(
//! 	html.render(),
//! 	"<html lang=\"en\"><head><title>Example</title></head>\
//! 	 <body><div id=\"content\"><h1>Hello</h1></div></body></html>"
//! );
//! ```

pub mod core;
#[cfg(feature = "css")]
pub mod css;
#[cfg(feature = "document")]
pub mod document;

// Re-export core types
pub use markup_core::{Attributes, Element, ElementError, Tag, UnknownTag, escape, is_void_tag};

// Re-export stylesheet types
#[cfg(feature = "css")]
pub use markup_css::{Declaration, MediaGroup, RuleSet};

// Re-export document types
#[cfg(feature = "document")]
pub use document::{ConfigError, Document, DocumentOptions};

/// Prelude module for convenient imports.
pub mod prelude {
	// Core types - always available
	pub use crate::{Element, ElementError, Tag};

	#[cfg(feature = "css")]
	pub use crate::{MediaGroup, RuleSet};

	#[cfg(feature = "document")]
	pub use crate::{Document, DocumentOptions};
}
