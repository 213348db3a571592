//! # Markup Core
//!
//! The element tree model behind markup-web.
//!
//! An [`Element`] owns its children outright: inserting a node moves it into
//! the parent, so a finished tree never aliases nodes held elsewhere. Trees
//! are built by chained mutation and rendered once, at the end, into a single
//! unbroken line of HTML.
//!
//! ## Example
//!
//! ```
//! use markup_core::Element;
//!
//! let html = Element::new("html")
//! 	.attr("lang", "en")
//! 	.child(Element::new("head").child(Element::new("title").text("Example")))
//! 	.child(Element::new("body"));
//!
//! assert_eq!(
//! 	html.render(),
//! 	"<html lang=\"en\"><head><title>Example</title></head><body></body></html>"
//! );
//! ```

pub mod element;
pub mod error;
pub mod tag;

pub use element::{Attributes, Element, escape};
pub use error::ElementError;
pub use tag::{Tag, UnknownTag, VOID_TAGS, is_void_tag};
