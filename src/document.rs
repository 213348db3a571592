//! Full HTML documents.
//!
//! A [`Document`] wraps a root element and applies [`DocumentOptions`] when
//! rendered: the doctype prefix, the root `lang` attribute, and the head's
//! charset and title. Options are applied to a copy, so the wrapped tree is
//! never modified by rendering.

mod options;

pub use options::{ConfigError, DocumentOptions};

use markup_core::{Element, Tag};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// A root element together with document-level options.
///
/// # Example
///
/// ```rust
/// use markup::{Document, DocumentOptions, Element};
///
/// let root = Element::new("html").child(Element::new("body"));
/// let doc = Document::with_options(root, DocumentOptions::new().lang("en").title("Home"));
///
/// assert_eq!(
/// 	doc.render(),
/// 	"<!DOCTYPE html><html lang=\"en\"><head><title>Home</title></head><body></body></html>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Document {
	root: Element,
	options: DocumentOptions,
}

impl Document {
	/// Creates a document with default options.
	pub fn new(root: Element) -> Self {
		Self::with_options(root, DocumentOptions::default())
	}

	/// Creates a document with the given options.
	pub fn with_options(root: Element, options: DocumentOptions) -> Self {
		Self { root, options }
	}

	/// Returns the root element.
	pub fn root(&self) -> &Element {
		&self.root
	}

	/// Returns the root element for further building.
	pub fn root_mut(&mut self) -> &mut Element {
		&mut self.root
	}

	/// Returns the options.
	pub fn options(&self) -> &DocumentOptions {
		&self.options
	}

	/// Consumes the document and returns the root element.
	pub fn into_root(self) -> Element {
		self.root
	}

	/// Renders the document.
	pub fn render(&self) -> String {
		let root = self.prepared_root();
		if self.options.doctype {
			let mut output = String::from(DOCTYPE);
			output.push_str(&root.render());
			output
		} else {
			root.render()
		}
	}

	fn prepared_root(&self) -> Element {
		let mut root = self.root.clone();

		if let Some(lang) = &self.options.lang {
			root.set_attribute("lang", lang.as_str());
		}

		if self.options.charset.is_none() && self.options.title.is_none() {
			return root;
		}

		let head = head_of(&mut root);

		if let Some(charset) = &self.options.charset {
			head.prepend_child(Element::new(Tag::Meta).attr("charset", charset.as_str()));
		}

		if let Some(title) = &self.options.title {
			match head.children().iter().position(|c| c.tag() == Tag::Title.as_str()) {
				Some(index) => {
					head[index].set_inner_text_escaped(title);
				}
				None => {
					let mut node = Element::new(Tag::Title);
					node.set_inner_text_escaped(title);
					head.add_child(node);
				}
			}
		}

		root
	}
}

impl From<Element> for Document {
	fn from(root: Element) -> Self {
		Self::new(root)
	}
}

/// Returns the root's `head` child, inserting one first if needed.
fn head_of(root: &mut Element) -> &mut Element {
	let index = match root.children().iter().position(|c| c.tag() == Tag::Head.as_str()) {
		Some(index) => index,
		None => {
			tracing::debug!("document root has no head, inserting one");
			root.prepend_child(Element::new(Tag::Head));
			0
		}
	};
	&mut root[index]
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn page() -> Element {
		Element::new("html")
			.child(Element::new("head").child(Element::new("title").text("Old")))
			.child(Element::new("body"))
	}

	#[rstest]
	fn test_default_prepends_doctype(page: Element) {
		let doc = Document::new(page.clone());
		assert_eq!(doc.render(), format!("<!DOCTYPE html>{}", page.render()));
	}

	#[rstest]
	fn test_no_doctype(page: Element) {
		let doc = Document::with_options(page.clone(), DocumentOptions::new().no_doctype());
		assert_eq!(doc.render(), page.render());
	}

	#[rstest]
	fn test_lang_sets_root_attribute(page: Element) {
		let doc = Document::with_options(page, DocumentOptions::new().lang("de").no_doctype());
		assert!(doc.render().starts_with("<html lang=\"de\">"));
	}

	#[rstest]
	fn test_title_replaces_existing(page: Element) {
		let doc = Document::with_options(page, DocumentOptions::new().title("A & B").no_doctype());
		assert_eq!(
			doc.render(),
			"<html><head><title>A &amp B</title></head><body></body></html>"
		);
	}

	#[rstest]
	fn test_charset_goes_first_in_head(page: Element) {
		let doc = Document::with_options(page, DocumentOptions::new().charset("utf-8").no_doctype());
		assert_eq!(
			doc.render(),
			"<html><head><meta charset=\"utf-8\"><title>Old</title></head><body></body></html>"
		);
	}

	#[rstest]
	fn test_missing_head_is_inserted() {
		let root = Element::new("html").child(Element::new("body"));
		let doc = Document::with_options(root, DocumentOptions::new().charset("utf-8").no_doctype());
		assert_eq!(
			doc.render(),
			"<html><head><meta charset=\"utf-8\"></head><body></body></html>"
		);
	}

	#[rstest]
	fn test_render_leaves_root_untouched(page: Element) {
		let doc = Document::with_options(page.clone(), DocumentOptions::new().lang("en").title("New"));
		let _ = doc.render();
		assert_eq!(doc.root(), &page);
	}

	#[rstest]
	fn test_root_mut_and_into_root(page: Element) {
		let mut doc = Document::from(page);
		doc.root_mut()[1].add_child(Element::new("main"));
		assert_eq!(doc.into_root()[1][0].tag(), "main");
	}
}
