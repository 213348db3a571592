//! String serialization of element trees.

use std::fmt;

use super::Element;

/// Most rendered elements fit without reallocating.
const TYPICAL_ELEMENT_LEN: usize = 64;

impl Element {
	/// Renders the element and its descendants to an HTML string.
	///
	/// Output is a single line: no whitespace is inserted between tags at any
	/// depth. Attributes follow the id and class, in key order; an attribute
	/// with an empty value renders as a bare name. Void elements render their
	/// opening tag only, ignoring any inner text or children. Inner text is
	/// emitted as stored and precedes the children.
	pub fn render(&self) -> String {
		let mut output = String::with_capacity(TYPICAL_ELEMENT_LEN);
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);

		if !self.id.is_empty() {
			push_attr(output, "id", &self.id);
		}

		if !self.classes.is_empty() {
			push_attr(output, "class", &self.classes);
		}

		for (name, value) in &self.attrs {
			push_attr(output, name, value);
		}

		output.push('>');

		if self.is_void {
			return;
		}

		output.push_str(&self.inner_text);

		for child in &self.children {
			child.render_into(output);
		}

		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

fn push_attr(output: &mut String, name: &str, value: &str) {
	output.push(' ');
	output.push_str(name);
	if !value.is_empty() {
		output.push_str("=\"");
		output.push_str(value);
		output.push('"');
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
