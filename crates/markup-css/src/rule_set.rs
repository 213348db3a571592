//! Selector to declaration mappings.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::fmt;

/// A single `property:value` pair.
pub type Declaration = (String, String);

/// CSS rules keyed by selector.
///
/// Selectors render in key order. Each selector keeps its declarations in
/// the order given, and a property may appear more than once.
///
/// The rendered string is cached; any mutation drops the cache and the next
/// [`RuleSet::render`] rebuilds it.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
	rules: BTreeMap<String, Vec<Declaration>>,
	rendered: OnceCell<String>,
}

impl RuleSet {
	/// Creates an empty rule set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the declaration block for `selector`, replacing any previous one.
	pub fn add<K, V>(
		&mut self,
		selector: impl Into<String>,
		declarations: impl IntoIterator<Item = (K, V)>,
	) -> &mut Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let declarations = declarations
			.into_iter()
			.map(|(property, value)| (property.into(), value.into()))
			.collect();
		self.rules.insert(selector.into(), declarations);
		self.rendered.take();
		self
	}

	/// Builder form of [`RuleSet::add`].
	pub fn rule<K, V>(
		mut self,
		selector: impl Into<String>,
		declarations: impl IntoIterator<Item = (K, V)>,
	) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		self.add(selector, declarations);
		self
	}

	/// Returns the declarations for `selector`.
	pub fn declarations(&self, selector: &str) -> Option<&[Declaration]> {
		self.rules.get(selector).map(Vec::as_slice)
	}

	/// Iterates over the selectors in render order.
	pub fn selectors(&self) -> impl Iterator<Item = &str> {
		self.rules.keys().map(String::as_str)
	}

	/// Returns the number of selectors.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Returns `true` if no rules have been added.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Returns `true` if the next render will rebuild the output.
	pub fn is_dirty(&self) -> bool {
		self.rendered.get().is_none()
	}

	/// Renders the rules as `selector{property:value;...}` blocks.
	pub fn render(&self) -> &str {
		self.rendered.get_or_init(|| {
			tracing::trace!(selectors = self.rules.len(), "rebuilding rule set output");
			let mut output = String::new();
			for (selector, declarations) in &self.rules {
				output.push_str(selector);
				output.push('{');
				for (property, value) in declarations {
					output.push_str(property);
					output.push(':');
					output.push_str(value);
					output.push(';');
				}
				output.push('}');
			}
			output
		})
	}
}

impl fmt::Display for RuleSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.render())
	}
}
