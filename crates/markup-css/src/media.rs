//! `@media` blocks.

use std::cell::OnceCell;
use std::fmt;

use crate::rule_set::RuleSet;

/// Rule sets guarded by media-query conditions.
///
/// Entries render in insertion order. Conditions are not unique: adding a
/// second rule set under an existing condition produces a second block.
#[derive(Debug, Clone, Default)]
pub struct MediaGroup {
	groups: Vec<(String, RuleSet)>,
	rendered: OnceCell<String>,
}

impl MediaGroup {
	/// Creates an empty media group.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `rules` under `condition` as a new block.
	pub fn add(&mut self, condition: impl Into<String>, rules: RuleSet) -> &mut Self {
		self.groups.push((condition.into(), rules));
		self.rendered.take();
		self
	}

	/// Builder form of [`MediaGroup::add`].
	pub fn query(mut self, condition: impl Into<String>, rules: RuleSet) -> Self {
		self.add(condition, rules);
		self
	}

	/// Iterates over the rule sets stored under `condition`.
	pub fn get<'a>(&'a self, condition: &'a str) -> impl Iterator<Item = &'a RuleSet> + 'a {
		self.groups
			.iter()
			.filter(move |(key, _)| key == condition)
			.map(|(_, rules)| rules)
	}

	/// Returns the number of blocks.
	pub fn len(&self) -> usize {
		self.groups.len()
	}

	/// Returns `true` if no blocks have been added.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Returns `true` if the next render will rebuild the output.
	pub fn is_dirty(&self) -> bool {
		self.rendered.get().is_none()
	}

	/// Renders every block as `@media(<condition>){<rules>}`.
	pub fn render(&self) -> &str {
		self.rendered.get_or_init(|| {
			tracing::trace!(blocks = self.groups.len(), "rebuilding media group output");
			let mut output = String::new();
			for (condition, rules) in &self.groups {
				output.push_str("@media(");
				output.push_str(condition);
				output.push_str("){");
				output.push_str(rules.render());
				output.push('}');
			}
			output
		})
	}
}

impl fmt::Display for MediaGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.render())
	}
}
