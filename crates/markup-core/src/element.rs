//! Element tree nodes.
//!
//! This module provides [`Element`], a mutable HTML node that owns its
//! children. Mutators take `&mut self` and return `&mut Self` so calls can be
//! chained; the by-value builders ([`Element::attr`], [`Element::class`],
//! [`Element::text`], [`Element::child`]) cover expression-style construction.
//!
//! ## Composition operators
//!
//! | Operator | Meaning |
//! |----------|---------|
//! | `parent += child` | [`Element::add_child`] |
//! | `parent + child` | [`Element::add_child`], yielding the parent |
//! | `parent <<= child` | [`Element::append_deepest`] |
//! | `parent << child` | [`Element::append_deepest`], yielding the parent |
//! | `parent[i]` | [`Element::child_at`], panicking when out of range |
//! | `parent["id"]` | [`Element::get_by_id`] |
//!
//! ## Example
//!
//! ```
//! use markup_core::Element;
//!
//! let mut list = Element::new("ul");
//! list += Element::new("li").text("one");
//! list += Element::new("li").text("two");
//!
//! assert_eq!(list.render(), "<ul><li>one</li><li>two</li></ul>");
//! assert_eq!(list.child_at(1).unwrap().inner_text(), "two");
//! ```

pub mod escape;
mod render;

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Index, IndexMut, Shl, ShlAssign};

use crate::error::ElementError;
use crate::tag::{Tag, is_void_tag};

pub use escape::escape;

/// Attribute map of an element, rendered in key order.
pub type Attributes = BTreeMap<String, String>;

/// An HTML element and the subtree it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	/// The tag name (e.g., "div", "span"). Fixed at construction.
	tag: String,
	/// Bookkeeping label, never rendered.
	name: Option<String>,
	/// Dedicated id, rendered before every other attribute.
	id: String,
	/// Remaining attributes.
	attrs: Attributes,
	/// Space-joined class tokens.
	classes: String,
	/// Text content, raw or pre-escaped depending on the setter used.
	inner_text: String,
	/// Owned child elements, in insertion order.
	children: Vec<Element>,
	/// Set once the element has been attached to a parent.
	is_child: bool,
	/// Whether this is a void element (no content, no closing tag).
	is_void: bool,
	/// Nesting level below the root; recomputed on every attach.
	depth: usize,
}

impl Default for Element {
	fn default() -> Self {
		Self::new(Tag::Div)
	}
}

impl From<Tag> for Element {
	fn from(tag: Tag) -> Self {
		Self::new(tag)
	}
}

impl Element {
	/// Creates an empty element.
	///
	/// Whether the element is void is decided here, once, from `tag`.
	pub fn new(tag: impl Into<String>) -> Self {
		let tag = tag.into();
		let is_void = is_void_tag(&tag);
		Self {
			tag,
			name: None,
			id: String::new(),
			attrs: Attributes::new(),
			classes: String::new(),
			inner_text: String::new(),
			children: Vec::new(),
			is_child: false,
			is_void,
			depth: 0,
		}
	}

	/// Creates an element with an id.
	pub fn with_id(tag: impl Into<String>, id: impl Into<String>) -> Self {
		let mut el = Self::new(tag);
		el.id = id.into();
		el
	}

	/// Creates an element with an initial set of attributes.
	///
	/// An `"id"` entry is routed to the dedicated id field, as with
	/// [`Element::set_attribute`].
	pub fn with_attributes<K, V>(
		tag: impl Into<String>,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let mut el = Self::new(tag);
		el.set_attributes(attributes);
		el
	}

	/// Creates an element with an id and an initial set of attributes.
	///
	/// An `"id"` entry in `attributes` overrides `id`.
	pub fn with_id_and_attributes<K, V>(
		tag: impl Into<String>,
		id: impl Into<String>,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let mut el = Self::with_id(tag, id);
		el.set_attributes(attributes);
		el
	}

	/// Creates a `<style>` element holding already rendered CSS text.
	///
	/// The text is embedded verbatim.
	pub fn style_sheet(css: impl Into<String>) -> Self {
		let mut el = Self::new(Tag::Style);
		el.inner_text = css.into();
		el
	}

	// Builders

	/// Sets an attribute, consuming and returning the element.
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(key, value);
		self
	}

	/// Adds a class token, consuming and returning the element.
	pub fn class(mut self, token: impl AsRef<str>) -> Self {
		self.add_class(token);
		self
	}

	/// Sets the raw inner text, consuming and returning the element.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.set_inner_text(text);
		self
	}

	/// Adds a child, consuming and returning the element.
	pub fn child(mut self, child: Element) -> Self {
		self.add_child(child);
		self
	}

	// Accessors

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the id, or an empty string when none is set.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the bookkeeping name, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the accumulated class string.
	pub fn classes(&self) -> &str {
		&self.classes
	}

	/// Returns the inner text as stored.
	pub fn inner_text(&self) -> &str {
		&self.inner_text
	}

	/// Returns the attribute map (the id is not part of it).
	pub fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns the children in insertion order.
	pub fn children(&self) -> &[Element] {
		&self.children
	}

	/// Returns the number of immediate children.
	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns whether this element has been attached to a parent.
	pub fn is_child(&self) -> bool {
		self.is_child
	}

	/// Returns the nesting depth recorded when the element was attached.
	pub fn depth(&self) -> usize {
		self.depth
	}

	// Mutators

	/// Sets the id.
	pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
		self.id = id.into();
		self
	}

	/// Sets the bookkeeping name.
	pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = Some(name.into());
		self
	}

	/// Returns an attribute value.
	///
	/// `"id"` reads the dedicated id field and yields `None` when it is empty.
	pub fn attribute(&self, key: &str) -> Option<&str> {
		if key == "id" {
			return (!self.id.is_empty()).then_some(self.id.as_str());
		}
		self.attrs.get(key).map(String::as_str)
	}

	/// Sets an attribute, replacing any previous value.
	///
	/// `"id"` is written to the dedicated id field instead of the map, so the
	/// id is rendered exactly once.
	///
	/// An empty value renders as a bare attribute name (`<input disabled>`).
	pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		let key = key.into();
		if key == "id" {
			self.id = value.into();
		} else {
			self.attrs.insert(key, value.into());
		}
		self
	}

	/// Sets every attribute in `attributes`, replacing existing values.
	pub fn set_attributes<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> &mut Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		for (key, value) in attributes {
			self.set_attribute(key, value);
		}
		self
	}

	/// Appends `" " + value` to each attribute in `attributes`.
	///
	/// Missing keys start out empty, so the first append leaves a leading
	/// space. `"id"` appends to the dedicated id field.
	pub fn append_attributes<K, V>(
		&mut self,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> &mut Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		for (key, value) in attributes {
			let key = key.into();
			let slot = if key == "id" {
				&mut self.id
			} else {
				self.attrs.entry(key).or_default()
			};
			slot.push(' ');
			slot.push_str(&value.into());
		}
		self
	}

	/// Appends a class token.
	pub fn add_class(&mut self, token: impl AsRef<str>) -> &mut Self {
		if !self.classes.is_empty() {
			self.classes.push(' ');
		}
		self.classes.push_str(token.as_ref());
		self
	}

	/// Replaces the inner text with `text`, unescaped.
	pub fn set_inner_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.warn_if_void();
		self.inner_text = text.into();
		self
	}

	/// Replaces the inner text with the escaped form of `text`.
	pub fn set_inner_text_escaped(&mut self, text: &str) -> &mut Self {
		self.warn_if_void();
		self.inner_text = escape(text).into_owned();
		self
	}

	/// Appends `text` to the inner text, unescaped.
	pub fn append_inner_text(&mut self, text: &str) -> &mut Self {
		self.warn_if_void();
		self.inner_text.push_str(text);
		self
	}

	/// Appends the escaped form of `text` to the inner text.
	pub fn append_inner_text_escaped(&mut self, text: &str) -> &mut Self {
		self.warn_if_void();
		self.inner_text.push_str(&escape(text));
		self
	}

	// Children

	/// Moves `child` into this element as its last child.
	///
	/// The child and all of its descendants are marked as attached and their
	/// depths recomputed from this element's depth.
	pub fn add_child(&mut self, mut child: Element) -> &mut Self {
		if self.is_void {
			tracing::debug!(tag = %self.tag, "child added to void element will not render");
		}
		child.attach_at(self.depth + 1);
		self.children.push(child);
		self
	}

	/// Moves `child` into this element as its first child.
	pub fn prepend_child(&mut self, mut child: Element) -> &mut Self {
		child.attach_at(self.depth + 1);
		self.children.insert(0, child);
		self
	}

	/// Moves `child` into this element at `index`, shifting later children.
	///
	/// # Errors
	///
	/// Returns [`ElementError::OutOfRange`] if `index` is greater than the
	/// number of children.
	pub fn insert_child(&mut self, index: usize, mut child: Element) -> Result<&mut Self, ElementError> {
		let len = self.children.len();
		if index > len {
			return Err(ElementError::OutOfRange { index, len });
		}
		child.attach_at(self.depth + 1);
		self.children.insert(index, child);
		Ok(self)
	}

	/// Returns the child at `index`.
	///
	/// # Errors
	///
	/// Returns [`ElementError::OutOfRange`] if there is no such child.
	pub fn child_at(&self, index: usize) -> Result<&Element, ElementError> {
		let len = self.children.len();
		self.children
			.get(index)
			.ok_or(ElementError::OutOfRange { index, len })
	}

	/// Mutable variant of [`Element::child_at`].
	///
	/// # Errors
	///
	/// Returns [`ElementError::OutOfRange`] if there is no such child.
	pub fn child_at_mut(&mut self, index: usize) -> Result<&mut Element, ElementError> {
		let len = self.children.len();
		self.children
			.get_mut(index)
			.ok_or(ElementError::OutOfRange { index, len })
	}

	/// Returns the most recently added child.
	///
	/// # Errors
	///
	/// Returns [`ElementError::NoChildren`] if the element is childless.
	pub fn last_child(&self) -> Result<&Element, ElementError> {
		self.children.last().ok_or(ElementError::NoChildren)
	}

	/// Mutable variant of [`Element::last_child`].
	///
	/// # Errors
	///
	/// Returns [`ElementError::NoChildren`] if the element is childless.
	pub fn last_child_mut(&mut self) -> Result<&mut Element, ElementError> {
		self.children.last_mut().ok_or(ElementError::NoChildren)
	}

	/// Follows last children down to a childless element.
	///
	/// Returns `self` when the element has no children.
	pub fn deepest_last_descendant(&self) -> &Element {
		let mut node = self;
		while let Some(last) = node.children.last() {
			node = last;
		}
		node
	}

	/// Mutable variant of [`Element::deepest_last_descendant`].
	pub fn deepest_last_descendant_mut(&mut self) -> &mut Element {
		let mut node = self;
		while !node.children.is_empty() {
			let last = node.children.len() - 1;
			node = &mut node.children[last];
		}
		node
	}

	/// Adds `child` under the deepest last descendant and returns the new
	/// deepest location.
	///
	/// Repeated calls on the returned reference build a single nested path:
	///
	/// ```
	/// use markup_core::Element;
	///
	/// let mut root = Element::new("div");
	/// root.append_deepest(Element::new("p"))
	/// 	.append_deepest(Element::new("em").text("deep"));
	///
	/// assert_eq!(root.render(), "<div><p><em>deep</em></p></div>");
	/// ```
	pub fn append_deepest(&mut self, child: Element) -> &mut Element {
		self.deepest_last_descendant_mut().add_child(child);
		self.deepest_last_descendant_mut()
	}

	/// Looks up an immediate child by id.
	///
	/// Falls back to `self` when no immediate child carries `id`; compare the
	/// result's id to detect a miss.
	pub fn get_by_id(&self, id: &str) -> &Element {
		match self.children.iter().find(|child| child.id == id) {
			Some(child) => child,
			None => {
				tracing::debug!(id, tag = %self.tag, "id lookup fell back to current element");
				self
			}
		}
	}

	/// Mutable variant of [`Element::get_by_id`].
	pub fn get_by_id_mut(&mut self, id: &str) -> &mut Element {
		match self.children.iter().position(|child| child.id == id) {
			Some(index) => &mut self.children[index],
			None => {
				tracing::debug!(id, tag = %self.tag, "id lookup fell back to current element");
				self
			}
		}
	}

	/// Searches all descendants, depth first, for the first element with `id`.
	///
	/// Falls back to `self` when nothing matches.
	pub fn at(&self, id: &str) -> &Element {
		match self.path_to(id) {
			Some(path) => {
				let mut node = self;
				for index in path {
					node = &node.children[index];
				}
				node
			}
			None => {
				tracing::debug!(id, tag = %self.tag, "descendant lookup fell back to current element");
				self
			}
		}
	}

	/// Mutable variant of [`Element::at`].
	pub fn at_mut(&mut self, id: &str) -> &mut Element {
		let Some(path) = self.path_to(id) else {
			tracing::debug!(id, tag = %self.tag, "descendant lookup fell back to current element");
			return self;
		};
		let mut node = self;
		for index in path {
			node = &mut node.children[index];
		}
		node
	}

	fn path_to(&self, id: &str) -> Option<Vec<usize>> {
		for (index, child) in self.children.iter().enumerate() {
			if child.id == id {
				return Some(vec![index]);
			}
			if let Some(mut path) = child.path_to(id) {
				path.insert(0, index);
				return Some(path);
			}
		}
		None
	}

	fn attach_at(&mut self, depth: usize) {
		self.depth = depth;
		self.is_child = true;
		for child in &mut self.children {
			child.attach_at(depth + 1);
		}
	}

	fn warn_if_void(&self) {
		if self.is_void {
			tracing::debug!(tag = %self.tag, "inner text set on void element will not render");
		}
	}
}

impl AddAssign<Element> for Element {
	fn add_assign(&mut self, child: Element) {
		self.add_child(child);
	}
}

impl Add<Element> for Element {
	type Output = Element;

	fn add(mut self, child: Element) -> Element {
		self.add_child(child);
		self
	}
}

impl ShlAssign<Element> for Element {
	fn shl_assign(&mut self, child: Element) {
		self.append_deepest(child);
	}
}

impl Shl<Element> for Element {
	type Output = Element;

	fn shl(mut self, child: Element) -> Element {
		self.append_deepest(child);
		self
	}
}

impl Index<usize> for Element {
	type Output = Element;

	/// # Panics
	///
	/// Panics if `index` is out of range. Use [`Element::child_at`] to get
	/// an [`ElementError`] instead.
	fn index(&self, index: usize) -> &Element {
		&self.children[index]
	}
}

impl IndexMut<usize> for Element {
	fn index_mut(&mut self, index: usize) -> &mut Element {
		&mut self.children[index]
	}
}

impl Index<&str> for Element {
	type Output = Element;

	fn index(&self, id: &str) -> &Element {
		self.get_by_id(id)
	}
}

impl IndexMut<&str> for Element {
	fn index_mut(&mut self, id: &str) -> &mut Element {
		self.get_by_id_mut(id)
	}
}
