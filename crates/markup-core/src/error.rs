//! Error types for element tree access.

/// Errors raised when navigating an element's children.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
	/// A positional child access went past the end of the child list.
	#[error("child index {index} out of range for element with {len} children")]
	OutOfRange {
		/// Requested position
		index: usize,
		/// Number of children present
		len: usize,
	},

	/// The element has no children to return.
	#[error("element has no children")]
	NoChildren,
}
