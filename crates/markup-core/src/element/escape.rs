//! Inner-text escaping.
//!
//! Five characters are replaced, in this order:
//!
//! | Character | Replacement |
//! |-----------|-------------|
//! | `&` | `&amp` |
//! | `<` | `&lt` |
//! | `>` | `&gt` |
//! | `"` | `&quot` |
//! | `'` | `&#39` |
//!
//! The replacements carry no trailing semicolon.

use std::borrow::Cow;

/// Characters replaced by [`escape`], with their replacements.
pub const ESCAPES: [(char, &str); 5] = [
	('&', "&amp"),
	('<', "&lt"),
	('>', "&gt"),
	('"', "&quot"),
	('\'', "&#39"),
];

/// Escapes the reserved characters of `s`.
///
/// Each key is exhausted before the next one is scanned, and text produced by
/// a replacement is never scanned again, so a generated `&` is not escaped a
/// second time. A single pass over the characters gives the same result.
///
/// Returns a borrowed reference if no escaping is needed.
pub fn escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match ESCAPES.iter().find(|(key, _)| *key == c) {
			Some((_, replacement)) => escaped.push_str(replacement),
			None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
