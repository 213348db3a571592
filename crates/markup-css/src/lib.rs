//! # Markup CSS
//!
//! Stylesheet builders for markup-web.
//!
//! [`RuleSet`] maps selectors to ordered declarations; [`MediaGroup`] wraps
//! rule sets in `@media` blocks. Both render to a single line and cache the
//! result until the next mutation. Declarations are emitted in the order they
//! were given: no cascade or specificity is resolved.
//!
//! ## Example
//!
//! ```
//! use markup_css::{MediaGroup, RuleSet};
//!
//! let mut base = RuleSet::new();
//! base.add("#content", [("border", "1px solid #000")]);
//! assert_eq!(base.render(), "#content{border:1px solid #000;}");
//!
//! let mut narrow = RuleSet::new();
//! narrow.add("#content", [("border", "none")]);
//! let mut media = MediaGroup::new();
//! media.add("max-width:600px", narrow);
//! assert_eq!(media.render(), "@media(max-width:600px){#content{border:none;}}");
//! ```

mod media;
mod rule_set;

pub use media::MediaGroup;
pub use rule_set::{Declaration, RuleSet};
