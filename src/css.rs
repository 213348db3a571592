//! Stylesheet builders module.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "css")]
//! use markup::css::RuleSet;
//! ```

#[cfg(feature = "css")]
pub use markup_css::*;
