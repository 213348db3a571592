//! Element tree types and utilities module.
//!
//! This module provides access to the element tree, escaping, tag names
//! and the tree access error type.
//!
//! # Examples
//!
//! ```rust
//! use markup::core::element::escape::ESCAPES;
//! use markup::core::tag::VOID_TAGS;
//!
//! assert_eq!(ESCAPES.len(), 5);
//! assert!(VOID_TAGS.contains(&"br"));
//! ```

pub use markup_core::*;
