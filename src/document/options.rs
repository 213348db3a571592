//! Document options.
//!
//! Supports TOML configuration files and builder-style overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options applied to the root element when a [`Document`](super::Document)
/// is rendered.
///
/// # Example
///
/// ```rust
/// use markup::DocumentOptions;
///
/// let options = DocumentOptions::from_toml(
/// 	r#"
/// 	lang = "en"
/// 	charset = "utf-8"
/// 	"#,
/// )
/// .unwrap();
///
/// assert!(options.doctype);
/// assert_eq!(options.lang.as_deref(), Some("en"));
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
	/// Prepend `<!DOCTYPE html>` to the output.
	pub doctype: bool,
	/// Value for the root element's `lang` attribute.
	pub lang: Option<String>,
	/// Character set declared by a `<meta charset>` in the head.
	pub charset: Option<String>,
	/// Text of the head's `<title>`, escaped on insertion.
	pub title: Option<String>,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			doctype: true,
			lang: None,
			charset: None,
			title: None,
		}
	}
}

impl DocumentOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = Some(lang.into());
		self
	}

	/// Sets the character set.
	pub fn charset(mut self, charset: impl Into<String>) -> Self {
		self.charset = Some(charset.into());
		self
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Disables the doctype prefix.
	pub fn no_doctype(mut self) -> Self {
		self.doctype = false;
		self
	}

	/// Load options from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		Self::from_toml(&content)
	}

	/// Parse options from a TOML string.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Parse`] if the string is not valid TOML or does
	/// not match the option fields.
	pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
		toml::from_str(content).map_err(|e| ConfigError::Parse {
			message: e.to_string(),
		})
	}
}

/// Errors raised while loading [`DocumentOptions`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The options file could not be read.
	#[error("failed to read {path}: {source}")]
	Io {
		/// File that was being read
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// The options could not be parsed.
	#[error("failed to parse document options: {message}")]
	Parse {
		/// Parser message
		message: String,
	},
}
