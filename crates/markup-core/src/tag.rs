//! Standard HTML tag names.
//!
//! [`Tag`] lists the tag names of the HTML living standard as a reference for
//! callers. It is never enforced: [`Element::new`](crate::Element::new)
//! accepts any string, and unknown or custom tags render exactly as given.

use std::fmt;
use std::str::FromStr;

/// Tags that have no closing tag and no content.
///
/// Elements built with one of these names render only their opening tag.
pub const VOID_TAGS: &[&str] = &[
	"area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
	"meta", "param", "source", "track", "wbr",
];

/// Returns `true` if `tag` names a void element.
///
/// The comparison is exact: `"BR"` is not treated as void.
pub fn is_void_tag(tag: &str) -> bool {
	VOID_TAGS.contains(&tag)
}

/// Error returned when parsing a string that is not a known tag name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag name: '{0}'")]
pub struct UnknownTag(pub String);

macro_rules! tags {
	($($variant:ident => $name:literal),+ $(,)?) => {
		/// A standard HTML tag name.
		#[non_exhaustive]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Tag {
			$(
				#[doc = concat!("`", $name, "`")]
				$variant,
			)+
		}

		impl Tag {
			/// Every known tag, in declaration order.
			pub const ALL: &'static [Tag] = &[$(Tag::$variant),+];

			/// Returns the tag name as written in markup.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Tag::$variant => $name,)+
				}
			}
		}
	};
}

tags! {
	Comment => "!--",
	Doctype => "!DOCTYPE",
	A => "a",
	Abbr => "abbr",
	Address => "address",
	Area => "area",
	Article => "article",
	Aside => "aside",
	Audio => "audio",
	B => "b",
	Base => "base",
	Bdi => "bdi",
	Bdo => "bdo",
	Blockquote => "blockquote",
	Body => "body",
	Br => "br",
	Button => "button",
	Canvas => "canvas",
	Caption => "caption",
	Cite => "cite",
	Code => "code",
	Col => "col",
	Colgroup => "colgroup",
	Data => "data",
	Datalist => "datalist",
	Dd => "dd",
	Del => "del",
	Details => "details",
	Dfn => "dfn",
	Dialog => "dialog",
	Div => "div",
	Dl => "dl",
	Dt => "dt",
	Em => "em",
	Embed => "embed",
	Fieldset => "fieldset",
	Figcaption => "figcaption",
	Figure => "figure",
	Footer => "footer",
	Form => "form",
	H1 => "h1",
	Head => "head",
	Header => "header",
	Hr => "hr",
	Html => "html",
	I => "i",
	Iframe => "iframe",
	Img => "img",
	Input => "input",
	Ins => "ins",
	Kbd => "kbd",
	Keygen => "keygen",
	Label => "label",
	Legend => "legend",
	Li => "li",
	Link => "link",
	Main => "main",
	Map => "map",
	Mark => "mark",
	Menu => "menu",
	Menuitem => "menuitem",
	Meta => "meta",
	Meter => "meter",
	Nav => "nav",
	Noscript => "noscript",
	Object => "object",
	Ol => "ol",
	Optgroup => "optgroup",
	Option => "option",
	Output => "output",
	P => "p",
	Param => "param",
	Picture => "picture",
	Pre => "pre",
	Progress => "progress",
	Q => "q",
	Rp => "rp",
	Rt => "rt",
	Ruby => "ruby",
	S => "s",
	Samp => "samp",
	Script => "script",
	Section => "section",
	Select => "select",
	Small => "small",
	Source => "source",
	Span => "span",
	Strong => "strong",
	Style => "style",
	Sub => "sub",
	Summary => "summary",
	Sup => "sup",
	Table => "table",
	Tbody => "tbody",
	Td => "td",
	Textarea => "textarea",
	Tfoot => "tfoot",
	Th => "th",
	Thead => "thead",
	Time => "time",
	Title => "title",
	Tr => "tr",
	Track => "track",
	U => "u",
	Ul => "ul",
	Var => "var",
	Video => "video",
	Wbr => "wbr",
}

impl Tag {
	/// Returns `true` if this tag is a void element.
	pub fn is_void(self) -> bool {
		is_void_tag(self.as_str())
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Tag {
	type Err = UnknownTag;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Tag::ALL
			.iter()
			.copied()
			.find(|tag| tag.as_str() == s)
			.ok_or_else(|| UnknownTag(s.to_string()))
	}
}

impl From<Tag> for String {
	fn from(tag: Tag) -> Self {
		tag.as_str().to_string()
	}
}
