//! Minimal view tree rendered by route components.
//!
//! Routes only need an opaque, renderable value; the bootstrap writes the
//! rendered HTML into the mount point. All text and attribute values are
//! escaped on output.

use std::borrow::Cow;
use std::fmt::{self, Write};

type Text = Cow<'static, str>;

/// Elements rendered without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
];

/// A renderable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// An element with attributes and children.
	Element(ElementView),
	/// Escaped text.
	Text(Text),
	/// Sibling views without a wrapper.
	Fragment(Vec<View>),
	/// Nothing.
	Empty,
}

/// Element node, built with chained [`attr`](ElementView::attr) and
/// [`child`](ElementView::child) calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: Text,
	attrs: Vec<(Text, Text)>,
	children: Vec<View>,
}

impl ElementView {
	/// Starts an element with the given tag.
	pub fn new(tag: impl Into<Text>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute.
	pub fn attr(mut self, name: impl Into<Text>, value: impl Into<Text>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Appends a child.
	pub fn child(mut self, child: impl Into<View>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Returns the tag.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the value of the first attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find_map(|(n, v)| (n == name).then_some(v.as_ref()))
	}

	fn is_void(&self) -> bool {
		VOID_ELEMENTS.contains(&self.tag.as_ref())
	}
}

impl View {
	/// Starts an element.
	pub fn element(tag: impl Into<Text>) -> ElementView {
		ElementView::new(tag)
	}

	/// Text node.
	pub fn text(content: impl Into<Text>) -> Self {
		Self::Text(content.into())
	}

	/// Groups views without a wrapper element.
	pub fn fragment(children: impl IntoIterator<Item = View>) -> Self {
		Self::Fragment(children.into_iter().collect())
	}

	/// Renders the view as HTML.
	pub fn render_to_string(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			View::Element(el) => {
				write!(f, "<{}", el.tag)?;
				for (name, value) in &el.attrs {
					write!(f, " {}=\"", name)?;
					write_escaped(f, value)?;
					f.write_char('"')?;
				}
				if el.is_void() {
					return f.write_str(" />");
				}
				f.write_char('>')?;
				for child in &el.children {
					fmt::Display::fmt(child, f)?;
				}
				write!(f, "</{}>", el.tag)
			}
			View::Text(text) => write_escaped(f, text),
			View::Fragment(children) => children.iter().try_for_each(|child| fmt::Display::fmt(child, f)),
			View::Empty => Ok(()),
		}
	}
}

impl From<ElementView> for View {
	fn from(el: ElementView) -> Self {
		View::Element(el)
	}
}

impl From<String> for View {
	fn from(text: String) -> Self {
		View::Text(Cow::Owned(text))
	}
}

impl From<&'static str> for View {
	fn from(text: &'static str) -> Self {
		View::Text(Cow::Borrowed(text))
	}
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
	for c in s.chars() {
		match c {
			'&' => f.write_str("&amp;")?,
			'<' => f.write_str("&lt;")?,
			'>' => f.write_str("&gt;")?,
			'"' => f.write_str("&quot;")?,
			'\'' => f.write_str("&#x27;")?,
			_ => f.write_char(c)?,
		}
	}
	Ok(())
}
