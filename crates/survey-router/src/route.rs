//! Route entries and matches.

use crate::error::RouterError;
use crate::pattern::PathPattern;
use crate::view::View;
use std::collections::HashMap;
use std::rc::Rc;

/// Factory producing the view of a route.
pub type ViewFactory = Rc<dyn Fn(&RouteMatch) -> View>;

/// Metadata attached to a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
	/// Document title while the route is active.
	pub title: Option<String>,
	/// Name of the visual transition used when entering the route.
	pub transition: Option<String>,
}

impl RouteMeta {
	/// Creates empty metadata.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the transition name.
	pub fn transition(mut self, transition: impl Into<String>) -> Self {
		self.transition = Some(transition.into());
		self
	}
}

/// What a route does once matched.
#[derive(Clone)]
pub enum RouteTarget {
	/// Render a view.
	View(ViewFactory),
	/// Redirect to another path.
	Redirect(String),
}

impl std::fmt::Debug for RouteTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::View(_) => f.write_str("View(..)"),
			Self::Redirect(to) => f.debug_tuple("Redirect").field(to).finish(),
		}
	}
}

/// A single route definition.
#[derive(Debug, Clone)]
pub struct RouteEntry {
	pattern: PathPattern,
	name: Option<String>,
	target: RouteTarget,
	meta: RouteMeta,
}

impl RouteEntry {
	/// Creates a route rendering `view`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPattern`] if `path` does not compile.
	pub fn new<F>(path: &str, view: F) -> Result<Self, RouterError>
	where
		F: Fn(&RouteMatch) -> View + 'static,
	{
		Ok(Self {
			pattern: PathPattern::new(path)?,
			name: None,
			target: RouteTarget::View(Rc::new(view)),
			meta: RouteMeta::default(),
		})
	}

	/// Creates a route that redirects to `to`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPattern`] if `path` does not compile.
	pub fn redirect(path: &str, to: impl Into<String>) -> Result<Self, RouterError> {
		Ok(Self {
			pattern: PathPattern::new(path)?,
			name: None,
			target: RouteTarget::Redirect(to.into()),
			meta: RouteMeta::default(),
		})
	}

	/// Sets the route name.
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the route metadata.
	pub fn with_meta(mut self, meta: RouteMeta) -> Self {
		self.meta = meta;
		self
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Returns the path pattern string.
	pub fn path(&self) -> &str {
		self.pattern.pattern()
	}

	/// Returns the target.
	pub fn target(&self) -> &RouteTarget {
		&self.target
	}

	/// Returns the metadata.
	pub fn meta(&self) -> &RouteMeta {
		&self.meta
	}

	/// Returns whether this entry redirects instead of rendering.
	pub fn is_redirect(&self) -> bool {
		matches!(self.target, RouteTarget::Redirect(_))
	}
}

/// A matched route with extracted location data.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: Rc<RouteEntry>,
	/// Normalized path (base stripped, no query or hash).
	pub path: String,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
	/// Parameter values in the order they appear in the pattern.
	pub param_values: Vec<String>,
	/// Parsed query string.
	pub query: HashMap<String, String>,
	/// Hash fragment including the leading `#`, if any.
	pub hash: Option<String>,
	/// The originally requested location when a redirect was followed.
	pub redirected_from: Option<String>,
}

impl RouteMatch {
	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.route.name()
	}

	/// Returns the route metadata.
	pub fn meta(&self) -> &RouteMeta {
		self.route.meta()
	}

	/// Returns a named path parameter.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// Returns the full location: path, query and hash.
	pub fn full_path(&self) -> String {
		let mut full = self.path.clone();
		if !self.query.is_empty() {
			let mut pairs: Vec<(&String, &String)> = self.query.iter().collect();
			pairs.sort();
			if let Ok(encoded) = serde_urlencoded::to_string(pairs) {
				full.push('?');
				full.push_str(&encoded);
			}
		}
		if let Some(hash) = &self.hash {
			full.push_str(hash);
		}
		full
	}

	/// Renders the matched route's view, or nothing for redirect entries.
	pub fn render(&self) -> View {
		match self.route.target() {
			RouteTarget::View(factory) => factory(self),
			RouteTarget::Redirect(_) => View::Empty,
		}
	}
}
