//! Navigation hooks.
//!
//! Before-each hooks receive the target route, the route being left and a
//! [`Next`] continuation. `Next` can only be consumed once, and the only
//! way to produce the [`NavigationDecision`] a hook must return is to
//! consume it, so every hook resolves its continuation exactly once.

use crate::document::Document;
use crate::route::RouteMatch;
use std::rc::Rc;

/// Hook run before a navigation is confirmed.
pub type BeforeEach = Rc<dyn Fn(&RouteMatch, Option<&RouteMatch>, Next) -> NavigationDecision>;

/// Hook run after a navigation completed.
pub type AfterEach = Rc<dyn Fn(&RouteMatch, Option<&RouteMatch>)>;

/// The continuation handed to before-each hooks.
#[derive(Debug)]
#[must_use = "a navigation hook must resolve its continuation"]
pub struct Next {
	_private: (),
}

impl Next {
	pub(crate) fn new() -> Self {
		Self { _private: () }
	}

	/// Lets the pending navigation continue.
	pub fn proceed(self) -> NavigationDecision {
		NavigationDecision(Decision::Proceed)
	}

	/// Cancels the pending navigation.
	pub fn abort(self, reason: impl Into<String>) -> NavigationDecision {
		NavigationDecision(Decision::Abort(reason.into()))
	}

	/// Replaces the pending navigation with one to `to`.
	pub fn redirect(self, to: impl Into<String>) -> NavigationDecision {
		NavigationDecision(Decision::Redirect(to.into()))
	}
}

/// What a before-each hook decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
	/// Continue with the next hook, then confirm.
	Proceed,
	/// Stop the navigation.
	Abort(String),
	/// Navigate elsewhere instead.
	Redirect(String),
}

/// Result of resolving a [`Next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDecision(Decision);

impl NavigationDecision {
	/// Returns the decision.
	pub fn decision(&self) -> &Decision {
		&self.0
	}

	pub(crate) fn into_decision(self) -> Decision {
		self.0
	}
}

/// Builds a hook that sets the document title to the target's
/// `meta.title`, or to `fallback` when the route has none or an empty one.
/// It always proceeds.
pub fn document_title<D>(
	document: Rc<D>,
	fallback: impl Into<String>,
) -> impl Fn(&RouteMatch, Option<&RouteMatch>, Next) -> NavigationDecision
where
	D: Document + ?Sized + 'static,
{
	let fallback = fallback.into();
	move |to: &RouteMatch, _from: Option<&RouteMatch>, next: Next| {
		let title = to
			.meta()
			.title
			.as_deref()
			.filter(|t| !t.is_empty())
			.unwrap_or(&fallback);
		document.set_title(title);
		next.proceed()
	}
}
