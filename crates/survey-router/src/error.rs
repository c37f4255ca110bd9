//! Error types for client-side routing.

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// No route matched and the table has no catch-all entry.
	#[error("Route not found: {0}")]
	NotFound(String),
	/// Invalid route name.
	#[error("Invalid route name: {0}")]
	InvalidRouteName(String),
	/// Missing parameter for reverse URL.
	#[error("Missing parameter: {0}")]
	MissingParameter(String),
	/// The route pattern could not be compiled.
	#[error("Invalid route pattern '{pattern}': {reason}")]
	InvalidPattern {
		/// The offending pattern.
		pattern: String,
		/// Why it was rejected.
		reason: String,
	},
	/// Two entries share the same path or name.
	#[error("Duplicate route: {0}")]
	DuplicateRoute(String),
	/// Redirects did not settle on a view within the allowed depth.
	#[error("Redirect loop detected while resolving: {0}")]
	RedirectLoop(String),
	/// A before-each hook aborted the navigation.
	#[error("Navigation aborted: {0}")]
	NavigationAborted(String),
	/// The requested location is already the current one.
	#[error("Navigation duplicated: {0}")]
	NavigationDuplicated(String),
	/// The history backend rejected the operation.
	#[error("History error: {0}")]
	History(String),
}
