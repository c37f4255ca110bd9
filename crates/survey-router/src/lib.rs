//! Survey Router - client-side routing for WASM single-page applications
//!
//! A small history-mode router: an ordered route table with metadata and
//! redirects, before/after navigation hooks, scroll restoration and a
//! pluggable history/document backend so routing runs the same way in the
//! browser and in native tests.
//!
//! ## Modules
//!
//! - [`pattern`]: Path patterns (`/survey/:id`, `*`)
//! - [`route`]: Route entries, metadata and matches
//! - [`router`]: The router and its builder
//! - [`guard`]: Navigation hooks and the `Next` continuation
//! - [`scroll`]: Scroll restoration
//! - [`history`]: History API and in-memory backends
//! - [`document`]: Page access (title, scroll, mount point)
//! - [`view`]: Minimal view tree rendered by routes
//!
//! ## Example
//!
//! ```ignore
//! use survey_router::{MemoryDocument, MemoryHistory, RouteEntry, RouteMeta, Router, View};
//! use std::rc::Rc;
//!
//! let document = Rc::new(MemoryDocument::new());
//! let router = Router::builder()
//!     .route(
//!         RouteEntry::new("/survey/:id", |m| View::text(format!("Survey {}", m.param("id").unwrap_or_default())))?
//!             .named("Survey")
//!             .with_meta(RouteMeta::new().title("View Survey")),
//!     )
//!     .route(RouteEntry::redirect("*", "/survey/1")?)
//!     .before_each(survey_router::guard::document_title(document.clone(), "Survey App"))
//!     .build(Box::new(MemoryHistory::new("/")), document)?;
//!
//! router.start()?;
//! ```

#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod guard;
pub mod history;
pub mod logging;
pub mod pattern;
pub mod route;
pub mod router;
pub mod scroll;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub use document::BrowserDocument;
pub use document::{Document, DocumentError, MemoryDocument};
pub use error::RouterError;
pub use guard::{Decision, NavigationDecision, Next, document_title};
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{History, HistoryState, MemoryHistory, NavigationType};
pub use pattern::PathPattern;
pub use route::{RouteEntry, RouteMatch, RouteMeta, RouteTarget};
pub use router::{NavigationState, Router, RouterBuilder, normalize_base};
pub use scroll::{ScrollPosition, restore_or_top};
pub use view::{ElementView, View};

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
