//! History-mode router.
//!
//! [`RouterBuilder`] collects the route table and policies; [`Router`]
//! resolves locations, runs navigation hooks, drives the history backend
//! and applies scroll restoration.

use crate::document::Document;
use crate::error::RouterError;
use crate::guard::{AfterEach, BeforeEach, Decision, NavigationDecision, Next};
use crate::history::{History, HistoryState, NavigationType};
use crate::route::{RouteEntry, RouteMatch, RouteTarget};
use crate::scroll::{SavedPositions, ScrollBehavior, ScrollPosition};
use crate::{debug_log, info_log, warn_log};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Maximum number of redirects followed for a single navigation.
const MAX_REDIRECTS: usize = 10;

/// Whether a navigation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
	/// No navigation in progress.
	Idle,
	/// Hooks are running or the history is being updated.
	Navigating,
}

/// Builder for [`Router`].
pub struct RouterBuilder {
	routes: Vec<RouteEntry>,
	base: String,
	before_each: Vec<BeforeEach>,
	after_each: Vec<AfterEach>,
	scroll_behavior: Option<ScrollBehavior>,
}

impl std::fmt::Debug for RouterBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouterBuilder")
			.field("routes", &self.routes)
			.field("base", &self.base)
			.field("before_each_count", &self.before_each.len())
			.field("after_each_count", &self.after_each.len())
			.field("has_scroll_behavior", &self.scroll_behavior.is_some())
			.finish()
	}
}

impl Default for RouterBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl RouterBuilder {
	/// Creates an empty builder with base `/`.
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			base: String::new(),
			before_each: Vec::new(),
			after_each: Vec::new(),
			scroll_behavior: None,
		}
	}

	/// Appends a route. Routes are matched in the order they are added.
	pub fn route(mut self, entry: RouteEntry) -> Self {
		self.routes.push(entry);
		self
	}

	/// Appends several routes.
	pub fn routes(mut self, entries: impl IntoIterator<Item = RouteEntry>) -> Self {
		self.routes.extend(entries);
		self
	}

	/// Sets the path prefix the application is served under.
	pub fn base(mut self, base: &str) -> Self {
		self.base = normalize_base(base);
		self
	}

	/// Registers a before-each hook.
	pub fn before_each<F>(mut self, hook: F) -> Self
	where
		F: Fn(&RouteMatch, Option<&RouteMatch>, Next) -> NavigationDecision + 'static,
	{
		self.before_each.push(Rc::new(hook));
		self
	}

	/// Registers an after-each hook.
	pub fn after_each<F>(mut self, hook: F) -> Self
	where
		F: Fn(&RouteMatch, Option<&RouteMatch>) + 'static,
	{
		self.after_each.push(Rc::new(hook));
		self
	}

	/// Sets the scroll restoration policy.
	pub fn scroll_behavior<F>(mut self, behavior: F) -> Self
	where
		F: Fn(&RouteMatch, Option<&RouteMatch>, Option<ScrollPosition>) -> Option<ScrollPosition>
			+ 'static,
	{
		self.scroll_behavior = Some(Box::new(behavior));
		self
	}

	/// Builds the router.
	///
	/// # Errors
	///
	/// Returns [`RouterError::DuplicateRoute`] if two routes share a path
	/// or a name.
	pub fn build(
		self,
		history: Box<dyn History>,
		document: Rc<dyn Document>,
	) -> Result<Router, RouterError> {
		let mut named_routes = HashMap::new();
		let mut paths = std::collections::HashSet::new();

		for (index, route) in self.routes.iter().enumerate() {
			if !paths.insert(route.path().to_string()) {
				return Err(RouterError::DuplicateRoute(route.path().to_string()));
			}
			if let Some(name) = route.name()
				&& named_routes.insert(name.to_string(), index).is_some()
			{
				return Err(RouterError::DuplicateRoute(name.to_string()));
			}
		}

		let next_key = history.key_seed();

		Ok(Router {
			routes: self.routes.into_iter().map(Rc::new).collect(),
			named_routes,
			base: self.base,
			history,
			document,
			before_each: RefCell::new(self.before_each),
			after_each: RefCell::new(self.after_each),
			scroll_behavior: self.scroll_behavior,
			saved_positions: SavedPositions::new(),
			current: RefCell::new(None),
			current_key: Cell::new(0),
			next_key: Cell::new(next_key),
			state: Cell::new(NavigationState::Idle),
		})
	}
}

/// The client-side router.
///
/// One instance is built at startup and owned by the application; the
/// route table it holds never changes afterwards.
pub struct Router {
	routes: Vec<Rc<RouteEntry>>,
	named_routes: HashMap<String, usize>,
	base: String,
	history: Box<dyn History>,
	document: Rc<dyn Document>,
	before_each: RefCell<Vec<BeforeEach>>,
	after_each: RefCell<Vec<AfterEach>>,
	scroll_behavior: Option<ScrollBehavior>,
	saved_positions: SavedPositions,
	current: RefCell<Option<RouteMatch>>,
	current_key: Cell<u64>,
	next_key: Cell<u64>,
	state: Cell<NavigationState>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.routes.len())
			.field(
				"named_routes",
				&self.named_routes.keys().collect::<Vec<_>>(),
			)
			.field("base", &self.base)
			.field("state", &self.state.get())
			.finish()
	}
}

impl Router {
	/// Starts building a router.
	pub fn builder() -> RouterBuilder {
		RouterBuilder::new()
	}

	/// Returns the routes in match order.
	pub fn routes(&self) -> &[Rc<RouteEntry>] {
		&self.routes
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Returns the base path (empty when served from `/`).
	pub fn base(&self) -> &str {
		&self.base
	}

	/// Returns the document the router writes to.
	pub fn document(&self) -> &Rc<dyn Document> {
		&self.document
	}

	/// Returns the current route, once a navigation has completed.
	pub fn current(&self) -> Option<RouteMatch> {
		self.current.borrow().clone()
	}

	/// Returns whether a navigation is in flight.
	pub fn state(&self) -> NavigationState {
		self.state.get()
	}

	/// Registers a before-each hook after construction.
	pub fn before_each<F>(&self, hook: F)
	where
		F: Fn(&RouteMatch, Option<&RouteMatch>, Next) -> NavigationDecision + 'static,
	{
		self.before_each.borrow_mut().push(Rc::new(hook));
	}

	/// Registers an after-each hook after construction.
	pub fn after_each<F>(&self, hook: F)
	where
		F: Fn(&RouteMatch, Option<&RouteMatch>) + 'static,
	{
		self.after_each.borrow_mut().push(Rc::new(hook));
	}

	/// Matches a normalized path against the table, without following
	/// redirects.
	pub fn match_path(
		&self,
		path: &str,
	) -> Option<(Rc<RouteEntry>, HashMap<String, String>, Vec<String>)> {
		self.routes.iter().find_map(|route| {
			route
				.pattern()
				.matches(path)
				.map(|(params, values)| (Rc::clone(route), params, values))
		})
	}

	/// Resolves an application location (base excluded) to a route.
	///
	/// Redirect entries are followed; the returned match then records the
	/// original location in `redirected_from`.
	///
	/// # Errors
	///
	/// - [`RouterError::NotFound`] if nothing matches.
	/// - [`RouterError::RedirectLoop`] if redirects do not settle.
	pub fn resolve(&self, location: &str) -> Result<RouteMatch, RouterError> {
		let mut target = location.to_string();
		let mut redirected_from: Option<String> = None;

		for _ in 0..=MAX_REDIRECTS {
			let (path, query, hash) = split_location(&target);
			let (route, params, param_values) = self
				.match_path(&path)
				.ok_or_else(|| RouterError::NotFound(target.clone()))?;

			match route.target() {
				RouteTarget::Redirect(to) => {
					debug_log!("Redirecting {} to {}", target, to);
					redirected_from.get_or_insert_with(|| location.to_string());
					// A target without its own query or hash keeps the requested ones.
					target = if to.contains(['?', '#']) {
						to.clone()
					} else {
						format!("{}{}", to, location_suffix(&target))
					};
				}
				RouteTarget::View(_) => {
					return Ok(RouteMatch {
						route,
						path,
						params,
						param_values,
						query,
						hash,
						redirected_from,
					});
				}
			}
		}

		Err(RouterError::RedirectLoop(location.to_string()))
	}

	/// Generates a location by route name with parameters.
	///
	/// # Errors
	///
	/// - [`RouterError::InvalidRouteName`] if no route has that name.
	/// - [`RouterError::MissingParameter`] if a pattern parameter is absent.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let index = self
			.named_routes
			.get(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		self.routes[*index]
			.pattern()
			.reverse(&params_map)
			.map_err(RouterError::MissingParameter)
	}

	/// Returns the URL for an application location, base included.
	pub fn href(&self, location: &str) -> String {
		format!("{}{}", self.base, location)
	}

	/// Runs the initial navigation to the location the page was loaded at.
	///
	/// The current history entry is replaced so it carries a router key.
	pub fn start(&self) -> Result<RouteMatch, RouterError> {
		let location = self.app_location(&self.history.location());
		self.navigate(&location, NavigationType::Replace, None)
	}

	/// Navigates to a location, pushing a new history entry.
	pub fn push(&self, location: &str) -> Result<RouteMatch, RouterError> {
		self.navigate(location, NavigationType::Push, None)
	}

	/// Navigates to a location, replacing the current history entry.
	pub fn replace(&self, location: &str) -> Result<RouteMatch, RouterError> {
		self.navigate(location, NavigationType::Replace, None)
	}

	/// Navigates to a named route.
	pub fn push_named(&self, name: &str, params: &[(&str, &str)]) -> Result<RouteMatch, RouterError> {
		let location = self.reverse(name, params)?;
		self.push(&location)
	}

	/// Moves `delta` entries through the history.
	///
	/// Returns the new route when the backend traverses synchronously;
	/// browser traversals complete later through [`Router::handle_popstate`].
	pub fn go(&self, delta: i32) -> Result<Option<RouteMatch>, RouterError> {
		match self.history.go(delta)? {
			Some(state) => self.handle_popstate(Some(state)).map(Some),
			None => Ok(None),
		}
	}

	/// Goes one entry back.
	pub fn back(&self) -> Result<Option<RouteMatch>, RouterError> {
		self.go(-1)
	}

	/// Goes one entry forward.
	pub fn forward(&self) -> Result<Option<RouteMatch>, RouterError> {
		self.go(1)
	}

	/// Handles a history traversal that already happened (`popstate`).
	///
	/// `state` is the state of the entry now current; entries without
	/// router state (e.g. typed-in URLs) receive a fresh key.
	pub fn handle_popstate(&self, state: Option<HistoryState>) -> Result<RouteMatch, RouterError> {
		let state = match state {
			Some(state) => state,
			None => {
				let state = HistoryState::new(self.take_key(), self.history.location());
				self.history.replace(&state)?;
				state
			}
		};
		let location = self.app_location(&state.location);
		self.navigate(&location, NavigationType::Pop, Some(state.key))
	}

	fn navigate(
		&self,
		location: &str,
		nav_type: NavigationType,
		pop_key: Option<u64>,
	) -> Result<RouteMatch, RouterError> {
		self.state.set(NavigationState::Navigating);
		let result = self.run_navigation(location, nav_type, pop_key, 0);
		self.state.set(NavigationState::Idle);
		result
	}

	fn run_navigation(
		&self,
		location: &str,
		nav_type: NavigationType,
		pop_key: Option<u64>,
		hook_redirects: usize,
	) -> Result<RouteMatch, RouterError> {
		if hook_redirects > MAX_REDIRECTS {
			return Err(RouterError::RedirectLoop(location.to_string()));
		}

		let to = self.resolve(location)?;
		if let Some(original) = &to.redirected_from {
			info_log!("Redirected {} to {}", original, to.full_path());
		}
		let from = self.current();

		if nav_type != NavigationType::Pop
			&& let Some(from) = &from
			&& same_location(from, &to)
		{
			return Err(RouterError::NavigationDuplicated(to.full_path()));
		}

		let hooks: Vec<BeforeEach> = self.before_each.borrow().clone();
		for hook in hooks {
			match hook(&to, from.as_ref(), Next::new()).into_decision() {
				Decision::Proceed => {}
				Decision::Abort(reason) => {
					warn_log!("Navigation to {} aborted: {}", to.full_path(), reason);
					if nav_type == NavigationType::Pop
						&& let Some(from) = &from
					{
						// The browser already moved; point the entry back at the page still shown.
						let state = HistoryState::new(self.current_key.get(), self.href(&from.full_path()));
						self.history.replace(&state)?;
					}
					return Err(RouterError::NavigationAborted(reason));
				}
				Decision::Redirect(target) => {
					debug_log!("Hook redirected {} to {}", to.full_path(), target);
					let nav_type = match nav_type {
						NavigationType::Push => NavigationType::Push,
						_ => NavigationType::Replace,
					};
					return self.run_navigation(&target, nav_type, None, hook_redirects + 1);
				}
			}
		}

		if from.is_some() {
			self.saved_positions
				.save(self.current_key.get(), self.document.scroll_position());
		}

		let key = match (nav_type, pop_key) {
			(NavigationType::Pop, Some(key)) => key,
			_ => self.take_key(),
		};
		let state = HistoryState::new(key, self.href(&to.full_path()));
		match nav_type {
			NavigationType::Push => self.history.push(&state)?,
			NavigationType::Replace => {
				self.history.replace(&state)?;
				self.saved_positions.remove(self.current_key.get());
			}
			NavigationType::Pop => {}
		}

		*self.current.borrow_mut() = Some(to.clone());
		self.current_key.set(key);
		info_log!("Navigated to {}", to.full_path());

		let hooks: Vec<AfterEach> = self.after_each.borrow().clone();
		for hook in hooks {
			hook(&to, from.as_ref());
		}

		if let Some(behavior) = &self.scroll_behavior {
			let saved = match nav_type {
				NavigationType::Pop => self.saved_positions.get(key),
				_ => None,
			};
			if let Some(position) = behavior(&to, from.as_ref(), saved) {
				self.document.scroll_to(position);
			}
		}

		Ok(to)
	}

	fn take_key(&self) -> u64 {
		let key = self.next_key.get();
		self.next_key.set(key + 1);
		key
	}

	/// Converts a browser URL path (base included) to an application location.
	///
	/// Returns `None` for URLs outside the base.
	pub fn strip_base(&self, full: &str) -> Option<String> {
		if self.base.is_empty() {
			return Some(full.to_string());
		}
		let prefix = full.get(..self.base.len())?;
		if !prefix.eq_ignore_ascii_case(&self.base) {
			return None;
		}
		let rest = &full[self.base.len()..];
		if rest.is_empty() {
			Some("/".to_string())
		} else if rest.starts_with('?') || rest.starts_with('#') {
			Some(format!("/{}", rest))
		} else if rest.starts_with('/') {
			Some(rest.to_string())
		} else {
			None
		}
	}

	/// Returns the application location for a link `href`, or `None` when
	/// the link must be left to the browser: not a same-origin absolute
	/// path, or outside the base.
	pub fn link_location(&self, href: &str) -> Option<String> {
		if !href.starts_with('/') || href.starts_with("//") {
			return None;
		}
		self.strip_base(href)
	}

	/// Converts a browser URL to a location, keeping URLs outside the base
	/// as they are so they fall through to the route table.
	fn app_location(&self, full: &str) -> String {
		self.strip_base(full).unwrap_or_else(|| full.to_string())
	}
}

/// Normalizes a base path: leading slash, no trailing slash, `/` → empty.
pub fn normalize_base(base: &str) -> String {
	let trimmed = base.trim().trim_end_matches('/');
	if trimmed.is_empty() {
		String::new()
	} else if trimmed.starts_with('/') {
		trimmed.to_string()
	} else {
		format!("/{}", trimmed)
	}
}

/// Returns the query and hash part of a location (from the first `?` or `#`).
fn location_suffix(location: &str) -> &str {
	location
		.find(['?', '#'])
		.map_or("", |i| &location[i..])
}

/// Whether two matches point at the same location, ignoring a trailing
/// slash and letter case in the path.
fn same_location(a: &RouteMatch, b: &RouteMatch) -> bool {
	fn trimmed(path: &str) -> &str {
		match path.trim_end_matches('/') {
			"" => "/",
			p => p,
		}
	}
	trimmed(&a.path).eq_ignore_ascii_case(trimmed(&b.path)) && a.query == b.query && a.hash == b.hash
}

/// Splits a location into normalized path, parsed query and hash.
fn split_location(location: &str) -> (String, HashMap<String, String>, Option<String>) {
	let (rest, hash) = match location.find('#') {
		Some(i) => (&location[..i], Some(location[i..].to_string())),
		None => (location, None),
	};
	let (path, query) = match rest.find('?') {
		Some(i) => (&rest[..i], &rest[i + 1..]),
		None => (rest, ""),
	};

	let path = if path.is_empty() {
		"/".to_string()
	} else if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{}", path)
	};

	let query = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
		.unwrap_or_default()
		.into_iter()
		.collect();

	(path, query, hash)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::MemoryDocument;
	use crate::history::MemoryHistory;
	use crate::route::RouteMeta;
	use crate::view::View;
	use rstest::rstest;

	fn home_view(_: &RouteMatch) -> View {
		View::text("Home")
	}

	fn user_view(_: &RouteMatch) -> View {
		View::text("User")
	}

	fn build(builder: RouterBuilder) -> Router {
		builder
			.build(
				Box::new(MemoryHistory::new("/")),
				Rc::new(MemoryDocument::new()),
			)
			.unwrap()
	}

	#[rstest]
	fn test_router_named_route() {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap().named("home"))
				.route(RouteEntry::new("/users", user_view).unwrap().named("users")),
		);

		assert_eq!(router.route_count(), 2);
		assert!(router.has_route("home"));
		assert!(router.has_route("users"));
		assert!(!router.has_route("nonexistent"));
	}

	#[rstest]
	fn test_router_rejects_duplicate_paths() {
		let result = Router::builder()
			.route(RouteEntry::new("/", home_view).unwrap())
			.route(RouteEntry::new("/", user_view).unwrap())
			.build(Box::new(MemoryHistory::default()), Rc::new(MemoryDocument::new()));

		assert_eq!(
			result.unwrap_err(),
			RouterError::DuplicateRoute("/".to_string())
		);
	}

	#[rstest]
	fn test_router_rejects_duplicate_names() {
		let result = Router::builder()
			.route(RouteEntry::new("/", home_view).unwrap().named("x"))
			.route(RouteEntry::new("/users", user_view).unwrap().named("x"))
			.build(Box::new(MemoryHistory::default()), Rc::new(MemoryDocument::new()));

		assert_eq!(
			result.unwrap_err(),
			RouterError::DuplicateRoute("x".to_string())
		);
	}

	#[rstest]
	fn test_resolve_first_declared_route_wins() {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/users/me", home_view).unwrap().named("me"))
				.route(RouteEntry::new("/users/:id", user_view).unwrap().named("user")),
		);

		assert_eq!(router.resolve("/users/me").unwrap().name(), Some("me"));
		assert_eq!(router.resolve("/users/7").unwrap().name(), Some("user"));
	}

	#[rstest]
	fn test_resolve_not_found_without_catch_all() {
		let router = build(Router::builder().route(RouteEntry::new("/", home_view).unwrap()));

		assert_eq!(
			router.resolve("/missing").unwrap_err(),
			RouterError::NotFound("/missing".to_string())
		);
	}

	#[rstest]
	fn test_resolve_redirect_loop() {
		let router = build(
			Router::builder()
				.route(RouteEntry::redirect("/a", "/b").unwrap())
				.route(RouteEntry::redirect("/b", "/a").unwrap()),
		);

		assert_eq!(
			router.resolve("/a").unwrap_err(),
			RouterError::RedirectLoop("/a".to_string())
		);
	}

	#[rstest]
	fn test_resolve_parses_query_and_hash() {
		let router = build(Router::builder().route(RouteEntry::new("/users/:id", user_view).unwrap()));

		let m = router.resolve("/users/42?tab=votes#top").unwrap();

		assert_eq!(m.path, "/users/42");
		assert_eq!(m.param("id"), Some("42"));
		assert_eq!(m.query.get("tab"), Some(&"votes".to_string()));
		assert_eq!(m.hash.as_deref(), Some("#top"));
	}

	#[rstest]
	fn test_reverse() {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap().named("home"))
				.route(RouteEntry::new("/users/:id", user_view).unwrap().named("user")),
		);

		assert_eq!(router.reverse("home", &[]).unwrap(), "/");
		assert_eq!(router.reverse("user", &[("id", "42")]).unwrap(), "/users/42");
		assert_eq!(
			router.reverse("user", &[]).unwrap_err(),
			RouterError::MissingParameter("id".to_string())
		);
		assert!(matches!(
			router.reverse("nonexistent", &[]),
			Err(RouterError::InvalidRouteName(_))
		));
	}

	#[rstest]
	fn test_state_is_idle_after_navigation() {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap())
				.route(RouteEntry::new("/users", user_view).unwrap()),
		);
		let observed = Rc::new(Cell::new(NavigationState::Idle));
		let seen = Rc::clone(&observed);
		let router = Rc::new(router);
		let weak = Rc::downgrade(&router);
		router.before_each(move |_, _, next| {
			if let Some(router) = weak.upgrade() {
				seen.set(router.state());
			}
			next.proceed()
		});

		router.push("/users").unwrap();

		assert_eq!(observed.get(), NavigationState::Navigating);
		assert_eq!(router.state(), NavigationState::Idle);
	}

	#[rstest]
	fn test_hook_redirect() {
		// Arrange
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap().named("home"))
				.route(RouteEntry::new("/users", user_view).unwrap().named("users"))
				.route(
					RouteEntry::new("/admin", user_view)
						.unwrap()
						.with_meta(RouteMeta::new().title("Admin")),
				)
				.before_each(|to, _, next| {
					if to.path == "/admin" {
						next.redirect("/users")
					} else {
						next.proceed()
					}
				}),
		);
		router.start().unwrap();

		// Act
		let landed = router.push("/admin").unwrap();

		// Assert
		assert_eq!(landed.name(), Some("users"));
		assert_eq!(router.current().unwrap().path, "/users");
	}

	#[rstest]
	fn test_hook_abort_keeps_current_route() {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap())
				.route(RouteEntry::new("/users", user_view).unwrap())
				.before_each(|to, _, next| {
					if to.path == "/users" {
						next.abort("locked")
					} else {
						next.proceed()
					}
				}),
		);
		router.start().unwrap();

		let result = router.push("/users");

		assert_eq!(
			result.unwrap_err(),
			RouterError::NavigationAborted("locked".to_string())
		);
		assert_eq!(router.current().unwrap().path, "/");
		assert_eq!(router.state(), NavigationState::Idle);
	}

	#[rstest]
	fn test_push_current_location_is_duplicated() {
		let router = build(Router::builder().route(RouteEntry::new("/", home_view).unwrap()));
		router.start().unwrap();

		assert_eq!(
			router.push("/").unwrap_err(),
			RouterError::NavigationDuplicated("/".to_string())
		);
	}

	#[rstest]
	#[case("", "", "/app", Some("/app"))]
	#[case("/", "", "/", Some("/"))]
	#[case("/app/", "/app", "/app/new", Some("/new"))]
	#[case("app", "/app", "/app?x=1", Some("/?x=1"))]
	#[case("/app", "/app", "/APP/new", Some("/new"))]
	#[case("/app", "/app", "/application", None)]
	#[case("/app", "/app", "/docs", None)]
	fn test_base_handling(
		#[case] base: &str,
		#[case] normalized: &str,
		#[case] full: &str,
		#[case] stripped: Option<&str>,
	) {
		let router = build(Router::builder().base(base));

		assert_eq!(router.base(), normalized);
		assert_eq!(router.strip_base(full).as_deref(), stripped);
	}

	#[rstest]
	#[case("/survey-app/new", Some("/new"))]
	#[case("/survey-app", Some("/"))]
	#[case("/docs", None)]
	#[case("/api/export.csv", None)]
	#[case("//cdn.example.com/survey-app/new", None)]
	#[case("https://example.com/survey-app/new", None)]
	#[case("new", None)]
	fn test_link_location_stays_inside_base(#[case] href: &str, #[case] expected: Option<&str>) {
		let router = build(Router::builder().base("/survey-app"));

		assert_eq!(router.link_location(href).as_deref(), expected);
	}

	#[rstest]
	fn test_link_location_without_base() {
		let router = build(Router::builder());

		assert_eq!(router.link_location("/docs").as_deref(), Some("/docs"));
		assert_eq!(router.link_location("//host/docs"), None);
	}

	#[rstest]
	fn test_redirect_keeps_requested_query_and_hash() {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap())
				.route(RouteEntry::redirect("*", "/").unwrap()),
		);

		let m = router.resolve("/bogus?ref=mail#top").unwrap();

		assert_eq!(m.path, "/");
		assert_eq!(m.query.get("ref"), Some(&"mail".to_string()));
		assert_eq!(m.hash.as_deref(), Some("#top"));
		assert_eq!(m.full_path(), "/?ref=mail#top");
		assert_eq!(m.redirected_from.as_deref(), Some("/bogus?ref=mail#top"));
	}

	#[rstest]
	fn test_redirect_with_own_query_replaces_requested_one() {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap())
				.route(RouteEntry::redirect("/old", "/?from=old").unwrap()),
		);

		let m = router.resolve("/old?ref=mail#top").unwrap();

		assert_eq!(m.full_path(), "/?from=old");
	}

	#[rstest]
	#[case("/users/")]
	#[case("/Users")]
	fn test_push_same_route_with_different_spelling_is_duplicated(#[case] location: &str) {
		let router = build(
			Router::builder()
				.route(RouteEntry::new("/", home_view).unwrap())
				.route(RouteEntry::new("/users", user_view).unwrap()),
		);
		router.start().unwrap();
		router.push("/users").unwrap();

		let result = router.push(location);

		assert!(matches!(result, Err(RouterError::NavigationDuplicated(_))));
		assert_eq!(router.current().unwrap().path, "/users");
	}

	#[rstest]
	#[case("", "/", None)]
	#[case("new", "/new", None)]
	#[case("/survey/1#votes", "/survey/1", Some("#votes"))]
	fn test_split_location(#[case] location: &str, #[case] path: &str, #[case] hash: Option<&str>) {
		let (p, query, h) = split_location(location);
		assert_eq!(p, path);
		assert!(query.is_empty());
		assert_eq!(h.as_deref(), hash);
	}
}
