//! Application bootstrap.
//!
//! [`App`] owns the router and the page handle. Mounting checks the
//! target element, runs the initial navigation, renders it and then
//! re-renders after every completed navigation. A failed initial
//! navigation leaves the app unmounted so `mount` can be retried.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::routes::build_router;
use crate::views;
use std::cell::Cell;
use std::rc::Rc;
use survey_router::{Document, History, RouteMatch, Router, View, error_log, info_log};

/// The survey application.
pub struct App {
	config: AppConfig,
	router: Rc<Router>,
	document: Rc<dyn Document>,
	mounted: Cell<bool>,
}

impl std::fmt::Debug for App {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("App")
			.field("config", &self.config)
			.field("router", &self.router)
			.field("mounted", &self.mounted.get())
			.finish()
	}
}

impl App {
	/// Creates the application on the given backends.
	///
	/// # Errors
	///
	/// Returns [`AppError::Router`] if the route table is invalid.
	pub fn new(
		config: AppConfig,
		history: Box<dyn History>,
		document: Rc<dyn Document>,
	) -> Result<Self, AppError> {
		if config.production_tip {
			info_log!(
				"Survey App is running in development mode. Make sure to build with --release for production."
			);
		}

		let router = build_router(&config, history, Rc::clone(&document))?;

		Ok(Self {
			config,
			router: Rc::new(router),
			document,
			mounted: Cell::new(false),
		})
	}

	/// Creates the application on the browser's history and document.
	#[cfg(target_arch = "wasm32")]
	pub fn browser(config: AppConfig) -> Result<Self, AppError> {
		use survey_router::{BrowserDocument, BrowserHistory};

		Self::new(
			config,
			Box::new(BrowserHistory::new()),
			Rc::new(BrowserDocument::new()),
		)
	}

	/// Returns the router.
	pub fn router(&self) -> &Rc<Router> {
		&self.router
	}

	/// Returns the configuration.
	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	/// Returns whether [`App::mount`] has succeeded.
	pub fn is_mounted(&self) -> bool {
		self.mounted.get()
	}

	/// Renders the shell around the current route.
	pub fn render(&self) -> View {
		views::root(self.router.base(), self.router.current().as_ref())
	}

	/// Attaches the application to the mount element and runs the initial
	/// navigation.
	///
	/// # Errors
	///
	/// - [`AppError::AlreadyMounted`] on a second call.
	/// - [`AppError::MountTargetMissing`] if the element does not exist.
	/// - [`AppError::Router`] if the initial navigation fails.
	pub fn mount(&self) -> Result<RouteMatch, AppError> {
		if self.mounted.get() {
			return Err(AppError::AlreadyMounted);
		}

		self.document.mount(&self.config.mount_id, "")?;

		let current = self.router.start()?;
		// SAFETY(XSS): render_to_string() HTML-escapes all dynamic text content
		// and attribute values.
		self.document
			.mount(&self.config.mount_id, &self.render().render_to_string())?;

		let document = Rc::clone(&self.document);
		let mount_id = self.config.mount_id.clone();
		let base = self.router.base().to_string();
		self.router.after_each(move |to, _from| {
			let html = views::root(&base, Some(to)).render_to_string();
			if let Err(e) = document.mount(&mount_id, &html) {
				error_log!("Failed to render {}: {}", to.full_path(), e);
			}
		});
		self.mounted.set(true);

		info_log!(
			"Mounted on #{} at {}",
			self.config.mount_id,
			current.full_path()
		);
		Ok(current)
	}
}
