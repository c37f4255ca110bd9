//! The survey route table.

use crate::config::AppConfig;
use crate::views;
use std::rc::Rc;
use survey_router::{
	Document, History, RouteEntry, RouteMeta, Router, RouterError, document_title, normalize_base,
	restore_or_top,
};

/// Name of the home route.
pub const HOME: &str = "Home";
/// Name of the survey creation route.
pub const SURVEY_FORM: &str = "SurveyForm";
/// Name of the survey route.
pub const SURVEY: &str = "Survey";

/// Returns the application routes in match order.
///
/// Views link relative to `base`. The trailing catch-all sends every
/// unknown location home.
pub fn survey_routes(base: &str) -> Result<Vec<RouteEntry>, RouterError> {
	let base: Rc<str> = normalize_base(base).into();
	let home_base = Rc::clone(&base);

	Ok(vec![
		RouteEntry::new("/", move |m| views::home(&home_base, m))?
			.named(HOME)
			.with_meta(RouteMeta::new().title("Home - Survey App").transition("fade")),
		RouteEntry::new("/new", views::survey_form)?
			.named(SURVEY_FORM)
			.with_meta(RouteMeta::new().title("Create New Survey").transition("slide")),
		RouteEntry::new("/survey/:id", move |m| views::survey(&base, m))?
			.named(SURVEY)
			.with_meta(RouteMeta::new().title("View Survey").transition("slide")),
		RouteEntry::redirect("*", "/")?,
	])
}

/// Builds the application router.
///
/// Installs the title hook (falling back to `config.fallback_title`) and
/// top-or-restore scrolling.
pub fn build_router(
	config: &AppConfig,
	history: Box<dyn History>,
	document: Rc<dyn Document>,
) -> Result<Router, RouterError> {
	Router::builder()
		.base(&config.base_url)
		.routes(survey_routes(&config.base_url)?)
		.before_each(document_title(
			Rc::clone(&document),
			config.fallback_title.clone(),
		))
		.scroll_behavior(restore_or_top)
		.build(history, document)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use survey_router::{MemoryDocument, MemoryHistory, RouteTarget};

	#[rstest]
	fn test_route_table_order() {
		let routes = survey_routes("/").unwrap();

		let paths: Vec<&str> = routes.iter().map(|r| r.path()).collect();
		assert_eq!(paths, vec!["/", "/new", "/survey/:id", "*"]);
	}

	#[rstest]
	#[case(0, Some("Home"), Some("Home - Survey App"), Some("fade"))]
	#[case(1, Some("SurveyForm"), Some("Create New Survey"), Some("slide"))]
	#[case(2, Some("Survey"), Some("View Survey"), Some("slide"))]
	#[case(3, None, None, None)]
	fn test_route_metadata(
		#[case] index: usize,
		#[case] name: Option<&str>,
		#[case] title: Option<&str>,
		#[case] transition: Option<&str>,
	) {
		let routes = survey_routes("/").unwrap();
		let route = &routes[index];

		assert_eq!(route.name(), name);
		assert_eq!(route.meta().title.as_deref(), title);
		assert_eq!(route.meta().transition.as_deref(), transition);
	}

	#[rstest]
	fn test_catch_all_redirects_home() {
		let routes = survey_routes("/").unwrap();

		assert!(matches!(routes[3].target(), RouteTarget::Redirect(to) if to == "/"));
	}

	#[rstest]
	fn test_views_link_under_base() {
		// Arrange
		let config = AppConfig::default().with_base_url("/survey-app/").unwrap();
		let router = build_router(
			&config,
			Box::new(MemoryHistory::new("/survey-app/")),
			Rc::new(MemoryDocument::new()),
		)
		.unwrap();

		// Act
		let html = router.resolve("/").unwrap().render().render_to_string();

		// Assert
		assert!(html.contains(r#"href="/survey-app/new""#));
	}

	#[rstest]
	fn test_build_router_uses_base() {
		let config = AppConfig::default().with_base_url("/survey-app/").unwrap();
		let document = Rc::new(MemoryDocument::new());

		let router = build_router(&config, Box::new(MemoryHistory::new("/survey-app/")), document)
			.unwrap();

		assert_eq!(router.base(), "/survey-app");
		assert_eq!(router.route_count(), 4);
		assert!(router.has_route(HOME));
		assert!(router.has_route(SURVEY_FORM));
		assert!(router.has_route(SURVEY));
	}
}
