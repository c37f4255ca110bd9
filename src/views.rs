//! Survey views.
//!
//! Each route renders one of these; [`root`] wraps the active one in the
//! application shell. `base` is the normalized base path (empty when served
//! from `/`) and prefixes every link.

use survey_router::{RouteMatch, View};

/// Home page: entry point with a link to the survey form.
pub fn home(base: &str, _: &RouteMatch) -> View {
	View::element("section")
		.attr("class", "home")
		.child(View::element("h1").child("Surveys"))
		.child(
			View::element("p").child("Create a survey and share its link to collect answers."),
		)
		.child(
			View::element("a")
				.attr("href", format!("{}/new", base))
				.attr("class", "button")
				.child("Create New Survey"),
		)
		.into()
}

/// Survey creation form.
pub fn survey_form(_: &RouteMatch) -> View {
	View::element("section")
		.attr("class", "survey-form")
		.child(View::element("h1").child("Create New Survey"))
		.child(
			View::element("form")
				.attr("id", "survey-form")
				.child(
					View::element("label")
						.attr("for", "survey-title")
						.child("Title"),
				)
				.child(
					View::element("input")
						.attr("id", "survey-title")
						.attr("name", "title")
						.attr("type", "text")
						.attr("required", "required"),
				)
				.child(
					View::element("label")
						.attr("for", "survey-question")
						.child("Question"),
				)
				.child(
					View::element("textarea")
						.attr("id", "survey-question")
						.attr("name", "question"),
				)
				.child(
					View::element("button")
						.attr("type", "submit")
						.child("Create"),
				),
		)
		.into()
}

/// A single survey, identified by the `id` route parameter.
pub fn survey(base: &str, current: &RouteMatch) -> View {
	let id = current.param("id").unwrap_or_default().to_string();

	View::element("section")
		.attr("class", "survey")
		.attr("data-survey-id", id.clone())
		.child(View::element("h1").child("View Survey"))
		.child(View::element("p").child(format!("Survey #{}", id)))
		.child(
			View::element("a")
				.attr("href", format!("{}/", base))
				.child("Back to surveys"),
		)
		.into()
}

/// Application shell: navigation plus the active route's view.
///
/// The container carries the route's transition name as `data-transition`.
pub fn root(base: &str, current: Option<&RouteMatch>) -> View {
	let nav = View::element("nav")
		.child(
			View::element("a")
				.attr("href", format!("{}/", base))
				.child("Home"),
		)
		.child(
			View::element("a")
				.attr("href", format!("{}/new", base))
				.child("New Survey"),
		);

	let mut main = View::element("main").attr("class", "route-view");
	if let Some(current) = current {
		if let Some(transition) = &current.meta().transition {
			main = main.attr("data-transition", transition.clone());
		}
		main = main.child(current.render());
	}

	View::element("div")
		.attr("id", "survey-app")
		.child(nav)
		.child(main)
		.into()
}
