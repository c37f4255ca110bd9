//! WASM entry point for the Survey App.

use crate::app::App;
use crate::config::AppConfig;
use std::rc::Rc;
use survey_router::{BrowserHistory, warn_log};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, MouseEvent, PopStateEvent, window};

/// WASM entry point
///
/// Called when the module is loaded: builds the application, mounts it on
/// `#app` and wires link clicks and back/forward to the router.
#[allow(clippy::main_recursion)]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let window = window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	let config = AppConfig::from_build_env().map_err(crate::AppError::from)?;
	let app = App::browser(config)?;
	app.mount()?;
	let router = Rc::clone(app.router());

	// Link clicks (event delegation)
	let click_router = Rc::clone(&router);
	let link_handler = Closure::wrap(Box::new(move |event: Event| {
		// Links outside the application base are left to the browser.
		if let Some(location) =
			link_href(&event).and_then(|href| click_router.link_location(&href))
		{
			event.prevent_default();
			if let Err(e) = click_router.push(&location) {
				warn_log!("Navigation to {} failed: {}", location, e);
			}
		}
	}) as Box<dyn FnMut(_)>);
	document.add_event_listener_with_callback("click", link_handler.as_ref().unchecked_ref())?;
	link_handler.forget();

	// Back/forward
	let popstate_handler = Closure::wrap(Box::new(move |event: Event| {
		let state = event
			.dyn_ref::<PopStateEvent>()
			.and_then(|e| BrowserHistory::decode_state(&e.state()));
		if let Err(e) = router.handle_popstate(state) {
			warn_log!("Back/forward navigation failed: {}", e);
		}
	}) as Box<dyn FnMut(_)>);
	window
		.add_event_listener_with_callback("popstate", popstate_handler.as_ref().unchecked_ref())?;
	popstate_handler.forget();

	Ok(())
}

/// Returns the `href` of the link a plain left click landed on.
fn link_href(event: &Event) -> Option<String> {
	let mouse = event.dyn_ref::<MouseEvent>()?;
	if mouse.default_prevented()
		|| mouse.button() != 0
		|| mouse.ctrl_key()
		|| mouse.meta_key()
		|| mouse.shift_key()
		|| mouse.alt_key()
	{
		return None;
	}

	let mut current = event.target()?.dyn_into::<HtmlElement>().ok();
	while let Some(el) = current {
		if el.tag_name().eq_ignore_ascii_case("a") {
			if el.get_attribute("target").is_some_and(|t| t == "_blank")
				|| el.has_attribute("download")
			{
				return None;
			}
			return el.get_attribute("href");
		}
		current = el
			.parent_element()
			.and_then(|p| p.dyn_into::<HtmlElement>().ok());
	}
	None
}
