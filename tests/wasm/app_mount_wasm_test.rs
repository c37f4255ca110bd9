//! Browser bootstrap tests.
//!
//! Run with: wasm-pack test --chrome --headless

#![cfg(target_arch = "wasm32")]

use survey_frontend::{App, AppConfig, AppError};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn create_mount_point(id: &str) {
	let document = web_sys::window().unwrap().document().unwrap();
	let element = document.create_element("div").unwrap();
	element.set_id(id);
	document.body().unwrap().append_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_browser_mount_renders_into_element() {
	// Arrange
	create_mount_point("wasm-app");
	let config = AppConfig {
		mount_id: "wasm-app".to_string(),
		..AppConfig::default()
	};
	let app = App::browser(config).unwrap();

	// Act
	app.mount().unwrap();
	app.router().push("/new").unwrap();

	// Assert
	let document = web_sys::window().unwrap().document().unwrap();
	let html = document.get_element_by_id("wasm-app").unwrap().inner_html();
	assert!(html.contains("survey-form"));
	assert_eq!(document.title(), "Create New Survey");
}

#[wasm_bindgen_test]
fn test_browser_mount_missing_element() {
	let config = AppConfig {
		mount_id: "does-not-exist".to_string(),
		..AppConfig::default()
	};
	let app = App::browser(config).unwrap();

	assert_eq!(
		app.mount().unwrap_err(),
		AppError::MountTargetMissing("does-not-exist".to_string())
	);
}
