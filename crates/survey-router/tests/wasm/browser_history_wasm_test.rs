//! Browser backend tests.
//!
//! Run with: wasm-pack test --chrome --headless crates/survey-router

#![cfg(target_arch = "wasm32")]

use survey_router::{BrowserDocument, BrowserHistory, Document, History, HistoryState, ScrollPosition};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_push_state_updates_location_and_state() {
	let history = BrowserHistory::new();
	let state = HistoryState::new(42, "/survey/42?tab=votes");

	history.push(&state).unwrap();

	assert_eq!(history.location(), "/survey/42?tab=votes");
	assert_eq!(history.state(), Some(state));
}

#[wasm_bindgen_test]
fn test_replace_state_keeps_history_length() {
	let history = BrowserHistory::new();
	let length = web_sys::window().unwrap().history().unwrap().length().unwrap();

	history.replace(&HistoryState::new(7, "/new")).unwrap();

	let after = web_sys::window().unwrap().history().unwrap().length().unwrap();
	assert_eq!(length, after);
	assert_eq!(history.location(), "/new");
}

#[wasm_bindgen_test]
fn test_document_title_roundtrip() {
	let document = BrowserDocument::new();

	document.set_title("Create New Survey");

	assert_eq!(document.title(), "Create New Survey");
}

#[wasm_bindgen_test]
fn test_mount_missing_element_fails() {
	let document = BrowserDocument::new();

	assert!(document.mount("no-such-element", "<p></p>").is_err());
	document.scroll_to(ScrollPosition::TOP);
}
