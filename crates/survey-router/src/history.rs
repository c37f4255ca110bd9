//! History backends.
//!
//! [`BrowserHistory`] drives the History API (`pushState`, `replaceState`,
//! `popstate`) on `wasm32`. [`MemoryHistory`] keeps the entry stack in
//! memory and backs native builds and tests.

use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

/// State stored with every history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// Unique key of the entry, used to look up saved scroll positions.
	pub key: u64,
	/// Full location of the entry, base path included.
	pub location: String,
}

impl HistoryState {
	/// Creates a new state.
	pub fn new(key: u64, location: impl Into<String>) -> Self {
		Self {
			key,
			location: location.into(),
		}
	}
}

/// How a navigation affects the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// A new entry is pushed.
	Push,
	/// The current entry is replaced.
	Replace,
	/// The user moved through existing entries (back/forward).
	Pop,
}

/// A session history backend.
pub trait History {
	/// Returns the current full location (path, query and hash).
	fn location(&self) -> String;

	/// Returns the state of the current entry, if one was recorded.
	fn state(&self) -> Option<HistoryState>;

	/// Pushes a new entry.
	fn push(&self, state: &HistoryState) -> Result<(), RouterError>;

	/// Replaces the current entry.
	fn replace(&self, state: &HistoryState) -> Result<(), RouterError>;

	/// Moves `delta` entries through the stack.
	///
	/// Returns the new current state when the move completes synchronously.
	/// Backends that report traversals asynchronously (`popstate`) return
	/// `Ok(None)` and the router is driven by the event instead.
	fn go(&self, delta: i32) -> Result<Option<HistoryState>, RouterError>;

	/// Returns the first key the router should hand out.
	fn key_seed(&self) -> u64 {
		1
	}
}

/// In-memory history stack.
#[derive(Debug)]
pub struct MemoryHistory {
	entries: RefCell<Vec<HistoryState>>,
	index: Cell<usize>,
}

impl MemoryHistory {
	/// Creates a stack holding a single entry at `location` with key 0.
	pub fn new(location: impl Into<String>) -> Self {
		Self {
			entries: RefCell::new(vec![HistoryState::new(0, location)]),
			index: Cell::new(0),
		}
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Returns whether the stack is empty. It never is.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}

	/// Returns the index of the current entry.
	pub fn index(&self) -> usize {
		self.index.get()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl History for MemoryHistory {
	fn location(&self) -> String {
		self.entries.borrow()[self.index.get()].location.clone()
	}

	fn state(&self) -> Option<HistoryState> {
		self.entries.borrow().get(self.index.get()).cloned()
	}

	fn push(&self, state: &HistoryState) -> Result<(), RouterError> {
		let mut entries = self.entries.borrow_mut();
		let next = self.index.get() + 1;
		entries.truncate(next);
		entries.push(state.clone());
		self.index.set(next);
		Ok(())
	}

	fn replace(&self, state: &HistoryState) -> Result<(), RouterError> {
		self.entries.borrow_mut()[self.index.get()] = state.clone();
		Ok(())
	}

	fn go(&self, delta: i32) -> Result<Option<HistoryState>, RouterError> {
		let target = self.index.get() as i64 + i64::from(delta);
		let len = self.entries.borrow().len() as i64;
		if delta == 0 || target < 0 || target >= len {
			return Ok(None);
		}
		self.index.set(target as usize);
		Ok(self.state())
	}
}

/// History API backed history.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
	/// Creates a handle to the window's session history.
	pub fn new() -> Self {
		Self
	}

	fn history() -> Result<web_sys::History, RouterError> {
		web_sys::window()
			.ok_or_else(|| RouterError::History("No window object".to_string()))?
			.history()
			.map_err(|_| RouterError::History("History API unavailable".to_string()))
	}

	fn to_js(state: &HistoryState) -> Result<wasm_bindgen::JsValue, RouterError> {
		serde_json::to_string(state)
			.map(|json| wasm_bindgen::JsValue::from_str(&json))
			.map_err(|e| RouterError::History(e.to_string()))
	}

	/// Decodes a state previously written by this backend.
	pub fn decode_state(value: &wasm_bindgen::JsValue) -> Option<HistoryState> {
		value
			.as_string()
			.and_then(|json| serde_json::from_str(&json).ok())
	}
}

#[cfg(target_arch = "wasm32")]
impl History for BrowserHistory {
	fn location(&self) -> String {
		let Some(location) = web_sys::window().map(|w| w.location()) else {
			return "/".to_string();
		};
		let mut full = location.pathname().unwrap_or_else(|_| "/".to_string());
		full.push_str(&location.search().unwrap_or_default());
		full.push_str(&location.hash().unwrap_or_default());
		full
	}

	fn state(&self) -> Option<HistoryState> {
		Self::history()
			.ok()
			.and_then(|h| h.state().ok())
			.and_then(|s| Self::decode_state(&s))
	}

	fn push(&self, state: &HistoryState) -> Result<(), RouterError> {
		Self::history()?
			.push_state_with_url(&Self::to_js(state)?, "", Some(&state.location))
			.map_err(|e| RouterError::History(format!("{:?}", e)))
	}

	fn replace(&self, state: &HistoryState) -> Result<(), RouterError> {
		Self::history()?
			.replace_state_with_url(&Self::to_js(state)?, "", Some(&state.location))
			.map_err(|e| RouterError::History(format!("{:?}", e)))
	}

	fn go(&self, delta: i32) -> Result<Option<HistoryState>, RouterError> {
		Self::history()?
			.go_with_delta(delta)
			.map_err(|e| RouterError::History(format!("{:?}", e)))?;
		Ok(None)
	}

	fn key_seed(&self) -> u64 {
		// Entries from before a reload keep their keys; start past them.
		(js_sys::Date::now() as u64).saturating_mul(1000)
	}
}
