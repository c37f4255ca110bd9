//! Access to the page the router runs in.
//!
//! The router and its hooks touch the page only through [`Document`]:
//! the title, the viewport scroll offset and the mount point.

use crate::scroll::ScrollPosition;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Error raised by page access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	/// No `window` object is available.
	#[error("No window object")]
	NoWindow,
	/// No `document` object is available.
	#[error("No document object")]
	NoDocument,
	/// No element with the given id exists.
	#[error("No #{0} element found")]
	MissingElement(String),
}

/// The page the application renders into.
pub trait Document {
	/// Returns the document title.
	fn title(&self) -> String;

	/// Sets the document title.
	fn set_title(&self, title: &str);

	/// Returns the current viewport scroll offset.
	fn scroll_position(&self) -> ScrollPosition;

	/// Scrolls the viewport.
	fn scroll_to(&self, position: ScrollPosition);

	/// Replaces the content of the element with id `element_id`.
	fn mount(&self, element_id: &str, html: &str) -> Result<(), DocumentError>;
}

/// In-memory page used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
	title: RefCell<String>,
	scroll: RefCell<ScrollPosition>,
	elements: RefCell<HashMap<String, String>>,
}

impl MemoryDocument {
	/// Creates a page without elements.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a page holding one empty element with id `element_id`.
	pub fn with_element(element_id: impl Into<String>) -> Self {
		let doc = Self::default();
		doc.elements
			.borrow_mut()
			.insert(element_id.into(), String::new());
		doc
	}

	/// Returns the HTML content of an element.
	pub fn inner_html(&self, element_id: &str) -> Option<String> {
		self.elements.borrow().get(element_id).cloned()
	}
}

impl Document for MemoryDocument {
	fn title(&self) -> String {
		self.title.borrow().clone()
	}

	fn set_title(&self, title: &str) {
		*self.title.borrow_mut() = title.to_string();
	}

	fn scroll_position(&self) -> ScrollPosition {
		*self.scroll.borrow()
	}

	fn scroll_to(&self, position: ScrollPosition) {
		*self.scroll.borrow_mut() = position;
	}

	fn mount(&self, element_id: &str, html: &str) -> Result<(), DocumentError> {
		let mut elements = self.elements.borrow_mut();
		let content = elements
			.get_mut(element_id)
			.ok_or_else(|| DocumentError::MissingElement(element_id.to_string()))?;
		*content = html.to_string();
		Ok(())
	}
}

/// The browser page (`window.document`).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDocument;

#[cfg(target_arch = "wasm32")]
impl BrowserDocument {
	/// Creates a handle to the window's document.
	pub fn new() -> Self {
		Self
	}

	fn document() -> Result<web_sys::Document, DocumentError> {
		web_sys::window()
			.ok_or(DocumentError::NoWindow)?
			.document()
			.ok_or(DocumentError::NoDocument)
	}
}

#[cfg(target_arch = "wasm32")]
impl Document for BrowserDocument {
	fn title(&self) -> String {
		Self::document().map(|d| d.title()).unwrap_or_default()
	}

	fn set_title(&self, title: &str) {
		if let Ok(document) = Self::document() {
			document.set_title(title);
		}
	}

	fn scroll_position(&self) -> ScrollPosition {
		web_sys::window()
			.map(|w| {
				ScrollPosition::new(
					w.page_x_offset().unwrap_or_default(),
					w.page_y_offset().unwrap_or_default(),
				)
			})
			.unwrap_or_default()
	}

	fn scroll_to(&self, position: ScrollPosition) {
		if let Some(window) = web_sys::window() {
			window.scroll_to_with_x_and_y(position.x, position.y);
		}
	}

	fn mount(&self, element_id: &str, html: &str) -> Result<(), DocumentError> {
		let element = Self::document()?
			.get_element_by_id(element_id)
			.ok_or_else(|| DocumentError::MissingElement(element_id.to_string()))?;
		// SAFETY(XSS): callers pass View::render_to_string() output, which
		// escapes all text content and attribute values.
		element.set_inner_html(html);
		Ok(())
	}
}
