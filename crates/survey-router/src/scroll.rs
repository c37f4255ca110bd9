//! Scroll restoration.

use crate::route::RouteMatch;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

/// A viewport scroll offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset.
	pub y: f64,
}

impl ScrollPosition {
	/// The coordinate origin.
	pub const TOP: Self = Self { x: 0.0, y: 0.0 };

	/// Creates a new position.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Decides where the viewport scrolls after a navigation.
///
/// Receives the target, the previous route and the position saved for the
/// target history entry (only present for back/forward traversals).
/// Returning `None` leaves the viewport untouched.
pub type ScrollBehavior =
	Box<dyn Fn(&RouteMatch, Option<&RouteMatch>, Option<ScrollPosition>) -> Option<ScrollPosition>>;

/// Restores the saved position when there is one, otherwise scrolls to top.
pub fn restore_or_top(
	_to: &RouteMatch,
	_from: Option<&RouteMatch>,
	saved: Option<ScrollPosition>,
) -> Option<ScrollPosition> {
	Some(saved.unwrap_or(ScrollPosition::TOP))
}

/// Scroll positions recorded per history entry key.
#[derive(Debug, Default)]
pub struct SavedPositions {
	positions: RefCell<HashMap<u64, ScrollPosition>>,
}

impl SavedPositions {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the position of the entry identified by `key`.
	pub fn save(&self, key: u64, position: ScrollPosition) {
		self.positions.borrow_mut().insert(key, position);
	}

	/// Returns the position recorded for `key`.
	pub fn get(&self, key: u64) -> Option<ScrollPosition> {
		self.positions.borrow().get(&key).copied()
	}

	/// Forgets the position recorded for `key`.
	pub fn remove(&self, key: u64) {
		self.positions.borrow_mut().remove(&key);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::route::RouteEntry;
	use crate::view::View;
	use rstest::rstest;
	use std::rc::Rc;

	fn home_match() -> RouteMatch {
		RouteMatch {
			route: Rc::new(RouteEntry::new("/", |_: &RouteMatch| View::Empty).unwrap()),
			path: "/".to_string(),
			params: HashMap::new(),
			param_values: Vec::new(),
			query: HashMap::new(),
			hash: None,
			redirected_from: None,
		}
	}

	#[rstest]
	fn test_forward_navigation_scrolls_to_top() {
		let to = home_match();
		assert_eq!(restore_or_top(&to, None, None), Some(ScrollPosition::TOP));
	}

	#[rstest]
	fn test_saved_position_is_restored() {
		let to = home_match();
		let saved = ScrollPosition::new(0.0, 640.0);
		assert_eq!(restore_or_top(&to, None, Some(saved)), Some(saved));
	}

	#[rstest]
	fn test_saved_positions_store() {
		// Arrange
		let store = SavedPositions::new();

		// Act
		store.save(3, ScrollPosition::new(10.0, 20.0));
		store.save(3, ScrollPosition::new(0.0, 50.0));

		// Assert
		assert_eq!(store.get(3), Some(ScrollPosition::new(0.0, 50.0)));
		assert_eq!(store.get(4), None);
		store.remove(3);
		assert_eq!(store.get(3), None);
	}
}
