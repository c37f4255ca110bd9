//! Application errors.

use crate::config::ConfigError;
use survey_router::{DocumentError, RouterError};
use thiserror::Error;

/// Error raised while starting or running the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
	/// The element to mount into does not exist.
	#[error("No #{0} element found")]
	MountTargetMissing(String),
	/// `mount` was called twice.
	#[error("Application is already mounted")]
	AlreadyMounted,
	/// Invalid configuration.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Routing failed.
	#[error(transparent)]
	Router(#[from] RouterError),
	/// The page could not be accessed.
	#[error("Document error: {0}")]
	Document(DocumentError),
}

impl From<DocumentError> for AppError {
	fn from(err: DocumentError) -> Self {
		match err {
			DocumentError::MissingElement(id) => Self::MountTargetMissing(id),
			other => Self::Document(other),
		}
	}
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
	fn from(err: AppError) -> Self {
		wasm_bindgen::JsValue::from_str(&err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_element_maps_to_mount_target() {
		let err: AppError = DocumentError::MissingElement("app".to_string()).into();

		assert_eq!(err, AppError::MountTargetMissing("app".to_string()));
		assert_eq!(err.to_string(), "No #app element found");
	}

	#[rstest]
	fn test_other_document_errors_are_wrapped() {
		let err: AppError = DocumentError::NoWindow.into();
		assert_eq!(err, AppError::Document(DocumentError::NoWindow));
	}

	#[rstest]
	fn test_router_error_is_transparent() {
		let err: AppError = RouterError::NotFound("/x".to_string()).into();
		assert_eq!(
			err.to_string(),
			RouterError::NotFound("/x".to_string()).to_string()
		);
	}
}
