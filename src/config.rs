//! Application configuration.
//!
//! Values are fixed at build time: the base path comes from the `BASE_URL`
//! environment variable of the build, everything else has a default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the page element the application mounts into.
pub const MOUNT_ID: &str = "app";

/// Title used when the active route has none.
pub const FALLBACK_TITLE: &str = "Survey App";

/// Error raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// The base URL is not an absolute path.
	#[error("Invalid base URL '{0}': expected an absolute path such as '/' or '/survey/'")]
	InvalidBaseUrl(String),
	/// The configuration document could not be parsed.
	#[error("Failed to parse configuration: {0}")]
	Parse(String),
}

/// Frontend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Path prefix the application is served under.
	pub base_url: String,
	/// Id of the mount element.
	pub mount_id: String,
	/// Document title for routes without a title.
	pub fallback_title: String,
	/// Whether to print the development-mode notice on startup.
	pub production_tip: bool,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			base_url: "/".to_string(),
			mount_id: MOUNT_ID.to_string(),
			fallback_title: FALLBACK_TITLE.to_string(),
			production_tip: false,
		}
	}
}

impl AppConfig {
	/// Builds the configuration baked in at compile time.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidBaseUrl`] if `BASE_URL` was set to
	/// something other than an absolute path.
	pub fn from_build_env() -> Result<Self, ConfigError> {
		Self::default().with_base_url(option_env!("BASE_URL").unwrap_or("/"))
	}

	/// Parses a JSON configuration document; missing keys take defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self =
			serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
		let base_url = config.base_url.clone();
		config.with_base_url(&base_url)
	}

	/// Sets and validates the base URL.
	///
	/// Trailing slashes are trimmed (`/survey/` becomes `/survey`), an empty
	/// value means `/`.
	pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
		let trimmed = base_url.trim();
		if trimmed.is_empty() {
			self.base_url = "/".to_string();
			return Ok(self);
		}
		if !trimmed.starts_with('/')
			|| trimmed.starts_with("//")
			|| trimmed.contains(['?', '#', ' '])
		{
			return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
		}

		let normalized = trimmed.trim_end_matches('/');
		self.base_url = if normalized.is_empty() {
			"/".to_string()
		} else {
			normalized.to_string()
		};
		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_config() {
		let config = AppConfig::default();

		assert_eq!(config.base_url, "/");
		assert_eq!(config.mount_id, "app");
		assert_eq!(config.fallback_title, "Survey App");
		assert!(!config.production_tip);
	}

	#[rstest]
	#[case("", "/")]
	#[case("/", "/")]
	#[case("/survey/", "/survey")]
	#[case("/survey", "/survey")]
	#[case(" /a/b/ ", "/a/b")]
	fn test_base_url_normalization(#[case] raw: &str, #[case] expected: &str) {
		let config = AppConfig::default().with_base_url(raw).unwrap();
		assert_eq!(config.base_url, expected);
	}

	#[rstest]
	#[case("survey")]
	#[case("//cdn.example.com")]
	#[case("/survey?x=1")]
	#[case("/a b")]
	fn test_base_url_rejected(#[case] raw: &str) {
		let result = AppConfig::default().with_base_url(raw);
		assert_eq!(result, Err(ConfigError::InvalidBaseUrl(raw.to_string())));
	}

	#[rstest]
	fn test_from_json_fills_defaults() {
		// Arrange
		let json = r#"{ "base_url": "/surveys/", "production_tip": true }"#;

		// Act
		let config = AppConfig::from_json(json).unwrap();

		// Assert
		assert_eq!(config.base_url, "/surveys");
		assert_eq!(config.mount_id, MOUNT_ID);
		assert_eq!(config.fallback_title, FALLBACK_TITLE);
		assert!(config.production_tip);
	}

	#[rstest]
	fn test_from_json_rejects_garbage() {
		let result = AppConfig::from_json("{ not json");
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}

	#[rstest]
	fn test_from_build_env_is_valid() {
		let config = AppConfig::from_build_env().unwrap();
		assert!(config.base_url.starts_with('/'));
	}
}
