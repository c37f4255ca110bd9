//! # Survey App frontend
//!
//! Client-side shell of the Survey App: a WASM single-page application
//! with history-mode routing between the survey list, the survey creation
//! form and individual surveys.
//!
//! ## Routes
//!
//! | Path | Name | Title | Transition |
//! |------|------|-------|------------|
//! | `/` | `Home` | Home - Survey App | `fade` |
//! | `/new` | `SurveyForm` | Create New Survey | `slide` |
//! | `/survey/:id` | `Survey` | View Survey | `slide` |
//! | anything else | | redirects to `/` | |
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - Readable panic messages in the browser console
//! - `debug-hooks` - Router debug logging (debug builds only)
//!
//! ## Quick Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use survey_frontend::{App, AppConfig};
//! use survey_router::{MemoryDocument, MemoryHistory};
//!
//! let document = Rc::new(MemoryDocument::with_element("app"));
//! let app = App::new(AppConfig::default(), Box::new(MemoryHistory::new("/new")), document.clone())?;
//! app.mount()?;
//! assert_eq!(survey_router::Document::title(&*document), "Create New Survey");
//! ```

#![warn(missing_docs)]

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod config;
pub mod error;
pub mod routes;
pub mod views;

pub use app::App;
pub use config::{AppConfig, ConfigError, FALLBACK_TITLE, MOUNT_ID};
pub use error::AppError;
pub use routes::{build_router, survey_routes};

/// Re-export of the router crate.
pub use survey_router as router;
