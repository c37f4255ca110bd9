//! Console logging for router and application code.
//!
//! Browser builds write to the devtools console, native builds (tests,
//! tooling) emit `tracing` events. Release builds drop every call; the
//! format arguments are still type-checked so no binding goes unused.
//!
//! | Macro | Sink on wasm32 | Sink elsewhere | Enabled when |
//! |-------|----------------|----------------|--------------|
//! | `debug_log!` | `console.debug` | `tracing::debug!` | `debug_assertions` and `debug-hooks` |
//! | `info_log!` | `console.info` | `tracing::info!` | `debug_assertions` |
//! | `warn_log!` | `console.warn` | `tracing::warn!` | `debug_assertions` |
//! | `error_log!` | `console.error` | `tracing::error!` | `debug_assertions` |
//!
//! ```ignore
//! use survey_router::{info_log, warn_log};
//!
//! info_log!("Navigated to {}", to.full_path());
//! warn_log!("Navigation to {} aborted: {}", target, reason);
//! ```

/// Debug-level message, only with the `debug-hooks` feature.
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Debug-level message, only with the `debug-hooks` feature.
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!("{}", format!($($arg)*));
	}};
}

/// Disabled `debug_log!`.
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format_args!($($arg)*);
		}
	}};
}

/// Info-level message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Info-level message.
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!("{}", format!($($arg)*));
	}};
}

/// Disabled `info_log!`.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format_args!($($arg)*);
		}
	}};
}

/// Warning. Used for aborted or failed navigations.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Warning. Used for aborted or failed navigations.
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!("{}", format!($($arg)*));
	}};
}

/// Disabled `warn_log!`.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format_args!($($arg)*);
		}
	}};
}

/// Error that the application cannot surface otherwise (e.g. a failed
/// re-render inside a hook).
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Error that the application cannot surface otherwise (e.g. a failed
/// re-render inside a hook).
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!("{}", format!($($arg)*));
	}};
}

/// Disabled `error_log!`.
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		if false {
			let _ = format_args!($($arg)*);
		}
	}};
}

#[cfg(test)]
mod tests {
	use crate::{debug_log, error_log, info_log, warn_log};
	use rstest::rstest;

	#[rstest]
	fn test_macros_accept_format_arguments() {
		let path = "/survey/42";
		debug_log!("Resolving {}", path);
		info_log!("Navigated to {}", path);
		warn_log!("Navigation to {} aborted: {:?}", path, Some("locked"));
		error_log!("Failed to render {}: {}", path, 1);
	}

	#[rstest]
	fn test_macros_accept_plain_literals() {
		debug_log!("redirect");
		info_log!("mounted");
		warn_log!("aborted");
		error_log!("render failed");
	}
}
