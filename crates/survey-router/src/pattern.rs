//! Path pattern matching for client-side routes.
//!
//! Supported syntax:
//! - `/new` - Exact match
//! - `/survey/:id` or `/survey/{id}` - Single path segment parameter
//! - `/files/{path:*}` - Rest of the path, separators included
//! - `*` - Catch-all, captured as `pathMatch`
//!
//! Matching is case-insensitive and tolerates one trailing slash, so
//! `/new`, `/new/` and `/NEW` all match the `/new` pattern.

use crate::error::RouterError;
use std::collections::HashMap;

/// Parameter name bound by the bare `*` catch-all pattern.
pub const CATCH_ALL_PARAM: &str = "pathMatch";

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
	Literal(String),
	Param { name: String, rest: bool },
}

/// A compiled route path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	pattern: String,
	tokens: Vec<Token>,
	regex: regex::Regex,
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPattern`] if the pattern is too long,
	/// has too many segments, contains an unterminated or empty parameter,
	/// or does not start with `/` (the bare `*` catch-all excepted).
	pub fn new(pattern: &str) -> Result<Self, RouterError> {
		let invalid = |reason: String| RouterError::InvalidPattern {
			pattern: pattern.to_string(),
			reason,
		};

		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(invalid(format!(
				"length {} exceeds maximum allowed length of {} bytes",
				pattern.len(),
				MAX_PATTERN_LENGTH
			)));
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(invalid(format!(
				"{} path segments, exceeding maximum of {}",
				segment_count, MAX_PATH_SEGMENTS
			)));
		}

		let tokens = if pattern == "*" {
			vec![Token::Param {
				name: CATCH_ALL_PARAM.to_string(),
				rest: true,
			}]
		} else if pattern.starts_with('/') {
			Self::tokenize(pattern).map_err(invalid)?
		} else {
			return Err(invalid("pattern must start with '/'".to_string()));
		};

		let regex_str = Self::compile(&tokens);
		let regex = regex::RegexBuilder::new(&regex_str)
			.case_insensitive(true)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| invalid(format!("failed to compile regex: {}", e)))?;

		let param_names = tokens
			.iter()
			.filter_map(|t| match t {
				Token::Param { name, .. } => Some(name.clone()),
				Token::Literal(_) => None,
			})
			.collect();

		Ok(Self {
			pattern: pattern.to_string(),
			tokens,
			regex,
			param_names,
		})
	}

	fn tokenize(pattern: &str) -> Result<Vec<Token>, String> {
		let mut tokens = Vec::new();
		let mut literal = String::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut body = String::new();
					let mut closed = false;
					for next in chars.by_ref() {
						if next == '}' {
							closed = true;
							break;
						}
						body.push(next);
					}
					if !closed {
						return Err("unterminated '{' parameter".to_string());
					}
					let (name, rest) = match body.strip_suffix(":*") {
						Some(name) => (name.to_string(), true),
						None => (body, false),
					};
					Self::check_param_name(&name)?;
					if !literal.is_empty() {
						tokens.push(Token::Literal(std::mem::take(&mut literal)));
					}
					tokens.push(Token::Param { name, rest });
				}
				':' => {
					let mut name = String::new();
					while let Some(&next) = chars.peek() {
						if next.is_ascii_alphanumeric() || next == '_' {
							name.push(next);
							chars.next();
						} else {
							break;
						}
					}
					Self::check_param_name(&name)?;
					if !literal.is_empty() {
						tokens.push(Token::Literal(std::mem::take(&mut literal)));
					}
					tokens.push(Token::Param { name, rest: false });
				}
				_ => literal.push(c),
			}
		}

		if !literal.is_empty() {
			tokens.push(Token::Literal(literal));
		}
		Ok(tokens)
	}

	fn check_param_name(name: &str) -> Result<(), String> {
		if name.is_empty() {
			return Err("empty parameter name".to_string());
		}
		if name.starts_with(|c: char| c.is_ascii_digit())
			|| !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
		{
			return Err(format!("invalid parameter name '{}'", name));
		}
		Ok(())
	}

	fn compile(tokens: &[Token]) -> String {
		let mut regex_str = String::from("^");

		for (i, token) in tokens.iter().enumerate() {
			let is_last = i + 1 == tokens.len();
			match token {
				Token::Literal(text) => {
					// The trailing slash is re-added as optional below
					let text = if is_last && text.len() > 1 {
						text.strip_suffix('/').unwrap_or(text)
					} else if is_last && text == "/" {
						""
					} else {
						text.as_str()
					};
					regex_str.push_str(&regex::escape(text));
				}
				Token::Param { name, rest: true } => {
					regex_str.push_str(&format!("(?P<{}>.*)", name));
				}
				Token::Param { name, rest: false } => {
					regex_str.push_str(&format!("(?P<{}>[^/]+)", name));
				}
			}
		}

		let ends_with_rest = matches!(tokens.last(), Some(Token::Param { rest: true, .. }));
		if !ends_with_rest {
			regex_str.push_str("/?");
		}
		regex_str.push('$');
		regex_str
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether this is the bare `*` catch-all.
	pub fn is_catch_all(&self) -> bool {
		self.pattern == "*"
	}

	/// Returns whether this pattern has no parameters.
	pub fn is_exact(&self) -> bool {
		self.param_names.is_empty()
	}

	/// Attempts to match a path (without query or hash) against this pattern.
	///
	/// Returns the named parameters and the parameter values in pattern
	/// order. Values are percent-decoded; a value that does not decode to
	/// UTF-8 is kept verbatim.
	pub fn matches(&self, path: &str) -> Option<(HashMap<String, String>, Vec<String>)> {
		let caps = self.regex.captures(path)?;

		let param_values: Vec<String> = self
			.param_names
			.iter()
			.filter_map(|name| caps.name(name))
			.map(|m| decode(m.as_str()))
			.collect();
		let params = self
			.param_names
			.iter()
			.cloned()
			.zip(param_values.iter().cloned())
			.collect();

		Some((params, param_values))
	}

	/// Checks if this pattern would match the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Generates a path from this pattern with the given parameters.
	///
	/// Segment parameters are percent-encoded; rest parameters are inserted
	/// as-is. Returns the name of the first missing parameter on failure.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Result<String, String> {
		let mut result = String::new();

		for token in &self.tokens {
			match token {
				Token::Literal(text) => result.push_str(text),
				Token::Param { name, rest } => {
					let value = params.get(name).ok_or_else(|| name.clone())?;
					if *rest {
						result.push_str(value);
					} else {
						result.push_str(&urlencoding::encode(value));
					}
				}
			}
		}

		if result.is_empty() {
			result.push('/');
		}
		Ok(result)
	}
}

fn decode(raw: &str) -> String {
	urlencoding::decode(raw)
		.map(|s| s.into_owned())
		.unwrap_or_else(|_| raw.to_string())
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
