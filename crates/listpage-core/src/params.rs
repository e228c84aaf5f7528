//! Request parameters and their sanitation
//!
//! Pagination input arrives as untrusted query-string values. Nothing here
//! ever fails: missing, zero, negative or non-numeric values are replaced
//! with a default and the substitution is logged at debug level.

use std::collections::{BTreeMap, HashMap};

/// Items per page used when neither the request nor the settings give a usable value
pub const DEFAULT_PER_PAGE: usize = 10;

/// Page number used when the request does not give a usable value
pub const DEFAULT_PAGE: usize = 1;

/// A read-only source of request parameters
pub trait ParamSource {
	/// Returns the raw value for `key`, if present
	fn param(&self, key: &str) -> Option<&str>;
}

impl ParamSource for HashMap<String, String> {
	fn param(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

impl ParamSource for BTreeMap<String, String> {
	fn param(&self, key: &str) -> Option<&str> {
		self.get(key).map(String::as_str)
	}
}

/// Decoded query-string pairs in their original order
///
/// Repeated keys are kept; lookups return the last occurrence.
///
/// # Examples
///
/// ```
/// use listpage_core::params::{ParamSource, QueryParams};
///
/// let params = QueryParams::from_query("?per_page=5&paged=2&q=rust+book");
/// assert_eq!(params.param("per_page"), Some("5"));
/// assert_eq!(params.param("q"), Some("rust book"));
/// assert_eq!(params.param("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	/// Creates an empty parameter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a form-urlencoded query string; a leading `?` is ignored
	pub fn from_query(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		url::form_urlencoded::parse(query.as_bytes())
			.into_owned()
			.collect()
	}

	/// Returns the last value recorded for `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.rev()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Appends a pair, keeping any earlier value for the same key
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((key.into(), value.into()));
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			pairs: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl ParamSource for QueryParams {
	fn param(&self, key: &str) -> Option<&str> {
		self.get(key)
	}
}

/// Loosely coerces a string to an integer
///
/// Leading whitespace is skipped, an optional sign is read, then the longest
/// run of ASCII digits. Anything that does not start that way is 0. The
/// result saturates at the `i64` bounds.
///
/// # Examples
///
/// ```
/// use listpage_core::params::coerce_int;
///
/// assert_eq!(coerce_int("12"), 12);
/// assert_eq!(coerce_int("12abc"), 12);
/// assert_eq!(coerce_int("  7"), 7);
/// assert_eq!(coerce_int("2.9"), 2);
/// assert_eq!(coerce_int("-3"), -3);
/// assert_eq!(coerce_int("abc"), 0);
/// assert_eq!(coerce_int(""), 0);
/// ```
pub fn coerce_int(raw: &str) -> i64 {
	let trimmed = raw.trim_start();
	let (negative, digits) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};

	let mut value: i64 = 0;
	for b in digits.bytes().take_while(u8::is_ascii_digit) {
		let digit = i64::from(b - b'0');
		value = if negative {
			value.saturating_mul(10).saturating_sub(digit)
		} else {
			value.saturating_mul(10).saturating_add(digit)
		};
	}
	value
}

// A zero `default` is replaced by `fallback`, so the result is always >= 1.
fn sanitize_with(key: &str, raw: Option<&str>, default: usize, fallback: usize) -> usize {
	let default = if default == 0 { fallback } else { default };
	let Some(raw) = raw else {
		return default;
	};

	match usize::try_from(coerce_int(raw)) {
		Ok(value) if value > 0 => value,
		_ => {
			tracing::debug!(key, raw, default, "unusable pagination parameter, using default");
			default
		}
	}
}

/// Sanitizes a raw value, replacing unusable input with `default`
///
/// A `default` of zero is treated as [`DEFAULT_PER_PAGE`].
///
/// # Examples
///
/// ```
/// use listpage_core::params::sanitize;
///
/// assert_eq!(sanitize(Some("25"), 10), 25);
/// assert_eq!(sanitize(Some("0"), 10), 10);
/// assert_eq!(sanitize(Some("ten"), 10), 10);
/// assert_eq!(sanitize(None, 4), 4);
/// ```
pub fn sanitize(raw: Option<&str>, default: usize) -> usize {
	sanitize_with("value", raw, default, DEFAULT_PER_PAGE)
}

/// Sanitizes the items-per-page parameter
///
/// `configured_default` applies when the parameter is missing or unusable;
/// a configured default of zero falls back to [`DEFAULT_PER_PAGE`].
pub fn sanitize_per_page(raw: Option<&str>, configured_default: usize) -> usize {
	sanitize_with("per_page", raw, configured_default, DEFAULT_PER_PAGE)
}

/// Sanitizes the current-page parameter, falling back to page 1
pub fn sanitize_paged(raw: Option<&str>) -> usize {
	sanitize_with("paged", raw, DEFAULT_PAGE, DEFAULT_PAGE)
}
