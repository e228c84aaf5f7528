//! Query-string key names and the override hook
//!
//! Two listings on the same page need different keys so their pagination
//! does not collide. Keys come from settings and may then be rewritten by
//! an embedding application through a [`KeyFilter`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default key for the items-per-page parameter
pub const DEFAULT_PER_PAGE_KEY: &str = "per_page";

/// Default key for the current-page parameter
///
/// `page` is avoided because hosts commonly reserve it for their own routing.
pub const DEFAULT_PAGED_KEY: &str = "paged";

/// Identifies one of the two pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKey {
	PerPage,
	Paged,
}

impl fmt::Display for ParamKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::PerPage => write!(f, "per_page key"),
			Self::Paged => write!(f, "paged key"),
		}
	}
}

/// Override hook for parameter key names
///
/// Any `Fn(ParamKey, String) -> String` closure is a filter.
///
/// # Examples
///
/// ```
/// use listpage_core::keys::{ParamKey, QueryKeys};
///
/// let keys = QueryKeys::default().filtered(&|key: ParamKey, name: String| match key {
///     ParamKey::Paged => "books_page".to_string(),
///     ParamKey::PerPage => name,
/// });
/// assert_eq!(keys.paged, "books_page");
/// assert_eq!(keys.per_page, "per_page");
/// ```
pub trait KeyFilter {
	/// Returns the key name to use in place of `name`
	fn filter(&self, key: ParamKey, name: String) -> String;
}

impl<F> KeyFilter for F
where
	F: Fn(ParamKey, String) -> String,
{
	fn filter(&self, key: ParamKey, name: String) -> String {
		self(key, name)
	}
}

/// Filter that leaves key names untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl KeyFilter for NoFilter {
	fn filter(&self, _key: ParamKey, name: String) -> String {
		name
	}
}

/// The resolved query-string keys for one paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryKeys {
	pub per_page: String,
	pub paged: String,
}

impl Default for QueryKeys {
	fn default() -> Self {
		Self {
			per_page: DEFAULT_PER_PAGE_KEY.to_string(),
			paged: DEFAULT_PAGED_KEY.to_string(),
		}
	}
}

impl QueryKeys {
	pub fn new(per_page: impl Into<String>, paged: impl Into<String>) -> Self {
		Self {
			per_page: per_page.into(),
			paged: paged.into(),
		}
	}

	/// Returns the key name for `key`
	pub fn get(&self, key: ParamKey) -> &str {
		match key {
			ParamKey::PerPage => &self.per_page,
			ParamKey::Paged => &self.paged,
		}
	}

	/// Returns true if `name` is one of the two pagination keys
	pub fn contains(&self, name: &str) -> bool {
		self.per_page == name || self.paged == name
	}

	/// Runs both keys through `filter`
	///
	/// A filter returning an empty name is ignored for that key. If the
	/// filtered keys collide, both keys are left unfiltered.
	pub fn filtered(self, filter: &impl KeyFilter) -> Self {
		let filtered = Self {
			per_page: apply(filter, ParamKey::PerPage, self.per_page.clone()),
			paged: apply(filter, ParamKey::Paged, self.paged.clone()),
		};
		if filtered.per_page == filtered.paged {
			tracing::warn!(
				key = %filtered.paged,
				"key filter mapped both pagination keys to one name, keeping originals"
			);
			return self;
		}
		filtered
	}
}

fn apply(filter: &impl KeyFilter, key: ParamKey, name: String) -> String {
	let filtered = filter.filter(key, name.clone());
	if filtered.is_empty() {
		tracing::warn!(
			%key,
			original = %name,
			"key filter returned an empty name, keeping original"
		);
		name
	} else {
		if filtered != name {
			tracing::debug!(%key, from = %name, to = %filtered, "pagination key overridden");
		}
		filtered
	}
}
