//! Pagination settings
//!
//! Settings are plain serde data with defaults for every field, so an empty
//! TOML document is a valid configuration. Environment variables may
//! override the scalar fields after loading.
//!
//! ```toml
//! per_page_key = "per_page"
//! paged_key = "paged"
//! per_page = 10
//!
//! [links]
//! show_all = false
//! end_size = 1
//! mid_size = 2
//! ```

use crate::keys::{DEFAULT_PAGED_KEY, DEFAULT_PER_PAGE_KEY, KeyFilter, ParamKey, QueryKeys};
use crate::params::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for loading and validating settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {key}: {value:?}")]
	InvalidValue { key: String, value: String },

	#[error("The {0} must not be empty")]
	EmptyKey(ParamKey),

	#[error("per_page_key and paged_key are both {0:?}")]
	DuplicateKey(String),
}

/// How the page-link sequence is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkSettings {
	/// Emit every page instead of eliding far-away pages
	pub show_all: bool,
	/// Pages always shown at each end of the sequence
	pub end_size: usize,
	/// Pages shown on each side of the current page
	pub mid_size: usize,
	/// Emit previous/next links
	pub prev_next: bool,
	/// Label of the previous link (trusted markup)
	pub prev_text: String,
	/// Label of the next link (trusted markup)
	pub next_text: String,
}

impl Default for LinkSettings {
	fn default() -> Self {
		Self {
			show_all: false,
			end_size: 1,
			mid_size: 2,
			prev_next: true,
			prev_text: "&laquo;".to_string(),
			next_text: "&raquo;".to_string(),
		}
	}
}

impl LinkSettings {
	/// Emits one link per page with no elision
	pub fn show_all(mut self) -> Self {
		self.show_all = true;
		self
	}

	pub fn end_size(mut self, size: usize) -> Self {
		self.end_size = size;
		self
	}

	pub fn mid_size(mut self, size: usize) -> Self {
		self.mid_size = size;
		self
	}

	pub fn prev_next(mut self, enabled: bool) -> Self {
		self.prev_next = enabled;
		self
	}
}

/// Settings for one paginated listing
///
/// # Examples
///
/// ```
/// use listpage_core::settings::PaginationSettings;
///
/// let settings = PaginationSettings::from_toml_str("per_page = 20").unwrap();
/// assert_eq!(settings.per_page, 20);
/// assert_eq!(settings.paged_key, "paged");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationSettings {
	/// Query-string key carrying the items-per-page value
	pub per_page_key: String,
	/// Query-string key carrying the current page number
	pub paged_key: String,
	/// Items per page when the request does not specify a usable value
	pub per_page: usize,
	pub links: LinkSettings,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			per_page_key: DEFAULT_PER_PAGE_KEY.to_string(),
			paged_key: DEFAULT_PAGED_KEY.to_string(),
			per_page: DEFAULT_PER_PAGE,
			links: LinkSettings::default(),
		}
	}
}

impl PaginationSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn per_page(mut self, per_page: usize) -> Self {
		self.per_page = per_page;
		self
	}

	pub fn keys(mut self, per_page_key: impl Into<String>, paged_key: impl Into<String>) -> Self {
		self.per_page_key = per_page_key.into();
		self.paged_key = paged_key.into();
		self
	}

	pub fn links(mut self, links: LinkSettings) -> Self {
		self.links = links;
		self
	}

	/// Parses and validates settings from a TOML document
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "loading pagination settings");
		let source = fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	/// Applies overrides from process environment variables
	///
	/// Recognised names are `{prefix}PER_PAGE_KEY`, `{prefix}PAGED_KEY` and
	/// `{prefix}PER_PAGE`.
	pub fn with_env_overrides(self, prefix: &str) -> Result<Self, SettingsError> {
		let vars = std::env::vars().filter(|(name, _)| name.starts_with(prefix));
		self.with_overrides(prefix, vars)
	}

	/// Applies overrides from explicit `(name, value)` pairs
	///
	/// Names without `prefix` or not recognised are ignored.
	pub fn with_overrides<I, K, V>(mut self, prefix: &str, vars: I) -> Result<Self, SettingsError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		for (name, value) in vars {
			let Some(field) = name.as_ref().strip_prefix(prefix) else {
				continue;
			};
			match field {
				"PER_PAGE_KEY" => self.per_page_key = value.into(),
				"PAGED_KEY" => self.paged_key = value.into(),
				"PER_PAGE" => {
					let value: String = value.into();
					self.per_page = value.trim().parse().map_err(|_| SettingsError::InvalidValue {
						key: name.as_ref().to_string(),
						value: value.clone(),
					})?;
				}
				_ => continue,
			}
			tracing::debug!(name = name.as_ref(), "pagination setting overridden from environment");
		}
		self.validate()?;
		Ok(self)
	}

	/// Checks that both keys are non-empty and distinct
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.per_page_key.is_empty() {
			return Err(SettingsError::EmptyKey(ParamKey::PerPage));
		}
		if self.paged_key.is_empty() {
			return Err(SettingsError::EmptyKey(ParamKey::Paged));
		}
		if self.per_page_key == self.paged_key {
			return Err(SettingsError::DuplicateKey(self.paged_key.clone()));
		}
		Ok(())
	}

	/// Resolves the query keys, running them through `filter`
	pub fn query_keys(&self, filter: &impl KeyFilter) -> QueryKeys {
		QueryKeys::new(self.per_page_key.clone(), self.paged_key.clone()).filtered(filter)
	}
}
