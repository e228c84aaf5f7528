//! Page URLs built from the current request URL
//!
//! Every page link points at the current path with the paged key set to the
//! target page. Other query parameters of the request are carried over and
//! the items-per-page value is re-appended so the page size survives
//! navigation.

use listpage_core::{Error, PaginationState, QueryKeys, Result};
use std::fmt;
use url::Url;
use url::form_urlencoded::{Serializer, byte_serialize};

/// Token standing in for the page number in a URL template
pub const PAGE_PLACEHOLDER: &str = "%#%";

/// The URL of the request being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
	pub secure: bool,
	pub host: String,
	/// Path and query string, e.g. `/books/?paged=2`
	pub request_uri: String,
}

impl RequestUrl {
	pub fn new(secure: bool, host: impl Into<String>, request_uri: impl Into<String>) -> Self {
		Self {
			secure,
			host: host.into(),
			request_uri: request_uri.into(),
		}
	}
}

impl fmt::Display for RequestUrl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let scheme = if self.secure { "https" } else { "http" };
		write!(f, "{}://{}{}", scheme, self.host, self.request_uri)
	}
}

/// Builds the URL of any page of a listing
///
/// # Examples
///
/// ```
/// use listpage_core::QueryKeys;
/// use listpage_render::page_url::PageUrlTemplate;
///
/// let current = "https://example.com/books?genre=sf&paged=3";
/// let template = PageUrlTemplate::new(current, &QueryKeys::default(), 20).unwrap();
/// assert_eq!(
///     template.url_for(4),
///     "https://example.com/books/?paged=4&genre=sf&per_page=20"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrlTemplate {
	base: Url,
	keys: QueryKeys,
	per_page: usize,
	preserved: Vec<(String, String)>,
}

impl PageUrlTemplate {
	/// Creates a template from the current URL
	///
	/// Relative URLs such as `/books?genre=sf` are resolved against
	/// `http://localhost`.
	pub fn new(current_url: &str, keys: &QueryKeys, per_page: usize) -> Result<Self> {
		let url = parse_lenient(current_url)?;

		let preserved = url
			.query_pairs()
			.filter(|(key, _)| !keys.contains(key))
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect();

		let mut base = url;
		base.set_query(None);
		base.set_fragment(None);
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}

		Ok(Self {
			base,
			keys: keys.clone(),
			per_page,
			preserved,
		})
	}

	/// Creates a template using the keys and page size of `state`
	pub fn for_state(current_url: &str, state: &PaginationState) -> Result<Self> {
		Self::new(current_url, state.keys(), state.per_page())
	}

	/// The current URL without query or fragment, with a trailing slash
	pub fn base(&self) -> &str {
		self.base.as_str()
	}

	/// Query parameters carried over from the current URL
	pub fn preserved(&self) -> &[(String, String)] {
		&self.preserved
	}

	/// The page URL with [`PAGE_PLACEHOLDER`] in place of the page number
	pub fn template(&self) -> String {
		let mut rest = Serializer::new(String::new());
		rest.extend_pairs(&self.preserved);
		rest.append_pair(&self.keys.per_page, &self.per_page.to_string());

		format!(
			"{}?{}={}&{}",
			self.base,
			byte_serialize(self.keys.paged.as_bytes()).collect::<String>(),
			PAGE_PLACEHOLDER,
			rest.finish()
		)
	}

	/// The URL of `page`
	pub fn url_for(&self, page: usize) -> String {
		self.template().replace(PAGE_PLACEHOLDER, &page.to_string())
	}
}

fn parse_lenient(raw: &str) -> Result<Url> {
	let parsed = match Url::parse(raw) {
		Err(url::ParseError::RelativeUrlWithoutBase) => {
			Url::parse("http://localhost/").and_then(|base| base.join(raw))
		}
		other => other,
	};

	let url = parsed.map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
	if url.cannot_be_a_base() {
		return Err(Error::InvalidUrl(format!("{raw}: URL has no path to paginate")));
	}
	Ok(url)
}
