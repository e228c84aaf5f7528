//! Two-phase pagination state
//!
//! The state is created from request parameters before the data query runs,
//! so the caller can use the sanitized page and page size to build the query.
//! Once the query has run, [`PaginationState::setup_query`] records the
//! result counts. Everything derived from those counts returns
//! [`Error::NotReady`] until then.

use crate::error::{Error, Result};
use crate::keys::{KeyFilter, QueryKeys};
use crate::params::{
	DEFAULT_PAGE, DEFAULT_PER_PAGE, ParamSource, sanitize_paged, sanitize_per_page,
};
use crate::range::{ItemRange, compute_range, page_count};
use crate::settings::PaginationSettings;
use serde::{Deserialize, Serialize};

/// Result counts reported by a data query
pub trait ResultCounts {
	/// Total number of items matched across all pages
	fn found_items(&self) -> usize;

	/// Total number of pages for the query's page size
	fn max_pages(&self) -> usize;
}

/// Fixed result counts
///
/// # Examples
///
/// ```
/// use listpage_core::state::{ResultCounts, Totals};
///
/// let totals = Totals::from_count(25, 10);
/// assert_eq!(totals.found_items(), 25);
/// assert_eq!(totals.max_pages(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
	pub total_items: usize,
	pub total_pages: usize,
}

impl Totals {
	pub fn new(total_items: usize, total_pages: usize) -> Self {
		Self {
			total_items,
			total_pages,
		}
	}

	/// Derives the page count from an item count
	pub fn from_count(total_items: usize, per_page: usize) -> Self {
		Self::new(total_items, page_count(total_items, per_page))
	}
}

impl ResultCounts for Totals {
	fn found_items(&self) -> usize {
		self.total_items
	}

	fn max_pages(&self) -> usize {
		self.total_pages
	}
}

/// Pagination state for one listing render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
	keys: QueryKeys,
	per_page: usize,
	current_page: usize,
	totals: Option<Totals>,
}

impl PaginationState {
	/// Creates a state from already-known values
	///
	/// Zero values are replaced with the defaults (10 items, page 1).
	pub fn new(per_page: usize, current_page: usize, keys: QueryKeys) -> Self {
		Self {
			keys,
			per_page: if per_page == 0 { DEFAULT_PER_PAGE } else { per_page },
			current_page: current_page.max(DEFAULT_PAGE),
			totals: None,
		}
	}

	/// Reads and sanitizes the pagination parameters of a request
	///
	/// # Examples
	///
	/// ```
	/// use listpage_core::keys::NoFilter;
	/// use listpage_core::params::QueryParams;
	/// use listpage_core::settings::PaginationSettings;
	/// use listpage_core::state::PaginationState;
	///
	/// let params = QueryParams::from_query("per_page=5&paged=2");
	/// let settings = PaginationSettings::default();
	/// let state = PaginationState::from_request(&params, &settings, &NoFilter);
	/// assert_eq!(state.per_page(), 5);
	/// assert_eq!(state.current_page(), 2);
	/// assert_eq!(state.query_offset(), 5);
	/// assert!(!state.is_ready());
	/// ```
	pub fn from_request(
		params: &impl ParamSource,
		settings: &PaginationSettings,
		filter: &impl KeyFilter,
	) -> Self {
		let keys = settings.query_keys(filter);
		let per_page = sanitize_per_page(params.param(&keys.per_page), settings.per_page);
		let current_page = sanitize_paged(params.param(&keys.paged));
		tracing::trace!(per_page, current_page, "pagination parameters resolved");

		Self {
			keys,
			per_page,
			current_page,
			totals: None,
		}
	}

	/// Records the result counts of the executed query
	pub fn setup_query(&mut self, counts: &impl ResultCounts) {
		let totals = Totals::new(counts.found_items(), counts.max_pages());
		if let Some(previous) = self.totals.replace(totals) {
			tracing::debug!(?previous, ?totals, "pagination totals replaced");
		}
		if self.is_out_of_range() {
			tracing::warn!(
				current_page = self.current_page,
				total_pages = totals.total_pages,
				"requested page is past the last page; range will be empty"
			);
		}
	}

	/// Shorthand for [`setup_query`](Self::setup_query) in builder position
	pub fn with_counts(mut self, counts: &impl ResultCounts) -> Self {
		self.setup_query(counts);
		self
	}

	pub fn keys(&self) -> &QueryKeys {
		&self.keys
	}

	pub fn per_page(&self) -> usize {
		self.per_page
	}

	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Zero-based offset of the first item, for building the data query
	pub fn query_offset(&self) -> usize {
		(self.current_page - 1).saturating_mul(self.per_page)
	}

	/// Maximum number of items to fetch, for building the data query
	pub fn query_limit(&self) -> usize {
		self.per_page
	}

	/// Returns true once the result counts have been recorded
	pub fn is_ready(&self) -> bool {
		self.totals.is_some()
	}

	pub fn totals(&self) -> Result<Totals> {
		self.totals.ok_or(Error::NotReady)
	}

	pub fn total_items(&self) -> Result<usize> {
		Ok(self.totals()?.total_items)
	}

	pub fn total_pages(&self) -> Result<usize> {
		Ok(self.totals()?.total_pages)
	}

	/// Bounds of the items shown on the current page
	pub fn range(&self) -> Result<ItemRange> {
		let totals = self.totals()?;
		Ok(compute_range(
			self.current_page,
			self.per_page,
			totals.total_items,
		))
	}

	/// First item number shown, as in "Viewing *6* - 10 of 12"
	pub fn start_number(&self) -> Result<usize> {
		Ok(self.range()?.start)
	}

	/// Last item number shown, as in "Viewing 6 - *10* of 12"
	pub fn end_number(&self) -> Result<usize> {
		Ok(self.range()?.end)
	}

	/// Returns true if the current page lies past the last page of a non-empty result
	///
	/// Always false before the result counts are recorded.
	pub fn is_out_of_range(&self) -> bool {
		self.totals
			.is_some_and(|t| t.total_items > 0 && self.current_page > t.total_pages)
	}

	pub fn has_previous(&self) -> Result<bool> {
		self.totals()?;
		Ok(self.current_page > 1)
	}

	pub fn has_next(&self) -> Result<bool> {
		Ok(self.current_page < self.total_pages()?)
	}
}
