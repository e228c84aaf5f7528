//! Front object for rendering a paginated listing
//!
//! A [`Pager`] bundles the pagination state with everything needed to
//! display it. Build it when the request arrives, run the data query with
//! its page and page size, record the counts, then ask for the viewing text
//! and the page links.

use crate::i18n::MessageCatalog;
use crate::links::{LinkDescriptor, page_links};
use crate::page_url::PageUrlTemplate;
use crate::render::{OutputMode, render_links_html};
use crate::text::viewing_text;
use listpage_core::{
	KeyFilter, LinkSettings, PaginationSettings, PaginationState, ParamSource, QueryParams,
	ResultCounts, Result,
};
use std::io::Write;

/// Pagination state plus the URL template, link settings and catalog used to display it
///
/// # Examples
///
/// ```
/// use listpage_core::{NoFilter, PaginationSettings, Totals};
/// use listpage_render::{OutputMode, Pager};
///
/// let mut pager = Pager::from_url(
///     "http://example.com/books?per_page=5&paged=2",
///     &PaginationSettings::default(),
///     &NoFilter,
/// )
/// .unwrap();
/// pager.setup_query(&Totals::from_count(12, 5));
///
/// let text = pager
///     .currently_viewing_text(OutputMode::Return, &mut std::io::sink())
///     .unwrap();
/// assert_eq!(text.as_deref(), Some("Viewing 6 - 10 of a total of 12"));
/// ```
#[derive(Debug, Clone)]
pub struct Pager {
	state: PaginationState,
	template: PageUrlTemplate,
	links: LinkSettings,
	catalog: MessageCatalog,
}

impl Pager {
	/// Creates a pager for a state read from the request at `current_url`
	pub fn new(state: PaginationState, current_url: &str, links: LinkSettings) -> Result<Self> {
		let template = PageUrlTemplate::for_state(current_url, &state)?;
		Ok(Self {
			state,
			template,
			links,
			catalog: MessageCatalog::default(),
		})
	}

	/// Reads the pagination parameters from `params` and builds links from `current_url`
	pub fn from_request(
		params: &impl ParamSource,
		current_url: &str,
		settings: &PaginationSettings,
		filter: &impl KeyFilter,
	) -> Result<Self> {
		let state = PaginationState::from_request(params, settings, filter);
		Self::new(state, current_url, settings.links.clone())
	}

	/// Like [`from_request`](Self::from_request), taking the parameters from the URL's query string
	pub fn from_url(
		current_url: &str,
		settings: &PaginationSettings,
		filter: &impl KeyFilter,
	) -> Result<Self> {
		let query = current_url
			.split_once('?')
			.map(|(_, query)| query.split_once('#').map_or(query, |(q, _)| q))
			.unwrap_or_default();
		Self::from_request(&QueryParams::from_query(query), current_url, settings, filter)
	}

	pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
		self.catalog = catalog;
		self
	}

	/// Records the result counts of the executed query
	pub fn setup_query(&mut self, counts: &impl ResultCounts) {
		self.state.setup_query(counts);
	}

	pub fn state(&self) -> &PaginationState {
		&self.state
	}

	pub fn template(&self) -> &PageUrlTemplate {
		&self.template
	}

	pub fn viewing_text(&self) -> Result<String> {
		viewing_text(&self.state, &self.catalog)
	}

	/// The page-link sequence, with previous/next labels translated by the catalog
	pub fn links(&self) -> Result<Vec<LinkDescriptor>> {
		let links = LinkSettings {
			prev_text: self.catalog.translate(&self.links.prev_text).to_string(),
			next_text: self.catalog.translate(&self.links.next_text).to_string(),
			..self.links.clone()
		};
		page_links(&self.state, &self.template, &links)
	}

	pub fn links_html(&self) -> Result<String> {
		Ok(render_links_html(&self.links()?))
	}

	/// Echoes or returns the "Viewing X - Y of a total of Z" line
	pub fn currently_viewing_text(
		&self,
		mode: OutputMode,
		out: &mut impl Write,
	) -> Result<Option<String>> {
		mode.emit(self.viewing_text()?, out)
	}

	/// Echoes or returns the page links as HTML
	pub fn paginate_links(&self, mode: OutputMode, out: &mut impl Write) -> Result<Option<String>> {
		mode.emit(self.links_html()?, out)
	}
}
