//! Page-link sequence generation
//!
//! The sequence starts with a previous link, lists page numbers with gaps
//! for elided runs, and ends with a next link. Elision keeps `end_size`
//! pages at each end and `mid_size` pages on each side of the current page.

use crate::page_url::PageUrlTemplate;
use listpage_core::{LinkSettings, PaginationState, Result};
use serde::{Deserialize, Serialize};

/// What a link does in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkRole {
	Previous,
	Next,
	Page,
	Current,
	/// Stands for a run of elided pages
	Gap,
}

/// One entry of the page-link sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
	/// Target page; `None` for gaps
	pub page: Option<usize>,
	pub label: String,
	/// Target URL; `None` for gaps
	pub url: Option<String>,
	pub role: LinkRole,
	pub is_current: bool,
}

impl LinkDescriptor {
	fn for_page(page: usize, role: LinkRole, label: String, template: &PageUrlTemplate) -> Self {
		Self {
			page: Some(page),
			label,
			url: Some(template.url_for(page)),
			role,
			is_current: role == LinkRole::Current,
		}
	}

	fn gap() -> Self {
		Self {
			page: None,
			label: "\u{2026}".to_string(),
			url: None,
			role: LinkRole::Gap,
			is_current: false,
		}
	}

	/// Returns true for numbered page entries, current or not
	pub fn is_numbered(&self) -> bool {
		matches!(self.role, LinkRole::Page | LinkRole::Current)
	}
}

/// Generates the link sequence for `current_page` of `total_pages`
///
/// Exactly one descriptor is current when `current_page` lies within
/// `1..=total_pages`. A page past the end produces no current entry and a
/// previous link pointing one page back from it.
///
/// # Examples
///
/// ```
/// use listpage_core::{LinkSettings, QueryKeys};
/// use listpage_render::links::{LinkRole, generate_links};
/// use listpage_render::page_url::PageUrlTemplate;
///
/// let template = PageUrlTemplate::new("http://example.com/", &QueryKeys::default(), 10).unwrap();
/// let links = generate_links(2, 3, &template, &LinkSettings::default());
///
/// let roles: Vec<LinkRole> = links.iter().map(|l| l.role).collect();
/// assert_eq!(
///     roles,
///     vec![LinkRole::Previous, LinkRole::Page, LinkRole::Current, LinkRole::Page, LinkRole::Next]
/// );
/// ```
pub fn generate_links(
	current_page: usize,
	total_pages: usize,
	template: &PageUrlTemplate,
	settings: &LinkSettings,
) -> Vec<LinkDescriptor> {
	let end_size = settings.end_size.max(1);
	let mid_size = settings.mid_size;
	let mut links = Vec::new();

	if settings.prev_next && current_page > 1 {
		links.push(LinkDescriptor::for_page(
			current_page - 1,
			LinkRole::Previous,
			settings.prev_text.clone(),
			template,
		));
	}

	// A gap may only follow an emitted page, so runs collapse to one gap.
	let mut gap_allowed = false;
	for page in 1..=total_pages {
		let role = if page == current_page {
			Some(LinkRole::Current)
		} else if settings.show_all
			|| page <= end_size
			|| page > total_pages.saturating_sub(end_size)
			|| page.abs_diff(current_page) <= mid_size
		{
			Some(LinkRole::Page)
		} else {
			None
		};

		match role {
			Some(role) => {
				links.push(LinkDescriptor::for_page(page, role, page.to_string(), template));
				gap_allowed = true;
			}
			None if gap_allowed => {
				links.push(LinkDescriptor::gap());
				gap_allowed = false;
			}
			None => {}
		}
	}

	if settings.prev_next && current_page < total_pages {
		links.push(LinkDescriptor::for_page(
			current_page + 1,
			LinkRole::Next,
			settings.next_text.clone(),
			template,
		));
	}

	tracing::trace!(current_page, total_pages, count = links.len(), "page links generated");
	links
}

/// Generates the link sequence for a ready pagination state
pub fn page_links(
	state: &PaginationState,
	template: &PageUrlTemplate,
	settings: &LinkSettings,
) -> Result<Vec<LinkDescriptor>> {
	Ok(generate_links(
		state.current_page(),
		state.total_pages()?,
		template,
		settings,
	))
}
