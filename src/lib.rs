//! # listpage
//!
//! Page-number pagination for listing views: sanitized request parameters,
//! item ranges, a localizable "Viewing X - Y of a total of Z" line and page
//! links that keep the request's other query parameters.
//!
//! The arithmetic lives in [`listpage_core`]; display helpers live in
//! [`listpage_render`] behind the default `render` feature.
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "render")]
//! # {
//! use listpage::prelude::*;
//!
//! let settings = PaginationSettings::default();
//! let current = "http://example.com/books/?per_page=5&paged=2";
//! let mut pager = Pager::from_url(current, &settings, &NoFilter).unwrap();
//!
//! // Fetch items `state.query_offset()..` with `state.query_limit()`, then:
//! let per_page = pager.state().per_page();
//! pager.setup_query(&Totals::from_count(12, per_page));
//!
//! assert_eq!(pager.viewing_text().unwrap(), "Viewing 6 - 10 of a total of 12");
//! assert_eq!(pager.links().unwrap().iter().filter(|l| l.is_current).count(), 1);
//! # }
//! ```

pub use listpage_core;
#[cfg(feature = "render")]
pub use listpage_render;

pub use listpage_core::{
	Error, ItemRange, KeyFilter, LinkSettings, NoFilter, PaginationSettings, PaginationState,
	ParamKey, ParamSource, QueryKeys, QueryParams, Result, ResultCounts, SettingsError, Totals,
	compute_range, sanitize, sanitize_paged, sanitize_per_page,
};

#[cfg(feature = "render")]
pub use listpage_render::{
	LinkDescriptor, LinkRole, MessageCatalog, OutputMode, PageUrlTemplate, Pager, RequestUrl,
	format_viewing_text, generate_links, render_links_html,
};

/// Commonly used types, for glob import
pub mod prelude {
	pub use listpage_core::{
		KeyFilter, LinkSettings, NoFilter, PaginationSettings, PaginationState, ParamKey,
		QueryParams, ResultCounts, Totals,
	};

	#[cfg(feature = "render")]
	pub use listpage_render::{LinkDescriptor, LinkRole, MessageCatalog, OutputMode, Pager};
}
