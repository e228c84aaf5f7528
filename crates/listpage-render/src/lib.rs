//! # listpage-render
//!
//! Display side of listpage: the "Viewing X - Y of a total of Z" line, page
//! URLs that keep the request's other query parameters, the page-link
//! sequence with elision, and its HTML rendering.
//!
//! ## Example
//!
//! ```
//! use listpage_core::{NoFilter, PaginationSettings, Totals};
//! use listpage_render::{LinkRole, Pager};
//!
//! let mut pager = Pager::from_url(
//!     "https://example.com/books?per_page=20&paged=1",
//!     &PaginationSettings::default(),
//!     &NoFilter,
//! )
//! .unwrap();
//! pager.setup_query(&Totals::from_count(45, 20));
//!
//! let links = pager.links().unwrap();
//! assert_eq!(links.iter().filter(|l| l.is_current).count(), 1);
//! assert_eq!(links.last().unwrap().role, LinkRole::Next);
//! assert!(links.iter().all(|l| l.url.as_deref().unwrap().ends_with("per_page=20")));
//! ```

pub mod i18n;
pub mod links;
pub mod page_url;
pub mod pager;
pub mod render;
pub mod text;

pub use i18n::{MessageCatalog, format_positional};
pub use links::{LinkDescriptor, LinkRole, generate_links, page_links};
pub use page_url::{PAGE_PLACEHOLDER, PageUrlTemplate, RequestUrl};
pub use pager::Pager;
pub use render::{OutputMode, escape, render_links_html};
pub use text::{VIEWING_TEMPLATE, format_viewing_text, viewing_text};
