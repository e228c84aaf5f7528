//! # listpage-core
//!
//! Page-number pagination arithmetic for listing views.
//!
//! A [`PaginationState`] is built in two phases. First it reads the
//! items-per-page and current-page parameters from the request, replacing
//! anything missing or malformed with defaults. The caller uses those values
//! to run its data query, then hands the result counts back through
//! [`PaginationState::setup_query`]. Only then are the item range and page
//! totals available.
//!
//! ## Example
//!
//! ```
//! use listpage_core::{NoFilter, PaginationSettings, PaginationState, QueryParams, Totals};
//!
//! let params = QueryParams::from_query("per_page=5&paged=2");
//! let settings = PaginationSettings::default();
//! let mut state = PaginationState::from_request(&params, &settings, &NoFilter);
//!
//! // ... run the query with state.query_offset() and state.query_limit() ...
//! state.setup_query(&Totals::from_count(12, state.per_page()));
//!
//! let range = state.range().unwrap();
//! assert_eq!((range.start, range.end), (6, 10));
//! ```

pub mod error;
pub mod keys;
pub mod params;
pub mod range;
pub mod settings;
pub mod state;

pub use error::{Error, Result};
pub use keys::{KeyFilter, NoFilter, ParamKey, QueryKeys};
pub use params::{ParamSource, QueryParams, sanitize, sanitize_paged, sanitize_per_page};
pub use range::{ItemRange, compute_range};
pub use settings::{LinkSettings, PaginationSettings, SettingsError};
pub use state::{PaginationState, ResultCounts, Totals};
