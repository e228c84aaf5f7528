//! The "Viewing X - Y of a total of Z" line

use crate::i18n::{MessageCatalog, format_positional};
use listpage_core::{PaginationState, Result};

/// Untranslated template for the viewing line; also its catalog key
pub const VIEWING_TEMPLATE: &str = "Viewing %1$d - %2$d of a total of %3$d";

/// Formats the viewing line for an explicit range
///
/// # Examples
///
/// ```
/// use listpage_render::i18n::MessageCatalog;
/// use listpage_render::text::format_viewing_text;
///
/// let text = format_viewing_text(6, 10, 12, &MessageCatalog::default());
/// assert_eq!(text, "Viewing 6 - 10 of a total of 12");
/// ```
pub fn format_viewing_text(
	start: usize,
	end: usize,
	total: usize,
	catalog: &MessageCatalog,
) -> String {
	format_positional(catalog.translate(VIEWING_TEMPLATE), &[start, end, total])
}

/// Formats the viewing line for a ready pagination state
///
/// The range is not adjusted for empty or out-of-range pages; check
/// [`ItemRange::is_empty`](listpage_core::ItemRange::is_empty) first if
/// those should read differently.
pub fn viewing_text(state: &PaginationState, catalog: &MessageCatalog) -> Result<String> {
	let range = state.range()?;
	Ok(format_viewing_text(
		range.start,
		range.end,
		state.total_items()?,
		catalog,
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use listpage_core::{Error, QueryKeys, Totals};
	use rstest::rstest;

	#[rstest]
	fn test_viewing_text_for_state() {
		let state = PaginationState::new(10, 3, QueryKeys::default())
			.with_counts(&Totals::from_count(25, 10));
		let text = viewing_text(&state, &MessageCatalog::default()).unwrap();
		assert_eq!(text, "Viewing 21 - 25 of a total of 25");
	}

	#[rstest]
	fn test_viewing_text_not_ready() {
		let state = PaginationState::new(10, 1, QueryKeys::default());
		assert!(matches!(viewing_text(&state, &MessageCatalog::default()), Err(Error::NotReady)));
	}

	#[rstest]
	fn test_translated_viewing_text_reorders_arguments() {
		let catalog = MessageCatalog::new("xx")
			.with_translation(VIEWING_TEMPLATE, "%3$d total, %1$d to %2$d");
		assert_eq!(format_viewing_text(1, 10, 42, &catalog), "42 total, 1 to 10");
	}

	#[rstest]
	fn test_empty_result_is_degenerate() {
		assert_eq!(
			format_viewing_text(1, 0, 0, &MessageCatalog::default()),
			"Viewing 1 - 0 of a total of 0"
		);
	}
}
