//! Item-range arithmetic for the current page

use serde::{Deserialize, Serialize};

/// 1-indexed inclusive bounds of the items shown on a page
///
/// The range is degenerate (`start > end`) when there are no items or when
/// the page lies past the last page. Callers decide how to display that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRange {
	pub start: usize,
	pub end: usize,
}

impl ItemRange {
	/// Returns true if the range covers no items
	pub fn is_empty(&self) -> bool {
		self.start > self.end
	}

	/// Number of items covered by the range
	pub fn len(&self) -> usize {
		if self.is_empty() {
			0
		} else {
			self.end - self.start + 1
		}
	}
}

/// Computes the item range for `current_page`
///
/// `start = (current_page - 1) * per_page + 1` and
/// `end = min(current_page * per_page, total_items)`. The page is not
/// clamped to the last page, so `start` may exceed `total_items`.
///
/// # Examples
///
/// ```
/// use listpage_core::range::compute_range;
///
/// let range = compute_range(3, 10, 25);
/// assert_eq!((range.start, range.end), (21, 25));
///
/// let empty = compute_range(1, 10, 0);
/// assert_eq!((empty.start, empty.end), (1, 0));
/// assert!(empty.is_empty());
/// ```
pub fn compute_range(current_page: usize, per_page: usize, total_items: usize) -> ItemRange {
	let start = current_page
		.saturating_sub(1)
		.saturating_mul(per_page)
		.saturating_add(1);
	let end = current_page.saturating_mul(per_page).min(total_items);
	ItemRange { start, end }
}

/// Number of pages needed for `total_items` at `per_page` items each
///
/// Zero items means zero pages. A `per_page` of zero is treated as one.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
	total_items.div_ceil(per_page.max(1))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case(1, 10, 25, 1, 10)]
	#[case(2, 10, 25, 11, 20)]
	#[case(3, 10, 25, 21, 25)]
	#[case(2, 5, 12, 6, 10)]
	#[case(1, 10, 0, 1, 0)]
	#[case(1, 10, 7, 1, 7)]
	fn test_compute_range(
		#[case] page: usize,
		#[case] per_page: usize,
		#[case] total: usize,
		#[case] start: usize,
		#[case] end: usize,
	) {
		assert_eq!(compute_range(page, per_page, total), ItemRange { start, end });
	}

	#[rstest]
	fn test_page_past_the_end_is_not_clamped() {
		let range = compute_range(5, 10, 25);
		assert_eq!(range.start, 41);
		assert_eq!(range.end, 25);
		assert!(range.is_empty());
		assert_eq!(range.len(), 0);
	}

	#[rstest]
	fn test_huge_values_saturate() {
		let range = compute_range(usize::MAX, usize::MAX, 3);
		assert_eq!(range.start, usize::MAX);
		assert_eq!(range.end, 3);
	}

	#[rstest]
	#[case(0, 10, 0)]
	#[case(1, 10, 1)]
	#[case(10, 10, 1)]
	#[case(11, 10, 2)]
	#[case(25, 10, 3)]
	#[case(5, 0, 5)]
	fn test_page_count(#[case] total: usize, #[case] per_page: usize, #[case] expected: usize) {
		assert_eq!(page_count(total, per_page), expected);
	}

	proptest! {
		#[test]
		fn prop_range_within_totals_for_valid_pages(
			per_page in 1usize..200,
			total in 1usize..10_000,
			page_seed in 0usize..10_000,
		) {
			let pages = page_count(total, per_page);
			let page = page_seed % pages + 1;
			let range = compute_range(page, per_page, total);

			prop_assert!(range.start <= range.end);
			prop_assert!(range.end <= total);
			prop_assert!(range.len() <= per_page);
			prop_assert!(range.len() >= 1);
		}
	}
}
