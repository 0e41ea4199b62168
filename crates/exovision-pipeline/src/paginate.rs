//! Pagination: slice an ordered collection into fixed-size pages.
//!
//! `current_page` is caller-supplied and not auto-clamped here; the handlers
//! clamp before invoking (the UI disables prev/next at the boundaries). An
//! out-of-range page yields an empty slice, never an error.

/// The derived slice-and-metadata bundle for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub items: &'a [T],
    pub total_items: usize,
    /// Always ≥ 1, even for an empty collection.
    pub total_pages: usize,
    /// Zero-based `(current_page - 1) * page_size`, reported as specified
    /// even when past the end (for "showing X to Y" display).
    pub start_index: usize,
    /// `min(start_index + page_size, total_items)`.
    pub end_index: usize,
}

/// Number of pages a collection of `count` items spans at `page_size` items
/// per page; minimum 1. Used by callers to clamp an incoming page number.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` into the window for `current_page` (1-based). A page size
/// of 0 is treated as 1 to keep the function total.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> PageWindow<'_, T> {
    let page_size = page_size.max(1);
    let current_page = current_page.max(1);
    let count = items.len();

    let start_index = (current_page - 1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size).min(count);
    let start = start_index.min(count);

    PageWindow {
        items: &items[start..end_index.max(start)],
        total_items: count,
        total_pages: total_pages(count, page_size),
        start_index,
        end_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_three_records_page_size_ten() {
        let items: Vec<u32> = (0..23).collect();
        let window = paginate(&items, 10, 3);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.items.len(), 3);
        assert_eq!(window.start_index, 20);
        assert_eq!(window.end_index, 23);
        assert_eq!(window.items, &[20, 21, 22]);
    }

    #[test]
    fn test_empty_collection_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let window = paginate(&items, 10, 1);
        assert_eq!(window.total_pages, 1);
        assert!(window.items.is_empty());
        assert_eq!(window.start_index, 0);
        assert_eq!(window.end_index, 0);
    }

    #[test]
    fn test_out_of_range_page_yields_empty_slice() {
        let items: Vec<u32> = (0..23).collect();
        let window = paginate(&items, 10, 7);
        assert!(window.items.is_empty());
        assert_eq!(window.start_index, 60);
        assert_eq!(window.end_index, 23);
        assert_eq!(window.total_pages, 3);
    }

    #[test]
    fn test_concatenated_pages_reproduce_the_collection() {
        let items: Vec<u32> = (0..37).collect();
        for page_size in 1..=12 {
            let mut seen = Vec::new();
            let pages = total_pages(items.len(), page_size);
            for page in 1..=pages {
                seen.extend_from_slice(paginate(&items, page_size, page).items);
            }
            assert_eq!(seen, items, "page_size {page_size}");
        }
    }

    #[test]
    fn test_page_size_zero_treated_as_one() {
        let items = [1, 2, 3];
        let window = paginate(&items, 0, 2);
        assert_eq!(window.items, &[2]);
        assert_eq!(window.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..5).collect();
        let window = paginate(&items, 4, 2);
        assert_eq!(window.items, &[4]);
        assert_eq!(window.start_index, 4);
        assert_eq!(window.end_index, 5);
    }
}
