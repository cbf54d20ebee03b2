use std::ops::Range;

/// The window of `items` shown on 1-based page `page` when each page holds
/// `page_size` entries.
///
/// Out-of-range pages clamp to the last possible window instead of failing:
/// the window starts at `min(page * size - size, len - 1)` and ends at
/// `min(len, start + size)`. Page `0` is treated as page `1`. Empty input
/// gives an empty window.
pub fn page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Index range of the window [`page`] returns for a collection of `len`
/// entries.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    if len == 0 {
        return 0..0;
    }
    let first = (page.max(1) - 1).saturating_mul(page_size).min(len - 1);
    let last = len.min(first.saturating_add(page_size));
    first..last
}

/// Number of pages needed to show `len` entries, `page_size` at a time.
///
/// A page size of zero means "unpaginated": one page if there is anything
/// to show.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        usize::from(len > 0)
    } else {
        len.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty() {
        let empty: [u8; 0] = [];
        for p in 0..4 {
            for s in 0..4 {
                assert!(page(&empty, p, s).is_empty());
            }
        }
    }

    #[test]
    fn pages_concatenate_to_input() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let mut joined = Vec::new();
            for p in 1..=page_count(items.len(), size) {
                joined.extend_from_slice(page(&items, p, size));
            }
            assert_eq!(joined, items, "size={size}");
        }
    }

    #[test]
    fn windows() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        assert_eq!(page(&items, 1, 2), &['a', 'b']);
        assert_eq!(page(&items, 2, 2), &['c', 'd']);
        assert_eq!(page(&items, 3, 2), &['e']);
    }

    #[test]
    fn high_pages_clamp_to_last_window() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        assert_eq!(page(&items, 4, 2), &['e']);
        assert_eq!(page(&items, 100, 2), &['e']);
        assert_eq!(page(&items, usize::MAX, 2), &['e']);
        assert_eq!(page(&items, 2, usize::MAX), &['e']);
        assert_eq!(page(&items, 1, usize::MAX), &items);
    }

    #[test]
    fn range_matches_window() {
        assert_eq!(page_range(5, 2, 2), 2..4);
        assert_eq!(page_range(5, 9, 2), 4..5);
        assert_eq!(page_range(0, 1, 2), 0..0);
    }

    #[test]
    fn zero_page_size_shows_nothing() {
        let items = [1, 2, 3];
        assert!(page(&items, 1, 0).is_empty());
    }

    #[test]
    fn page_counts() {
        assert_eq!(page_count(0, 4), 0);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(4, 2), 2);
        assert_eq!(page_count(3, 0), 1);
        assert_eq!(page_count(0, 0), 0);
    }
}
