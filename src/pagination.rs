//! Page windows over ordered collections.
//!
//! Page numbers are 1-based. A collection always has at least one page, so an
//! empty collection yields a single empty page rather than an error.

use serde::Serialize;

/// Window requested from a repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of items preceding the window.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }

    /// Slice `items` down to this window.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }
}

/// Number of pages needed for `total` items, never less than one.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a requested page number into `[1, total_pages]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        usize::try_from(requested).map_or(last, |page| page.min(last))
    }
}

/// One page of items together with the navigation state templates need.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    /// Always `page + 1`; only meaningful when `has_next` is set.
    pub next_page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
            has_next: page < total_pages,
            next_page: page + 1,
        }
    }

    /// Convert the items while keeping the navigation state.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            has_next: self.has_next,
            next_page: self.next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_at_least_one_page() {
        assert_eq!(total_pages(0, 2), 1);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(5, 2), 3);
    }

    #[test]
    fn clamps_out_of_range_pages() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-7, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(999, 3), 3);
        assert_eq!(clamp_page(i64::MAX, 3), 3);
    }

    #[test]
    fn windows_items() {
        let items = [1, 2, 3, 4, 5];
        let window = |page| Pagination { page, per_page: 2 }.window(&items).to_vec();

        assert_eq!(window(1), vec![1, 2]);
        assert_eq!(window(3), vec![5]);
        assert!(window(4).is_empty());
    }

    #[test]
    fn next_page_is_reported_even_on_last_page() {
        let page = Paginated::new(vec!["a"], 3, 3);
        assert!(!page.has_next);
        assert_eq!(page.next_page, 4);
    }
}
