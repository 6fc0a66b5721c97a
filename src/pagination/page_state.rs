use log::debug;

use super::config::PaginationConfig;

/// Number of pages needed to show `item_count` items, zero when there are none
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if item_count == 0 || page_size == 0 {
        0
    } else {
        item_count.div_ceil(page_size)
    }
}

/// Window of `items` shown on `page` (1-based). Out-of-range pages yield an empty slice.
pub fn visible_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page size and cursor for one products view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

/// What a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub visible_slice: &'a [T],
    pub total_pages: usize,
    pub current_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageState {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            page_size: config.page_size(),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Derive the visible slice and page count for `items`
    pub fn derive<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        let total = total_pages(items.len(), self.page_size);
        PageView {
            visible_slice: visible_slice(items, self.page_size, self.current_page),
            total_pages: total,
            current_page: self.current_page,
            has_previous: self.current_page > 1,
            has_next: self.current_page < total,
        }
    }

    /// Move to `requested` if it lies in `[1, total_pages]`.
    ///
    /// Returns whether the cursor moved. Rejected requests leave it untouched.
    pub fn transition(&mut self, requested: usize, total_pages: usize) -> bool {
        if requested < 1 || requested > total_pages {
            debug!(
                "Rejected page change to {} (total pages: {})",
                requested, total_pages
            );
            return false;
        }

        self.current_page = requested;
        true
    }

    pub fn next(&mut self, total_pages: usize) -> bool {
        self.transition(self.current_page + 1, total_pages)
    }

    pub fn previous(&mut self, total_pages: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(requested) => self.transition(requested, total_pages),
            None => false,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<usize> {
        (1..=count).collect()
    }

    #[test]
    fn test_total_pages_matches_ceiling() {
        for page_size in 1..=10 {
            for count in 0..=50 {
                let expected = (count + page_size - 1) / page_size;
                assert_eq!(total_pages(count, page_size), expected);
            }
        }
        assert_eq!(total_pages(0, 8), 0);
    }

    #[test]
    fn test_visible_slice_lengths() {
        let items = numbered(21);
        let page_size = 5;
        let total = total_pages(items.len(), page_size);

        for page in 1..=total {
            let slice = visible_slice(&items, page_size, page);
            let expected = page_size.min(items.len() - (page - 1) * page_size);
            assert_eq!(slice.len(), expected);
            assert!(!slice.is_empty());
        }
    }

    #[test]
    fn test_visible_slice_out_of_range_is_empty() {
        let items = numbered(4);
        assert!(visible_slice(&items, 8, 0).is_empty());
        assert!(visible_slice(&items, 8, 2).is_empty());
        assert!(visible_slice(&items, 8, usize::MAX).is_empty());
    }

    #[test]
    fn test_slices_concatenate_back_to_items() {
        let items = numbered(37);
        let page_size = 8;

        let rebuilt: Vec<usize> = (1..=total_pages(items.len(), page_size))
            .flat_map(|page| visible_slice(&items, page_size, page).iter().copied())
            .collect();

        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_ten_items_two_pages() {
        let items = numbered(10);
        let mut state = PageState::default();

        let view = state.derive(&items);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.visible_slice, &items[0..8]);
        assert!(!view.has_previous);
        assert!(view.has_next);

        assert!(state.transition(2, view.total_pages));
        let view = state.derive(&items);
        assert_eq!(view.visible_slice, &[9, 10]);
        assert!(view.has_previous);
        assert!(!view.has_next);

        assert!(!state.transition(3, 2));
        assert_eq!(state.current_page(), 2);
        assert!(!state.transition(0, 2));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_empty_items_disable_navigation() {
        let items: Vec<usize> = Vec::new();
        let mut state = PageState::default();

        let view = state.derive(&items);
        assert_eq!(view.total_pages, 0);
        assert!(view.visible_slice.is_empty());
        assert!(!view.has_previous);
        assert!(!view.has_next);

        assert!(!state.next(view.total_pages));
        assert!(!state.previous(view.total_pages));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_single_full_page() {
        let items = numbered(8);
        let mut state = PageState::default();

        let view = state.derive(&items);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.visible_slice.len(), 8);

        assert!(!state.next(view.total_pages));
        assert!(!state.previous(view.total_pages));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_out_of_range_transition_never_moves_cursor() {
        let mut state = PageState::new(PaginationConfig::new().with_page_size(3).unwrap());
        let total = total_pages(10, 3);
        assert!(state.transition(3, total));

        for requested in [0, total + 1, total + 100, usize::MAX] {
            assert!(!state.transition(requested, total));
            assert_eq!(state.current_page(), 3);
        }
    }

    #[test]
    fn test_next_and_previous_walk_pages() {
        let mut state = PageState::new(PaginationConfig::new().with_page_size(2).unwrap());
        let total = total_pages(5, 2);

        assert!(state.next(total));
        assert!(state.next(total));
        assert!(!state.next(total));
        assert_eq!(state.current_page(), 3);

        assert!(state.previous(total));
        assert!(state.previous(total));
        assert!(!state.previous(total));
        assert_eq!(state.current_page(), 1);
    }
}
