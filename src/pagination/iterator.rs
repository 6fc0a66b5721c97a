use super::page_state::{total_pages, visible_slice};

/// Walks every page of an in-memory collection, in order
pub struct PageIterator<'a, T> {
    items: &'a [T],
    page_size: usize,
    current_page: usize,
    total_pages: usize,
}

impl<'a, T> PageIterator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Self {
            items,
            page_size,
            current_page: 1,
            total_pages: total_pages(items.len(), page_size),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    fn has_reached_end(&self) -> bool {
        self.current_page > self.total_pages
    }
}

impl<'a, T> Iterator for PageIterator<'a, T> {
    /// Page number and its slice
    type Item = (usize, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_reached_end() {
            return None;
        }

        let page = self.current_page;
        self.current_page += 1;
        Some((page, visible_slice(self.items, self.page_size, page)))
    }
}
