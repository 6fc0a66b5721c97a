use crate::domain::{ItemRecord, LoadStatus};
use crate::pagination::{PageIterator, PageState, PageView, PaginationConfig};

use super::catalog_loader::{CatalogLoader, CatalogSource};

/// The products view: one catalog load plus a page cursor over it
pub struct ProductsPage<S> {
    loader: CatalogLoader<S>,
    page: PageState,
}

impl<S: CatalogSource> ProductsPage<S> {
    pub fn new(source: S, pagination: PaginationConfig) -> Self {
        Self {
            loader: CatalogLoader::new(source),
            page: PageState::new(pagination),
        }
    }

    pub async fn load(&mut self) -> LoadStatus {
        self.loader.load().await
    }

    pub fn view(&self) -> PageView<'_, ItemRecord> {
        self.page.derive(self.loader.items())
    }

    /// Every page of the loaded catalog, independent of the cursor
    pub fn pages(&self) -> PageIterator<'_, ItemRecord> {
        PageIterator::new(self.loader.items(), self.page.page_size())
    }

    pub fn load_status(&self) -> LoadStatus {
        self.loader.load_status()
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.view().total_pages
    }

    pub fn transition(&mut self, requested: usize) -> bool {
        let total = self.total_pages();
        self.page.transition(requested, total)
    }

    pub fn next(&mut self) -> bool {
        let total = self.total_pages();
        self.page.next(total)
    }

    pub fn previous(&mut self) -> bool {
        let total = self.total_pages();
        self.page.previous(total)
    }
}
