use log::{error, info, warn};
use std::future::Future;

use crate::domain::{CatalogState, ItemRecord, LoadStatus};
use crate::errors::FetchFailure;

/// Anything that can hand back the full catalog in one read
pub trait CatalogSource {
    fn fetch_items(&self) -> impl Future<Output = Result<Vec<ItemRecord>, FetchFailure>>;
}

/// Owns the catalog state and performs the one read per instance
pub struct CatalogLoader<S> {
    source: S,
    state: CatalogState,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: CatalogState::new(),
        }
    }

    /// Issue the catalog read if it has not happened yet.
    ///
    /// Failures are logged and leave the item list empty; nothing is returned
    /// to the caller but the resulting status.
    pub async fn load(&mut self) -> LoadStatus {
        if self.state.load_status().is_settled() {
            warn!(
                "Catalog already {}, skipping repeated load",
                self.state.load_status().as_str()
            );
            return self.state.load_status();
        }

        info!("Loading catalog...");
        self.state = match self.source.fetch_items().await {
            Ok(items) => {
                info!("Catalog loaded with {} items", items.len());
                CatalogState::loaded(items)
            }
            Err(e) => {
                error!("Error fetching products: {}", e);
                CatalogState::failed()
            }
        };

        self.state.load_status()
    }

    pub fn items(&self) -> &[ItemRecord] {
        self.state.items()
    }

    pub fn load_status(&self) -> LoadStatus {
        self.state.load_status()
    }
}
