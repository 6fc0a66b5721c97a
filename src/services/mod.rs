mod browse;
mod catalog_loader;
mod products_page;

pub use browse::{open_products, run_browse, BrowseCommand};
pub use catalog_loader::{CatalogLoader, CatalogSource};
pub use products_page::ProductsPage;
