mod catalog_client;
pub mod parsers;

pub use catalog_client::{CatalogClient, SELECT_COLUMNS};
