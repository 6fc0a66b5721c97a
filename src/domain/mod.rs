mod catalog;
pub mod models;

pub use catalog::{CatalogState, LoadStatus};
pub use models::*;
