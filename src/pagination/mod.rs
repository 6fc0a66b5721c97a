mod config;
mod iterator;
mod page_state;

pub use config::{PaginationConfig, DEFAULT_PAGE_SIZE};
pub use iterator::PageIterator;
pub use page_state::{total_pages, visible_slice, PageState, PageView};
