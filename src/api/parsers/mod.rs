mod items;

pub use items::{parse_items_response, ServiceErrorPayload};
