pub mod settings;

pub use settings::{AppConfig, ServiceSettings, DEFAULT_COLLECTION};
