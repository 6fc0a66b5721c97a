use crate::errors::ConfigError;
use crate::pagination::PaginationConfig;

pub const DEFAULT_COLLECTION: &str = "menu_item";

/// Connection details for the hosted catalog table.
///
/// Endpoint and credential are always supplied by the caller; nothing here
/// points at a real project by default.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub endpoint: String,
    pub credential: String,
    pub collection: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl ServiceSettings {
    pub fn new(
        endpoint: impl Into<String>,
        credential: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = normalize_endpoint(endpoint.into())?;
        let credential = credential.into();
        if credential.trim().is_empty() {
            return Err(ConfigError::Missing("api key"));
        }

        Ok(Self {
            endpoint,
            credential,
            collection: DEFAULT_COLLECTION.to_string(),
            user_agent: "MenuCatalog/0.1",
            timeout_secs: 30,
        })
    }

    /// Build from optional CLI/env values, failing on whichever is absent
    pub fn from_parts(
        endpoint: Option<String>,
        credential: Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint.ok_or(ConfigError::Missing("endpoint"))?;
        let credential = credential.ok_or(ConfigError::Missing("api key"))?;
        Self::new(endpoint, credential)
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn normalize_endpoint(endpoint: String) -> Result<String, ConfigError> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEndpoint(endpoint));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug)]
pub struct AppConfig {
    pub service: Option<ServiceSettings>,
    pub pagination: PaginationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            service: None,
            pagination: PaginationConfig::default(),
        }
    }

    pub fn with_service(mut self, service: ServiceSettings) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Service settings, required only by views that load the catalog
    pub fn require_service(&self) -> Result<&ServiceSettings, ConfigError> {
        self.service.as_ref().ok_or(ConfigError::Missing("endpoint"))
    }
}
