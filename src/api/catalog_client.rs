use crate::api::parsers;
use crate::config::ServiceSettings;
use crate::domain::models::ItemRecord;
use crate::errors::FetchFailure;
use crate::http::AuthenticatedClient;
use crate::services::CatalogSource;
use anyhow::Result;
use log::info;

/// Columns requested from the catalog table, in wire naming
pub const SELECT_COLUMNS: &str = "menut_item_id,menu_item_name,description,availability,price";
const REST_PATH: &str = "rest/v1";

/// Read-only client for the hosted catalog table
pub struct CatalogClient {
    client: AuthenticatedClient,
    url: String,
}

impl CatalogClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        let client = AuthenticatedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            &settings.credential,
        )?;
        let url = Self::build_collection_url(&settings.endpoint, &settings.collection);

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the whole collection. No filters, ordering or server-side paging.
    pub async fn fetch_all(&self) -> Result<Vec<ItemRecord>, FetchFailure> {
        info!("Fetching catalog from {}", self.url);

        let response = self.client.get(&self.url).await?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::transport(&self.url, e))?;

        let items = parsers::parse_items_response(status, &body)?;
        info!("Fetched {} catalog items", items.len());
        Ok(items)
    }

    // --- Helper Methods ---

    fn build_collection_url(endpoint: &str, collection: &str) -> String {
        format!(
            "{}/{}/{}?select={}",
            endpoint.trim_end_matches('/'),
            REST_PATH,
            urlencoding::encode(collection),
            SELECT_COLUMNS
        )
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_items(&self) -> Result<Vec<ItemRecord>, FetchFailure> {
        self.fetch_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let settings = ServiceSettings::new("https://demo.supabase.co/", "key").unwrap();
        let client = CatalogClient::new(&settings).unwrap();

        assert_eq!(
            client.url(),
            "https://demo.supabase.co/rest/v1/menu_item?select=menut_item_id,menu_item_name,description,availability,price"
        );
    }

    #[test]
    fn test_collection_name_is_encoded() {
        let url = CatalogClient::build_collection_url("http://localhost:3000", "menu item");
        assert!(url.starts_with("http://localhost:3000/rest/v1/menu%20item?select="));
    }
}
