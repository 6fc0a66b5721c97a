use crate::errors::FetchFailure;
use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

/// HTTP client that signs every request with the service credential
pub struct AuthenticatedClient {
    client: Client,
    credential: String,
}

impl AuthenticatedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, credential: &str) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self {
            client,
            credential: credential.to_string(),
        })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response, FetchFailure> {
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response, FetchFailure> {
        self.client
            .get(url)
            .header("apikey", &self.credential)
            .bearer_auth(&self.credential)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchFailure::transport(url, e))
    }
}
