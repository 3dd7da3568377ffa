use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::error::FetchError;
use super::models::{Flight, FlightsPayload};

pub const DEFAULT_API_URL: &str = "https://flight-status-mock.core.travelopia.cloud";

/// Remote source of flights. Controllers only ever talk to this trait.
#[async_trait]
pub trait FlightApi: Send + Sync {
    async fn list_flights(&self) -> Result<Vec<Flight>, FetchError>;

    async fn get_flight(&self, id: &str) -> Result<Flight, FetchError>;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
            ));
        }

        Ok(response)
    }
}

#[async_trait]
impl FlightApi for ApiClient {
    async fn list_flights(&self) -> Result<Vec<Flight>, FetchError> {
        let url = format!("{}/flights", self.base_url);
        let response = self.get(&url).await?;

        let payload = response.json::<FlightsPayload>().await?;

        Ok(payload.into_flights())
    }

    async fn get_flight(&self, id: &str) -> Result<Flight, FetchError> {
        let url = format!("{}/flights/{}", self.base_url, id);
        let response = self.get(&url).await?;

        let flight = response.json::<Flight>().await?;

        Ok(flight)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
