//! Attendee listing API client implementation.
//!
//! Fetches one page of attendees for the configured event.

use crate::attendees::models::AttendeePage;
use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Failure of a single listing request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: StatusCode,
        /// Response body, if any
        body: String,
    },
    /// The response body is not a valid listing
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether the failure leaves the previously shown data usable.
    ///
    /// # Returns
    /// * `bool` - False for malformed responses, true otherwise
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FetchError::Decode(_))
    }
}

/// Parameters of one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page_index: u32,
    /// Search filter, `None` when the search box is empty
    pub query: Option<String>,
}

impl PageRequest {
    /// Query parameters as sent on the wire.
    ///
    /// # Returns
    /// * `Vec<(&str, String)>` - `pageIndex` and, when present, `query`
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("pageIndex", self.page_index.to_string())];
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        params
    }
}

/// Attendee listing API client.
#[derive(Debug, Clone)]
pub struct AttendeeClient {
    /// HTTP client for API requests
    client: Client,
    /// Full URL of the event's attendee listing resource
    attendees_url: String,
}

impl AttendeeClient {
    /// Create a new client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<AttendeeClient>` - New client or error
    ///
    /// # Details
    /// Requires an event ID. The configured timeout applies to every request.
    pub fn new(config: &Config) -> Result<Self> {
        if config.event_id.is_empty() {
            return Err(anyhow::anyhow!(
                "Event ID is required. Please set it in config.jsonc or pass --event-id"
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            attendees_url: config.attendees_url(),
        })
    }

    /// Fetch one page of attendees.
    ///
    /// # Arguments
    /// * `request` - Page index and optional search filter
    ///
    /// # Returns
    /// * `Result<AttendeePage, FetchError>` - Attendees on the page and the total count
    ///
    /// # Details
    /// The body is read as text first so malformed JSON is reported as
    /// `FetchError::Decode` rather than as a transport failure.
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<AttendeePage, FetchError> {
        let response = self
            .client
            .get(&self.attendees_url)
            .query(&request.query_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
