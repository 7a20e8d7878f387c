//! HTTP client for email relay requests.
//!
//! This module provides a low-level wrapper for posting JSON bodies to the
//! relay and turning non-success responses into errors.

use super::error::RelayError;
use reqwest::Response;
use serde::Serialize;

/// Path of the relay's send endpoint.
///
pub(crate) const SEND_PATH: &str = "api/v1.0/email/send";

/// Posts requests to the relay.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. reqwest only fails here
    /// on invalid builder configuration, which is not used.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Post a JSON body to the path and return the response if the relay
    /// answered with 200.
    ///
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, RelayError> {
        let request_url = format!("{}/{}", &self.base_url, path);
        log::debug!("Posting relay request to {}...", request_url);
        let response = self
            .http_client
            .post(&request_url)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 200 {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("Relay request failed with status {}: {}", status, message);
            return Err(RelayError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
