//! HTTP fetcher for the results page
//!
//! Builds the two reqwest clients used by the pipeline and performs the
//! single GET that retrieves the results-page markup. There is no retry
//! logic: a failure here aborts the whole pipeline call.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for the results-page request
///
/// The user agent must look like a desktop browser; the search service
/// serves different markup, or denies the request, to unrecognized or
/// missing clients.
///
/// # Arguments
///
/// * `user_agent` - The browser identity string to present
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_search_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the HTTP client used for the individual thumbnail requests
///
/// Same shape as the search client but presents a second, distinct browser
/// identity and allows more time for body transfer.
pub fn build_image_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the results page and returns its body decoded as text
///
/// A single GET with no retries. Connection failures, timeouts, and
/// non-decodable bodies all surface as `FetchError::Http` carrying the
/// requested URL; callers above the orchestrator decide what to do.
///
/// # Arguments
///
/// * `client` - The search HTTP client
/// * `url` - The results-page URL
pub async fn fetch_results_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

    let body = response.text().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched results page ({} bytes) from {}", body.len(), url);

    Ok(body)
}
