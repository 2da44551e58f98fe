//! HTTP clients for the retailer storefront and the hosted product search.

mod search;
mod storefront;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::ScraperError;

pub use search::SearchClient;
pub use storefront::StorefrontClient;

fn build_http_client(
    timeout_secs: u64,
    user_agent: &str,
    default_headers: reqwest::header::HeaderMap,
) -> Result<Client, ScraperError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .default_headers(default_headers)
        .build()?;
    Ok(client)
}

/// Parses `base_url` and strips any trailing slash so endpoint paths can be
/// appended with a single `/`.
fn normalise_base_url(base_url: &str) -> Result<String, ScraperError> {
    let trimmed = base_url.trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ScraperError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    if parsed.cannot_be_a_base() {
        return Err(ScraperError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: "URL cannot be used as a base".to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

/// Maps non-2xx statuses to [`ScraperError::UnexpectedStatus`] and decodes the
/// body into `T`, tagging parse failures with `context`.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
    context: &str,
) -> Result<T, ScraperError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|e| ScraperError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
