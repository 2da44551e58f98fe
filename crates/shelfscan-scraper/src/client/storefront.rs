//! Store directory and category lookups against the retailer storefront.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use shelfscan_core::AppConfig;

use crate::error::ScraperError;
use crate::types::{CategoryDocument, StoreRecord};

use super::{build_http_client, normalise_base_url, read_json};

/// Client for the storefront's public JSON endpoints.
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    /// Creates a client rooted at `base_url` (e.g. `https://www.wegmans.com`).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let base_url = normalise_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(
            reqwest::header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        );
        headers.insert(reqwest::header::PRAGMA, HeaderValue::from_static("no-cache"));

        let client = build_http_client(timeout_secs, user_agent, headers)?;
        Ok(Self { client, base_url })
    }

    /// Creates a client from the storefront settings in `config`.
    ///
    /// # Errors
    ///
    /// See [`StorefrontClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.storefront_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Looks `store_number` up in the current store directory.
    ///
    /// Returns `Ok(None)` when the directory has no such store; only transport
    /// and parse failures are errors.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::Deserialize`] if the directory is not a list of stores.
    pub async fn verify_store(
        &self,
        store_number: u32,
    ) -> Result<Option<StoreRecord>, ScraperError> {
        let url = format!("{}/api/stores", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::REFERER, format!("{}/stores", self.base_url))
            .send()
            .await?;
        let stores: Vec<StoreRecord> = read_json(response, &url, "store directory").await?;
        tracing::debug!(stores = stores.len(), "fetched store directory");

        Ok(stores.into_iter().find(|s| s.store_number == store_number))
    }

    /// `true` if `store_number` appears in the store directory.
    ///
    /// # Errors
    ///
    /// See [`StorefrontClient::verify_store`].
    pub async fn store_exists(&self, store_number: u32) -> Result<bool, ScraperError> {
        Ok(self.verify_store(store_number).await?.is_some())
    }

    /// Lists every subcategory key with data at `store_number`.
    ///
    /// Keys are flattened across departments in the order received. Keys that
    /// appear under more than one department are kept as duplicates.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::Deserialize`] if the category document is malformed.
    pub async fn list_subcategories(&self, store_number: u32) -> Result<Vec<String>, ScraperError> {
        let url = format!("{}/api/categories/{store_number}", self.base_url);
        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::REFERER,
                format!("{}/shop/categories", self.base_url),
            )
            .send()
            .await?;
        let document: CategoryDocument = read_json(
            response,
            &url,
            &format!("category document for store {store_number}"),
        )
        .await?;

        let keys: Vec<String> = document
            .sub_categories_with_data
            .into_values()
            .flatten()
            .map(|descriptor| descriptor.key)
            .collect();
        tracing::debug!(store = store_number, subcategories = keys.len(), "enumerated subcategories");
        Ok(keys)
    }
}
