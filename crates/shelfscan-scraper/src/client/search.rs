//! Client for the hosted search index's multi-query endpoint.

use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use shelfscan_core::AppConfig;

use crate::error::ScraperError;
use crate::query::{facet_params, product_params, FacetFilterGroup};
use crate::types::{SearchRequest, SearchRequestBody, SearchResponse, SearchResult};

use super::{build_http_client, normalise_base_url, read_json};

const API_KEY_HEADER: &str = "x-algolia-api-key";
const APP_ID_HEADER: &str = "x-algolia-application-id";

/// Search client shared by every query of a run.
///
/// Authentication and browser-origin headers are installed once as default
/// headers on the underlying `reqwest::Client`, which also pools the
/// connection across queries.
pub struct SearchClient {
    client: Client,
    queries_url: String,
    index_name: String,
    max_values_per_facet: u32,
}

impl SearchClient {
    /// Creates a client from the search settings in `config`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if the search or storefront base URL
    ///   does not parse.
    /// - [`ScraperError::InvalidHeader`] if the API key, application id, or
    ///   storefront origin cannot be sent as a header value.
    /// - [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let base_url = normalise_base_url(&config.search_base_url)?;
        let origin = normalise_base_url(&config.storefront_base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(API_KEY_HEADER, &config.search_api_key)?,
        );
        headers.insert(
            HeaderName::from_static(APP_ID_HEADER),
            header_value(APP_ID_HEADER, &config.search_app_id)?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(reqwest::header::ORIGIN, header_value("origin", &origin)?);
        headers.insert(
            reqwest::header::REFERER,
            header_value("referer", &format!("{origin}/"))?,
        );

        let client = build_http_client(config.request_timeout_secs, &config.user_agent, headers)?;

        Ok(Self {
            client,
            queries_url: format!("{base_url}/1/indexes/*/queries"),
            index_name: config.search_index.clone(),
            max_values_per_facet: config.max_values_per_facet,
        })
    }

    /// Fetches value counts for `facet` within one subcategory at one store.
    ///
    /// Requests zero hits so only the facet distribution comes back. Returns
    /// an empty map when the response carries no counts for `facet`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying search request.
    pub async fn facet_counts(
        &self,
        subcategory: &str,
        store_number: u32,
        facet: &str,
    ) -> Result<IndexMap<String, u64>, ScraperError> {
        let params = facet_params(subcategory, store_number, facet, self.max_values_per_facet);
        let context = format!("{facet} facet counts for {subcategory}");
        let mut result = self.query(params, None, &context).await?;

        Ok(result.facets.shift_remove(facet).unwrap_or_default())
    }

    /// Fetches up to `hits_per_page` product hits within one subcategory at
    /// one store, optionally restricted to the given facet filter groups.
    ///
    /// Groups are ANDed together; the clauses inside each group are ORed.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying search request.
    pub async fn product_hits(
        &self,
        subcategory: &str,
        store_number: u32,
        hits_per_page: u32,
        facet_filters: Option<&[FacetFilterGroup]>,
    ) -> Result<SearchResult, ScraperError> {
        let params = product_params(subcategory, store_number, hits_per_page);
        let context = format!("products for {subcategory}");
        self.query(params, facet_filters.map(<[FacetFilterGroup]>::to_vec), &context)
            .await
    }

    /// Sends one single-request envelope and returns `results[0]`.
    async fn query(
        &self,
        params: String,
        facet_filters: Option<Vec<FacetFilterGroup>>,
        context: &str,
    ) -> Result<SearchResult, ScraperError> {
        let body = SearchRequestBody {
            requests: vec![SearchRequest {
                index_name: &self.index_name,
                params,
                facet_filters,
            }],
        };

        tracing::debug!(context, "search query");
        let response = self
            .client
            .post(&self.queries_url)
            .json(&body)
            .send()
            .await?;
        let parsed: SearchResponse = read_json(response, &self.queries_url, context).await?;

        parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ScraperError::EmptyResults {
                context: context.to_owned(),
            })
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ScraperError> {
    HeaderValue::from_str(value).map_err(|e| ScraperError::InvalidHeader {
        name,
        reason: e.to_string(),
    })
}
