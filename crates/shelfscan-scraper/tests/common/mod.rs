//! Shared fixtures for the wiremock-backed integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use shelfscan_core::AppConfig;
use wiremock::{Match, Request, ResponseTemplate};

/// Config pointing both hosts at `server_uri`, with a small hit cap.
pub fn test_config(server_uri: &str, hits_per_page: u32) -> AppConfig {
    AppConfig {
        log_level: "debug".to_owned(),
        storefront_base_url: server_uri.to_owned(),
        search_base_url: server_uri.to_owned(),
        search_app_id: "TESTAPP".to_owned(),
        search_api_key: "test-key".to_owned(),
        search_index: "products".to_owned(),
        hits_per_page,
        max_values_per_facet: 1000,
        inter_category_delay_ms: 0,
        request_timeout_secs: 5,
        user_agent: "shelfscan-test/0.1".to_owned(),
    }
}

/// `n` hits for `brand`, with ids `<brand>-0 .. <brand>-(n-1)`.
pub fn hits_for(brand: &str, n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "objectID": format!("{brand}-{i}"),
                "productName": format!("{brand} item {i}"),
                "consumerBrandName": brand,
                "price_inStore": { "unitPrice": "$1.00/ea", "amount": 1.0 }
            })
        })
        .collect()
}

/// A `results[0]` envelope with the given hits and total.
pub fn search_body(hits: &[Value], nb_hits: u64) -> Value {
    json!({ "results": [{ "hits": hits, "nbHits": nb_hits }] })
}

/// A facet-only response listing brand counts in the given order.
///
/// Built as raw text because `json!` objects do not keep insertion order.
pub fn facet_response(brands: &[(&str, u64)], nb_hits: u64) -> ResponseTemplate {
    let counts = brands
        .iter()
        .map(|(brand, count)| format!("{}:{count}", Value::String((*brand).to_owned())))
        .collect::<Vec<_>>()
        .join(",");
    let body = format!(
        r#"{{"results":[{{"hits":[],"nbHits":{nb_hits},"facets":{{"consumerBrandName":{{{counts}}}}}}}]}}"#
    );
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

fn first_request(request: &Request) -> Option<Value> {
    let body: Value = serde_json::from_slice(&request.body).ok()?;
    body.get("requests")?.get(0).cloned()
}

/// Matches product queries by their exact `facetFilters`.
///
/// `None` matches an unfiltered product query; `Some(brands)` matches a query
/// with exactly one OR group containing exactly those brands in order.
/// Facet-count queries never match.
pub struct ProductQuery(pub Option<Vec<&'static str>>);

impl Match for ProductQuery {
    fn matches(&self, request: &Request) -> bool {
        let Some(req) = first_request(request) else {
            return false;
        };
        let params = req.get("params").and_then(Value::as_str).unwrap_or_default();
        if params.contains("facets=") {
            return false;
        }
        match (&self.0, req.get("facetFilters")) {
            (None, None) => true,
            (Some(brands), Some(filters)) => {
                let expected: Vec<Vec<String>> = vec![brands
                    .iter()
                    .map(|b| format!("consumerBrandName:{b}"))
                    .collect()];
                serde_json::from_value::<Vec<Vec<String>>>(filters.clone())
                    .is_ok_and(|actual| actual == expected)
            }
            _ => false,
        }
    }
}

/// Matches facet-count queries (`hitsPerPage=0` with a `facets` list).
pub struct FacetQuery;

impl Match for FacetQuery {
    fn matches(&self, request: &Request) -> bool {
        first_request(request)
            .and_then(|req| req.get("params").and_then(Value::as_str).map(str::to_owned))
            .is_some_and(|params| params.contains("hitsPerPage=0&") && params.contains("facets="))
    }
}
