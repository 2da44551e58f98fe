//! Response and request shapes for the storefront and hosted search APIs.
//!
//! ## Store directory (`GET /api/stores`)
//! A bare JSON array of store records. Only `storeNumber` and `name` are
//! consumed; everything else (address, hours, services) is ignored.
//!
//! ## Category document (`GET /api/categories/{store}`)
//! `subCategoriesWithData` maps a department name to an ordered list of
//! subcategory descriptors. Department order matters for reproducible runs,
//! so it is deserialized into an [`IndexMap`].
//!
//! ## Search (`POST /1/indexes/*/queries`)
//! A multi-query envelope; this client always sends exactly one request and
//! reads `results[0]`. `nbHits` is the true match count regardless of
//! `hitsPerPage`. `facets` is only present when facets were requested, and
//! its per-value ordering is the backend's arrival order.
//!
//! ### Hit attributes
//! Hits are schemaless on the backend side. The exported attributes are
//! modelled as optional raw JSON values because their types drift between
//! products (`upc` as string or array, `packSize` as string or number, tags
//! as arrays). Missing and `null` attributes both land as `None`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the store directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "storeNumber")]
    pub store_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Per-store category document.
#[derive(Debug, Deserialize)]
pub struct CategoryDocument {
    #[serde(rename = "subCategoriesWithData", default)]
    pub sub_categories_with_data: IndexMap<String, Vec<SubcategoryDescriptor>>,
}

#[derive(Debug, Deserialize)]
pub struct SubcategoryDescriptor {
    pub key: String,
}

/// Outgoing multi-query envelope.
#[derive(Debug, Serialize)]
pub struct SearchRequestBody<'a> {
    pub requests: Vec<SearchRequest<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename = "indexName")]
    pub index_name: &'a str,
    pub params: String,
    /// Outer list is ANDed, each inner list is an OR group.
    #[serde(rename = "facetFilters", skip_serializing_if = "Option::is_none")]
    pub facet_filters: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One query's worth of results.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub hits: Vec<ProductHit>,

    /// Total number of matching records, independent of `hitsPerPage`.
    #[serde(rename = "nbHits", default)]
    pub nb_hits: u64,

    /// Facet name -> (value -> count), in arrival order.
    #[serde(default)]
    pub facets: IndexMap<String, IndexMap<String, u64>>,
}

/// A single product record from the search index.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductHit {
    #[serde(rename = "objectID", default)]
    pub object_id: Option<String>,
    #[serde(rename = "productName", default)]
    pub product_name: Option<Value>,
    #[serde(default)]
    pub upc: Option<Value>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<Value>,
    #[serde(rename = "productKeywords", default)]
    pub product_keywords: Option<Value>,
    #[serde(rename = "isAvailable", default)]
    pub is_available: Option<Value>,
    #[serde(rename = "consumerBrandName", default)]
    pub consumer_brand_name: Option<Value>,
    #[serde(rename = "popularTags", default)]
    pub popular_tags: Option<Value>,
    #[serde(rename = "filterTags", default)]
    pub filter_tags: Option<Value>,
    #[serde(rename = "webProductDescription", default)]
    pub web_product_description: Option<Value>,
    #[serde(rename = "price_inStore", default)]
    pub price_in_store: Option<PriceInStore>,
    #[serde(rename = "skuId", default)]
    pub sku_id: Option<Value>,
    #[serde(rename = "taxCode", default)]
    pub tax_code: Option<Value>,
    #[serde(rename = "packSize", default)]
    pub pack_size: Option<Value>,
    #[serde(rename = "productId", default)]
    pub product_id: Option<Value>,
    #[serde(rename = "productDescription", default)]
    pub product_description: Option<Value>,
}

/// Nested in-store price block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceInStore {
    #[serde(rename = "unitPrice", default)]
    pub unit_price: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
}
