use serde::Serialize;

/// Column order of the exported catalog file.
pub const CATALOG_COLUMNS: [&str; 16] = [
    "productName",
    "upc",
    "lastUpdated",
    "productKeywords",
    "isAvailable",
    "consumerBrandName",
    "popularTags",
    "filterTags",
    "webProductDescription",
    "price_inStore_unitPrice",
    "price_inStore_amount",
    "skuId",
    "taxCode",
    "packSize",
    "productId",
    "productDescription",
];

/// One flattened product hit, ready to be written as a catalog row.
///
/// Every column is already rendered to text; absent attributes are empty
/// strings. Field order matches [`CATALOG_COLUMNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub upc: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    #[serde(rename = "productKeywords")]
    pub product_keywords: String,
    #[serde(rename = "isAvailable")]
    pub is_available: String,
    #[serde(rename = "consumerBrandName")]
    pub consumer_brand_name: String,
    #[serde(rename = "popularTags")]
    pub popular_tags: String,
    #[serde(rename = "filterTags")]
    pub filter_tags: String,
    #[serde(rename = "webProductDescription")]
    pub web_product_description: String,
    /// Flattened from `price_inStore.unitPrice`.
    #[serde(rename = "price_inStore_unitPrice")]
    pub price_in_store_unit_price: String,
    /// Flattened from `price_inStore.amount`.
    #[serde(rename = "price_inStore_amount")]
    pub price_in_store_amount: String,
    #[serde(rename = "skuId")]
    pub sku_id: String,
    #[serde(rename = "taxCode")]
    pub tax_code: String,
    #[serde(rename = "packSize")]
    pub pack_size: String,
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "productDescription")]
    pub product_description: String,
}
