/// Runtime configuration for a catalog scrape.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Root of the retailer storefront serving `/api/stores` and `/api/categories`.
    pub storefront_base_url: String,
    /// Search host serving `/1/indexes/*/queries`.
    pub search_base_url: String,
    pub search_app_id: String,
    pub search_api_key: String,
    pub search_index: String,
    /// Hard per-query hit cap; subcategories above it are split by brand.
    pub hits_per_page: u32,
    pub max_values_per_facet: u32,
    pub inter_category_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("storefront_base_url", &self.storefront_base_url)
            .field("search_base_url", &self.search_base_url)
            .field("search_app_id", &self.search_app_id)
            .field("search_api_key", &"[redacted]")
            .field("search_index", &self.search_index)
            .field("hits_per_page", &self.hits_per_page)
            .field("max_values_per_facet", &self.max_values_per_facet)
            .field("inter_category_delay_ms", &self.inter_category_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
