use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SEARCH_APP_ID: &str = "QGPPR19V8V";
pub const DEFAULT_STOREFRONT_BASE_URL: &str = "https://www.wegmans.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let search_api_key = require("SHELFSCAN_SEARCH_API_KEY")?;
    let search_app_id = or_default("SHELFSCAN_SEARCH_APP_ID", DEFAULT_SEARCH_APP_ID);
    let search_base_url = lookup("SHELFSCAN_SEARCH_BASE_URL")
        .unwrap_or_else(|_| default_search_base_url(&search_app_id));
    let search_index = or_default("SHELFSCAN_SEARCH_INDEX", "products");
    let storefront_base_url = or_default(
        "SHELFSCAN_STOREFRONT_BASE_URL",
        DEFAULT_STOREFRONT_BASE_URL,
    );
    let log_level = or_default("SHELFSCAN_LOG_LEVEL", "info");
    let user_agent = or_default("SHELFSCAN_USER_AGENT", DEFAULT_USER_AGENT);

    let hits_per_page = parse_u32("SHELFSCAN_HITS_PER_PAGE", "750")?;
    if hits_per_page == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHELFSCAN_HITS_PER_PAGE".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let max_values_per_facet = parse_u32("SHELFSCAN_MAX_VALUES_PER_FACET", "1000")?;
    let inter_category_delay_ms = parse_u64("SHELFSCAN_INTER_CATEGORY_DELAY_MS", "200")?;
    let request_timeout_secs = parse_u64("SHELFSCAN_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        log_level,
        storefront_base_url,
        search_base_url,
        search_app_id,
        search_api_key,
        search_index,
        hits_per_page,
        max_values_per_facet,
        inter_category_delay_ms,
        request_timeout_secs,
        user_agent,
    })
}

/// Hosted search clusters are addressed per application id.
fn default_search_base_url(app_id: &str) -> String {
    format!("https://{app_id}-dsn.algolia.net")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
