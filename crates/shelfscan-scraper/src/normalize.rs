//! Projection from raw search hits to [`shelfscan_core::CatalogRow`].

use serde_json::Value;
use shelfscan_core::CatalogRow;

use crate::types::ProductHit;

/// Flattens a hit into the fixed catalog columns.
///
/// Absent attributes, including a missing `price_inStore` block, become empty
/// strings.
#[must_use]
pub fn hit_to_row(hit: &ProductHit) -> CatalogRow {
    let price = hit.price_in_store.as_ref();

    CatalogRow {
        product_name: render(hit.product_name.as_ref()),
        upc: render(hit.upc.as_ref()),
        last_updated: render(hit.last_updated.as_ref()),
        product_keywords: render(hit.product_keywords.as_ref()),
        is_available: render(hit.is_available.as_ref()),
        consumer_brand_name: render(hit.consumer_brand_name.as_ref()),
        popular_tags: render(hit.popular_tags.as_ref()),
        filter_tags: render(hit.filter_tags.as_ref()),
        web_product_description: render(hit.web_product_description.as_ref()),
        price_in_store_unit_price: render(price.and_then(|p| p.unit_price.as_ref())),
        price_in_store_amount: render(price.and_then(|p| p.amount.as_ref())),
        sku_id: render(hit.sku_id.as_ref()),
        tax_code: render(hit.tax_code.as_ref()),
        pack_size: render(hit.pack_size.as_ref()),
        product_id: render(hit.product_id.as_ref()),
        product_description: render(hit.product_description.as_ref()),
    }
}

/// Renders one attribute as cell text.
///
/// Strings are written unquoted, other scalars via their JSON text, and
/// arrays/objects as compact JSON.
fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
