//! Query-string construction for the hosted search API.
//!
//! Every request carries a `params` string in URL query form. The filter
//! predicate scoping a request to one store and one subcategory is shared by
//! facet and product queries so their counts stay consistent.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Facet used to split oversized subcategories.
pub const BRAND_FACET: &str = "consumerBrandName";

/// Characters left readable inside a `params` value.
const PARAM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b':');

/// An OR group of brand equality clauses, queried together as one partition.
pub type FacetFilterGroup = Vec<String>;

/// Builds the `facet:value` equality clause used inside a filter group.
#[must_use]
pub fn brand_clause(brand: &str) -> String {
    format!("{BRAND_FACET}:{brand}")
}

/// Builds a filter group matching any of `brands`.
#[must_use]
pub fn brand_filter_group<S: AsRef<str>>(brands: &[S]) -> FacetFilterGroup {
    brands.iter().map(|b| brand_clause(b.as_ref())).collect()
}

/// Base predicate: in-store, web-visible products of one subcategory at one store.
#[must_use]
pub fn base_filters(subcategory: &str, store_number: u32) -> String {
    format!(
        "storeNumber:{store_number} AND category.key:{subcategory} AND \
         excludeFromWeb:false AND isSoldAtStore:true AND fulfilmentType:instore"
    )
}

/// `params` for a product query returning up to `hits_per_page` hits.
#[must_use]
pub fn product_params(subcategory: &str, store_number: u32, hits_per_page: u32) -> String {
    encode_params(&[
        ("query", String::new()),
        ("page", "0".to_owned()),
        ("hitsPerPage", hits_per_page.to_string()),
        ("filters", base_filters(subcategory, store_number)),
    ])
}

/// `params` for a facet-count query. `hitsPerPage=0` skips the hit payload.
#[must_use]
pub fn facet_params(
    subcategory: &str,
    store_number: u32,
    facet: &str,
    max_values_per_facet: u32,
) -> String {
    encode_params(&[
        ("query", String::new()),
        ("page", "0".to_owned()),
        ("hitsPerPage", "0".to_owned()),
        ("filters", base_filters(subcategory, store_number)),
        ("facets", format!("[\"{facet}\"]")),
        ("maxValuesPerFacet", max_values_per_facet.to_string()),
    ])
}

fn encode_params(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, PARAM_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_filters_scopes_store_and_subcategory() {
        assert_eq!(
            base_filters("dairy-milk", 74),
            "storeNumber:74 AND category.key:dairy-milk AND excludeFromWeb:false \
             AND isSoldAtStore:true AND fulfilmentType:instore"
        );
    }

    #[test]
    fn product_params_encodes_filters() {
        let params = product_params("dairy-milk", 74, 750);
        assert_eq!(
            params,
            "query=&page=0&hitsPerPage=750&filters=storeNumber:74%20AND%20category.key:dairy-milk\
             %20AND%20excludeFromWeb:false%20AND%20isSoldAtStore:true%20AND%20fulfilmentType:instore"
        );
    }

    #[test]
    fn facet_params_requests_no_hits_and_one_facet() {
        let params = facet_params("dairy-milk", 74, BRAND_FACET, 1000);
        assert!(params.starts_with("query=&page=0&hitsPerPage=0&filters="));
        assert!(params.contains("&facets=%5B%22consumerBrandName%22%5D"));
        assert!(params.ends_with("&maxValuesPerFacet=1000"));
    }

    #[test]
    fn brand_filter_group_builds_or_clauses_in_order() {
        let group = brand_filter_group(&["Wegmans", "Barilla"]);
        assert_eq!(
            group,
            vec![
                "consumerBrandName:Wegmans".to_owned(),
                "consumerBrandName:Barilla".to_owned()
            ]
        );
    }

    #[test]
    fn ampersand_in_subcategory_is_escaped() {
        let params = product_params("beer&wine", 1, 10);
        assert!(params.contains("category.key:beer%26wine"));
        assert_eq!(params.matches('&').count(), 3);
    }
}
