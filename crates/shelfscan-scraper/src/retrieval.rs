//! Complete retrieval of a subcategory despite the per-query hit cap.
//!
//! The search backend never returns more than `hitsPerPage` hits for a query,
//! and this index exposes no usable deep pagination. A subcategory whose
//! `nbHits` exceeds what one query returned is therefore re-fetched as a
//! series of brand-filtered queries, one per [`BrandPartition`], and the hits
//! are concatenated.
//!
//! Brand is assumed to be an exhaustive, mutually exclusive facet. Products
//! with no brand value match no partition filter and are not fetched; when the
//! brand counts fall short of `nbHits` the gap is logged and left visible via
//! [`Retrieval::shortfall`].

use crate::client::SearchClient;
use crate::error::ScraperError;
use crate::partition::{partition_brands, BrandPartition};
use crate::query::{brand_filter_group, BRAND_FACET};
use crate::types::ProductHit;

/// How a subcategory's hits were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalStrategy {
    /// The unfiltered query already returned every match.
    Single,
    /// Hits were reassembled from this many brand-filtered queries.
    Partitioned { partitions: usize },
}

/// Hits for one subcategory plus what the backend said to expect.
#[derive(Debug)]
pub struct Retrieval {
    pub hits: Vec<ProductHit>,
    /// `nbHits` from the unfiltered query.
    pub expected_total: u64,
    pub strategy: RetrievalStrategy,
}

impl Retrieval {
    /// Number of matches the backend reported that were not retrieved.
    #[must_use]
    pub fn shortfall(&self) -> u64 {
        self.expected_total
            .saturating_sub(u64::try_from(self.hits.len()).unwrap_or(u64::MAX))
    }
}

/// Retrieves every product hit of `subcategory` at `store_number`, splitting
/// by brand when one query of `cap` hits is not enough.
///
/// Issues one unfiltered query. When that already covers `nbHits` it is
/// returned unchanged. Otherwise issues one brand facet query followed by one
/// product query per greedy partition (see [`partition_brands`]).
///
/// Any failed request aborts the whole subcategory; hits from earlier
/// partitions are discarded with it.
///
/// # Errors
///
/// Propagates any [`ScraperError`] from the search client. Returns
/// [`ScraperError::MissingFacet`] when a subcategory needs splitting but the
/// facet query reports no brand counts.
pub async fn retrieve_subcategory(
    client: &SearchClient,
    subcategory: &str,
    store_number: u32,
    cap: u32,
) -> Result<Retrieval, ScraperError> {
    let first = client
        .product_hits(subcategory, store_number, cap, None)
        .await?;
    let expected_total = first.nb_hits;

    if expected_total <= u64::try_from(first.hits.len()).unwrap_or(u64::MAX) {
        tracing::debug!(
            subcategory,
            nb_hits = expected_total,
            "subcategory fits in a single query"
        );
        return Ok(Retrieval {
            hits: first.hits,
            expected_total,
            strategy: RetrievalStrategy::Single,
        });
    }

    let brand_counts = client
        .facet_counts(subcategory, store_number, BRAND_FACET)
        .await?;
    if brand_counts.is_empty() {
        return Err(ScraperError::MissingFacet {
            facet: BRAND_FACET,
            context: format!("subcategory {subcategory}"),
        });
    }
    let branded_total: u64 = brand_counts.values().sum();
    if branded_total < expected_total {
        tracing::warn!(
            subcategory,
            nb_hits = expected_total,
            branded_total,
            missing = expected_total - branded_total,
            "brand facet does not cover every product; unbranded products will be skipped"
        );
    }

    let partitions = partition_brands(&brand_counts, cap);
    tracing::info!(
        subcategory,
        nb_hits = expected_total,
        brands = brand_counts.len(),
        partitions = partitions.len(),
        "splitting oversized subcategory by brand"
    );

    let mut hits = Vec::with_capacity(usize::try_from(branded_total).unwrap_or_default());
    for partition in &partitions {
        hits.extend(fetch_partition(client, subcategory, store_number, cap, partition).await?);
    }

    Ok(Retrieval {
        hits,
        expected_total,
        strategy: RetrievalStrategy::Partitioned {
            partitions: partitions.len(),
        },
    })
}

async fn fetch_partition(
    client: &SearchClient,
    subcategory: &str,
    store_number: u32,
    cap: u32,
    partition: &BrandPartition,
) -> Result<Vec<ProductHit>, ScraperError> {
    if partition.exceeds(cap) {
        tracing::warn!(
            subcategory,
            brand = %partition.brands.join(", "),
            count = partition.declared_total,
            cap,
            "brand alone exceeds the hit cap; its results will be truncated"
        );
    }

    let groups = [brand_filter_group(&partition.brands)];
    let result = client
        .product_hits(subcategory, store_number, cap, Some(&groups))
        .await?;
    tracing::debug!(
        subcategory,
        brands = partition.brands.len(),
        declared = partition.declared_total,
        returned = result.hits.len(),
        "fetched brand partition"
    );
    Ok(result.hits)
}
