pub mod client;
pub mod error;
pub mod normalize;
pub mod partition;
pub mod query;
pub mod retrieval;
pub mod types;

pub use client::{SearchClient, StorefrontClient};
pub use error::ScraperError;
pub use normalize::hit_to_row;
pub use partition::{partition_brands, BrandPartition};
pub use query::{FacetFilterGroup, BRAND_FACET};
pub use retrieval::{retrieve_subcategory, Retrieval, RetrievalStrategy};
pub use types::{ProductHit, SearchResult, StoreRecord};
