// Module declarations
pub(crate) mod listings_cache;
pub(crate) mod listings_errors;
pub(crate) mod listings_model;
pub(crate) mod listings_traits;

// Re-export the public interface
pub use listings_cache::{ListingCache, LISTING_KEY_PREFIX};
pub use listings_model::{ListingMeta, ListingPage};
pub use listings_traits::ListingCacheTrait;

// Re-export error types for convenience
pub use listings_errors::{CacheError, Result};
