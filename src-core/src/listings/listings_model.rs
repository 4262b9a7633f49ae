use serde::{Deserialize, Serialize};

use crate::goods::Good;

/// Aggregate counts for one listing page. `removed` counts soft-deleted
/// goods inside the page window; `total` counts every row in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingMeta {
    pub total: i64,
    pub removed: i64,
    pub limit: i64,
    pub offset: i64,
}

/// A materialized page of goods plus its aggregates; the unit the listing
/// cache stores and the listing endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub meta: ListingMeta,
    pub goods: Vec<Good>,
}
