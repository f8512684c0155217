//! Read seam over the live catalog store.

use anyhow::Result;
use async_trait::async_trait;

use foodieai_common::{RegisteredRestaurant, StoredDeal, StoredMenuItem};

/// Point-in-time reads against the restaurant/menu/deal store.
///
/// Implemented by `PgCatalog` (postgres) and by scripted fakes in tests.
/// Each call is an independent query with no cross-read consistency
/// guarantee.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// All verified restaurant profiles, unfiltered.
    async fn verified_restaurants(&self) -> Result<Vec<RegisteredRestaurant>>;

    /// All active deals, with the owning restaurant projected when present.
    async fn active_deals(&self) -> Result<Vec<StoredDeal>>;

    /// Available menu items matching any keyword (substring against name,
    /// description, or category, case-insensitive) OR fitting under the
    /// budget. With neither keywords nor budget, all available items
    /// qualify. Capped at the store match limit.
    async fn search_menu_items(
        &self,
        keywords: &[String],
        budget: Option<i64>,
    ) -> Result<Vec<StoredMenuItem>>;
}
