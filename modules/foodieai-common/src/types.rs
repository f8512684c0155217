use serde::Serialize;
use uuid::Uuid;

/// Verified restaurant profile projected from the user store.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredRestaurant {
    pub business_name: String,
    pub cuisine: String,
    pub location: String,
}

/// An available menu item from the catalog store, with its owning
/// restaurant projected when that restaurant is still verified.
#[derive(Debug, Clone)]
pub struct StoredMenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub restaurant: Option<RegisteredRestaurant>,
}

/// An active deal from the deal store.
#[derive(Debug, Clone)]
pub struct StoredDeal {
    pub title: String,
    pub deal_price: i64,
    pub original_price: Option<i64>,
    pub description: String,
    pub restaurant: Option<RegisteredRestaurant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Deal,
    Item,
}

/// Structured suggestion surfaced to the UI for click-through,
/// independent of the free-text reply.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    pub subtitle: String,
    pub price: i64,
    pub description: String,
}
