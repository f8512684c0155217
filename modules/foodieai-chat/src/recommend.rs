//! Recommendation cards for the UI, selected independently of the free-text
//! context. Deals always lead; remaining slots fill from reference menus,
//! then matched store items, in source order.

use foodieai_catalog::reference::ReferenceRestaurant;
use foodieai_common::{CardKind, RecommendationCard, StoredMenuItem};

use crate::context::DealOffer;

pub const MAX_CARDS: usize = 5;
pub const MAX_DEAL_CARDS: usize = 3;

pub fn select_recommendations(
    deals: &[DealOffer],
    popular: &[&'static ReferenceRestaurant],
    items: &[StoredMenuItem],
    keywords: &[String],
    budget: Option<i64>,
) -> Vec<RecommendationCard> {
    let mut cards: Vec<RecommendationCard> = deals
        .iter()
        .take(MAX_DEAL_CARDS)
        .map(|d| RecommendationCard {
            kind: CardKind::Deal,
            title: d.title.clone(),
            subtitle: d.restaurant.clone(),
            price: d.price,
            description: d.description.clone(),
        })
        .collect();

    // Reference menu entries: budget and keyword relevance apply here.
    for r in popular {
        for m in r.menu {
            if cards.len() >= MAX_CARDS {
                break;
            }
            if budget.is_some_and(|b| m.price > b) {
                continue;
            }
            let relevant = keywords.is_empty()
                || keywords.iter().any(|k| {
                    m.name.to_lowercase().contains(k.as_str())
                        || m.category.to_lowercase().contains(k.as_str())
                });
            if relevant {
                cards.push(RecommendationCard {
                    kind: CardKind::Item,
                    title: m.name.to_string(),
                    subtitle: r.name.to_string(),
                    price: m.price,
                    description: m.description.to_string(),
                });
            }
        }
    }

    // Store matches fill whatever is left, unfiltered.
    for m in items {
        if cards.len() >= MAX_CARDS {
            break;
        }
        cards.push(RecommendationCard {
            kind: CardKind::Item,
            title: m.name.clone(),
            subtitle: m
                .restaurant
                .as_ref()
                .map(|r| r.business_name.clone())
                .unwrap_or_else(|| "Restaurant".to_string()),
            price: m.price,
            description: m.description.clone(),
        });
    }

    cards
}
