//! Context composition: a typed intermediate representation of the four
//! context sections, rendered to the fixed text block the downstream model
//! is prompted against. Section order, headers, and the no-match notice are
//! a textual contract and must not drift.

use std::collections::HashSet;
use std::fmt::Write;

use foodieai_catalog::reference::{ReferenceRestaurant, REFERENCE_DEALS};
use foodieai_common::{StoredDeal, StoredMenuItem};

/// The sentence the model keys off to avoid fabricating matches.
pub const NO_MATCH_NOTICE: &str = "No specific matches found for this query in our database. Rely on general food knowledge tailored to Lahore.";

/// A deal from either source, normalized for the context and for cards.
#[derive(Debug, Clone)]
pub struct DealOffer {
    pub title: String,
    pub restaurant: String,
    pub price: i64,
    pub original_price: Option<i64>,
    pub description: String,
}

/// Merge store deals (first) with the static reference deals, dropping
/// store deals whose restaurant projection is missing, then filter by the
/// budget ceiling when one was extracted.
pub fn merge_deals(store_deals: &[StoredDeal], budget: Option<i64>) -> Vec<DealOffer> {
    let mut all: Vec<DealOffer> = store_deals
        .iter()
        .filter_map(|d| {
            let restaurant = d.restaurant.as_ref()?;
            Some(DealOffer {
                title: d.title.clone(),
                restaurant: restaurant.business_name.clone(),
                price: d.deal_price,
                original_price: d.original_price,
                description: d.description.clone(),
            })
        })
        .collect();

    all.extend(REFERENCE_DEALS.iter().map(|d| DealOffer {
        title: d.title.to_string(),
        restaurant: d.restaurant.to_string(),
        price: d.price,
        original_price: None,
        description: d.description.to_string(),
    }));

    if let Some(b) = budget {
        all.retain(|d| d.price <= b);
    }

    all
}

/// Typed sections of the context block, in render order.
pub struct ContextDocument<'a> {
    pub registered: &'a [foodieai_common::RegisteredRestaurant],
    pub popular: &'a [&'static ReferenceRestaurant],
    pub deals: &'a [DealOffer],
    pub items: &'a [StoredMenuItem],
    /// Whether the query carried keywords or a budget. When it did not, the
    /// popular section holds unconditional fallback entries, which do not
    /// count as matches for the no-match notice.
    pub had_criteria: bool,
}

impl ContextDocument<'_> {
    /// True when neither matched set has content: stored items are empty and
    /// the reference list produced no criteria-driven matches.
    pub fn no_matches(&self) -> bool {
        self.items.is_empty() && (self.popular.is_empty() || !self.had_criteria)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("### REGISTERED RESTAURANTS:\n");
        for r in self.registered {
            let _ = writeln!(out, "- {} ({}) in {}.", r.business_name, r.cuisine, r.location);
        }

        out.push_str("\n### POPULAR LOCAL SPOTS (External):\n");
        for r in self.popular {
            let _ = writeln!(
                out,
                "- **{}** ({}) in {}. Famous For: {}",
                r.name, r.cuisine, r.address, r.description
            );
            out.push_str("  *Menu Highlights*:\n");
            for m in r.menu {
                let _ = writeln!(out, "   - {} (Rs. {}): {}", m.name, m.price, m.description);
            }
            out.push('\n');
        }

        out.push_str("\n### ACTIVE DEALS (Best Value):\n");
        if self.deals.is_empty() {
            out.push_str("No specific deals found within these criteria.\n");
        } else {
            for d in self.deals {
                let original = d
                    .original_price
                    .map(|p| format!(" (Original: {p})"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "- DEAL: \"{}\" at {}. Price: Rs. {}{}. {}",
                    d.title, d.restaurant, d.price, original, d.description
                );
            }
        }

        out.push_str("\n### MENU ITEMS (From Matches):\n");
        let mut seen = HashSet::new();
        for m in self.items {
            let Some(r) = m.restaurant.as_ref() else {
                continue;
            };
            if !seen.insert(m.id) {
                continue;
            }
            let _ = writeln!(
                out,
                "- Item: \"{}\" ({}) at {}. Price: Rs. {}. Description: {}",
                m.name, m.category, r.business_name, m.price, m.description
            );
        }

        if self.no_matches() {
            out.push_str(NO_MATCH_NOTICE);
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodieai_catalog::reference::REFERENCE_RESTAURANTS;
    use foodieai_common::RegisteredRestaurant;
    use uuid::Uuid;

    fn restaurant() -> RegisteredRestaurant {
        RegisteredRestaurant {
            business_name: "Karachi Broast".to_string(),
            cuisine: "Fast Food".to_string(),
            location: "Johar Town".to_string(),
        }
    }

    fn item(id: Uuid, name: &str) -> StoredMenuItem {
        StoredMenuItem {
            id,
            name: name.to_string(),
            description: "Crispy".to_string(),
            price: 500,
            category: "Broast".to_string(),
            restaurant: Some(restaurant()),
        }
    }

    fn store_deal(title: &str, price: i64) -> StoredDeal {
        StoredDeal {
            title: title.to_string(),
            deal_price: price,
            original_price: Some(price + 200),
            description: "Limited time".to_string(),
            restaurant: Some(restaurant()),
        }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let doc = ContextDocument {
            registered: &[restaurant()],
            popular: &[&REFERENCE_RESTAURANTS[0]],
            deals: &[],
            items: &[],
            had_criteria: true,
        };
        let text = doc.render();
        let reg = text.find("### REGISTERED RESTAURANTS:").unwrap();
        let pop = text.find("### POPULAR LOCAL SPOTS (External):").unwrap();
        let deals = text.find("### ACTIVE DEALS (Best Value):").unwrap();
        let items = text.find("### MENU ITEMS (From Matches):").unwrap();
        assert!(reg < pop && pop < deals && deals < items);
    }

    #[test]
    fn test_deal_line_with_and_without_original_price() {
        let merged = merge_deals(&[store_deal("Broast Bonanza", 800)], None);
        let doc = ContextDocument {
            registered: &[],
            popular: &[],
            deals: &merged,
            items: &[item(Uuid::new_v4(), "Broast")],
            had_criteria: true,
        };
        let text = doc.render();
        assert!(text.contains(
            "- DEAL: \"Broast Bonanza\" at Karachi Broast. Price: Rs. 800 (Original: 1000). Limited time"
        ));
        // Reference deals carry no original price
        assert!(text.contains("- DEAL: \"Solo Smash Combo\" at Rina's Kitchenette. Price: Rs. 850. Classic Smash Burger + Fries + Soft Drink"));
    }

    #[test]
    fn test_no_match_notice_when_both_sets_empty() {
        let doc = ContextDocument {
            registered: &[restaurant()],
            popular: &[],
            deals: &[],
            items: &[],
            had_criteria: true,
        };
        assert!(doc.render().contains(NO_MATCH_NOTICE));
    }

    #[test]
    fn test_no_match_notice_absent_when_items_matched() {
        let doc = ContextDocument {
            registered: &[],
            popular: &[],
            deals: &[],
            items: &[item(Uuid::new_v4(), "Broast")],
            had_criteria: true,
        };
        assert!(!doc.render().contains(NO_MATCH_NOTICE));
    }

    #[test]
    fn test_no_match_notice_absent_when_reference_matched() {
        let doc = ContextDocument {
            registered: &[],
            popular: &[&REFERENCE_RESTAURANTS[0]],
            deals: &[],
            items: &[],
            had_criteria: true,
        };
        assert!(!doc.render().contains(NO_MATCH_NOTICE));
    }

    #[test]
    fn test_fallback_popular_entries_do_not_count_as_matches() {
        // "hi" query: no criteria, popular holds the unconditional first 3.
        let popular: Vec<&'static _> = REFERENCE_RESTAURANTS.iter().take(3).collect();
        let doc = ContextDocument {
            registered: &[],
            popular: &popular,
            deals: &[],
            items: &[],
            had_criteria: false,
        };
        assert!(doc.render().contains(NO_MATCH_NOTICE));
    }

    #[test]
    fn test_items_deduplicated_by_id() {
        let id = Uuid::new_v4();
        let items = vec![item(id, "Broast"), item(id, "Broast")];
        let doc = ContextDocument {
            registered: &[],
            popular: &[],
            deals: &[],
            items: &items,
            had_criteria: true,
        };
        let text = doc.render();
        assert_eq!(text.matches("- Item: \"Broast\"").count(), 1);
    }

    #[test]
    fn test_item_without_restaurant_skipped() {
        let mut orphan = item(Uuid::new_v4(), "Ghost Fries");
        orphan.restaurant = None;
        let doc = ContextDocument {
            registered: &[],
            popular: &[],
            deals: &[],
            items: &[orphan],
            had_criteria: true,
        };
        assert!(!doc.render().contains("Ghost Fries"));
    }

    #[test]
    fn test_merge_deals_budget_filter() {
        let merged = merge_deals(&[store_deal("Big Feast", 2000)], Some(1000));
        assert!(merged.iter().all(|d| d.price <= 1000));
        // Cheap reference deals survive the filter
        assert!(merged.iter().any(|d| d.title == "Solo Smash Combo"));
        assert!(!merged.iter().any(|d| d.title == "Big Feast"));
    }

    #[test]
    fn test_merge_deals_store_first() {
        let merged = merge_deals(&[store_deal("Broast Bonanza", 800)], None);
        assert_eq!(merged[0].title, "Broast Bonanza");
        assert_eq!(merged.len(), 1 + REFERENCE_DEALS.len());
    }

    #[test]
    fn test_merge_deals_skips_orphaned_store_deal() {
        let mut deal = store_deal("Orphan Deal", 500);
        deal.restaurant = None;
        let merged = merge_deals(&[deal], None);
        assert!(!merged.iter().any(|d| d.title == "Orphan Deal"));
    }
}
