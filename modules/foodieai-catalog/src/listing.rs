//! Merged discovery view: verified partner restaurants from the store
//! joined with the static reference list, behind search/cuisine filters
//! and pagination.

use serde::Serialize;

use foodieai_common::RegisteredRestaurant;

use crate::reference::{ReferenceRestaurant, REFERENCE_RESTAURANTS};

pub const DEFAULT_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, Serialize)]
pub struct ExternalMenuEntry {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExternalRestaurant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub description: String,
    #[serde(rename = "isPartner")]
    pub is_partner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub menu: Vec<ExternalMenuEntry>,
}

impl ExternalRestaurant {
    fn from_partner(r: &RegisteredRestaurant) -> Self {
        Self {
            id: None,
            name: r.business_name.clone(),
            cuisine: r.cuisine.clone(),
            address: r.location.clone(),
            description: format!("Authentic {} cuisine", r.cuisine),
            is_partner: true,
            rating: None,
            menu: Vec::new(),
        }
    }

    fn from_reference(r: &ReferenceRestaurant) -> Self {
        Self {
            id: Some(r.id.to_string()),
            name: r.name.to_string(),
            cuisine: r.cuisine.to_string(),
            address: r.address.to_string(),
            description: r.description.to_string(),
            is_partner: false,
            rating: Some(r.rating),
            menu: r
                .menu
                .iter()
                .map(|m| ExternalMenuEntry {
                    name: m.name.to_string(),
                    price: m.price,
                    description: m.description.to_string(),
                    category: m.category.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ListingQuery {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
    pub cuisine: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListingPage {
    pub results: Vec<ExternalRestaurant>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Merge partners ahead of the reference list, apply the search filter
/// (substring on name or description), the exact cuisine filter, then
/// paginate.
pub fn merge_external(partners: &[RegisteredRestaurant], query: &ListingQuery) -> ListingPage {
    let page = query.page.max(1);
    let limit = if query.limit == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        query.limit
    };

    let mut results: Vec<ExternalRestaurant> = partners
        .iter()
        .map(ExternalRestaurant::from_partner)
        .chain(REFERENCE_RESTAURANTS.iter().map(ExternalRestaurant::from_reference))
        .collect();

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        let lower = search.to_lowercase();
        results.retain(|r| {
            r.name.to_lowercase().contains(&lower)
                || r.description.to_lowercase().contains(&lower)
        });
    }

    if let Some(cuisine) = query.cuisine.as_deref().filter(|c| !c.is_empty() && *c != "All") {
        results.retain(|r| r.cuisine.eq_ignore_ascii_case(cuisine));
    }

    let total = results.len();
    let total_pages = total.div_ceil(limit);
    let start = (page - 1) * limit;
    let results = if start >= total {
        Vec::new()
    } else {
        results.into_iter().skip(start).take(limit).collect()
    };

    ListingPage {
        results,
        total,
        total_pages,
        page,
    }
}

/// Reference restaurant detail lookup by listing id.
pub fn reference_detail(id: &str) -> Option<&'static ReferenceRestaurant> {
    REFERENCE_RESTAURANTS.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(name: &str, cuisine: &str) -> RegisteredRestaurant {
        RegisteredRestaurant {
            business_name: name.to_string(),
            cuisine: cuisine.to_string(),
            location: "Lahore".to_string(),
        }
    }

    #[test]
    fn test_partners_listed_before_reference() {
        let partners = vec![partner("Karachi Broast", "Fast Food")];
        let page = merge_external(&partners, &ListingQuery::default());
        assert_eq!(page.results[0].name, "Karachi Broast");
        assert!(page.results[0].is_partner);
        assert!(!page.results[1].is_partner);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let page = merge_external(
            &[],
            &ListingQuery {
                search: Some("karahi".to_string()),
                ..Default::default()
            },
        );
        assert!(!page.results.is_empty());
        for r in &page.results {
            let lower = format!("{} {}", r.name, r.description).to_lowercase();
            assert!(lower.contains("karahi"));
        }
    }

    #[test]
    fn test_cuisine_filter_is_exact() {
        let page = merge_external(
            &[],
            &ListingQuery {
                cuisine: Some("desi".to_string()),
                ..Default::default()
            },
        );
        assert!(!page.results.is_empty());
        assert!(page.results.iter().all(|r| r.cuisine == "Desi"));
    }

    #[test]
    fn test_cuisine_all_is_passthrough() {
        let filtered = merge_external(
            &[],
            &ListingQuery {
                cuisine: Some("All".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.total, REFERENCE_RESTAURANTS.len());
    }

    #[test]
    fn test_pagination_envelope() {
        let page = merge_external(
            &[],
            &ListingQuery {
                page: 2,
                limit: 10,
                ..Default::default()
            },
        );
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 10);
        assert_eq!(page.results[0].id.as_deref(), Some("man-11"));
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = merge_external(
            &[],
            &ListingQuery {
                page: 9,
                limit: 10,
                ..Default::default()
            },
        );
        assert!(page.results.is_empty());
        assert_eq!(page.total, 25);
    }

    #[test]
    fn test_reference_detail_lookup() {
        assert_eq!(reference_detail("man-3").unwrap().name, "Haveli Restaurant");
        assert!(reference_detail("man-99").is_none());
    }
}
