//! End-to-end pipeline tests with a scripted catalog and generator.

use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use uuid::Uuid;

use foodieai_catalog::CatalogReader;
use foodieai_chat::context::NO_MATCH_NOTICE;
use foodieai_chat::{run_chat, TextGenerator, FALLBACK_MODEL, PRIMARY_MODEL};
use foodieai_common::{CardKind, RegisteredRestaurant, StoredDeal, StoredMenuItem};

// ---------------------------------------------------------------------------
// Scripted catalog
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeCatalog {
    restaurants: Vec<RegisteredRestaurant>,
    deals: Vec<StoredDeal>,
    items: Vec<StoredMenuItem>,
    fail: bool,
    seen_search: Mutex<Option<(Vec<String>, Option<i64>)>>,
}

#[async_trait]
impl CatalogReader for FakeCatalog {
    async fn verified_restaurants(&self) -> Result<Vec<RegisteredRestaurant>> {
        if self.fail {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.restaurants.clone())
    }

    async fn active_deals(&self) -> Result<Vec<StoredDeal>> {
        Ok(self.deals.clone())
    }

    async fn search_menu_items(
        &self,
        keywords: &[String],
        budget: Option<i64>,
    ) -> Result<Vec<StoredMenuItem>> {
        *self.seen_search.lock().unwrap() = Some((keywords.to_vec(), budget));
        Ok(self.items.clone())
    }
}

// ---------------------------------------------------------------------------
// Scripted generator
// ---------------------------------------------------------------------------

struct ScriptedGenerator {
    failing_models: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
    seen_system: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    fn new(failing_models: &[&'static str]) -> Self {
        Self {
            failing_models: failing_models.iter().copied().collect(),
            calls: Mutex::new(Vec::new()),
            seen_system: Mutex::new(None),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn system(&self) -> String {
        self.seen_system.lock().unwrap().clone().unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        model: &str,
        system_instruction: &str,
        _message: &str,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(model.to_string());
        *self.seen_system.lock().unwrap() = Some(system_instruction.to_string());
        if self.failing_models.contains(model) {
            return Err(anyhow!("model {model} unavailable"));
        }
        Ok(format!("reply from {model}"))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn partner() -> RegisteredRestaurant {
    RegisteredRestaurant {
        business_name: "Karachi Broast".to_string(),
        cuisine: "Fast Food".to_string(),
        location: "Johar Town".to_string(),
    }
}

fn store_item(name: &str, price: i64) -> StoredMenuItem {
    StoredMenuItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: "Spicy and crispy".to_string(),
        price,
        category: "Mains".to_string(),
        restaurant: Some(partner()),
    }
}

fn store_deal(title: &str, price: i64) -> StoredDeal {
    StoredDeal {
        title: title.to_string(),
        deal_price: price,
        original_price: Some(price + 300),
        description: "Limited time".to_string(),
        restaurant: Some(partner()),
    }
}

// ---------------------------------------------------------------------------
// Completion retry contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn primary_model_success_reports_primary() {
    let catalog = FakeCatalog::default();
    let generator = ScriptedGenerator::new(&[]);

    let reply = run_chat(&catalog, &generator, "hi", None).await.unwrap();

    assert_eq!(reply.model_used, PRIMARY_MODEL);
    assert_eq!(generator.calls(), vec![PRIMARY_MODEL.to_string()]);
}

#[tokio::test]
async fn primary_failure_falls_back_once() {
    let catalog = FakeCatalog::default();
    let generator = ScriptedGenerator::new(&[PRIMARY_MODEL]);

    let reply = run_chat(&catalog, &generator, "hi", None).await.unwrap();

    assert_eq!(reply.model_used, FALLBACK_MODEL);
    assert_eq!(reply.reply, format!("reply from {FALLBACK_MODEL}"));
    assert_eq!(
        generator.calls(),
        vec![PRIMARY_MODEL.to_string(), FALLBACK_MODEL.to_string()]
    );
}

#[tokio::test]
async fn both_models_failing_is_terminal() {
    let catalog = FakeCatalog::default();
    let generator = ScriptedGenerator::new(&[PRIMARY_MODEL, FALLBACK_MODEL]);

    let err = run_chat(&catalog, &generator, "hi", None).await.unwrap_err();

    assert!(err.to_string().contains("unavailable"));
    // Exactly two attempts, never a third.
    assert_eq!(generator.calls().len(), 2);
}

#[tokio::test]
async fn store_failure_propagates_without_calling_the_model() {
    let catalog = FakeCatalog {
        fail: true,
        ..Default::default()
    };
    let generator = ScriptedGenerator::new(&[]);

    let err = run_chat(&catalog, &generator, "hi", None).await.unwrap_err();

    assert!(err.to_string().contains("connection refused"));
    assert!(generator.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Query interpretation flows through to the store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn budget_and_keywords_reach_the_store_query() {
    let catalog = FakeCatalog::default();
    let generator = ScriptedGenerator::new(&[]);

    run_chat(&catalog, &generator, "spicy food under 1000", None)
        .await
        .unwrap();

    let (keywords, budget) = catalog.seen_search.lock().unwrap().clone().unwrap();
    assert!(keywords.contains(&"spicy".to_string()));
    assert!(!keywords.contains(&"food".to_string()));
    assert_eq!(budget, Some(1000));
}

// ---------------------------------------------------------------------------
// Context contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn budget_filters_deals_out_of_the_context() {
    let catalog = FakeCatalog {
        deals: vec![store_deal("Mega Feast", 4000)],
        ..Default::default()
    };
    let generator = ScriptedGenerator::new(&[]);

    run_chat(&catalog, &generator, "spicy food under 1000", None)
        .await
        .unwrap();

    let system = generator.system();
    assert!(!system.contains("Mega Feast"));
    assert!(!system.contains("Royal BBQ Platter")); // 2500, over budget
    assert!(system.contains("Solo Smash Combo")); // 850, fits
    assert!(system.contains("Lahori Nashta Special")); // 600, fits
}

#[tokio::test]
async fn greeting_gets_fallback_spots_and_no_match_notice() {
    let catalog = FakeCatalog {
        restaurants: vec![partner()],
        ..Default::default()
    };
    let generator = ScriptedGenerator::new(&[]);

    let reply = run_chat(&catalog, &generator, "hi", None).await.unwrap();

    let system = generator.system();
    // First three reference entries are always present for empty queries.
    assert!(system.contains("Butt Karahi"));
    assert!(system.contains("Mohammadi Nihari House"));
    assert!(system.contains("Haveli Restaurant"));
    // Store lookups were empty, so the no-hallucination guard appears.
    assert!(system.contains(NO_MATCH_NOTICE));
    // Reference deals still produce cards, deals first.
    assert!(!reply.recommended_items.is_empty());
    assert_eq!(reply.recommended_items[0].kind, CardKind::Deal);
    assert!(reply.recommended_items.len() <= 5);
}

#[tokio::test]
async fn matched_items_suppress_the_no_match_notice() {
    let catalog = FakeCatalog {
        items: vec![store_item("Spicy Broast", 600)],
        ..Default::default()
    };
    let generator = ScriptedGenerator::new(&[]);

    run_chat(&catalog, &generator, "spicy broast", None)
        .await
        .unwrap();

    let system = generator.system();
    assert!(system.contains("Spicy Broast"));
    assert!(!system.contains(NO_MATCH_NOTICE));
}

#[tokio::test]
async fn user_location_lands_in_the_system_prompt() {
    let catalog = FakeCatalog::default();
    let generator = ScriptedGenerator::new(&[]);

    run_chat(&catalog, &generator, "hi", Some("Gulberg"))
        .await
        .unwrap();

    assert!(generator.system().contains("User Location: \"Gulberg\"."));
}
