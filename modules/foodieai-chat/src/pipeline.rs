//! The chat request pipeline: interpret the message, gather candidates from
//! the store and the reference list, compose the model context, pick UI
//! cards, and request a completion with a single primary-to-fallback retry.

use anyhow::Result;
use tracing::{error, warn};

use foodieai_catalog::reference::match_reference_restaurants;
use foodieai_catalog::CatalogReader;
use foodieai_common::{FoodieError, RecommendationCard};

use crate::context::{merge_deals, ContextDocument};
use crate::prompt::system_prompt;
use crate::query::parse_message;
use crate::recommend::select_recommendations;
use crate::traits::TextGenerator;

pub const PRIMARY_MODEL: &str = "gemini-2.5-flash";
pub const FALLBACK_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug)]
pub struct ChatReply {
    pub reply: String,
    pub model_used: String,
    pub recommended_items: Vec<RecommendationCard>,
}

/// Run the full pipeline for one message. Store reads are independent
/// point-in-time queries; nothing is cached across requests.
pub async fn run_chat(
    catalog: &dyn CatalogReader,
    generator: &dyn TextGenerator,
    message: &str,
    user_location: Option<&str>,
) -> Result<ChatReply> {
    let query = parse_message(message);
    let had_criteria = !query.keywords.is_empty() || query.budget.is_some();

    let registered = catalog.verified_restaurants().await?;
    let store_deals = catalog.active_deals().await?;
    let items = catalog
        .search_menu_items(&query.keywords, query.budget)
        .await?;

    let popular = match_reference_restaurants(&query.keywords, query.budget);
    let deals = merge_deals(&store_deals, query.budget);

    let doc = ContextDocument {
        registered: &registered,
        popular: &popular,
        deals: &deals,
        items: &items,
        had_criteria,
    };
    let system = system_prompt(user_location, &doc.render());

    let recommended_items =
        select_recommendations(&deals, &popular, &items, &query.keywords, query.budget);

    let (reply, model_used) = request_reply(generator, &system, message).await?;

    Ok(ChatReply {
        reply,
        model_used,
        recommended_items,
    })
}

/// Two-state completion requester: one attempt against the primary model,
/// and on any failure exactly one retry against the fallback. A fallback
/// failure is terminal.
pub async fn request_reply(
    generator: &dyn TextGenerator,
    system_instruction: &str,
    message: &str,
) -> Result<(String, String)> {
    match generator
        .generate(PRIMARY_MODEL, system_instruction, message)
        .await
    {
        Ok(reply) => Ok((reply, PRIMARY_MODEL.to_string())),
        Err(primary_err) => {
            warn!(
                model = PRIMARY_MODEL,
                error = %primary_err,
                "Primary model failed, retrying with fallback"
            );
            match generator
                .generate(FALLBACK_MODEL, system_instruction, message)
                .await
            {
                Ok(reply) => Ok((reply, FALLBACK_MODEL.to_string())),
                Err(fallback_err) => {
                    error!(
                        model = FALLBACK_MODEL,
                        error = %fallback_err,
                        "All models failed"
                    );
                    Err(FoodieError::Generation(fallback_err.to_string()).into())
                }
            }
        }
    }
}
