use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::warn;

use foodieai_chat::{run_chat, ChatReply};

use crate::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    message: String,
    #[serde(rename = "userLocation")]
    user_location: Option<String>,
}

fn success_body(reply: &ChatReply) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "reply": reply.reply,
        "modelUsed": reply.model_used,
        "recommendedItems": reply.recommended_items,
    })
}

pub async fn api_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> impl IntoResponse {
    let Some(generator) = state.generator.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "success": false,
                "message": "AI Service Configuration Error: Gemini API Key missing.",
            })),
        )
            .into_response();
    };

    let location = body.user_location.as_deref().or(Some(state.city.as_str()));

    match run_chat(&state.catalog, generator, &body.message, location).await {
        Ok(reply) => Json(success_body(&reply)).into_response(),
        Err(e) => {
            warn!(error = %e, "Chat pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "message": "I'm having a bit of trouble connecting to the network.",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
