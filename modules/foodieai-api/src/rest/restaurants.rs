use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::warn;

use foodieai_catalog::listing::{merge_external, reference_detail, ListingQuery};
use foodieai_catalog::reference::REFERENCE_DEALS;
use foodieai_catalog::CatalogReader;

use crate::AppState;

#[derive(Deserialize)]
pub struct ExternalListQuery {
    page: Option<usize>,
    limit: Option<usize>,
    search: Option<String>,
    cuisine: Option<String>,
}

pub async fn api_external_restaurants(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExternalListQuery>,
) -> impl IntoResponse {
    match state.catalog.verified_restaurants().await {
        Ok(partners) => {
            let page = merge_external(
                &partners,
                &ListingQuery {
                    page: params.page.unwrap_or(1),
                    limit: params.limit.unwrap_or(0),
                    search: params.search,
                    cuisine: params.cuisine,
                },
            );
            Json(serde_json::json!({
                "success": true,
                "source": "merged-api",
                "count": page.total,
                "totalPages": page.total_pages,
                "currentPage": page.page,
                "data": { "results": { "data": page.results } },
            }))
            .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Failed to load external restaurant listing");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "message": "Server Error",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn api_external_restaurant_detail(Path(id): Path<String>) -> impl IntoResponse {
    match reference_detail(&id) {
        Some(restaurant) => Json(serde_json::json!({
            "success": true,
            "source": "manual-detail",
            "data": restaurant,
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "success": false,
                "message": "Restaurant not found",
            })),
        )
            .into_response(),
    }
}

pub async fn api_external_deals() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "data": REFERENCE_DEALS,
    }))
}
