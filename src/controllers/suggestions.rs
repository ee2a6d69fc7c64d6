use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/suggestions", get(make_suggestions))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SuggestionsQuery {
    #[serde(rename = "showId")]
    #[validate(length(min = 1, message = "showId не должен быть пустым"))]
    pub show_id: String,
    #[serde(rename = "partySize")]
    #[validate(range(min = 1, message = "partySize должен быть > 0"))]
    pub party_size: u32,
}

/// GET /api/suggestions?showId=..&partySize=..
///
/// Подбирает до трёх вариантов рассадки в каждой ценовой категории. Ответ всегда
/// содержит все четыре категории, даже если мест нет нигде.
pub async fn make_suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    params
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let party_size = params.party_size as usize;
    let suggestions = state
        .recommender
        .make_suggestions(&params.show_id, party_size)
        .await
        .map_err(|e| {
            error!("Suggestions for show {} failed: {}", params.show_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Не удалось загрузить схему зала".to_string(),
            )
        })?;

    info!(
        "Suggestions for show {} (party of {}): {}",
        params.show_id,
        party_size,
        if suggestions.is_available() { "made" } else { "not available" }
    );

    Ok((StatusCode::OK, Json(suggestions.to_batch())))
}
