//! Per-disease selections and the home overview.

use axum::Json;
use axum::extract::State;
use icdxn_core::entities::DiseaseTests;
use icdxn_db::repos::association::Overview;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::SelectionRequest;

/// `GET /`
pub async fn overview(State(state): State<AppState>) -> Result<Json<Overview>, ApiError> {
    Ok(Json(state.service.overview().await?))
}

/// `POST /get_selected_xns`: `{chapter|group|name}`. An empty or unmatched
/// selection yields an empty list.
pub async fn selected(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SelectionRequest>,
) -> Result<Json<Vec<DiseaseTests>>, ApiError> {
    let Some(selector) = req.any() else {
        return Ok(Json(Vec::new()));
    };
    Ok(Json(state.service.selected_tests(&selector).await?))
}
