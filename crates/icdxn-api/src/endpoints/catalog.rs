//! Dropdown sources: distinct disease attributes and the test catalog.

use axum::Json;
use axum::extract::State;
use icdxn_core::DiseaseAttribute;
use icdxn_core::entities::LabTest;
use icdxn_db::error::DatabaseError;

use crate::error::ApiError;
use crate::state::AppState;

async fn distinct(state: &AppState, attribute: DiseaseAttribute) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.service.distinct_values(attribute).await?))
}

/// `GET /chapter`
pub async fn chapters(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    distinct(&state, DiseaseAttribute::Chapter).await
}

/// `GET /group`
pub async fn groups(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    distinct(&state, DiseaseAttribute::Group).await
}

/// `GET /name`
pub async fn names(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    distinct(&state, DiseaseAttribute::Name).await
}

/// `GET /get_tests`: 404 when the catalog has no tests.
pub async fn tests(State(state): State<AppState>) -> Result<Json<Vec<LabTest>>, ApiError> {
    match state.service.list_tests().await {
        Ok(tests) => Ok(Json(tests)),
        Err(DatabaseError::NotFound(_)) => Err(ApiError::NoTests),
        Err(e) => Err(e.into()),
    }
}
