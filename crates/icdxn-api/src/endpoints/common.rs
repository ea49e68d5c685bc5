//! Tests shared by a set of diseases, and the tests of a single disease.

use axum::Json;
use axum::extract::State;
use icdxn_core::{DiseaseAttribute, Selector};
use icdxn_db::repos::association::CommonTests;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::{SelectionRequest, TestsResponse};

async fn common(
    state: &AppState,
    req: &SelectionRequest,
    attribute: DiseaseAttribute,
) -> Result<TestsResponse, ApiError> {
    let Some(selector) = req.select(attribute) else {
        return Ok(TestsResponse::text(format!(
            "No {} selected",
            attribute.as_str()
        )));
    };
    Ok(match state.service.common_tests(&selector).await? {
        CommonTests::NoDiseases => {
            TestsResponse::text(format!("No diseases found in this {}", selector.kind()))
        }
        CommonTests::Common(names) if names.is_empty() => {
            TestsResponse::text("No common tests found")
        }
        CommonTests::Common(names) => TestsResponse::text(names.join(", ")),
    })
}

/// `POST /get_common_xns`: `{chapter}`.
pub async fn by_chapter(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SelectionRequest>,
) -> Result<Json<TestsResponse>, ApiError> {
    Ok(Json(common(&state, &req, DiseaseAttribute::Chapter).await?))
}

/// `POST /get_common_xns_group`: `{group}`.
pub async fn by_group(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SelectionRequest>,
) -> Result<Json<TestsResponse>, ApiError> {
    Ok(Json(common(&state, &req, DiseaseAttribute::Group).await?))
}

/// `POST /get_xns_for_disease`: `{name}`. Lists names, or a sentence when
/// the disease has no used tests.
pub async fn for_disease(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SelectionRequest>,
) -> Result<Json<TestsResponse>, ApiError> {
    let Some(Selector::Name(name)) = req.select(DiseaseAttribute::Name) else {
        return Err(ApiError::InvalidInput("No disease selected".to_string()));
    };
    let names = state.service.tests_for_disease(&name).await?;
    if names.is_empty() {
        return Ok(Json(TestsResponse::text("No associated tests found")));
    }
    Ok(Json(TestsResponse::names(names)))
}
