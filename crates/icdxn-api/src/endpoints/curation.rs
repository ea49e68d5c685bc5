//! Status updates: mark tests used, or return one test to unknown.

use axum::Json;
use axum::extract::State;
use icdxn_core::{DiseaseAttribute, Selector};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::{ActivateRequest, DeactivateRequest, MessageResponse};

fn invalid() -> ApiError {
    ApiError::InvalidInput("Invalid data received".to_string())
}

async fn activate(
    state: &AppState,
    req: &ActivateRequest,
    attribute: DiseaseAttribute,
) -> Result<Selector, ApiError> {
    let selector = req.selection.select(attribute).ok_or_else(invalid)?;
    if req.test_ids.is_empty() {
        return Err(invalid());
    }
    state.service.activate(&selector, &req.test_ids).await?;
    Ok(selector)
}

async fn deactivate(
    state: &AppState,
    req: &DeactivateRequest,
    attribute: DiseaseAttribute,
) -> Result<MessageResponse, ApiError> {
    let selector = req.selection.select(attribute).ok_or_else(invalid)?;
    let test = req
        .xn_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(invalid)?;
    state.service.deactivate(&selector, test).await?;

    let message = match &selector {
        Selector::Name(disease) => format!("Test '{test}' removed from '{disease}'!"),
        other => format!("Test '{test}' removed from {other}!"),
    };
    Ok(MessageResponse::new(message))
}

/// `POST /update_icd_xn`: `{chapter, test_ids}`.
pub async fn activate_chapter(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ActivateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    activate(&state, &req, DiseaseAttribute::Chapter).await?;
    Ok(Json(MessageResponse::new("ICD-XN table updated successfully!")))
}

/// `POST /update_icd_xn_group`: `{group, test_ids}`.
pub async fn activate_group(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ActivateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    activate(&state, &req, DiseaseAttribute::Group).await?;
    Ok(Json(MessageResponse::new(
        "ICD-XN table updated successfully for the selected disease group!",
    )))
}

/// `POST /update_icd_xn_name`: `{name, test_ids}`.
pub async fn activate_name(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ActivateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let selector = activate(&state, &req, DiseaseAttribute::Name).await?;
    Ok(Json(MessageResponse::new(format!(
        "ICD-XN table updated successfully for {}!",
        selector.value()
    ))))
}

/// `POST /remove_xn_from_chapter`: `{chapter, xn_name}`.
pub async fn deactivate_chapter(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DeactivateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(deactivate(&state, &req, DiseaseAttribute::Chapter).await?))
}

/// `POST /remove_xn_from_group`: `{group, xn_name}`.
pub async fn deactivate_group(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DeactivateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(deactivate(&state, &req, DiseaseAttribute::Group).await?))
}

/// `POST /remove_xn_from_disease`: `{name, xn_name}`.
pub async fn deactivate_disease(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DeactivateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(deactivate(&state, &req, DiseaseAttribute::Name).await?))
}
