//! Route table.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::endpoints::{catalog, common, curation, export, selection};
use crate::state::AppState;

/// Build the curation router with request tracing.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(selection::overview))
        .route("/chapter", get(catalog::chapters))
        .route("/group", get(catalog::groups))
        .route("/name", get(catalog::names))
        .route("/get_tests", get(catalog::tests))
        .route("/get_common_xns", post(common::by_chapter))
        .route("/get_common_xns_group", post(common::by_group))
        .route("/get_xns_for_disease", post(common::for_disease))
        .route("/update_icd_xn", post(curation::activate_chapter))
        .route("/update_icd_xn_group", post(curation::activate_group))
        .route("/update_icd_xn_name", post(curation::activate_name))
        .route("/remove_xn_from_chapter", post(curation::deactivate_chapter))
        .route("/remove_xn_from_group", post(curation::deactivate_group))
        .route("/remove_xn_from_disease", post(curation::deactivate_disease))
        .route("/get_selected_xns", post(selection::selected))
        .route("/export_icd_xn/{format}", get(export::download))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
