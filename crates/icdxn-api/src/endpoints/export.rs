//! File download of the association snapshot.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use icdxn_core::enums::ExportFormat;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /export_icd_xn/{format}`: anything other than `xlsx` exports CSV.
pub async fn download(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let format = ExportFormat::parse_lenient(&format);
    let rows = state.service.export_rows().await?;

    let dir = state.export_dir.clone();
    let export = tokio::task::spawn_blocking(move || {
        icdxn_tabular::export_to_dir(&rows, format, &dir)
    })
    .await??;

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.file_name()),
        ),
    ];
    Ok((headers, export.bytes))
}
