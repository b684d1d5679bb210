use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::resume::dates::{date_options, format_date, format_range, DateOptions};
use crate::resume::draft::{DraftEdit, ResumeDraft};
use crate::resume::export::ExportReady;
use crate::resume::store::StoreError;
use crate::resume::validation::{report, ErrorMap, ValidationReport};
use crate::state::AppState;

/// A draft as the builder renders it. `workDates` and `awardDates` hold the
/// display label for each entry, index-aligned with `data`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub id: Uuid,
    pub data: ResumeData,
    pub errors: ErrorMap,
    pub work_dates: Vec<String>,
    pub award_dates: Vec<String>,
}

impl DraftView {
    fn new(id: Uuid, draft: ResumeDraft) -> Self {
        let work_dates = draft
            .data
            .work_experience
            .iter()
            .map(|w| format_range(&w.start_month, &w.start_year, &w.end_month, &w.end_year))
            .collect();
        let award_dates = draft
            .data
            .awards
            .iter()
            .map(|a| format_date(&a.month, &a.year))
            .collect();
        Self {
            id,
            data: draft.data,
            errors: draft.errors,
            work_dates,
            award_dates,
        }
    }
}

/// POST /api/v1/validate
pub async fn handle_validate(Json(data): Json<ResumeData>) -> Json<ValidationReport> {
    Json(report(&data))
}

/// GET /api/v1/options/dates
pub async fn handle_date_options() -> Json<DateOptions> {
    Json(date_options())
}

/// POST /api/v1/drafts
pub async fn handle_create_draft(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<DraftView>), AppError> {
    let (id, draft) = state.drafts.create().await?;
    Ok((StatusCode::CREATED, Json(DraftView::new(id, draft))))
}

/// GET /api/v1/drafts/:id
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DraftView>, AppError> {
    let draft = state.drafts.get(id).await?;
    Ok(Json(DraftView::new(id, draft)))
}

/// PUT /api/v1/drafts/:id
pub async fn handle_replace_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<ResumeData>,
) -> Result<Json<DraftView>, AppError> {
    let draft = state.drafts.replace(id, data).await?;
    Ok(Json(DraftView::new(id, draft)))
}

/// DELETE /api/v1/drafts/:id
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.drafts.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/drafts/:id/edits
pub async fn handle_apply_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(edit): Json<DraftEdit>,
) -> Result<Json<DraftView>, AppError> {
    let draft = state.drafts.apply(id, edit).await?;
    Ok(Json(DraftView::new(id, draft)))
}

/// POST /api/v1/drafts/:id/validate
pub async fn handle_validate_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ValidationReport>, AppError> {
    let outcome = state.drafts.validate(id).await?;
    debug!(draft_id = %id, valid = outcome.is_valid, "Draft validated");
    Ok(Json(outcome))
}

/// POST /api/v1/drafts/:id/export
pub async fn handle_export_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportReady>, AppError> {
    match state.drafts.export(id).await {
        Ok(ready) => {
            info!(draft_id = %id, title = %ready.document_title, "Draft cleared for export");
            Ok(Json(ready))
        }
        Err(StoreError::ExportBlocked(blocked)) => {
            let fields: Vec<&str> = blocked.errors.iter().map(|(key, _)| key).collect();
            warn!(draft_id = %id, ?fields, "Export blocked");
            Err(AppError::ExportBlocked(blocked.errors))
        }
        Err(e) => Err(e.into()),
    }
}
