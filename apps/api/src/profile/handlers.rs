//! Axum route handlers for the profile builder.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileDraft, ProfileForm, SaveType};
use crate::profile::completeness::{compute_completeness_report, CompletenessReport};
use crate::profile::drafts::{load_draft, save_draft, SaveOutcome};
use crate::profile::publish::{publish_profile, PublishOutcome};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DraftQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub user_id: Uuid,
    pub draft: Option<ProfileDraft>,
}

#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    pub user_id: Uuid,
    pub form: ProfileForm,
    #[serde(default = "default_save_type")]
    pub save_type: SaveType,
}

fn default_save_type() -> SaveType {
    SaveType::Draft
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub user_id: Uuid,
    pub form: ProfileForm,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profile/completeness
/// Scores the submitted form without storing anything.
pub async fn handle_completeness(
    State(state): State<AppState>,
    Json(form): Json<ProfileForm>,
) -> Json<CompletenessReport> {
    Json(compute_completeness_report(&form, &state.config.scoring))
}

/// GET /api/v1/profile/draft?user_id=
/// `draft` is null when nothing has been saved yet.
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Query(params): Query<DraftQuery>,
) -> Result<Json<DraftResponse>, AppError> {
    let draft = load_draft(state.store.as_ref(), params.user_id).await?;
    Ok(Json(DraftResponse {
        user_id: params.user_id,
        draft,
    }))
}

/// PUT /api/v1/profile/draft
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Json(req): Json<SaveDraftRequest>,
) -> Result<Json<SaveOutcome>, AppError> {
    let outcome = save_draft(state.store.as_ref(), req.user_id, req.form, req.save_type).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/profile/publish
///
/// 200 with `status: published` or `status: rejected` (below threshold),
/// 422 when any field fails validation.
pub async fn handle_publish(
    State(state): State<AppState>,
    Json(req): Json<PublishRequest>,
) -> Result<Json<PublishOutcome>, AppError> {
    let outcome = publish_profile(
        state.store.as_ref(),
        req.user_id,
        req.form,
        &state.config.scoring,
    )
    .await?;
    Ok(Json(outcome))
}
