//! Axum route handlers for the opportunities board.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::listing::flags::{self, OpportunityFlags};
use crate::listing::preferences::{
    clear_preferences, load_preferences, save_preferences, ListingPreferences,
};
use crate::listing::{filter_items, parse_compensation, sort_items, split_tags, FilterCriteria};
use crate::models::opportunity::Opportunity;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// Query parameters override the user's saved preferences field by field.
/// Multi-valued selections are comma-separated.
#[derive(Debug, Deserialize)]
pub struct OpportunityQuery {
    pub user_id: Uuid,
    pub search: Option<String>,
    pub location: Option<String>,
    pub max_salary: Option<String>,
    pub types: Option<String>,
    pub departments: Option<String>,
    pub sort: Option<String>,
    #[serde(default)]
    pub persist: bool,
}

impl OpportunityQuery {
    fn apply_to(&self, mut prefs: ListingPreferences) -> ListingPreferences {
        if let Some(search) = &self.search {
            prefs.criteria.search = search.clone();
        }
        if let Some(location) = &self.location {
            prefs.criteria.location = Some(location.clone());
        }
        if let Some(max_salary) = &self.max_salary {
            prefs.criteria.max_compensation = parse_compensation(max_salary);
        }
        if let Some(types) = &self.types {
            prefs.criteria.types = split_tags(types);
        }
        if let Some(departments) = &self.departments {
            prefs.criteria.categories = split_tags(departments);
        }
        if let Some(sort) = &self.sort {
            prefs.sort = sort.clone();
        }
        prefs.normalized()
    }
}

#[derive(Debug, Serialize)]
pub struct OpportunityView {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub saved: bool,
    pub applied: bool,
}

#[derive(Debug, Serialize)]
pub struct OpportunityListResponse {
    pub count: usize,
    pub total: usize,
    pub criteria: FilterCriteria,
    pub sort: String,
    pub opportunities: Vec<OpportunityView>,
}

#[derive(Debug, Deserialize)]
pub struct SavePreferencesRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub criteria: FilterCriteria,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleSaveResponse {
    pub opportunity_id: String,
    pub saved: bool,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub opportunity_id: String,
    pub applied: bool,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/opportunities
///
/// Filters then sorts the board. Saved preferences are the starting point;
/// `persist=true` writes the effective selection back.
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
    Query(params): Query<OpportunityQuery>,
) -> Result<Json<OpportunityListResponse>, AppError> {
    let saved = load_preferences(state.store.as_ref(), params.user_id).await?;
    let prefs = params.apply_to(saved);

    if params.persist {
        save_preferences(state.store.as_ref(), params.user_id, &prefs).await?;
    }

    let all = &state.catalog.opportunities;
    let filtered = filter_items(all, &prefs.criteria);
    let ordered = sort_items(&filtered.items, prefs.sort_key());
    let flags = flags::load_flags(state.store.as_ref(), params.user_id).await?;

    info!(
        "{} of {} opportunities match for user {} (sort: {})",
        filtered.count,
        all.len(),
        params.user_id,
        prefs.sort
    );

    Ok(Json(OpportunityListResponse {
        count: filtered.count,
        total: all.len(),
        criteria: prefs.criteria,
        sort: prefs.sort,
        opportunities: annotate(ordered, &flags),
    }))
}

fn annotate(opportunities: Vec<Opportunity>, flags: &OpportunityFlags) -> Vec<OpportunityView> {
    opportunities
        .into_iter()
        .map(|opportunity| OpportunityView {
            saved: flags.is_saved(&opportunity.id),
            applied: flags.has_applied(&opportunity.id),
            opportunity,
        })
        .collect()
}

/// GET /api/v1/opportunities/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ListingPreferences>, AppError> {
    Ok(Json(load_preferences(state.store.as_ref(), params.user_id).await?))
}

/// PUT /api/v1/opportunities/preferences
pub async fn handle_save_preferences(
    State(state): State<AppState>,
    Json(req): Json<SavePreferencesRequest>,
) -> Result<Json<ListingPreferences>, AppError> {
    let mut prefs = ListingPreferences {
        criteria: req.criteria,
        ..Default::default()
    };
    // Search text is a per-visit value and is not remembered.
    prefs.criteria.search.clear();
    if let Some(sort) = req.sort {
        prefs.sort = sort;
    }
    let prefs = prefs.normalized();
    save_preferences(state.store.as_ref(), req.user_id, &prefs).await?;
    Ok(Json(prefs))
}

/// DELETE /api/v1/opportunities/preferences
pub async fn handle_clear_preferences(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    clear_preferences(state.store.as_ref(), params.user_id).await?;
    info!("Cleared filter preferences for user {}", params.user_id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/opportunities/:id/save
pub async fn handle_toggle_save(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ToggleSaveResponse>, AppError> {
    require_opportunity(&state, &id)?;
    let saved = flags::toggle_saved(state.store.as_ref(), params.user_id, &id).await?;
    Ok(Json(ToggleSaveResponse {
        opportunity_id: id,
        saved,
    }))
}

/// POST /api/v1/opportunities/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ApplyResponse>, AppError> {
    let title = require_opportunity(&state, &id)?.title.clone();
    flags::apply(state.store.as_ref(), params.user_id, &id).await?;
    Ok(Json(ApplyResponse {
        opportunity_id: id,
        applied: true,
        message: format!("Application submitted for {title}!"),
    }))
}

fn require_opportunity<'a>(state: &'a AppState, id: &str) -> Result<&'a Opportunity, AppError> {
    state
        .catalog
        .find_opportunity(id)
        .ok_or_else(|| AppError::NotFound(format!("Opportunity {id} not found")))
}
