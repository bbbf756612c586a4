use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::network::Person;
use crate::models::skill::Skill;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub count: usize,
    pub categories: Vec<String>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
pub struct NetworkQuery {
    #[serde(default)]
    pub search: String,
    #[serde(rename = "type")]
    pub person_type: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub count: usize,
    pub people: Vec<Person>,
}

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillsQuery>,
) -> Result<Json<SkillsResponse>, AppError> {
    let skills = state.catalog.skills_in(params.category.as_deref());
    Ok(Json(SkillsResponse {
        count: skills.len(),
        categories: state.catalog.skill_categories(),
        skills,
    }))
}

/// GET /api/v1/network
pub async fn handle_list_network(
    State(state): State<AppState>,
    Query(params): Query<NetworkQuery>,
) -> Result<Json<NetworkResponse>, AppError> {
    let people = state.catalog.search_people(
        &params.search,
        params.person_type.as_deref(),
        params.sort.as_deref(),
    );
    Ok(Json(NetworkResponse {
        count: people.len(),
        people,
    }))
}
