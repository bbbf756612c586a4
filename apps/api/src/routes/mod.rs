pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::listing::handlers as listing;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Opportunities board
        .route("/api/v1/opportunities", get(listing::handle_list_opportunities))
        .route(
            "/api/v1/opportunities/preferences",
            get(listing::handle_get_preferences)
                .put(listing::handle_save_preferences)
                .delete(listing::handle_clear_preferences),
        )
        .route(
            "/api/v1/opportunities/:id/save",
            post(listing::handle_toggle_save),
        )
        .route(
            "/api/v1/opportunities/:id/apply",
            post(listing::handle_apply),
        )
        // Catalogs
        .route("/api/v1/skills", get(catalog::handle_list_skills))
        .route("/api/v1/network", get(catalog::handle_list_network))
        // Profile builder
        .route(
            "/api/v1/profile/completeness",
            post(profile::handle_completeness),
        )
        .route(
            "/api/v1/profile/draft",
            get(profile::handle_get_draft).put(profile::handle_save_draft),
        )
        .route("/api/v1/profile/publish", post(profile::handle_publish))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::profile::completeness::ScoringConfig;
    use crate::storage::MemoryStore;

    fn test_app() -> Router {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
            catalog: Arc::new(Catalog::seed()),
            config: Config {
                redis_url: None,
                port: 0,
                rust_log: "info".to_string(),
                scoring: ScoringConfig::default(),
            },
        };
        build_router(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn ids(body: &Value) -> Vec<String> {
        body["opportunities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "career-hub-api");
    }

    #[tokio::test]
    async fn test_list_opportunities_unfiltered_newest_first() {
        let app = test_app();
        let uri = format!("/api/v1/opportunities?user_id={}", Uuid::new_v4());
        let (status, body) = send(&app, Method::GET, &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 8);
        assert_eq!(body["total"], 8);
        assert_eq!(body["sort"], "newest");
        assert_eq!(ids(&body)[0], "opp-008");
    }

    #[tokio::test]
    async fn test_persisted_filters_apply_on_next_visit() {
        let app = test_app();
        let user = Uuid::new_v4();

        let uri = format!(
            "/api/v1/opportunities?user_id={user}&location=Kigali&departments=engineering&persist=true"
        );
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec!["opp-008", "opp-001"]);

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/opportunities?user_id={user}"), None).await;
        assert_eq!(body["count"], 2);

        let (_, prefs) = send(
            &app,
            Method::GET,
            &format!("/api/v1/opportunities/preferences?user_id={user}"),
            None,
        )
        .await;
        assert_eq!(prefs["criteria"]["location"], "Kigali");

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/opportunities/preferences?user_id={user}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/opportunities?user_id={user}"), None).await;
        assert_eq!(body["count"], 8);
    }

    #[tokio::test]
    async fn test_saved_preferences_are_stored_as_applied() {
        let app = test_app();
        let user = Uuid::new_v4();
        let body = json!({
            "user_id": user,
            "criteria": { "location": " Kigali", "types": [""] }
        });
        let (status, saved) = send(&app, Method::PUT, "/api/v1/opportunities/preferences", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["criteria"]["location"], "Kigali");
        assert_eq!(saved["criteria"]["types"], json!([]));

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/opportunities?user_id={user}"), None).await;
        assert_eq!(body["count"], 4);
        assert_eq!(body["criteria"], saved["criteria"]);
    }

    #[tokio::test]
    async fn test_save_and_apply_flags() {
        let app = test_app();
        let user = Uuid::new_v4();

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/opportunities/opp-002/save?user_id={user}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], true);

        let apply_uri = format!("/api/v1/opportunities/opp-002/apply?user_id={user}");
        let (status, _) = send(&app, Method::POST, &apply_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, Method::POST, &apply_uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/opportunities?user_id={user}"), None).await;
        let nurse = body["opportunities"]
            .as_array()
            .unwrap()
            .iter()
            .find(|o| o["id"] == "opp-002")
            .unwrap();
        assert_eq!(nurse["saved"], true);
        assert_eq!(nurse["applied"], true);
    }

    #[tokio::test]
    async fn test_unknown_opportunity_is_404() {
        let app = test_app();
        let uri = format!("/api/v1/opportunities/opp-999/apply?user_id={}", Uuid::new_v4());
        let (status, body) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_skills_and_network() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/api/v1/skills?category=languages", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["skills"]
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["category"] == "languages"));

        let (status, body) = send(&app, Method::GET, "/api/v1/network?search=kigali", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["people"][0]["name"], "Marie Claire");
    }

    #[tokio::test]
    async fn test_publish_below_threshold_is_warning() {
        let app = test_app();
        let body = json!({ "user_id": Uuid::new_v4(), "form": { "sections": {} } });
        let (status, body) = send(&app, Method::POST, "/api/v1/profile/publish", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "rejected");
        assert_eq!(body["severity"], "warning");
    }

    #[tokio::test]
    async fn test_publish_invalid_fields_is_422() {
        let app = test_app();
        let field = |name: &str, value: &str, kind: &str| {
            json!({ "name": name, "value": value, "required": true, "kind": kind })
        };
        let section = json!({ "fields": [field("title", "x", "text")] });
        let form = json!({
            "sections": {
                "basic": {
                    "fields": [field("firstName", "Alice", "text"), field("email", "nope", "email")],
                    "has_photo": true
                },
                "education": section,
                "experience": section,
                "projects": section,
                "skills": { "skills": [
                    { "name": "a" }, { "name": "b" }, { "name": "c" }, { "name": "d" }, { "name": "e" }
                ] }
            }
        });
        let body = json!({ "user_id": Uuid::new_v4(), "form": form });
        let (status, body) = send(&app, Method::POST, "/api/v1/profile/publish", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_FIELDS");
        assert_eq!(body["error"]["fields"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_draft_round_trip_and_completeness() {
        let app = test_app();
        let user = Uuid::new_v4();
        let draft_uri = format!("/api/v1/profile/draft?user_id={user}");

        let (status, body) = send(&app, Method::GET, &draft_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["draft"].is_null());

        let form = json!({ "sections": { "skills": { "skills": [{ "name": "Python" }, { "name": "SQL" }] } } });
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/profile/draft",
            Some(json!({ "user_id": user, "form": form, "save_type": "progress" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], true);

        let (_, body) = send(&app, Method::GET, &draft_uri, None).await;
        assert_eq!(body["draft"]["save_type"], "progress");

        let (status, report) = send(&app, Method::POST, "/api/v1/profile/completeness", Some(form)).await;
        assert_eq!(status, StatusCode::OK);
        // 40 for skills, everything else empty
        assert_eq!(report["overall_score"], 8);
        assert_eq!(report["publishable"], false);
    }
}
