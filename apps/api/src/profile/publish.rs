use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileForm, SaveType};
use crate::profile::completeness::{compute_completeness_report, CompletenessReport, ScoringConfig};
use crate::profile::drafts::save_draft;
use crate::profile::validation::validate_form;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PublishOutcome {
    Published {
        report: CompletenessReport,
        published_at: DateTime<Utc>,
    },
    /// Below the completion threshold. Not an error: the user is told how
    /// far they are and nothing is written.
    Rejected {
        severity: Severity,
        message: String,
        report: CompletenessReport,
    },
}

/// Publishing gate:
/// 1. aggregate completion must reach the threshold (else a warning)
/// 2. every field must validate (else `AppError::InvalidFields`)
/// 3. the form is stored as a `progress` save
pub async fn publish_profile(
    store: &dyn KeyValueStore,
    user_id: Uuid,
    form: ProfileForm,
    config: &ScoringConfig,
) -> Result<PublishOutcome, AppError> {
    let report = compute_completeness_report(&form, config);

    if !report.publishable {
        info!(
            "Publish rejected for user {user_id}: {}% < {}%",
            report.overall_score, report.publish_threshold
        );
        return Ok(PublishOutcome::Rejected {
            severity: Severity::Warning,
            message: format!(
                "Please complete at least {}% of your profile before publishing",
                config.publish_threshold
            ),
            report,
        });
    }

    let errors = validate_form(&form);
    if !errors.is_empty() {
        warn!("Publish blocked for user {user_id}: {} invalid field(s)", errors.len());
        return Err(AppError::InvalidFields(errors));
    }

    let saved = save_draft(store, user_id, form, SaveType::Progress).await?;
    let published_at = saved.saved_at.unwrap_or_else(Utc::now);
    info!("Profile published for user {user_id} at {}%", report.overall_score);

    Ok(PublishOutcome::Published {
        report,
        published_at,
    })
}
