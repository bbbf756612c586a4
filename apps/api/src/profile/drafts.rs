use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileDraft, ProfileForm, SaveType};
use crate::storage::{user_key, KeyValueStore};

pub const DRAFT_KEY: &str = "profileBuilderData";

#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    /// False when an auto-save found nothing new to write.
    pub saved: bool,
    pub save_type: SaveType,
    pub saved_at: Option<DateTime<Utc>>,
}

/// Reads the stored draft. Absent or malformed records yield `None`.
pub async fn load_draft(store: &dyn KeyValueStore, user_id: Uuid) -> Result<Option<ProfileDraft>, AppError> {
    let Some(raw) = store.get(&user_key(DRAFT_KEY, user_id)).await? else {
        return Ok(None);
    };
    match serde_json::from_str::<ProfileDraft>(&raw) {
        Ok(draft) => Ok(Some(draft)),
        Err(e) => {
            warn!("Ignoring malformed profile draft for user {user_id}: {e}");
            Ok(None)
        }
    }
}

/// Compares forms only; when and how a draft was saved does not matter.
pub fn has_unsaved_changes(stored: Option<&ProfileDraft>, form: &ProfileForm) -> bool {
    match stored {
        Some(draft) => draft.form != *form,
        None => true,
    }
}

/// Overwrites the stored draft. Auto-saves are skipped when the stored
/// form already matches.
pub async fn save_draft(
    store: &dyn KeyValueStore,
    user_id: Uuid,
    form: ProfileForm,
    save_type: SaveType,
) -> Result<SaveOutcome, AppError> {
    if save_type == SaveType::Auto {
        let stored = load_draft(store, user_id).await?;
        if !has_unsaved_changes(stored.as_ref(), &form) {
            debug!("Auto-save skipped for user {user_id}: no changes");
            return Ok(SaveOutcome {
                saved: false,
                save_type,
                saved_at: stored.map(|d| d.saved_at),
            });
        }
    }

    let draft = ProfileDraft {
        form,
        saved_at: Utc::now(),
        save_type,
    };
    let raw = serde_json::to_string(&draft).map_err(|e| AppError::Internal(e.into()))?;
    store.set(&user_key(DRAFT_KEY, user_id), raw).await?;
    info!("Saved profile draft ({save_type:?}) for user {user_id}");

    Ok(SaveOutcome {
        saved: true,
        save_type,
        saved_at: Some(draft.saved_at),
    })
}
