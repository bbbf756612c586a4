use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::storage::{user_key, KeyValueStore};

pub const FLAGS_KEY: &str = "opportunityFlags";

/// Per-user bookmark and application state, kept apart from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OpportunityFlags {
    pub saved: BTreeSet<String>,
    pub applied: BTreeSet<String>,
}

impl OpportunityFlags {
    pub fn is_saved(&self, opportunity_id: &str) -> bool {
        self.saved.contains(opportunity_id)
    }

    pub fn has_applied(&self, opportunity_id: &str) -> bool {
        self.applied.contains(opportunity_id)
    }

    /// Flips the bookmark. Returns the new saved state.
    pub fn toggle_saved(&mut self, opportunity_id: &str) -> bool {
        if self.saved.remove(opportunity_id) {
            false
        } else {
            self.saved.insert(opportunity_id.to_string());
            true
        }
    }

    /// Records an application. Applying twice is rejected.
    pub fn record_application(&mut self, opportunity_id: &str) -> Result<(), AppError> {
        if !self.applied.insert(opportunity_id.to_string()) {
            return Err(AppError::Validation(format!(
                "You have already applied to opportunity {opportunity_id}"
            )));
        }
        Ok(())
    }
}

pub async fn load_flags(store: &dyn KeyValueStore, user_id: Uuid) -> Result<OpportunityFlags, AppError> {
    let raw = store.get(&user_key(FLAGS_KEY, user_id)).await?;
    Ok(decode_flags(raw.as_deref(), user_id))
}

fn decode_flags(raw: Option<&str>, user_id: Uuid) -> OpportunityFlags {
    let Some(raw) = raw else {
        return OpportunityFlags::default();
    };
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Ignoring malformed opportunity flags for user {user_id}: {e}");
        OpportunityFlags::default()
    })
}

/// Applies `change` to the user's flags as one atomic store update, so
/// concurrent toggles and applications for the same user all land.
async fn update_flags<R, F>(
    store: &dyn KeyValueStore,
    user_id: Uuid,
    mut change: F,
) -> Result<R, AppError>
where
    R: Send,
    F: FnMut(&mut OpportunityFlags) -> Result<R, AppError> + Send,
{
    let mut outcome = None;
    store
        .update(&user_key(FLAGS_KEY, user_id), &mut |raw| {
            let mut flags = decode_flags(raw.as_deref(), user_id);
            outcome = Some(change(&mut flags)?);
            let encoded = serde_json::to_string(&flags).map_err(|e| AppError::Internal(e.into()))?;
            Ok(Some(encoded))
        })
        .await?;
    outcome.ok_or_else(|| AppError::Internal(anyhow::anyhow!("Flag update for user {user_id} did not run")))
}

/// Toggles a bookmark and persists it. Returns the new saved state.
pub async fn toggle_saved(
    store: &dyn KeyValueStore,
    user_id: Uuid,
    opportunity_id: &str,
) -> Result<bool, AppError> {
    let saved = update_flags(store, user_id, |flags| Ok(flags.toggle_saved(opportunity_id))).await?;
    info!("User {user_id} {} opportunity {opportunity_id}", if saved { "saved" } else { "unsaved" });
    Ok(saved)
}

/// Records a quick application and persists it.
pub async fn apply(store: &dyn KeyValueStore, user_id: Uuid, opportunity_id: &str) -> Result<(), AppError> {
    update_flags(store, user_id, |flags| flags.record_application(opportunity_id)).await?;
    info!("User {user_id} applied to opportunity {opportunity_id}");
    Ok(())
}
