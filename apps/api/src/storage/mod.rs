//! Durable key-value storage for per-user records (filter preferences,
//! profile drafts, opportunity flags).
//!
//! Records are always written whole, so two writers racing on one key
//! resolve last-write-wins and never leave a partial record behind.
//! Read-modify-write changes (sets of flags) go through `update`, which is
//! atomic per key, so concurrent changes never drop each other.

pub mod memory;
pub mod redis_store;

use async_trait::async_trait;

use crate::errors::AppError;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// String-keyed, string-valued store with `localStorage` semantics.
///
/// Carried in `AppState` as `Arc<dyn KeyValueStore>`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;

    async fn remove(&self, key: &str) -> Result<(), AppError>;

    /// Atomically replaces the value at `key` with `change(current)`.
    /// `Ok(None)` removes the key; an error leaves it untouched. `change`
    /// may be called more than once when a concurrent write intervenes.
    async fn update(&self, key: &str, change: &mut UpdateFn<'_>) -> Result<(), AppError>;
}

/// Record transformation passed to [`KeyValueStore::update`].
pub type UpdateFn<'a> = dyn FnMut(Option<String>) -> Result<Option<String>, AppError> + Send + 'a;

/// Builds the per-user key for a record family, e.g. `opportunityFilters:<uuid>`.
pub fn user_key(family: &str, user_id: uuid::Uuid) -> String {
    format!("{family}:{user_id}")
}
