use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::storage::{KeyValueStore, UpdateFn};

/// Optimistic `update` attempts before giving up on a hot key.
const MAX_UPDATE_ATTEMPTS: usize = 16;

/// Redis-backed store. `get`, `set` and `remove` are single-key commands;
/// `update` is an optimistic `WATCH` / `MULTI` / `EXEC` transaction retried
/// while another client keeps changing the key.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn open(redis_url: &str) -> Result<Self, AppError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }

    /// Opens a fresh connection. `update` relies on this: `WATCH` state is
    /// per connection and must not be shared with other callers.
    async fn connection(&self) -> Result<MultiplexedConnection, AppError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        debug!("redis GET {key} -> {}", if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await?;
        debug!("redis SET {key}");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut conn = self.connection().await?;
        let _: () = conn.del(key).await?;
        debug!("redis DEL {key}");
        Ok(())
    }

    async fn update(&self, key: &str, change: &mut UpdateFn<'_>) -> Result<(), AppError> {
        let mut conn = self.connection().await?;

        for attempt in 1..=MAX_UPDATE_ATTEMPTS {
            let _: () = redis::cmd("WATCH").arg(key).query_async(&mut conn).await?;
            let current: Option<String> = conn.get(key).await?;

            let next = match change(current) {
                Ok(next) => next,
                Err(e) => {
                    let _: () = redis::cmd("UNWATCH").query_async(&mut conn).await?;
                    return Err(e);
                }
            };

            let mut pipe = redis::pipe();
            pipe.atomic();
            match &next {
                Some(value) => pipe.set(key, value).ignore(),
                None => pipe.del(key).ignore(),
            };
            // EXEC answers nil when a watched key changed underneath us.
            let committed: Option<()> = pipe.query_async(&mut conn).await?;
            if committed.is_some() {
                debug!("redis UPDATE {key} (attempt {attempt})");
                return Ok(());
            }
            debug!("redis UPDATE {key} conflicted, retrying");
        }

        warn!("redis UPDATE {key} gave up after {MAX_UPDATE_ATTEMPTS} conflicting attempts");
        Err(AppError::Internal(anyhow::anyhow!(
            "Too many concurrent updates to {key}"
        )))
    }
}
