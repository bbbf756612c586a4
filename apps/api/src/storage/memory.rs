use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::storage::{KeyValueStore, UpdateFn};

/// Process-local store. Used when no `REDIS_URL` is configured and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn update(&self, key: &str, change: &mut UpdateFn<'_>) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        match change(entries.get(key).cloned())? {
            Some(value) => {
                entries.insert(key.to_string(), value);
            }
            None => {
                entries.remove(key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_whole_value() {
        let store = MemoryStore::new();
        store.set("k", "first".to_string()).await.unwrap();
        store.set("k", "second".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_remove_then_get() {
        let store = MemoryStore::new();
        store.set("k", "v".to_string()).await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_sees_current_value() {
        let store = MemoryStore::new();
        store.set("n", "1".to_string()).await.unwrap();
        store
            .update("n", &mut |current| {
                let n: u32 = current.as_deref().unwrap_or("0").parse().unwrap();
                Ok(Some((n + 1).to_string()))
            })
            .await
            .unwrap();
        assert_eq!(store.get("n").await.unwrap().as_deref(), Some("2"));

        store.update("n", &mut |_| Ok(None)).await.unwrap();
        assert_eq!(store.get("n").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_value() {
        let store = MemoryStore::new();
        store.set("k", "kept".to_string()).await.unwrap();
        let result = store
            .update("k", &mut |_| Err(AppError::Validation("no".to_string())))
            .await;
        assert!(result.is_err());
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("kept"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_all_land() {
        let store = MemoryStore::new();
        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .update("counter", &mut |current| {
                            let n: u32 = current.as_deref().unwrap_or("0").parse().unwrap();
                            Ok(Some((n + 1).to_string()))
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(store.get("counter").await.unwrap().as_deref(), Some("50"));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared", "yes".to_string()).await.unwrap();
        assert_eq!(other.get("shared").await.unwrap().as_deref(), Some("yes"));
    }
}
