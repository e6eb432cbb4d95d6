use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::{error::Result, storage::BlobStore};

/// A persisted, ordered collection of one entity type.
///
/// The whole collection lives in memory and is re-serialized to its blob key
/// after every mutation. Loading prefers the durable record; an empty slot
/// falls back to the fixed seed dataset, in seed order.
pub struct PersistedCollection<T> {
    key: &'static str,
    blobs: Arc<dyn BlobStore>,
    items: RwLock<Vec<T>>,
}

impl<T> PersistedCollection<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub async fn load(
        key: &'static str,
        blobs: Arc<dyn BlobStore>,
        seed: Vec<T>,
    ) -> Result<Self> {
        let items = match blobs.get(key).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => {
                tracing::debug!("No durable record under {}, seeding", key);
                blobs.put(key, &serde_json::to_string(&seed)?).await?;
                seed
            }
        };

        Ok(Self {
            key,
            blobs,
            items: RwLock::new(items),
        })
    }

    /// Synchronous-style snapshot of the current collection.
    pub async fn snapshot(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.read().await.iter().find(|item| predicate(item)).cloned()
    }

    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .read()
            .await
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub async fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.items.read().await.iter().any(|item| predicate(item))
    }

    /// Applies a mutation to the collection and re-serializes the whole
    /// collection to durable storage. The closure's return value is the
    /// mutation's explicit outcome, handed back to the caller.
    pub async fn mutate<R, F>(&self, apply: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let mut items = self.items.write().await;
        let outcome = apply(&mut items);
        self.blobs
            .put(self.key, &serde_json::to_string(&*items)?)
            .await?;
        Ok(outcome)
    }
}
