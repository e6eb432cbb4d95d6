use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    domain::{AuthUser, UserRole},
    error::Result,
    storage::{keys, BlobStore},
};

/// Holds the current authenticated identity: one session or none, persisted
/// across restarts. This is a non-authoritative mock layer; logins always
/// succeed and no credentials are checked.
pub struct SessionStore {
    blobs: Arc<dyn BlobStore>,
    current: RwLock<Option<AuthUser>>,
}

impl SessionStore {
    pub async fn load(blobs: Arc<dyn BlobStore>) -> Result<Self> {
        let current = match blobs.get(keys::SESSION).await? {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };

        Ok(Self {
            blobs,
            current: RwLock::new(current),
        })
    }

    /// Creates a fresh session and mirrors it to durable storage. A missing
    /// name gets a role-specific placeholder display name.
    pub async fn login(
        &self,
        role: UserRole,
        email: String,
        name: Option<String>,
    ) -> Result<AuthUser> {
        let user = AuthUser::new(role, email, name);

        self.blobs
            .put(keys::SESSION, &serde_json::to_string(&user)?)
            .await?;
        *self.current.write().await = Some(user.clone());

        tracing::info!("Session started for {} ({})", user.name, user.role.as_str());
        Ok(user)
    }

    /// Clears the session. The durable record is removed entirely so no
    /// stale session data is retained.
    pub async fn logout(&self) -> Result<()> {
        self.blobs.remove(keys::SESSION).await?;
        *self.current.write().await = None;
        Ok(())
    }

    pub async fn current(&self) -> Option<AuthUser> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}
