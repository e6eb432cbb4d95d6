use std::sync::Arc;

use crate::{
    domain::{AuthUser, UserProfile, UserRole},
    error::Result,
    storage::{keys, BlobStore},
};

/// Per-role profile records under role-partitioned storage keys, so
/// re-logging in as the other role never corrupts or merges the first
/// role's saved edits.
pub struct ProfileStore {
    blobs: Arc<dyn BlobStore>,
}

impl ProfileStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    /// Resolves the profile for the session's role.
    ///
    /// A stored profile wins, except that the session's name and email
    /// override stored values when the names disagree (a fresh signup);
    /// every other stored field is kept. With nothing stored, the role's
    /// built-in template is stamped with the session identity.
    pub async fn resolve(&self, user: &AuthUser) -> Result<UserProfile> {
        match self.stored(user.role).await? {
            Some(mut profile) => {
                if profile.name != user.name {
                    profile.name = user.name.clone();
                    profile.email = user.email.clone();
                }
                Ok(profile)
            }
            None => Ok(UserProfile::template_for(user)),
        }
    }

    /// Full replacement of the current role's profile, persisted
    /// immediately under the role-scoped key.
    pub async fn update(&self, user: &AuthUser, profile: UserProfile) -> Result<UserProfile> {
        self.blobs
            .put(&keys::profile(user.role), &serde_json::to_string(&profile)?)
            .await?;
        Ok(profile)
    }

    pub async fn stored(&self, role: UserRole) -> Result<Option<UserProfile>> {
        match self.blobs.get(&keys::profile(role)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
