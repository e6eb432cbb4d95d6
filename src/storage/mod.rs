use async_trait::async_trait;

use crate::error::Result;

pub mod sqlite;

pub use sqlite::SqliteBlobStore;

/// Durable storage keys, one per logical store. Each store owns its key
/// exclusively; the session/profile pair and each collection never contend.
pub mod keys {
    pub const SESSION: &str = "campusmate_user_session";
    pub const ANNOUNCEMENTS: &str = "campusmate_announcements";
    pub const OPPORTUNITIES: &str = "campusmate_opportunities";
    pub const CALENDAR_EVENTS: &str = "campusmate_events";
    pub const OUTPASSES: &str = "campusmate_outpasses";

    const PROFILE_PREFIX: &str = "campusmate_profile_";

    /// Profile storage is partitioned by role so switching identities never
    /// touches the other role's record.
    pub fn profile(role: crate::domain::UserRole) -> String {
        format!("{}{}", PROFILE_PREFIX, role.as_str())
    }
}

/// A shared keyed blob store: one serialized value per logical store key.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn put(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}
