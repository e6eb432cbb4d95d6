pub mod announcements;
pub mod calendar;
pub mod collection;
pub mod opportunities;
pub mod outpass;
pub mod profile;
pub mod session;

pub use announcements::AnnouncementStore;
pub use calendar::{CalendarAdd, CalendarStore};
pub use collection::PersistedCollection;
pub use opportunities::OpportunityStore;
pub use outpass::{CreateOutpassRequest, OutpassStore};
pub use profile::ProfileStore;
pub use session::SessionStore;

use std::sync::Arc;

use crate::{error::Result, storage::BlobStore};

/// All stores, constructed once at process start and handed to consumers by
/// reference. Each store exclusively owns its collection and its storage key.
pub struct StoreContext {
    pub sessions: Arc<SessionStore>,
    pub profiles: Arc<ProfileStore>,
    pub announcements: Arc<AnnouncementStore>,
    pub opportunities: Arc<OpportunityStore>,
    pub calendar: Arc<CalendarStore>,
    pub outpasses: Arc<OutpassStore>,
}

impl StoreContext {
    pub async fn load(blobs: Arc<dyn BlobStore>) -> Result<Self> {
        Ok(Self {
            sessions: Arc::new(SessionStore::load(blobs.clone()).await?),
            profiles: Arc::new(ProfileStore::new(blobs.clone())),
            announcements: Arc::new(AnnouncementStore::load(blobs.clone()).await?),
            opportunities: Arc::new(OpportunityStore::load(blobs.clone()).await?),
            calendar: Arc::new(CalendarStore::load(blobs.clone()).await?),
            outpasses: Arc::new(OutpassStore::load(blobs).await?),
        })
    }
}
