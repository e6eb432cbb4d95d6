use std::sync::Arc;

use crate::{
    domain::{Announcement, AnnouncementCategory},
    error::Result,
    storage::{keys, BlobStore},
    store::PersistedCollection,
};

pub struct AnnouncementStore {
    collection: PersistedCollection<Announcement>,
}

impl AnnouncementStore {
    pub async fn load(blobs: Arc<dyn BlobStore>) -> Result<Self> {
        let collection =
            PersistedCollection::load(keys::ANNOUNCEMENTS, blobs, seed()).await?;
        Ok(Self { collection })
    }

    /// Newest-first listing.
    pub async fn list(&self) -> Vec<Announcement> {
        self.collection.snapshot().await
    }

    /// Prepends the new announcement.
    pub async fn add(&self, announcement: Announcement) -> Result<Announcement> {
        self.collection
            .mutate(|items| {
                items.insert(0, announcement.clone());
                announcement
            })
            .await
    }

    /// Returns whether a matching announcement was removed.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        self.collection
            .mutate(|items| {
                let before = items.len();
                items.retain(|a| a.id != id);
                items.len() != before
            })
            .await
    }
}

fn seed() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1".into(),
            title: "Library hours extended for finals week".into(),
            category: AnnouncementCategory::Academic,
            date: "2 hours ago".into(),
            description: Some(
                "The central library will remain open 24/7 starting this Monday for the upcoming end-semester examinations."
                    .into(),
            ),
        },
        Announcement {
            id: "2".into(),
            title: "Cafeteria menu voting is now open".into(),
            category: AnnouncementCategory::CampusLife,
            date: "Yesterday".into(),
            description: Some(
                "Please cast your votes for the new monthly menu on the student portal.".into(),
            ),
        },
        Announcement {
            id: "3".into(),
            title: "Guest lecture: AI in Healthcare".into(),
            category: AnnouncementCategory::Event,
            date: "2 days ago".into(),
            description: Some(
                "Dr. Smith will be delivering a talk on the applications of Generative AI in modern diagnostics."
                    .into(),
            ),
        },
    ]
}
