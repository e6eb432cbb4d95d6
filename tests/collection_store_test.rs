use std::sync::Arc;

use campusmate::{
    domain::{Announcement, AnnouncementCategory, CalendarEvent, CalendarEventKind},
    storage::SqliteBlobStore,
    store::{AnnouncementStore, CalendarAdd, CalendarStore, OpportunityStore},
};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;

async fn blob_store() -> anyhow::Result<Arc<SqliteBlobStore>> {
    // Single connection so the in-memory database is shared across queries
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(SqliteBlobStore::new(pool)))
}

#[tokio::test]
async fn test_seeding_on_empty_storage() -> anyhow::Result<()> {
    let blobs = blob_store().await?;

    let announcements = AnnouncementStore::load(blobs.clone()).await?;
    let listed = announcements.list().await;
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].title, "Library hours extended for finals week");
    assert_eq!(listed[1].title, "Cafeteria menu voting is now open");
    assert_eq!(listed[2].title, "Guest lecture: AI in Healthcare");

    let opportunities = OpportunityStore::load(blobs.clone()).await?;
    assert_eq!(opportunities.list().await.len(), 4);

    let calendar = CalendarStore::load(blobs).await?;
    let events = calendar.list().await;
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].id, "1");
    assert_eq!(events[2].kind, CalendarEventKind::Deadline);

    Ok(())
}

#[tokio::test]
async fn test_round_trip_persistence() -> anyhow::Result<()> {
    let blobs = blob_store().await?;

    let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
    {
        let calendar = CalendarStore::load(blobs.clone()).await?;
        let outcome = calendar
            .add(CalendarEvent {
                id: "ev4".to_string(),
                title: "Music Club Jam Session".to_string(),
                kind: CalendarEventKind::CampusEvent,
                date,
                time: Some("6:00 PM".to_string()),
                location: Some("Amphitheater".to_string()),
            })
            .await?;
        assert_eq!(outcome, CalendarAdd::Added);
    }

    // Simulated reload: a fresh store over the same durable storage
    let reloaded = CalendarStore::load(blobs).await?;
    let events = reloaded.list().await;
    assert_eq!(events.len(), 4);

    let revived = events.iter().find(|e| e.id == "ev4").unwrap();
    assert_eq!(revived.title, "Music Club Jam Session");
    assert_eq!(revived.kind, CalendarEventKind::CampusEvent);
    // Real date equality, not string equality
    assert_eq!(revived.date, date);
    assert_eq!(revived.time.as_deref(), Some("6:00 PM"));
    assert_eq!(revived.location.as_deref(), Some("Amphitheater"));

    assert!(reloaded.contains("ev4").await);
    assert_eq!(reloaded.on_date(date).await.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_calendar_duplicate_id_is_a_no_op() -> anyhow::Result<()> {
    let blobs = blob_store().await?;
    let calendar = CalendarStore::load(blobs).await?;

    let before = calendar.list().await;

    // Seed already contains id "1"
    let outcome = calendar
        .add(CalendarEvent {
            id: "1".to_string(),
            title: "Some Other Exam".to_string(),
            kind: CalendarEventKind::Exam,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            time: None,
            location: None,
        })
        .await?;

    assert_eq!(outcome, CalendarAdd::DuplicateId);

    let after = calendar.list().await;
    assert_eq!(after.len(), before.len());
    assert_eq!(after, before);

    Ok(())
}

#[tokio::test]
async fn test_announcement_prepend_and_remove() -> anyhow::Result<()> {
    let blobs = blob_store().await?;
    let announcements = AnnouncementStore::load(blobs.clone()).await?;

    announcements
        .add(Announcement {
            id: "hackathon-notice".to_string(),
            title: "Hackathon registrations open".to_string(),
            category: AnnouncementCategory::Event,
            date: "Just now".to_string(),
            description: None,
        })
        .await?;

    // Newest first
    let listed = announcements.list().await;
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].id, "hackathon-notice");

    // The addition survives a reload
    let reloaded = AnnouncementStore::load(blobs).await?;
    assert_eq!(reloaded.list().await[0].id, "hackathon-notice");

    assert!(reloaded.remove("hackathon-notice").await?);
    assert!(!reloaded.remove("hackathon-notice").await?);
    assert_eq!(reloaded.list().await.len(), 3);

    Ok(())
}
