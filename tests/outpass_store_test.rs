use std::sync::Arc;

use campusmate::{
    domain::{OutpassKind, OutpassStatus, UNASSIGNED_STUDENT_ID},
    error::AppError,
    storage::SqliteBlobStore,
    store::{CreateOutpassRequest, OutpassStore},
};
use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqlitePoolOptions;

async fn outpass_store() -> anyhow::Result<OutpassStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(OutpassStore::load(Arc::new(SqliteBlobStore::new(pool))).await?)
}

fn sample_request(student_id: &str) -> CreateOutpassRequest {
    CreateOutpassRequest {
        student_name: "Surya".to_string(),
        student_id: student_id.to_string(),
        kind: OutpassKind::City,
        reason: "Dentist appointment".to_string(),
        from_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        to_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    }
}

#[tokio::test]
async fn test_new_request_is_pending_and_date_stamped() -> anyhow::Result<()> {
    let store = outpass_store().await?;

    let created = store.create(sample_request("21A91A0588")).await?;
    assert_eq!(created.status, OutpassStatus::Pending);
    assert_eq!(created.request_date, Utc::now().date_naive());

    // Prepended ahead of the seed data
    assert_eq!(store.list().await[0].id, created.id);

    Ok(())
}

#[tokio::test]
async fn test_approval_is_terminal() -> anyhow::Result<()> {
    let store = outpass_store().await?;
    let created = store.create(sample_request("21A91A0588")).await?;

    let approved = store
        .update_status(&created.id, OutpassStatus::Approved)
        .await?;
    assert_eq!(approved.status, OutpassStatus::Approved);

    // Every other field is untouched
    assert_eq!(approved.id, created.id);
    assert_eq!(approved.student_name, created.student_name);
    assert_eq!(approved.student_id, created.student_id);
    assert_eq!(approved.reason, created.reason);
    assert_eq!(approved.from_date, created.from_date);
    assert_eq!(approved.to_date, created.to_date);
    assert_eq!(approved.request_date, created.request_date);

    // A resolved request cannot be resolved again
    let double = store
        .update_status(&created.id, OutpassStatus::Rejected)
        .await;
    assert!(matches!(double, Err(AppError::Conflict(_))));

    // And there is no way back to pending
    let back = store
        .update_status(&created.id, OutpassStatus::Pending)
        .await;
    assert!(matches!(back, Err(AppError::BadRequest(_))));

    Ok(())
}

#[tokio::test]
async fn test_update_status_unknown_id() -> anyhow::Result<()> {
    let store = outpass_store().await?;

    let missing = store
        .update_status("no-such-request", OutpassStatus::Approved)
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn test_strict_student_matching() -> anyhow::Result<()> {
    let store = outpass_store().await?;

    store.create(sample_request("21A91A0588")).await?;
    store.create(sample_request(UNASSIGNED_STUDENT_ID)).await?;

    // Strict by default: the unassigned sentinel stays hidden
    let mine = store.for_student("21A91A0588", false).await;
    assert_eq!(mine.len(), 1);
    assert!(mine.iter().all(|r| r.student_id == "21A91A0588"));

    // Broadening has to be requested explicitly
    let broadened = store.for_student("21A91A0588", true).await;
    assert_eq!(broadened.len(), 2);

    // Seeded students are unaffected either way
    let rahul = store.for_student("21A91A0501", false).await;
    assert_eq!(rahul.len(), 1);
    assert_eq!(rahul[0].student_name, "Rahul Verma");

    Ok(())
}

#[tokio::test]
async fn test_pending_queue_shrinks_on_resolution() -> anyhow::Result<()> {
    let store = outpass_store().await?;

    // Two seeded requests, both pending
    let pending = store.pending().await;
    assert_eq!(pending.len(), 2);

    store.update_status("1", OutpassStatus::Approved).await?;
    store.update_status("2", OutpassStatus::Rejected).await?;

    assert!(store.pending().await.is_empty());

    Ok(())
}
