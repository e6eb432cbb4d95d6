use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    domain::{OutpassKind, OutpassRequest, OutpassStatus, UNASSIGNED_STUDENT_ID},
    error::{AppError, Result},
    storage::{keys, BlobStore},
    store::PersistedCollection,
};

#[derive(Debug, Clone)]
pub struct CreateOutpassRequest {
    pub student_name: String,
    pub student_id: String,
    pub kind: OutpassKind,
    pub reason: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

pub struct OutpassStore {
    collection: PersistedCollection<OutpassRequest>,
}

impl OutpassStore {
    pub async fn load(blobs: Arc<dyn BlobStore>) -> Result<Self> {
        let collection =
            PersistedCollection::load(keys::OUTPASSES, blobs, seed()).await?;
        Ok(Self { collection })
    }

    pub async fn list(&self) -> Vec<OutpassRequest> {
        self.collection.snapshot().await
    }

    /// Creates a request in Pending status with the request date stamped at
    /// creation. Requests never start in any other status.
    pub async fn create(&self, data: CreateOutpassRequest) -> Result<OutpassRequest> {
        let request = OutpassRequest {
            id: Uuid::new_v4().to_string(),
            student_name: data.student_name,
            student_id: data.student_id,
            kind: data.kind,
            reason: data.reason,
            from_date: data.from_date,
            to_date: data.to_date,
            status: OutpassStatus::Pending,
            request_date: Utc::now().date_naive(),
        };

        self.collection
            .mutate(|items| {
                items.insert(0, request.clone());
                request
            })
            .await
    }

    /// Moves a Pending request to Approved or Rejected. Both outcomes are
    /// terminal: resolving an already-resolved request is a conflict, and
    /// nothing transitions back to Pending.
    pub async fn update_status(
        &self,
        id: &str,
        status: OutpassStatus,
    ) -> Result<OutpassRequest> {
        if status == OutpassStatus::Pending {
            return Err(AppError::BadRequest(
                "Outpass requests cannot be returned to pending".to_string(),
            ));
        }

        let outcome = self
            .collection
            .mutate(|items| match items.iter_mut().find(|r| r.id == id) {
                None => Err(AppError::NotFound("Outpass request not found".to_string())),
                Some(request) if request.status.is_terminal() => Err(AppError::Conflict(
                    "Outpass request has already been resolved".to_string(),
                )),
                Some(request) => {
                    request.status = status;
                    Ok(request.clone())
                }
            })
            .await?;

        outcome
    }

    /// Requests belonging to a student, matched strictly by id.
    /// `include_unassigned` additionally surfaces requests stamped with the
    /// unassigned sentinel; callers must ask for that broadening explicitly.
    pub async fn for_student(
        &self,
        student_id: &str,
        include_unassigned: bool,
    ) -> Vec<OutpassRequest> {
        self.collection
            .filter(|r| {
                r.student_id == student_id
                    || (include_unassigned && r.student_id == UNASSIGNED_STUDENT_ID)
            })
            .await
    }

    /// The faculty review queue.
    pub async fn pending(&self) -> Vec<OutpassRequest> {
        self.collection
            .filter(|r| r.status == OutpassStatus::Pending)
            .await
    }
}

fn seed() -> Vec<OutpassRequest> {
    vec![
        OutpassRequest {
            id: "1".into(),
            student_name: "Rahul Verma".into(),
            student_id: "21A91A0501".into(),
            kind: OutpassKind::Home,
            reason: "Going home for sister's wedding".into(),
            from_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 5, 25).unwrap(),
            status: OutpassStatus::Pending,
            request_date: NaiveDate::from_ymd_opt(2024, 5, 18).unwrap(),
        },
        OutpassRequest {
            id: "2".into(),
            student_name: "Priya Reddy".into(),
            student_id: "21A91A0512".into(),
            kind: OutpassKind::City,
            reason: "Medical appointment at Apollo Hospital".into(),
            from_date: NaiveDate::from_ymd_opt(2024, 5, 19).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2024, 5, 19).unwrap(),
            status: OutpassStatus::Pending,
            request_date: NaiveDate::from_ymd_opt(2024, 5, 18).unwrap(),
        },
    ]
}
