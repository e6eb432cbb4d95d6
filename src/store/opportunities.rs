use std::sync::Arc;

use crate::{
    domain::{Opportunity, OpportunityKind},
    error::Result,
    storage::{keys, BlobStore},
    store::PersistedCollection,
};

pub struct OpportunityStore {
    collection: PersistedCollection<Opportunity>,
}

impl OpportunityStore {
    pub async fn load(blobs: Arc<dyn BlobStore>) -> Result<Self> {
        let collection =
            PersistedCollection::load(keys::OPPORTUNITIES, blobs, seed()).await?;
        Ok(Self { collection })
    }

    /// Newest-first listing.
    pub async fn list(&self) -> Vec<Opportunity> {
        self.collection.snapshot().await
    }

    /// Prepends the new opportunity.
    pub async fn add(&self, opportunity: Opportunity) -> Result<Opportunity> {
        self.collection
            .mutate(|items| {
                items.insert(0, opportunity.clone());
                opportunity
            })
            .await
    }

    /// Returns whether a matching opportunity was removed.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        self.collection
            .mutate(|items| {
                let before = items.len();
                items.retain(|o| o.id != id);
                items.len() != before
            })
            .await
    }
}

fn seed() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: "1".into(),
            title: "CodeFest 2024".into(),
            kind: OpportunityKind::Hackathon,
            org: "Aditya Innovation Hub".into(),
            date: "June 10-12, 2024".into(),
            tags: vec!["AI/ML".into(), "Web3".into(), "Open Innovation".into()],
            link: "#".into(),
        },
        Opportunity {
            id: "2".into(),
            title: "Summer Frontend Intern".into(),
            kind: OpportunityKind::Internship,
            org: "StartUp Inc.".into(),
            date: "Apply by May 30".into(),
            tags: vec!["React".into(), "TypeScript".into(), "Remote".into()],
            link: "#".into(),
        },
        Opportunity {
            id: "3".into(),
            title: "Cloud Computing Workshop".into(),
            kind: OpportunityKind::Workshop,
            org: "Google Developer Student Club".into(),
            date: "May 20, 2024".into(),
            tags: vec!["GCP".into(), "Cloud".into(), "Beginner".into()],
            link: "#".into(),
        },
        Opportunity {
            id: "4".into(),
            title: "Backend Engineer Intern".into(),
            kind: OpportunityKind::Internship,
            org: "FinTech Solutions".into(),
            date: "Apply by June 5".into(),
            tags: vec!["Node.js".into(), "PostgreSQL".into(), "Hybrid".into()],
            link: "#".into(),
        },
    ]
}
