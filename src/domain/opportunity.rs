use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub kind: OpportunityKind,
    pub org: String,
    /// Free-text date, e.g. "Apply by May 30".
    pub date: String,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityKind {
    Hackathon,
    Internship,
    Workshop,
}
