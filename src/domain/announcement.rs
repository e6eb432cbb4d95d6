use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub category: AnnouncementCategory,
    /// Display string like "2 hours ago" or "May 20", not a timestamp.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnouncementCategory {
    Academic,
    Event,
    #[serde(rename = "Campus Life")]
    CampusLife,
    Other,
}
