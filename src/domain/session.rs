use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed actor kind for a session. Decides which profile template,
/// navigation set and permissions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Faculty,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Faculty => "faculty",
        }
    }
}

/// The current authenticated identity. One instance or none; role is fixed
/// for the session lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl AuthUser {
    /// Creates a session identity with a fresh id. There is no credential
    /// verification anywhere in this system; a login always succeeds.
    pub fn new(role: UserRole, email: String, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| {
            match role {
                UserRole::Student => "Surya",
                UserRole::Faculty => "Prof. Sharma",
            }
            .to_string()
        });

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            role,
        }
    }
}
