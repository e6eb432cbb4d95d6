use serde::{Deserialize, Serialize};

use crate::domain::{AuthUser, UserRole};

/// Per-role user profile. Exactly one live instance per role; the
/// role-specific fields of the other role stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    // Student specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    // Faculty specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

impl UserProfile {
    /// Built-in template for a role, stamped with the session's name and
    /// email so a fresh identity never shows template credentials.
    pub fn template_for(user: &AuthUser) -> Self {
        let mut profile = match user.role {
            UserRole::Student => Self::student_template(),
            UserRole::Faculty => Self::faculty_template(),
        };
        profile.name = user.name.clone();
        profile.email = user.email.clone();
        profile
    }

    fn student_template() -> Self {
        Self {
            name: "Surya".to_string(),
            email: "surya.student@aditya.edu".to_string(),
            phone: "+91 98765 43210".to_string(),
            bio: "Passionate full-stack developer and AI enthusiast. Lead of the Campus Coding Club."
                .to_string(),
            roll_number: Some("21A91A0588".to_string()),
            branch: Some("Computer Science & Engineering".to_string()),
            semester: Some("6th Semester".to_string()),
            section: Some("Section B".to_string()),
            cgpa: Some("8.9".to_string()),
            employee_id: None,
            department: None,
            designation: None,
        }
    }

    fn faculty_template() -> Self {
        Self {
            name: "Dr. A. Sharma".to_string(),
            email: "a.sharma@aditya.edu".to_string(),
            phone: "+91 98765 11223".to_string(),
            bio: "Researcher in Artificial Intelligence and Machine Learning. Mentor for the Student Innovation Cell."
                .to_string(),
            roll_number: None,
            branch: None,
            semester: None,
            section: None,
            cgpa: None,
            employee_id: Some("FAC2024099".to_string()),
            department: Some("Computer Science & Engineering".to_string()),
            designation: Some("Associate Professor".to_string()),
        }
    }
}
