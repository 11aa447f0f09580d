//! Platform roles

use serde::{Deserialize, Serialize};

/// Role held by a user (`user_roles.role`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Instructor,
    Teacher,
    Editor,
    Student,
}

impl Role {
    /// Admins and instructors see all content regardless of tier
    pub fn bypasses_tier_checks(&self) -> bool {
        matches!(self, Role::Admin | Role::Instructor)
    }

    /// Roles allowed to create, update and delete live sessions
    pub fn can_manage_live_sessions(&self) -> bool {
        matches!(self, Role::Admin | Role::Instructor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Instructor => write!(f, "instructor"),
            Role::Teacher => write!(f, "teacher"),
            Role::Editor => write!(f, "editor"),
            Role::Student => write!(f, "student"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "instructor" => Ok(Role::Instructor),
            "teacher" => Ok(Role::Teacher),
            "editor" => Ok(Role::Editor),
            "student" => Ok(Role::Student),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}
