use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique identifier, immutable once assigned
    pub id: Uuid,
    /// Display name (never empty)
    #[validate(length(min = 1))]
    pub full_name: String,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            full_name: full_name.into(),
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub full_name: String,
}

/// User response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
        }
    }
}
