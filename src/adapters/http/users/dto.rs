//! HTTP DTOs for profile and account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Role;
use crate::domain::identity::Identity;

/// Account view returned by profile and administration endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            username: identity.username().as_str().to_string(),
            email: identity.email().as_str().to_string(),
            role: identity.role(),
        }
    }
}

/// Partial self-service profile update. The role field is ignored for
/// non-admin callers.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMeRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Admin request to create an account.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Admin partial account update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}
