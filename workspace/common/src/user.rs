use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::non_blank;

/// User transfer object. The password hash never leaves the data-access layer;
/// `password` is a write-only plaintext field used for create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Validate)]
pub struct UserDto {
    pub username: String,
    #[serde(default, skip_serializing)]
    #[schema(write_only)]
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
    /// Role names, sorted
    #[serde(default)]
    #[validate(custom(function = "validate_role_names"))]
    pub roles: Vec<String>,
}

impl UserDto {
    /// Creates a user transfer object carrying a plaintext password.
    pub fn with_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            roles: Vec::new(),
        }
    }

    pub fn has_role(&self, role_name: &str) -> bool {
        self.roles.iter().any(|role| role == role_name)
    }
}

/// Request body for registration and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CredentialsRequest {
    #[validate(
        length(min = 1, max = 25, message = "Username must be 1-25 characters"),
        custom(function = "non_blank", message = "Username must be set")
    )]
    pub username: String,
    #[validate(length(min = 1, message = "Password must be set"))]
    pub password: String,
}

/// Request body for granting a role to a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RoleRequest {
    #[validate(
        length(min = 1, max = 25, message = "Role name must be 1-25 characters"),
        custom(function = "non_blank", message = "Role name must be set")
    )]
    pub role_name: String,
}

fn validate_role_names(roles: &[String]) -> Result<(), ValidationError> {
    if roles.iter().any(|role| non_blank(role).is_err()) {
        let mut error = ValidationError::new("blank_role");
        error.message = Some("Role names must not be empty".into());
        return Err(error);
    }
    Ok(())
}
