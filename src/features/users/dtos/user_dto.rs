use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::users::models::User;

/// Request DTO for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Defaults to false when omitted
    pub is_admin: Option<bool>,
}

/// Request DTO for updating a user. Omitted fields are left unchanged; a
/// supplied password overwrites the stored one verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

/// Response DTO for user. Deliberately has no password field: no read path
/// can leak the stored credential.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    /// Store-generated identifier, hex-encoded
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn response_never_carries_a_password_key() {
        let user = User {
            id: Some(ObjectId::new()),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "super-secret".to_string(),
            is_admin: false,
        };

        let body = serde_json::to_value(UserResponseDto::from(user)).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["isAdmin"], false);
        assert_eq!(body["email"], "a@x.com");
    }

    #[test]
    fn create_dto_accepts_omitted_is_admin() {
        let dto: CreateUserDto =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com","password":"p"}"#).unwrap();
        assert_eq!(dto.is_admin, None);
    }
}
