use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored shape of a user document.
///
/// The password is persisted exactly as supplied. Plaintext credential
/// storage is a known defect inherited from the system this service stays
/// wire-compatible with; see DESIGN.md before changing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn is_admin_stored_under_camel_case_key() {
        let user = User {
            id: None,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            is_admin: true,
        };
        let document = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(document.get_bool("isAdmin").unwrap(), true);
    }

    #[test]
    fn missing_is_admin_defaults_to_false() {
        let document = doc! { "name": "A", "email": "a@x.com", "password": "p" };
        let user: User = mongodb::bson::from_document(document).unwrap();
        assert!(!user.is_admin);
    }
}
