use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored shape of a category document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn missing_name_defaults_to_empty() {
        let document = doc! { "_id": ObjectId::new() };
        let category: Category = mongodb::bson::from_document(document).unwrap();
        assert_eq!(category.name, "");
    }
}
