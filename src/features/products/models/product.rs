use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored shape of a product document. Field names are camelCase in the
/// store. `category_id` holds weak references to category documents; nothing
/// guarantees the referenced categories still exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub purchase_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category_id: Vec<ObjectId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn sparse_document_fills_defaults() {
        let document = doc! { "_id": ObjectId::new(), "name": "Sneaker" };
        let product: Product = mongodb::bson::from_document(document).unwrap();
        assert_eq!(product.name, "Sneaker");
        assert_eq!(product.rating, 0.0);
        assert!(product.images.is_empty());
        assert!(product.category_id.is_empty());
    }

    #[test]
    fn stored_fields_are_camel_case() {
        let product = Product {
            id: Some(ObjectId::new()),
            name: "Sneaker".to_string(),
            short_description: "low-top".to_string(),
            description: String::new(),
            purchase_price: 20.0,
            selling_price: 35.5,
            rating: 4.2,
            images: vec!["a.jpg".to_string()],
            category_id: vec![],
        };
        let document = mongodb::bson::to_document(&product).unwrap();
        assert!(document.contains_key("shortDescription"));
        assert!(document.contains_key("purchasePrice"));
        assert!(document.contains_key("_id"));
        assert!(!document.contains_key("short_description"));
    }
}
