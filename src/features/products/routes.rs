use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/products/add", post(handlers::create_product))
        .route("/products", get(handlers::list_products))
        .route("/products/", get(handlers::list_products))
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::{self, CategoryService};
    use crate::shared::test_helpers::test_database;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use mongodb::Client;
    use serde_json::{json, Value};

    // One database per test; suites run in parallel and each drops its own.
    async fn server(suite: &str) -> Option<TestServer> {
        let database = test_database(suite).await?;
        let product_service = Arc::new(ProductService::new(&database));
        let category_service = Arc::new(CategoryService::new(&database));
        let app = routes(product_service).merge(categories::routes::routes(category_service));
        Some(TestServer::new(app).unwrap())
    }

    #[tokio::test]
    async fn malformed_id_is_not_found_not_a_fault() {
        let client = Client::with_uri_str("mongodb://127.0.0.1:1").await.unwrap();
        let service = Arc::new(ProductService::new(&client.database("unreachable")));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/products/definitely-not-hex").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Product not found");
    }

    #[tokio::test]
    async fn invalid_category_reference_is_rejected() {
        let client = Client::with_uri_str("mongodb://127.0.0.1:1").await.unwrap();
        let service = Arc::new(ProductService::new(&client.database("unreachable")));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server
            .post("/products/add")
            .json(&json!({ "name": "Sneaker", "categoryId": ["nope"] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn product_lifecycle_with_defaults() {
        let Some(server) = server("product_lifecycle").await else {
            eprintln!("TEST_MONGODB_URL not set, skipping");
            return;
        };

        let created = server
            .post("/products/add")
            .json(&json!({
                "name": "Sneaker",
                "shortDescription": "Low-top",
                "sellingPrice": 79.9,
                "images": ["front.jpg", "side.jpg"]
            }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let body: Value = created.json();
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(body["rating"], 0.0);
        assert_eq!(body["description"], "");
        assert_eq!(body["categoryId"], json!([]));

        let fetched = server.get(&format!("/products/{}", id)).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>()["images"], json!(["front.jpg", "side.jpg"]));

        let updated = server
            .put(&format!("/products/{}", id))
            .json(&json!({ "rating": 4.5 }))
            .await;
        updated.assert_status_ok();
        let body: Value = updated.json();
        assert_eq!(body["rating"], 4.5);
        // Fields omitted from the update are left unchanged
        assert_eq!(body["name"], "Sneaker");
        assert_eq!(body["sellingPrice"], 79.9);

        let deleted = server.delete(&format!("/products/{}", id)).await;
        deleted.assert_status_ok();
        assert_eq!(
            deleted.json::<Value>()["message"],
            "Product deleted successfully"
        );

        server
            .get(&format!("/products/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn category_reference_survives_category_deletion() {
        let Some(server) = server("product_weak_reference").await else {
            eprintln!("TEST_MONGODB_URL not set, skipping");
            return;
        };

        let category = server
            .post("/category/add")
            .json(&json!({ "name": "Shoes" }))
            .await;
        let category_id = category.json::<Value>()["id"].as_str().unwrap().to_string();

        let product = server
            .post("/products/add")
            .json(&json!({ "name": "Sneaker", "categoryId": [category_id.clone()] }))
            .await;
        product.assert_status(StatusCode::CREATED);
        let product_id = product.json::<Value>()["id"].as_str().unwrap().to_string();

        server
            .delete(&format!("/category/delete/{}", category_id))
            .await
            .assert_status_ok();

        // No cascade: the product keeps its now-orphaned reference
        let fetched = server.get(&format!("/products/{}", product_id)).await;
        fetched.assert_status_ok();
        assert_eq!(
            fetched.json::<Value>()["categoryId"],
            json!([category_id])
        );
    }
}
