use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/category/add", post(handlers::create_category))
        // Registered with and without the trailing slash; axum matches paths
        // literally and the storefront frontend requests `/category/`.
        .route("/category", get(handlers::list_categories))
        .route("/category/", get(handlers::list_categories))
        .route(
            "/category/{id}",
            get(handlers::get_category).put(handlers::update_category),
        )
        .route("/category/delete/{id}", delete(handlers::delete_category))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_database;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use mongodb::Client;
    use serde_json::{json, Value};

    // One database per test; suites run in parallel and each drops its own.
    async fn server(suite: &str) -> Option<TestServer> {
        let database = test_database(suite).await?;
        let service = Arc::new(CategoryService::new(&database));
        Some(TestServer::new(routes(service)).unwrap())
    }

    /// Server backed by an unreachable store. The driver connects lazily, so
    /// requests that never reach the store still behave deterministically.
    async fn offline_server() -> TestServer {
        let client = Client::with_uri_str("mongodb://127.0.0.1:1").await.unwrap();
        let service = Arc::new(CategoryService::new(&client.database("unreachable")));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn malformed_id_is_not_found_not_a_fault() {
        let server = offline_server().await;

        let response = server.get("/category/not-a-valid-object-id").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Category not found");

        let response = server.delete("/category/delete/zzz").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn category_lifecycle() {
        let Some(server) = server("category_lifecycle").await else {
            eprintln!("TEST_MONGODB_URL not set, skipping");
            return;
        };

        let created = server
            .post("/category/add")
            .json(&json!({ "name": "Shoes" }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let body: Value = created.json();
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(body["name"], "Shoes");

        let listed = server.get("/category/").await;
        listed.assert_status_ok();
        let list: Vec<Value> = listed.json();
        assert!(list.iter().any(|c| c["id"] == id.as_str()));

        let updated = server
            .put(&format!("/category/{}", id))
            .json(&json!({ "name": "Footwear" }))
            .await;
        updated.assert_status_ok();
        assert_eq!(updated.json::<Value>()["name"], "Footwear");

        let deleted = server.delete(&format!("/category/delete/{}", id)).await;
        deleted.assert_status_ok();
        assert_eq!(
            deleted.json::<Value>()["message"],
            "Category deleted successfully"
        );

        let missing = server.get(&format!("/category/{}", id)).await;
        missing.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(missing.json::<Value>()["message"], "Category not found");

        // Deleting again reports not found instead of faulting
        let repeat = server.delete(&format!("/category/delete/{}", id)).await;
        repeat.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_name_is_persisted_as_is() {
        let Some(server) = server("category_empty_name").await else {
            eprintln!("TEST_MONGODB_URL not set, skipping");
            return;
        };

        let created = server.post("/category/add").json(&json!({})).await;
        created.assert_status(StatusCode::CREATED);
        assert_eq!(created.json::<Value>()["name"], "");
    }
}
