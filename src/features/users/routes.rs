use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/users/add", post(handlers::create_user))
        .route("/users", get(handlers::list_users))
        .route("/users/", get(handlers::list_users))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
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
        let service = Arc::new(UserService::new(&database));
        Some(TestServer::new(routes(service)).unwrap())
    }

    #[tokio::test]
    async fn malformed_id_is_not_found_not_a_fault() {
        let client = Client::with_uri_str("mongodb://127.0.0.1:1").await.unwrap();
        let service = Arc::new(UserService::new(&client.database("unreachable")));
        let server = TestServer::new(routes(service)).unwrap();

        let response = server.get("/users/1234").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "User not found");
    }

    #[tokio::test]
    async fn creation_defaults_and_password_exclusion() {
        let Some(server) = server("user_lifecycle").await else {
            eprintln!("TEST_MONGODB_URL not set, skipping");
            return;
        };

        let created = server
            .post("/users/add")
            .json(&json!({ "name": "A", "email": "a@x.com", "password": "p" }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let body: Value = created.json();
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(body["isAdmin"], false);
        assert!(body.get("password").is_none());

        let fetched = server.get(&format!("/users/{}", id)).await;
        fetched.assert_status_ok();
        assert!(fetched.json::<Value>().get("password").is_none());

        let listed = server.get("/users/").await;
        listed.assert_status_ok();
        for user in listed.json::<Vec<Value>>() {
            assert!(user.get("password").is_none());
        }

        // The update writes the supplied password, but the response still
        // excludes it
        let updated = server
            .put(&format!("/users/{}", id))
            .json(&json!({ "password": "rotated", "isAdmin": true }))
            .await;
        updated.assert_status_ok();
        let body: Value = updated.json();
        assert!(body.get("password").is_none());
        assert_eq!(body["isAdmin"], true);
        // Fields omitted from the update are left unchanged
        assert_eq!(body["email"], "a@x.com");

        let deleted = server.delete(&format!("/users/{}", id)).await;
        deleted.assert_status_ok();
        assert_eq!(
            deleted.json::<Value>()["message"],
            "User deleted successfully"
        );

        server
            .get(&format!("/users/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
