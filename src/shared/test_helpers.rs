#[cfg(test)]
use mongodb::{Client, Database};

/// Connect to the store named by `TEST_MONGODB_URL` and hand back a freshly
/// dropped database dedicated to one test suite.
///
/// Returns `None` when the variable is unset so suites can skip cleanly on
/// machines without a running store.
#[cfg(test)]
pub async fn test_database(suite: &str) -> Option<Database> {
    let url = std::env::var("TEST_MONGODB_URL").ok()?;
    let client = Client::with_uri_str(&url).await.ok()?;
    let database = client.database(&format!("storefront_test_{}", suite));
    database.drop().await.ok()?;
    Some(database)
}
