use std::time::Duration;

use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Database};

use crate::core::config::DatabaseConfig;

/// Connect to the document store and return a handle to the configured
/// database. The handle is cheap to clone and is passed explicitly into each
/// service rather than held as process-global state.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));

    let client = Client::with_options(options)?;
    let database = client.database(&config.database);

    // Fail fast at startup instead of on the first request.
    database.run_command(doc! { "ping": 1 }).await?;

    Ok(database)
}
