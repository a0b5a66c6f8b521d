use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Connect to MongoDB with default settings and return a verified Client
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let db = client.database("mydb");
/// ```
pub async fn connect(url: &str) -> DatabaseResult<Client> {
    connect_from_config(&MongoConfig::new(url)).await
}

/// Connect using a MongoConfig
///
/// Parsing the URL, building the client and the verification ping together are
/// bounded by `config.connect_timeout()`.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
/// let client = connect_from_config(&config).await?;
/// ```
#[instrument(skip(config), fields(url = %config.redacted_url()))]
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let timeout = config.connect_timeout();
    info!("Attempting to connect to MongoDB");

    let client = tokio::time::timeout(timeout, async {
        let mut options = ClientOptions::parse(&config.url).await?;

        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        if let Some(ref app_name) = config.app_name {
            options.app_name = Some(app_name.clone());
        }

        let client = Client::with_options(options)?;
        ping(&client).await?;
        Ok::<_, DatabaseError>(client)
    })
    .await
    .map_err(|_| DatabaseError::ConnectTimeout(timeout))??;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Run a `ping` against the admin database
pub async fn ping(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

/// Close the client, waiting at most `timeout` for in-use connections to be returned
///
/// # Example
/// ```ignore
/// use database::mongodb::disconnect;
///
/// disconnect(client, Duration::from_secs(10)).await?;
/// ```
#[instrument(skip(client))]
pub async fn disconnect(client: Client, timeout: Duration) -> DatabaseResult<()> {
    info!("Closing MongoDB client");

    tokio::time::timeout(timeout, client.shutdown())
        .await
        .map_err(|_| DatabaseError::DisconnectTimeout(timeout))?;

    info!("MongoDB client closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = connect("not-a-mongodb-url").await;
        assert!(matches!(result, Err(DatabaseError::Mongo(_))));
    }

    #[tokio::test]
    async fn test_connect_times_out_against_unreachable_host() {
        let config = MongoConfig {
            connect_timeout_secs: 1,
            ..MongoConfig::new("mongodb://127.0.0.1:1/?directConnection=true")
        };

        let result = connect_from_config(&config).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect_and_disconnect() {
        let mongo_url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let client = connect(&mongo_url).await.unwrap();
        disconnect(client, Duration::from_secs(5)).await.unwrap();
    }
}
