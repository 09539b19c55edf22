use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use std::time::Duration;

use crate::config::Config;
use crate::error::{BenchError, Result};
use crate::token::Token;

/// The collection operations the benchmark needs.
/// Implementations: `MongoStore` (a live collection), and an in-memory
/// store in the integration tests.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Names of the indexes currently defined on the collection.
    async fn index_names(&self) -> Result<Vec<String>>;

    /// Create an ascending TTL index on `field` that expires documents
    /// `expire_after` past the stored timestamp.
    async fn create_ttl_index(&self, name: &str, field: &str, expire_after: Duration) -> Result<()>;

    /// Bulk-insert one batch. Returns how many documents were written.
    async fn insert_batch(&self, offset: usize, batch: &[Token]) -> Result<u64>;

    /// Delete every document in the collection.
    async fn delete_all(&self) -> Result<u64>;

    /// Set `expires_on` to `at` on every document in the collection.
    async fn expire_all(&self, at: DateTime) -> Result<u64>;

    async fn close(&self) -> Result<()>;
}

pub struct MongoStore {
    client: Client,
    collection: Collection<Token>,
}

impl MongoStore {
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(config.endpoint())
            .await
            .map_err(|e| BenchError::Connect {
                uri: config.endpoint().to_string(),
                source: e.into(),
            })?;
        let collection = client
            .database(config.database_name())
            .collection::<Token>(config.collection_name());

        tracing::info!(
            uri = config.endpoint(),
            database = config.database_name(),
            collection = config.collection_name(),
            "connected"
        );
        Ok(MongoStore { client, collection })
    }
}

#[async_trait]
impl TokenStore for MongoStore {
    async fn index_names(&self) -> Result<Vec<String>> {
        let mut cursor = self
            .collection
            .list_indexes()
            .await
            .map_err(|e| BenchError::ListIndexes(e.into()))?;

        let mut names = Vec::new();
        while let Some(index) = cursor
            .try_next()
            .await
            .map_err(|e| BenchError::DecodeIndex(e.into()))?
        {
            if let Some(name) = index.options.and_then(|o| o.name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    async fn create_ttl_index(&self, name: &str, field: &str, expire_after: Duration) -> Result<()> {
        let options = IndexOptions::builder()
            .name(name.to_string())
            .expire_after(expire_after)
            .build();
        let model = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(options)
            .build();

        self.collection
            .create_index(model)
            .await
            .map_err(|e| BenchError::CreateIndex {
                name: name.to_string(),
                source: e.into(),
            })?;
        Ok(())
    }

    async fn insert_batch(&self, offset: usize, batch: &[Token]) -> Result<u64> {
        let result = self
            .collection
            .insert_many(batch)
            .await
            .map_err(|e| BenchError::Insert {
                offset,
                source: e.into(),
            })?;
        Ok(result.inserted_ids.len() as u64)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(|e| BenchError::Delete(e.into()))?;
        Ok(result.deleted_count)
    }

    async fn expire_all(&self, at: DateTime) -> Result<u64> {
        let result = self
            .collection
            .update_many(doc! {}, doc! { "$set": { "expires_on": at } })
            .await
            .map_err(|e| BenchError::Update(e.into()))?;
        tracing::debug!(
            matched = result.matched_count,
            modified = result.modified_count,
            "expire_all applied"
        );
        Ok(result.modified_count)
    }

    async fn close(&self) -> Result<()> {
        // The driver's shutdown cannot fail; it waits for in-flight
        // operations and closes the pool.
        self.client.clone().shutdown().await;
        tracing::info!("disconnected");
        Ok(())
    }
}
