use std::fmt;
use std::time::Duration;

use crate::error::Result;
use crate::store::TokenStore;

/// Name of the TTL index on `expires_on`.
pub const TTL_INDEX_NAME: &str = "expires_on";
pub const TTL_FIELD: &str = "expires_on";
/// Zero: a document expires at exactly its stored `expires_on`.
pub const TTL_EXPIRE_AFTER: Duration = Duration::from_secs(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Created,
    Exists,
}

impl fmt::Display for IndexStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexStatus::Created => write!(f, "TTL index created."),
            IndexStatus::Exists => write!(f, "TTL index exists."),
        }
    }
}

/// Create the TTL index unless one with the same name is already there.
///
/// Check-then-create, so two processes racing on a fresh collection may
/// both issue the create.
pub async fn ensure_ttl_index<S: TokenStore + ?Sized>(store: &S) -> Result<IndexStatus> {
    let names = store.index_names().await?;
    if names.iter().any(|name| name == TTL_INDEX_NAME) {
        tracing::debug!(index = TTL_INDEX_NAME, "TTL index already present");
        return Ok(IndexStatus::Exists);
    }

    store
        .create_ttl_index(TTL_INDEX_NAME, TTL_FIELD, TTL_EXPIRE_AFTER)
        .await?;
    tracing::info!(index = TTL_INDEX_NAME, field = TTL_FIELD, "TTL index created");
    Ok(IndexStatus::Created)
}
