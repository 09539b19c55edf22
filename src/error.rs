use thiserror::Error;

/// Underlying cause of a failed database call.
pub type Source = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failed to connect to {uri}: {source}")]
    Connect { uri: String, source: Source },

    #[error("failed to list indexes: {0}")]
    ListIndexes(Source),

    #[error("failed to decode index descriptor: {0}")]
    DecodeIndex(Source),

    #[error("failed to create index '{name}': {source}")]
    CreateIndex { name: String, source: Source },

    #[error("insert of batch at offset {offset} failed: {source}")]
    Insert { offset: usize, source: Source },

    #[error("delete failed: {0}")]
    Delete(Source),

    #[error("update failed: {0}")]
    Update(Source),

    #[error("disconnect failed: {0}")]
    Disconnect(Source),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
