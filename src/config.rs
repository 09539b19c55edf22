use crate::error::{BenchError, Result};

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "mongo-experiments";
pub const DEFAULT_COLLECTION: &str = "tokens";
pub const DEFAULT_TOTAL_DOCUMENTS: usize = 100_000;
pub const DEFAULT_BATCHES: usize = 1;

/// Where the benchmark runs and how much it writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) uri: String,
    pub(crate) database: String,
    pub(crate) collection: String,
    pub(crate) total_documents: usize,
    pub(crate) batches: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            total_documents: DEFAULT_TOTAL_DOCUMENTS,
            batches: DEFAULT_BATCHES,
        }
    }
}

impl Config {
    /// Defaults, with the endpoint and namespace overridable through the
    /// environment (or a `.env` file). Document counts stay fixed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Config::default();
        if let Ok(uri) = std::env::var("TTLBENCH_MONGO_URI") {
            config.uri = uri;
        }
        if let Ok(database) = std::env::var("TTLBENCH_DATABASE") {
            config.database = database;
        }
        if let Ok(collection) = std::env::var("TTLBENCH_COLLECTION") {
            config.collection = collection;
        }
        config
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn database(mut self, name: impl Into<String>) -> Self {
        self.database = name.into();
        self
    }

    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collection = name.into();
        self
    }

    pub fn total_documents(mut self, total: usize) -> Self {
        self.total_documents = total;
        self
    }

    pub fn batches(mut self, batches: usize) -> Self {
        self.batches = batches;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.uri
    }

    pub fn database_name(&self) -> &str {
        &self.database
    }

    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    pub fn document_count(&self) -> usize {
        self.total_documents
    }

    pub fn batch_count(&self) -> usize {
        self.batches
    }

    /// Records per insert call. Integer division, so a remainder is not
    /// spread over the batches.
    pub fn batch_size(&self) -> usize {
        self.total_documents / self.batches
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_documents == 0 {
            return Err(BenchError::InvalidConfig(
                "total_documents must be at least 1".to_string(),
            ));
        }
        if self.batches == 0 {
            return Err(BenchError::InvalidConfig(
                "batches must be at least 1".to_string(),
            ));
        }
        if self.batches > self.total_documents {
            return Err(BenchError::InvalidConfig(format!(
                "batches ({}) exceeds total_documents ({})",
                self.batches, self.total_documents
            )));
        }
        Ok(())
    }
}
