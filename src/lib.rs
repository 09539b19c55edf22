//! Micro-benchmark for MongoDB TTL cleanup: insert a run of synthetic
//! tokens, then time either deleting them or marking them expired.

pub mod batch;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod index;
pub mod store;
pub mod token;

pub use config::Config;
pub use driver::{execute, insert_records, run, Experiment, InsertSummary, Outcome};
pub use error::{BenchError, Result};
pub use index::{ensure_ttl_index, IndexStatus};
pub use store::{MongoStore, TokenStore};
pub use token::Token;
