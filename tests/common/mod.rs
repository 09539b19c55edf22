// In-memory stand-in for a MongoDB collection, shared by the driver tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::DateTime;
use ttlbench::{BenchError, Result, Token, TokenStore};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    IndexNames,
    CreateIndex { name: String, field: String, expire_after: Duration },
    Insert { offset: usize, len: usize },
    DeleteAll,
    ExpireAll,
    Close,
}

#[derive(Default)]
struct State {
    indexes: Vec<String>,
    docs: BTreeMap<i64, Token>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    fail_inserts: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        let store = MemoryStore::default();
        // Every collection carries the primary key index.
        store.state.lock().unwrap().indexes.push("_id_".to_string());
        store
    }

    /// A store whose insert calls all fail.
    pub fn failing_inserts() -> Self {
        MemoryStore {
            fail_inserts: true,
            ..MemoryStore::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn docs(&self) -> Vec<Token> {
        self.state.lock().unwrap().docs.values().cloned().collect()
    }

    pub fn index_count(&self) -> usize {
        self.state.lock().unwrap().indexes.len()
    }

    pub fn create_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::CreateIndex { .. }))
            .count()
    }

    pub fn mutating_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Insert { .. } | Call::DeleteAll | Call::ExpireAll))
            .count()
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn index_names(&self) -> Result<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::IndexNames);
        Ok(state.indexes.clone())
    }

    async fn create_ttl_index(&self, name: &str, field: &str, expire_after: Duration) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateIndex {
            name: name.to_string(),
            field: field.to_string(),
            expire_after,
        });
        state.indexes.push(name.to_string());
        Ok(())
    }

    async fn insert_batch(&self, offset: usize, batch: &[Token]) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Insert {
            offset,
            len: batch.len(),
        });
        if self.fail_inserts {
            return Err(BenchError::Insert {
                offset,
                source: std::io::Error::other("connection reset").into(),
            });
        }
        for token in batch {
            state.docs.insert(token.id, token.clone());
        }
        Ok(batch.len() as u64)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::DeleteAll);
        let deleted = state.docs.len() as u64;
        state.docs.clear();
        Ok(deleted)
    }

    async fn expire_all(&self, at: DateTime) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ExpireAll);
        for token in state.docs.values_mut() {
            token.expires_on = at;
        }
        Ok(state.docs.len() as u64)
    }

    async fn close(&self) -> Result<()> {
        self.state.lock().unwrap().calls.push(Call::Close);
        Ok(())
    }
}
