use std::time::Duration;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// How far past construction a token expires.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(2 * 60 * 60);

/// One synthetic token document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub created_at: DateTime,
    pub expires_on: DateTime,
}

impl Token {
    /// Builds a token stamped with the current time. The clock is read once
    /// for `created_at` and again for `expires_on`.
    pub fn new(id: i64) -> Self {
        let created_at = DateTime::now();
        let expires_on = expires_after(DateTime::now(), TOKEN_LIFETIME);
        Token {
            id,
            name: token_name(id),
            created_at,
            expires_on,
        }
    }
}

pub fn token_name(id: i64) -> String {
    format!("token_{}", id)
}

fn expires_after(from: DateTime, lifetime: Duration) -> DateTime {
    DateTime::from_millis(from.timestamp_millis().saturating_add(lifetime.as_millis() as i64))
}
