//! In-memory implementation of the verification code store.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_code::VerificationRecord;

use super::traits::CodeStore;

/// Process-wide in-memory code store, keyed by phone number.
///
/// All mutations go through the single write lock, so per-key operations are
/// linearizable: concurrent requests for the same phone never lose an
/// increment or observe a half-deleted record. Expiry is lazy; records linger
/// past their expiry instant until `cleanup_expired` or a deletion touches
/// them.
pub struct MemoryCodeStore {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
}

impl MemoryCodeStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently held, expired ones included
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MemoryCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn put(&self, phone: &str, code: &str, ttl: Duration) {
        let record = VerificationRecord::new(phone.to_string(), code.to_string(), ttl);
        let mut records = self.records.write().await;
        records.insert(phone.to_string(), record);
    }

    async fn get(&self, phone: &str) -> Option<VerificationRecord> {
        let records = self.records.read().await;
        records.get(phone).cloned()
    }

    async fn increment_attempts(&self, phone: &str) -> Option<u32> {
        let mut records = self.records.write().await;
        records.get_mut(phone).map(|record| {
            record.attempts += 1;
            record.attempts
        })
    }

    async fn delete(&self, phone: &str) {
        let mut records = self.records.write().await;
        records.remove(phone);
    }

    async fn cleanup_expired(&self) {
        let now = Utc::now();
        let mut records = self.records.write().await;
        records.retain(|_, record| record.expires_at >= now);
    }
}
