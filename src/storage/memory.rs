//! In-memory storage backend
//!
//! A single table behind one `tokio::sync::Mutex`. Every operation takes the
//! lock exactly once and releases it before returning, so generation plus
//! insertion in `create` and the counter update in `resolve` are each one
//! indivisible step. Nothing inside a critical section awaits.

use crate::models::ShortLinkRecord;
use crate::short_code::{CodeGenerator, RandomCodeGenerator};
use crate::storage::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Candidates tried by `create` before giving up
pub const MAX_CREATE_ATTEMPTS: u32 = 10;

pub struct MemoryStorage {
    links: Mutex<HashMap<String, ShortLinkRecord>>,
    generator: Arc<dyn CodeGenerator>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_generator(Arc::new(RandomCodeGenerator))
    }

    pub fn with_generator(generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
            generator,
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create(&self, original_url: &str) -> StorageResult<String> {
        let mut links = self.links.lock().await;

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let code = self.generator.generate();
            match links.entry(code) {
                Entry::Vacant(slot) => {
                    let code = slot.key().clone();
                    slot.insert(ShortLinkRecord::new(
                        code.clone(),
                        original_url.to_string(),
                        Utc::now(),
                    ));
                    tracing::debug!(short_code = %code, attempt, "created short link");
                    return Ok(code);
                }
                Entry::Occupied(taken) => {
                    let code = taken.key();
                    tracing::warn!(short_code = %code, attempt, "short code collision");
                }
            }
        }

        tracing::error!(
            attempts = MAX_CREATE_ATTEMPTS,
            links = links.len(),
            "failed to generate an unused short code"
        );
        Err(StorageError::GenerationExhausted {
            attempts: MAX_CREATE_ATTEMPTS,
        })
    }

    async fn resolve(&self, short_code: &str) -> StorageResult<ShortLinkRecord> {
        let mut links = self.links.lock().await;
        let record = links.get_mut(short_code).ok_or(StorageError::NotFound)?;

        record.record_access(Utc::now());
        tracing::debug!(short_code = %short_code, clicks = record.click_count, "resolved short link");

        Ok(record.clone())
    }

    async fn stats(&self, short_code: &str) -> StorageResult<ShortLinkRecord> {
        self.links
            .lock()
            .await
            .get(short_code)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn len(&self) -> usize {
        self.links.lock().await.len()
    }
}
