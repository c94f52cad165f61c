//! Artifact store: issued documents keyed by an opaque token.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::StoreError;

/// One issued document. Bytes arrive after the record is created.
#[derive(Debug, Clone)]
pub struct ArtifactRecord {
    pub pin: String,
    pub bytes: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Allocate a fresh token bound to `pin`, with no bytes yet.
    async fn create_with_pin(&self, pin: &str) -> Result<String, StoreError>;

    /// Attach rendered bytes to `token`. An unknown token gets a record with an empty PIN.
    async fn attach_bytes(&self, token: &str, bytes: Vec<u8>) -> Result<(), StoreError>;

    async fn verify_pin(&self, token: &str, pin: &str) -> Result<bool, StoreError>;

    async fn has_token(&self, token: &str) -> Result<bool, StoreError>;

    async fn get_bytes(&self, token: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Process-lifetime map. Records are never evicted.
#[derive(Default)]
pub struct InMemoryArtifactStore {
    records: RwLock<HashMap<String, ArtifactRecord>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn create_with_pin(&self, pin: &str) -> Result<String, StoreError> {
        let mut records = self.records.write();
        let mut token = Uuid::new_v4().to_string();
        while records.contains_key(&token) {
            token = Uuid::new_v4().to_string();
        }

        records.insert(
            token.clone(),
            ArtifactRecord {
                pin: pin.to_string(),
                bytes: None,
                created_at: Utc::now(),
            },
        );
        log::debug!("Artifact token {} created", token);
        Ok(token)
    }

    async fn attach_bytes(&self, token: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        let mut records = self.records.write();
        match records.get_mut(token) {
            Some(record) => record.bytes = Some(bytes),
            None => {
                log::warn!("Attaching bytes to unknown token {}; creating record without PIN", token);
                records.insert(
                    token.to_string(),
                    ArtifactRecord {
                        pin: String::new(),
                        bytes: Some(bytes),
                        created_at: Utc::now(),
                    },
                );
            }
        }
        Ok(())
    }

    async fn verify_pin(&self, token: &str, pin: &str) -> Result<bool, StoreError> {
        Ok(self
            .records
            .read()
            .get(token)
            .map(|record| record.pin == pin)
            .unwrap_or(false))
    }

    async fn has_token(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self.records.read().contains_key(token))
    }

    async fn get_bytes(&self, token: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .records
            .read()
            .get(token)
            .and_then(|record| record.bytes.clone()))
    }
}
