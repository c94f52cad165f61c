//! Per-chat conversation mode store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::StoreError;
use crate::conversation::ConversationMode;

#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Current mode for `chat_id`; unknown chats are `Idle`.
    async fn get(&self, chat_id: i64) -> Result<ConversationMode, StoreError>;

    async fn set(&self, chat_id: i64, mode: ConversationMode) -> Result<(), StoreError>;
}

#[derive(Default)]
pub struct InMemoryConversationStore {
    modes: RwLock<HashMap<i64, ConversationMode>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get(&self, chat_id: i64) -> Result<ConversationMode, StoreError> {
        Ok(self
            .modes
            .read()
            .get(&chat_id)
            .copied()
            .unwrap_or_default())
    }

    async fn set(&self, chat_id: i64, mode: ConversationMode) -> Result<(), StoreError> {
        self.modes.write().insert(chat_id, mode);
        Ok(())
    }
}
