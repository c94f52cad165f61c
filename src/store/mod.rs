//! In-process stores for issued artifacts and per-chat conversation modes.
//!
//! Both stores sit behind traits so a durable backend can replace the
//! in-memory maps without touching handlers:
//! - `artifact` - token → PIN + PDF bytes
//! - `conversation` - chat id → expected input mode

pub mod artifact;
pub mod conversation;

pub use artifact::{ArtifactRecord, ArtifactStore, InMemoryArtifactStore};
pub use conversation::{ConversationStore, InMemoryConversationStore};

use thiserror::Error;

/// Failures reported by a store backend. The in-memory stores never return one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Backend(String),
}
