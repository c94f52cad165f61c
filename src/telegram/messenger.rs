use async_trait::async_trait;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardMarkup};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("Telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),
    #[error("message rejected: {0}")]
    Rejected(String),
}

/// Outbound side of the chat transport.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), MessengerError>;

    async fn answer_callback(&self, callback_id: &CallbackQueryId) -> Result<(), MessengerError>;

    /// Upload `bytes` as a PDF attachment named `file_name`.
    async fn send_document(
        &self,
        chat_id: ChatId,
        file_name: &str,
        bytes: Vec<u8>,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), MessengerError>;
}
