use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup, InputFile};
use teloxide::RequestError;

use super::messenger::{Messenger, MessengerError};

/// [`Messenger`] backed by the Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), MessengerError> {
        let mut request = self.bot.send_message(chat_id, text);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await.map_err(classify)?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &CallbackQueryId) -> Result<(), MessengerError> {
        self.bot
            .answer_callback_query(callback_id.clone())
            .await
            .map_err(classify)?;
        Ok(())
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        file_name: &str,
        bytes: Vec<u8>,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), MessengerError> {
        let document = InputFile::memory(bytes).file_name(file_name.to_string());
        let mut request = self.bot.send_document(chat_id, document).caption(caption);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await.map_err(classify)?;
        Ok(())
    }
}

/// API-level refusals become [`MessengerError::Rejected`]; network and decoding failures stay as requests.
fn classify(err: RequestError) -> MessengerError {
    match err {
        RequestError::Api(api) => MessengerError::Rejected(api.to_string()),
        other => MessengerError::Request(other),
    }
}
