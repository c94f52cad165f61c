use std::sync::Arc;

use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardMarkup};
use thiserror::Error;

use super::forms::{parse_apostille, parse_nosud, NosudInput};
use super::mode::ConversationMode;
use crate::generator::{GeneratedDocument, GeneratorError, NosudGenerator};
use crate::store::{ConversationStore, StoreError};
use crate::telegram::messages::{
    document_caption, document_failure, APOSTILLE_INVALID, APOSTILLE_PROMPT, NOSUD_INVALID,
    NOSUD_PROMPT, WELCOME,
};
use crate::telegram::{
    back_keyboard, main_menu_keyboard, ChatEvent, MenuAction, Messenger, MessengerError,
};

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error(transparent)]
    Generation(#[from] GeneratorError),
    #[error(transparent)]
    Transport(#[from] MessengerError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Commands that reset the chat to the main menu.
const MENU_COMMANDS: [&str; 2] = ["/start", "/admin"];

pub struct ConversationController {
    conversations: Arc<dyn ConversationStore>,
    generator: Arc<NosudGenerator>,
    messenger: Arc<dyn Messenger>,
}

impl ConversationController {
    pub fn new(
        conversations: Arc<dyn ConversationStore>,
        generator: Arc<NosudGenerator>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            conversations,
            generator,
            messenger,
        }
    }

    /// Process one event to completion.
    ///
    /// Only store failures escape; chat-level failures are reported to the chat.
    pub async fn handle(&self, event: ChatEvent) -> Result<(), ConversationError> {
        match event {
            ChatEvent::Button {
                callback_id,
                chat_id,
                data,
            } => self.handle_button(&callback_id, chat_id, data.as_deref()).await,
            ChatEvent::Text { chat_id, text } => self.handle_text(chat_id, &text).await,
        }
    }

    async fn handle_button(
        &self,
        callback_id: &CallbackQueryId,
        chat_id: Option<ChatId>,
        data: Option<&str>,
    ) -> Result<(), ConversationError> {
        let outcome = match (chat_id, data) {
            (Some(chat_id), Some(data)) => self.apply_menu_action(chat_id, data).await,
            _ => {
                log::debug!("Button press without chat or payload");
                Ok(())
            }
        };

        if let Err(e) = self.messenger.answer_callback(callback_id).await {
            log::warn!("Failed to answer callback query: {}", e);
        }
        outcome
    }

    async fn apply_menu_action(&self, chat_id: ChatId, data: &str) -> Result<(), ConversationError> {
        let Some(action) = MenuAction::from_callback_data(data) else {
            log::debug!("Ignoring unknown button payload '{}' in chat {}", data, chat_id.0);
            return Ok(());
        };
        log::info!("Chat {} pressed {:?}", chat_id.0, action);

        match action {
            MenuAction::Nosud => {
                self.set_mode(chat_id, ConversationMode::AwaitNosudInput).await?;
                self.notify(chat_id, NOSUD_PROMPT, Some(back_keyboard())).await;
            }
            MenuAction::Notary => {
                self.set_mode(chat_id, ConversationMode::AwaitNotaryInput).await?;
            }
            MenuAction::Apostille => {
                self.set_mode(chat_id, ConversationMode::AwaitApostilleInput).await?;
                self.notify(chat_id, APOSTILLE_PROMPT, Some(back_keyboard())).await;
            }
            MenuAction::BackToMenu => self.show_menu(chat_id).await?,
        }
        Ok(())
    }

    async fn handle_text(&self, chat_id: ChatId, text: &str) -> Result<(), ConversationError> {
        if is_menu_command(text) {
            log::info!("Chat {} requested the main menu", chat_id.0);
            return self.show_menu(chat_id).await;
        }

        let mode = self.conversations.get(chat_id.0).await?;
        let nosud = parse_nosud(text);

        if mode.accepts_nosud_shortcut() {
            if let Ok(input) = &nosud {
                return self.issue_nosud(chat_id, input).await;
            }
        }

        match mode {
            ConversationMode::AwaitNosudInput => {
                if let Err(errors) = &nosud {
                    log::debug!("Rejected Nosud submission in chat {}: {}", chat_id.0, errors);
                }
                self.notify(chat_id, NOSUD_INVALID, Some(back_keyboard())).await;
            }
            ConversationMode::AwaitApostilleInput => match parse_apostille(text) {
                Ok(input) => {
                    log::info!(
                        "Apostille request accepted in chat {} for {}",
                        chat_id.0,
                        input.organization
                    );
                    self.set_mode(chat_id, ConversationMode::Idle).await?;
                }
                Err(errors) => {
                    log::debug!("Rejected Apostille submission in chat {}: {}", chat_id.0, errors);
                    self.notify(chat_id, APOSTILLE_INVALID, Some(back_keyboard())).await;
                }
            },
            ConversationMode::Idle | ConversationMode::AwaitNotaryInput => {
                log::debug!("Ignoring text in chat {} while {:?}", chat_id.0, mode);
            }
        }
        Ok(())
    }

    /// Generate and deliver a certificate. The mode only returns to Idle after delivery.
    async fn issue_nosud(&self, chat_id: ChatId, input: &NosudInput) -> Result<(), ConversationError> {
        match self.deliver_nosud(chat_id, input).await {
            Ok(document) => {
                log::info!(
                    "Document {} delivered to chat {} (token {})",
                    document.doc_id,
                    chat_id.0,
                    document.token
                );
                self.show_menu(chat_id).await
            }
            Err(e) => {
                log::error!("Failed to issue document for chat {}: {}", chat_id.0, e);
                self.notify(chat_id, &document_failure(&e.to_string()), None).await;
                Ok(())
            }
        }
    }

    async fn deliver_nosud(
        &self,
        chat_id: ChatId,
        input: &NosudInput,
    ) -> Result<GeneratedDocument, ConversationError> {
        let document = self.generator.generate(input).await?;
        self.messenger
            .send_document(
                chat_id,
                &document.file_name,
                document.bytes.clone(),
                &document_caption(&document.pin, &document.verify_url),
                Some(back_keyboard()),
            )
            .await?;
        Ok(document)
    }

    async fn show_menu(&self, chat_id: ChatId) -> Result<(), ConversationError> {
        self.set_mode(chat_id, ConversationMode::Idle).await?;
        self.notify(chat_id, WELCOME, Some(main_menu_keyboard())).await;
        Ok(())
    }

    async fn set_mode(&self, chat_id: ChatId, mode: ConversationMode) -> Result<(), ConversationError> {
        self.conversations.set(chat_id.0, mode).await?;
        Ok(())
    }

    /// Send a message, logging and swallowing transport failures.
    async fn notify(&self, chat_id: ChatId, text: &str, keyboard: Option<InlineKeyboardMarkup>) {
        if let Err(e) = self.messenger.send_message(chat_id, text, keyboard).await {
            log::warn!("Failed to send message to chat {}: {}", chat_id.0, e);
        }
    }
}

/// `/start` or `/admin`, optionally addressed as `/start@botname`.
fn is_menu_command(text: &str) -> bool {
    let text = text.trim();
    let command = match text.split_once('@') {
        Some((command, bot)) if !bot.is_empty() && !bot.contains(char::is_whitespace) => command,
        _ => text,
    };
    MENU_COMMANDS.contains(&command)
}
