use teloxide::types::{CallbackQueryId, ChatId, Update, UpdateKind};

/// Inbound chat event the conversation controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// A text message; commands such as `/start` arrive here too.
    Text { chat_id: ChatId, text: String },
    /// An inline button press. Chat and payload may be missing on old or inline messages.
    Button {
        callback_id: CallbackQueryId,
        chat_id: Option<ChatId>,
        data: Option<String>,
    },
}

impl ChatEvent {
    /// Decode the parts of an update the bot reacts to; everything else is `None`.
    pub fn from_update(update: Update) -> Option<Self> {
        match update.kind {
            UpdateKind::CallbackQuery(query) => {
                let chat_id = query.message.as_ref().map(|message| message.chat().id);
                Some(ChatEvent::Button {
                    callback_id: query.id,
                    chat_id,
                    data: query.data,
                })
            }
            UpdateKind::Message(message) => message.text().map(|text| ChatEvent::Text {
                chat_id: message.chat.id,
                text: text.to_string(),
            }),
            _ => None,
        }
    }
}
