#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use parking_lot::Mutex;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardMarkup};

use spravka_bot::generator::{DocumentRenderer, GeneratorError, RenderJob};
use spravka_bot::conversation::ConversationMode;
use spravka_bot::store::{
    ArtifactStore, ConversationStore, InMemoryArtifactStore, InMemoryConversationStore, StoreError,
};
use spravka_bot::telegram::{Messenger, MessengerError};
use spravka_bot::{AppConfig, AppState};

pub const PDF_BYTES: &[u8] = b"%PDF-1.7 stub";

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message { chat_id: i64, text: String },
    Answer(String),
    Document { chat_id: i64, file_name: String, caption: String },
}

/// Messenger that records every outbound call.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingMessenger {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().clone()
    }

    pub fn captions(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Document { caption, .. } => Some(caption),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        _keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), MessengerError> {
        self.sent.lock().push(Sent::Message {
            chat_id: chat_id.0,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &CallbackQueryId) -> Result<(), MessengerError> {
        self.sent.lock().push(Sent::Answer(callback_id.0.clone()));
        Ok(())
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        file_name: &str,
        _bytes: Vec<u8>,
        caption: &str,
        _keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), MessengerError> {
        self.sent.lock().push(Sent::Document {
            chat_id: chat_id.0,
            file_name: file_name.to_string(),
            caption: caption.to_string(),
        });
        Ok(())
    }
}

/// Renderer returning fixed bytes without invoking Typst.
pub struct StubRenderer;

impl DocumentRenderer for StubRenderer {
    fn render(&self, _job: &RenderJob) -> Result<Vec<u8>, GeneratorError> {
        Ok(PDF_BYTES.to_vec())
    }
}

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub artifacts: Arc<InMemoryArtifactStore>,
    pub messenger: Arc<RecordingMessenger>,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bot_token: Some("123456:TEST".to_string()),
        base_url: "https://docs.example.uz".to_string(),
        static_dir: PathBuf::from("/nonexistent/static"),
        ..AppConfig::default()
    }
}

/// State wired with in-memory stores, a stub renderer and a recording messenger.
pub fn setup(config: AppConfig) -> TestContext {
    let artifacts = Arc::new(InMemoryArtifactStore::new());
    let messenger = Arc::new(RecordingMessenger::default());
    let with_bot = config.bot_token.is_some();

    let state = AppState::with_parts(
        config,
        artifacts.clone(),
        Arc::new(InMemoryConversationStore::new()),
        Arc::new(StubRenderer),
        with_bot.then(|| messenger.clone() as Arc<dyn Messenger>),
    );

    TestContext {
        state: web::Data::new(state),
        artifacts,
        messenger,
    }
}

fn backend_down() -> StoreError {
    StoreError::Backend("connection refused".to_string())
}

/// Artifact store whose every call fails.
pub struct FailingArtifactStore;

#[async_trait]
impl ArtifactStore for FailingArtifactStore {
    async fn create_with_pin(&self, _pin: &str) -> Result<String, StoreError> {
        Err(backend_down())
    }

    async fn attach_bytes(&self, _token: &str, _bytes: Vec<u8>) -> Result<(), StoreError> {
        Err(backend_down())
    }

    async fn verify_pin(&self, _token: &str, _pin: &str) -> Result<bool, StoreError> {
        Err(backend_down())
    }

    async fn has_token(&self, _token: &str) -> Result<bool, StoreError> {
        Err(backend_down())
    }

    async fn get_bytes(&self, _token: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Err(backend_down())
    }
}

/// Conversation store whose every call fails.
pub struct FailingConversationStore;

#[async_trait]
impl ConversationStore for FailingConversationStore {
    async fn get(&self, _chat_id: i64) -> Result<ConversationMode, StoreError> {
        Err(backend_down())
    }

    async fn set(&self, _chat_id: i64, _mode: ConversationMode) -> Result<(), StoreError> {
        Err(backend_down())
    }
}

/// State over caller-supplied stores, with a recording messenger.
pub fn setup_with_stores(
    artifacts: Arc<dyn ArtifactStore>,
    conversations: Arc<dyn ConversationStore>,
) -> (web::Data<AppState>, Arc<RecordingMessenger>) {
    let messenger = Arc::new(RecordingMessenger::default());
    let state = AppState::with_parts(
        test_config(),
        artifacts,
        conversations,
        Arc::new(StubRenderer),
        Some(messenger.clone() as Arc<dyn Messenger>),
    );
    (web::Data::new(state), messenger)
}
