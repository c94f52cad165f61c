use std::sync::Arc;

use crate::config::AppConfig;
use crate::conversation::ConversationController;
use crate::generator::{DocumentRenderer, NosudGenerator, TypstRenderEngine};
use crate::store::{
    ArtifactStore, ConversationStore, InMemoryArtifactStore, InMemoryConversationStore,
};
use crate::telegram::{Messenger, TelegramMessenger};

/// Shared handler state, built once at start-up.
pub struct AppState {
    pub config: AppConfig,
    pub artifacts: Arc<dyn ArtifactStore>,
    /// Absent when no bot token is configured; the webhook then refuses updates.
    pub controller: Option<Arc<ConversationController>>,
}

impl AppState {
    /// In-memory stores, the Typst CLI renderer and the Bot API messenger.
    pub fn new(config: AppConfig) -> Self {
        let renderer = Arc::new(TypstRenderEngine::new(config.typst_bin.clone()));
        let messenger = config
            .bot_token
            .as_deref()
            .map(|token| Arc::new(TelegramMessenger::new(token)) as Arc<dyn Messenger>);
        if messenger.is_none() {
            log::warn!("TELEGRAM_BOT_TOKEN is not set; webhook updates will be rejected");
        }

        Self::with_parts(
            config,
            Arc::new(InMemoryArtifactStore::new()),
            Arc::new(InMemoryConversationStore::new()),
            renderer,
            messenger,
        )
    }

    pub fn with_parts(
        config: AppConfig,
        artifacts: Arc<dyn ArtifactStore>,
        conversations: Arc<dyn ConversationStore>,
        renderer: Arc<dyn DocumentRenderer>,
        messenger: Option<Arc<dyn Messenger>>,
    ) -> Self {
        let generator = Arc::new(NosudGenerator::new(&config, artifacts.clone(), renderer));
        let controller = messenger.map(|messenger| {
            Arc::new(ConversationController::new(conversations, generator, messenger))
        });

        Self {
            config,
            artifacts,
            controller,
        }
    }
}
