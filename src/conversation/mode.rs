use serde::{Deserialize, Serialize};

/// What the bot expects next from a chat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationMode {
    #[default]
    Idle,
    AwaitNosudInput,
    /// Reserved; notary requests have no handler yet.
    AwaitNotaryInput,
    AwaitApostilleInput,
}

impl ConversationMode {
    /// Whether Nosud-shaped text may be processed as a Nosud submission in this mode.
    pub fn accepts_nosud_shortcut(self) -> bool {
        match self {
            ConversationMode::AwaitApostilleInput => false,
            ConversationMode::Idle
            | ConversationMode::AwaitNosudInput
            | ConversationMode::AwaitNotaryInput => true,
        }
    }
}
