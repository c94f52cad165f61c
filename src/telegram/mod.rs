//! Telegram transport: outbound messenger, keyboards, texts and update decoding.

pub mod bot;
pub mod keyboards;
pub mod messages;
pub mod messenger;
pub mod update;

pub use bot::TelegramMessenger;
pub use keyboards::{back_keyboard, main_menu_keyboard, MenuAction};
pub use messenger::{Messenger, MessengerError};
pub use update::ChatEvent;
