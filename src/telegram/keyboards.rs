use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Inline button actions, identified by their callback payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Nosud,
    Notary,
    Apostille,
    BackToMenu,
}

impl MenuAction {
    pub fn callback_data(self) -> &'static str {
        match self {
            MenuAction::Nosud => "MENU_NOSUD",
            MenuAction::Notary => "MENU_NOTARY",
            MenuAction::Apostille => "MENU_APOSTILLE",
            MenuAction::BackToMenu => "BACK_TO_MENU",
        }
    }

    pub fn from_callback_data(data: &str) -> Option<Self> {
        match data {
            "MENU_NOSUD" => Some(MenuAction::Nosud),
            "MENU_NOTARY" => Some(MenuAction::Notary),
            "MENU_APOSTILLE" => Some(MenuAction::Apostille),
            "BACK_TO_MENU" => Some(MenuAction::BackToMenu),
            _ => None,
        }
    }
}

pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "1️⃣Справка о несудимости",
            MenuAction::Nosud.callback_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "2️⃣Нотариус",
            MenuAction::Notary.callback_data(),
        )],
        vec![InlineKeyboardButton::callback(
            "3️⃣Апостиль",
            MenuAction::Apostille.callback_data(),
        )],
    ])
}

pub fn back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "🔙Назад",
        MenuAction::BackToMenu.callback_data(),
    )]])
}
