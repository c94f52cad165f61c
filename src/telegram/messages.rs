//! User-facing chat texts.

pub const WELCOME: &str = "👋 Добро пожаловать в бот генерации документов!\n\nВыберите, пожалуйста, тип документа, который хотите сформировать:";

pub const NOSUD_PROMPT: &str = "📄Пожалуйста, введите через запятую следующие данные: Фамилия, Имя, Отчество, Дата рождения, ПИНФЛ\n\nПример: MARDIYEV, XUSEN, MANSUROVICH, 27.03.2000, 30109986180092";

pub const NOSUD_INVALID: &str = "⚠️Неверный формат. Введите все данные через запятую: Фамилия, Имя, Отчество, Дата рождения (ДД.ММ.ГГГГ), ПИНФЛ\n\nПример: MARDIYEV, XUSEN, MANSUROVICH, 27.03.2000, 30109986180092";

pub const APOSTILLE_PROMPT: &str = "📄Пожалуйста, введите через запятую следующие данные: Ф.И.О. лица, подписавшего документ, и название организации\n\nПример: Ulmasov Bakhtiyor Abrorovich, CENTER OF PUBLIC SERVICES OF TAILOK DISTRICT";

pub const APOSTILLE_INVALID: &str = "⚠️Неверный формат. Введите данные через запятую: Ф.И.О., Организация\n\nПример: Ulmasov Bakhtiyor Abrorovich, CENTER OF PUBLIC SERVICES OF TAILOK DISTRICT";

pub fn document_caption(pin: &str, verify_url: &str) -> String {
    format!("Документ сформирован. PIN: {}\nQR-ссылка: {}", pin, verify_url)
}

pub fn document_failure(reason: &str) -> String {
    format!("Ошибка при отправке документа: {}", reason)
}
