//! Bot API webhook entry point.

pub mod handlers;

use actix_web::web;

/// Header carrying the secret configured with `setWebhook`.
pub const SECRET_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

pub const MISSING_BOT_TOKEN: &str = "Missing TELEGRAM_BOT_TOKEN";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/webhook")
            .route(web::post().to(handlers::receive_update))
            .route(web::get().to(handlers::health)),
    );
}
