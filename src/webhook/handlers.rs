use actix_web::{web, HttpRequest, HttpResponse, Responder};
use teloxide::types::Update;

use super::{MISSING_BOT_TOKEN, SECRET_HEADER};
use crate::telegram::ChatEvent;
use crate::{ApiResponse, AppState};

#[utoipa::path(
    post,
    path = "/webhook",
    tag = "Webhook",
    request_body(content = String, description = "Bot API `Update` object", content_type = "application/json"),
    params(
        ("X-Telegram-Bot-Api-Secret-Token" = Option<String>, Header, description = "Webhook secret, checked when configured")
    ),
    responses(
        (status = 200, description = "Update consumed; `ok` is false when processing failed", body = ApiResponse),
        (status = 403, description = "Secret mismatch", body = String),
        (status = 500, description = "Bot token not configured", body = ApiResponse)
    )
)]
pub async fn receive_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    if let Some(secret) = state.config.webhook_secret.as_deref() {
        let provided = req
            .headers()
            .get(SECRET_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(secret) {
            log::warn!("Rejected webhook call with a wrong or missing secret");
            return HttpResponse::Forbidden().body("Forbidden");
        }
    }

    let Some(controller) = state.controller.as_ref() else {
        log::error!("Webhook called but TELEGRAM_BOT_TOKEN is not configured");
        return HttpResponse::InternalServerError().json(ApiResponse::error(MISSING_BOT_TOKEN));
    };

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            log::warn!("Failed to decode webhook update: {}", e);
            return HttpResponse::Ok().json(ApiResponse::failure());
        }
    };
    log::debug!("Received update {:?}", update.id);

    let Some(event) = ChatEvent::from_update(update) else {
        log::debug!("Ignoring update without text or button press");
        return HttpResponse::Ok().json(ApiResponse::success());
    };

    match controller.handle(event).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(e) => {
            log::error!("Failed to process webhook update: {}", e);
            HttpResponse::Ok().json(ApiResponse::failure())
        }
    }
}

#[utoipa::path(
    get,
    path = "/webhook",
    tag = "Webhook",
    responses(
        (status = 200, description = "Health probe", body = ApiResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success())
}
