use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use super::models::{VerifyRequest, INVALID_PIN, MISSING_FIELDS, NOT_FOUND};
use super::page;
use crate::{ApiResponse, AppState};

#[utoipa::path(
    post,
    path = "/verify",
    tag = "Verification",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "PIN accepted (`fileUrl` set) or rejected (`INVALID_PIN`)", body = ApiResponse),
        (status = 400, description = "Token or PIN missing", body = ApiResponse),
        (status = 404, description = "Unknown token", body = ApiResponse),
        (status = 500, description = "Unreadable body or store failure", body = ApiResponse)
    )
)]
pub async fn verify(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let request: VerifyRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Unreadable verification request: {}", e);
            return HttpResponse::InternalServerError().json(ApiResponse::failure());
        }
    };

    let Some((token, pin)) = request.credentials() else {
        return HttpResponse::BadRequest().json(ApiResponse::error(MISSING_FIELDS));
    };
    log::info!("Verification attempt for token {}", token);

    match state.artifacts.has_token(token).await {
        Ok(true) => {}
        Ok(false) => return HttpResponse::NotFound().json(ApiResponse::error(NOT_FOUND)),
        Err(e) => {
            log::error!("Artifact lookup failed for token {}: {}", token, e);
            return HttpResponse::InternalServerError().json(ApiResponse::failure());
        }
    }

    match state.artifacts.verify_pin(token, pin).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::file(format!("/file/{}", token))),
        Ok(false) => {
            log::info!("Wrong PIN for token {}", token);
            HttpResponse::Ok().json(ApiResponse::error(INVALID_PIN))
        }
        Err(e) => {
            log::error!("PIN check failed for token {}: {}", token, e);
            HttpResponse::InternalServerError().json(ApiResponse::failure())
        }
    }
}

#[utoipa::path(
    get,
    path = "/file/{token}",
    tag = "Verification",
    params(
        ("token" = String, Path, description = "Artifact token")
    ),
    responses(
        (status = 200, description = "Rendered PDF", content_type = "application/pdf"),
        (status = 404, description = "Unknown token or document not rendered yet", body = String)
    )
)]
pub async fn get_file(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let token = path.into_inner();

    match state.artifacts.get_bytes(&token).await {
        Ok(Some(bytes)) => {
            log::info!("Serving document for token {} ({} bytes)", token, bytes.len());
            HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((header::CONTENT_DISPOSITION, "inline; filename=\"document.pdf\""))
                .insert_header((header::CACHE_CONTROL, "no-store"))
                .body(bytes)
        }
        Ok(None) => not_found(),
        Err(e) => {
            log::error!("Failed to load document for token {}: {}", token, e);
            not_found()
        }
    }
}

#[utoipa::path(
    get,
    path = "/verify/{token}",
    tag = "Verification",
    params(
        ("token" = String, Path, description = "Artifact token from the QR link")
    ),
    responses(
        (status = 200, description = "PIN entry page", content_type = "text/html"),
        (status = 404, description = "Malformed token", body = String)
    )
)]
pub async fn verify_page(path: web::Path<String>) -> impl Responder {
    let token = path.into_inner();
    match Uuid::parse_str(&token) {
        Ok(token) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page::render(&token.hyphenated().to_string())),
        Err(_) => not_found(),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("Not found")
}
