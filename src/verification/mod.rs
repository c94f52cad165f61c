//! PIN-gated access to issued documents.

pub mod handlers;
pub mod models;
pub mod page;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/verify")
            .route(web::post().to(handlers::verify)),
    )
    .service(
        web::resource("/verify/{token}")
            .route(web::get().to(handlers::verify_page)),
    )
    .service(
        web::resource("/file/{token}")
            .route(web::get().to(handlers::get_file)),
    );
}
