use actix_web::middleware::Compress;
use actix_web::{web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod conversation;
pub mod generator;
pub mod routes;
pub mod state;
pub mod store;
pub mod telegram;
pub mod verification;
pub mod webhook;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

/// JSON body shared by the webhook and verification endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
            file_url: None,
        }
    }

    pub fn failure() -> Self {
        Self {
            ok: false,
            error: None,
            file_url: None,
        }
    }

    pub fn error(code: &str) -> Self {
        Self {
            error: Some(code.to_string()),
            ..Self::failure()
        }
    }

    pub fn file(url: String) -> Self {
        Self {
            file_url: Some(url),
            ..Self::success()
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::webhook::handlers::receive_update,
        crate::webhook::handlers::health,
        crate::verification::handlers::verify,
        crate::verification::handlers::verify_page,
        crate::verification::handlers::get_file
    ),
    components(
        schemas(
            ApiResponse,
            verification::models::VerifyRequest,
        )
    ),
    tags(
        (name = "Webhook", description = "Bot API update intake."),
        (name = "Verification", description = "PIN-gated document access.")
    )
)]
pub struct ApiDoc;

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let bind = (config.bind_address.clone(), config.port);
    log::info!(
        "Using base URL {} and static assets from {}",
        config.base_url,
        config.static_dir.display()
    );

    let app_state = web::Data::new(AppState::new(config));

    let prometheus = PrometheusMetricsBuilder::new("spravka_bot")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create Prometheus metrics middleware: {}", e))?;

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .app_data(app_state.clone())
            .configure(routes::config)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
