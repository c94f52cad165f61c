mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use std::sync::Arc;

use common::{
    setup, setup_with_stores, test_config, FailingArtifactStore, FailingConversationStore, Sent,
    PDF_BYTES,
};
use spravka_bot::store::InMemoryConversationStore;
use spravka_bot::routes;
use spravka_bot::telegram::messages::{NOSUD_PROMPT, WELCOME};
use spravka_bot::AppConfig;

const CHAT: i64 = 777;

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data($ctx.state.clone())
                .configure(routes::config),
        )
        .await
    };
}

fn text_update(update_id: u32, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 1_700_000_000,
            "chat": { "id": CHAT, "type": "private", "first_name": "Ivan" },
            "from": { "id": CHAT, "is_bot": false, "first_name": "Ivan" },
            "text": text
        }
    })
}

fn button_update(update_id: u32, data: &str) -> Value {
    json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("cb-{}", update_id),
            "from": { "id": CHAT, "is_bot": false, "first_name": "Ivan" },
            "chat_instance": "instance-1",
            "data": data,
            "message": {
                "message_id": 1,
                "date": 1_700_000_000,
                "chat": { "id": CHAT, "type": "private", "first_name": "Ivan" },
                "from": { "id": 1, "is_bot": true, "first_name": "Spravka", "username": "spravka_bot" },
                "text": "menu"
            }
        }
    })
}

#[actix_web::test]
async fn test_health_probe() {
    let ctx = setup(test_config());
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/webhook").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));
}

#[actix_web::test]
async fn test_secret_mismatch_is_forbidden() {
    let ctx = setup(AppConfig {
        webhook_secret: Some("s3cret".to_string()),
        ..test_config()
    });
    let app = init_app!(ctx);

    for header in [None, Some("wrong")] {
        let mut req = test::TestRequest::post()
            .uri("/webhook")
            .set_json(text_update(1, "/start"));
        if let Some(value) = header {
            req = req.insert_header(("X-Telegram-Bot-Api-Secret-Token", value));
        }
        let resp = test::call_service(&app, req.to_request()).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"Forbidden");
    }
    assert!(ctx.messenger.sent().is_empty());

    let req = test::TestRequest::post()
        .uri("/webhook")
        .insert_header(("X-Telegram-Bot-Api-Secret-Token", "s3cret"))
        .set_json(text_update(2, "/start"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_missing_bot_token_is_server_error() {
    let ctx = setup(AppConfig {
        bot_token: None,
        ..test_config()
    });
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(text_update(1, "/start"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "ok": false, "error": "Missing TELEGRAM_BOT_TOKEN" })
    );
}

#[actix_web::test]
async fn test_undecodable_update_reports_failure() {
    let ctx = setup(test_config());
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_payload("not an update")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": false }));
}

#[actix_web::test]
async fn test_start_sends_welcome() {
    let ctx = setup(test_config());
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(text_update(1, "/start"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));
    assert_eq!(
        ctx.messenger.sent(),
        vec![Sent::Message {
            chat_id: CHAT,
            text: WELCOME.to_string()
        }]
    );
}

#[actix_web::test]
async fn test_nosud_flow_from_button_to_download() {
    let ctx = setup(test_config());
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(button_update(1, "MENU_NOSUD"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        ctx.messenger.sent(),
        vec![
            Sent::Message {
                chat_id: CHAT,
                text: NOSUD_PROMPT.to_string()
            },
            Sent::Answer("cb-1".to_string()),
        ]
    );

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(text_update(
            2,
            "IVANOV, IVAN, IVANOVICH, 15.05.1990, 12345678901234",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let captions = ctx.messenger.captions();
    assert_eq!(captions.len(), 1);
    let (pin_line, url_line) = captions[0].split_once('\n').unwrap();
    let pin = pin_line
        .strip_prefix("Документ сформирован. PIN: ")
        .unwrap()
        .to_string();
    let token = url_line
        .strip_prefix("QR-ссылка: https://docs.example.uz/verify/")
        .unwrap()
        .to_string();
    assert_eq!(pin.len(), 6);

    let req = test::TestRequest::post()
        .uri("/verify")
        .set_json(json!({ "token": token, "pin": pin }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let file_url = body["fileUrl"].as_str().unwrap().to_string();
    assert_eq!(file_url, format!("/file/{}", token));

    let req = test::TestRequest::get().uri(&file_url).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = test::read_body(resp).await;
    assert_eq!(bytes.as_ref(), PDF_BYTES);
}

#[actix_web::test]
async fn test_conversation_store_failure_reports_not_ok() {
    let (state, messenger) = setup_with_stores(
        Arc::new(FailingArtifactStore),
        Arc::new(FailingConversationStore),
    );
    let app = test::init_service(App::new().app_data(state).configure(routes::config)).await;

    for update in [text_update(1, "hello"), text_update(2, "/start"), button_update(3, "MENU_NOSUD")] {
        let req = test::TestRequest::post()
            .uri("/webhook")
            .set_json(update)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "ok": false }));
    }
    assert!(messenger.sent().contains(&Sent::Answer("cb-3".to_string())));
}

#[actix_web::test]
async fn test_artifact_store_failure_is_reported_in_chat() {
    let (state, messenger) = setup_with_stores(
        Arc::new(FailingArtifactStore),
        Arc::new(InMemoryConversationStore::new()),
    );
    let app = test::init_service(App::new().app_data(state).configure(routes::config)).await;

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(text_update(
            1,
            "IVANOV, IVAN, IVANOVICH, 15.05.1990, 12345678901234",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));
    assert_eq!(
        messenger.sent(),
        vec![Sent::Message {
            chat_id: CHAT,
            text: "Ошибка при отправке документа: artifact store failed: store backend unavailable: connection refused".to_string()
        }]
    );
}
