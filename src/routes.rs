//! Route table shared by the server and integration tests.

use actix_web::web;

use crate::{verification, webhook};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(webhook::config)
        .configure(verification::config);
}
