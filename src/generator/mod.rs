//! Generators module - business logic for rendering issued documents to PDF.
//!
//! - `nosud` - certificate of no criminal record, the only generated document
//! - `layout` - Typst markup for the certificate overlay
//! - `assets` - template background and font fallback chains
//! - `engine` - Typst CLI renderer

pub mod assets;
pub mod common;
pub mod engine;
pub mod layout;
pub mod nosud;
pub mod qr;
pub mod traits;

pub use engine::TypstRenderEngine;
pub use nosud::NosudGenerator;
pub use traits::{DocumentRenderer, RenderAsset, RenderJob};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("failed to write render asset: {0}")]
    WriteAsset(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
    #[error("failed to encode QR code: {0}")]
    Qr(String),
    #[error("rendering task was cancelled: {0}")]
    Blocking(String),
    #[error("artifact store failed: {0}")]
    Store(#[from] StoreError),
}

/// Result of a successful generation, already registered in the artifact store.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub token: String,
    pub pin: String,
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub verify_url: String,
    pub generated_at: NaiveDateTime,
    pub doc_id: String,
    pub serial_no: String,
}
