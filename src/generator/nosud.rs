//! Generator for the certificate of no criminal record ("справка о несудимости").
//!
//! The token is registered with its PIN before rendering starts, so the
//! verification link works even while the PDF is still being produced.

use actix_web::web;
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;

use super::assets::{load_template, select_font, FontSelection};
use super::common::{generate_ids, generate_pin, pick_business_date};
use super::layout::{NosudLayout, QR_FILE};
use super::qr::qr_svg;
use super::traits::{DocumentRenderer, RenderAsset, RenderJob};
use super::{GeneratedDocument, GeneratorError};
use crate::config::AppConfig;
use crate::conversation::NosudInput;
use crate::store::ArtifactStore;

pub struct NosudGenerator {
    artifacts: Arc<dyn ArtifactStore>,
    renderer: Arc<dyn DocumentRenderer>,
    base_url: String,
    admin_info: Option<String>,
    static_dir: PathBuf,
}

impl NosudGenerator {
    pub fn new(
        config: &AppConfig,
        artifacts: Arc<dyn ArtifactStore>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Self {
        Self {
            artifacts,
            renderer,
            base_url: config.base_url.clone(),
            admin_info: config.admin_info.clone(),
            static_dir: config.static_dir.clone(),
        }
    }

    pub async fn generate(&self, input: &NosudInput) -> Result<GeneratedDocument, GeneratorError> {
        let today = Local::now().date_naive();
        let (pin, doc_id, serial_no, generated_at) = {
            let mut rng = rand::thread_rng();
            let pin = generate_pin(&mut rng);
            let (doc_id, serial_no) = generate_ids(today, &mut rng);
            let generated_at = pick_business_date(today, &mut rng);
            (pin, doc_id, serial_no, generated_at)
        };

        let token = self.artifacts.create_with_pin(&pin).await?;
        let verify_url = format!("{}/verify/{}", self.base_url, token);
        log::info!("Rendering document {} for token {}", doc_id, token);

        let layout = NosudLayout {
            input,
            doc_id: &doc_id,
            serial_no: &serial_no,
            generated_at: &generated_at,
            admin_info: self.admin_info.as_deref(),
            pin: &pin,
            verify_url: &verify_url,
        };
        let qr = qr_svg(&verify_url)?;
        let job = self.prepare_job(&layout, qr);

        let renderer = Arc::clone(&self.renderer);
        let bytes = web::block(move || renderer.render(&job))
            .await
            .map_err(|e| GeneratorError::Blocking(e.to_string()))??;

        self.artifacts.attach_bytes(&token, bytes.clone()).await?;
        log::info!("Document {} stored ({} bytes)", doc_id, bytes.len());

        Ok(GeneratedDocument {
            token,
            pin,
            bytes,
            file_name: format!("NOSUD_{}.pdf", doc_id),
            verify_url,
            generated_at,
            doc_id,
            serial_no,
        })
    }

    fn prepare_job(&self, layout: &NosudLayout<'_>, qr: String) -> RenderJob {
        let template = load_template(&self.static_dir);
        let font = select_font(&self.static_dir);

        let source = layout.to_typst(template.as_ref().map(|t| t.file_name.as_str()), &font);

        let mut assets = vec![RenderAsset {
            file_name: QR_FILE.to_string(),
            bytes: qr.into_bytes(),
        }];
        assets.extend(template);

        let font_dir = match font {
            FontSelection::Unicode { dir, .. } => Some(dir),
            FontSelection::Fallback => None,
        };

        RenderJob {
            source,
            assets,
            font_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryArtifactStore;
    use parking_lot::Mutex;

    /// Records jobs and returns a fixed payload.
    #[derive(Default)]
    struct StubRenderer {
        jobs: Mutex<Vec<RenderJob>>,
    }

    impl DocumentRenderer for StubRenderer {
        fn render(&self, job: &RenderJob) -> Result<Vec<u8>, GeneratorError> {
            self.jobs.lock().push(job.clone());
            Ok(b"%PDF-stub".to_vec())
        }
    }

    struct FailingRenderer;

    impl DocumentRenderer for FailingRenderer {
        fn render(&self, _job: &RenderJob) -> Result<Vec<u8>, GeneratorError> {
            Err(GeneratorError::TypstExit(1))
        }
    }

    fn input() -> NosudInput {
        NosudInput {
            last_name: "IVANOV".to_string(),
            first_name: "IVAN".to_string(),
            middle_name: "IVANOVICH".to_string(),
            birth_date: "15.05.1990".to_string(),
            pinfl: "12345678901234".to_string(),
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            base_url: "https://docs.example.uz".to_string(),
            static_dir: PathBuf::from("/nonexistent/static"),
            ..AppConfig::default()
        }
    }

    #[actix_web::test]
    async fn test_generate_registers_token_pin_and_bytes() {
        let store = Arc::new(InMemoryArtifactStore::new());
        let renderer = Arc::new(StubRenderer::default());
        let generator = NosudGenerator::new(&config(), store.clone(), renderer.clone());

        let doc = generator.generate(&input()).await.unwrap();

        assert_eq!(doc.pin.len(), 6);
        assert_eq!(doc.verify_url, format!("https://docs.example.uz/verify/{}", doc.token));
        assert_eq!(doc.file_name, format!("NOSUD_{}.pdf", doc.doc_id));
        assert!(store.verify_pin(&doc.token, &doc.pin).await.unwrap());
        assert_eq!(store.get_bytes(&doc.token).await.unwrap(), Some(b"%PDF-stub".to_vec()));

        let jobs = renderer.jobs.lock();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].assets[0].file_name, QR_FILE);
        assert_eq!(jobs[0].font_dir, None);
        assert!(jobs[0].source.contains("IVANOV IVAN IVANOVICH"));
    }

    #[actix_web::test]
    async fn test_identical_input_yields_distinct_tokens() {
        let store = Arc::new(InMemoryArtifactStore::new());
        let generator = NosudGenerator::new(&config(), store.clone(), Arc::new(StubRenderer::default()));

        let first = generator.generate(&input()).await.unwrap();
        let second = generator.generate(&input()).await.unwrap();

        assert_ne!(first.token, second.token);
        assert_ne!(first.doc_id, second.doc_id);
    }

    #[actix_web::test]
    async fn test_render_failure_leaves_token_without_bytes() {
        let store = Arc::new(InMemoryArtifactStore::new());
        let generator = NosudGenerator::new(&config(), store.clone(), Arc::new(FailingRenderer));

        let err = generator.generate(&input()).await.unwrap_err();

        assert!(matches!(err, GeneratorError::TypstExit(1)));
        assert_eq!(store.len(), 1);
    }
}
