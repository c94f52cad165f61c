//! Typst rendering engine.
//!
//! Writes the Typst source and its assets to a temporary directory, invokes
//! the compiler and reads back the output PDF.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use tempfile::TempDir;

use super::traits::{DocumentRenderer, RenderJob};
use super::GeneratorError;

const SOURCE_FILE: &str = "document.typ";
const OUTPUT_FILE: &str = "document.pdf";

/// Renderer shelling out to the `typst` binary.
pub struct TypstRenderEngine {
    typst_bin: String,
}

impl TypstRenderEngine {
    pub fn new(typst_bin: impl Into<String>) -> Self {
        Self {
            typst_bin: typst_bin.into(),
        }
    }
}

impl DocumentRenderer for TypstRenderEngine {
    fn render(&self, job: &RenderJob) -> Result<Vec<u8>, GeneratorError> {
        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;

        fs::write(temp_dir.path().join(SOURCE_FILE), &job.source)
            .map_err(GeneratorError::WriteSource)?;
        for asset in &job.assets {
            fs::write(temp_dir.path().join(&asset.file_name), &asset.bytes)
                .map_err(GeneratorError::WriteAsset)?;
        }

        compile_typst_to_pdf(&self.typst_bin, &temp_dir, job.font_dir.as_deref())
    }
}

/// Compile the staged source to PDF.
fn compile_typst_to_pdf(
    typst_bin: &str,
    temp_dir: &TempDir,
    font_dir: Option<&Path>,
) -> Result<Vec<u8>, GeneratorError> {
    let output_path = temp_dir.path().join(OUTPUT_FILE);

    let mut command = Command::new(typst_bin);
    command.arg("compile");
    if let Some(font_dir) = font_dir {
        command.arg("--font-path").arg(font_dir);
    }
    command
        .arg(SOURCE_FILE)
        .arg(OUTPUT_FILE)
        .current_dir(temp_dir.path());

    log::debug!("Running {:?}", command);
    let status = command.status().map_err(GeneratorError::TypstIo)?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(GeneratorError::TypstExit(code));
    }

    fs::read(&output_path).map_err(GeneratorError::ReadPdf)
}
