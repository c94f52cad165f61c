//! Renderer seam between document layout and the PDF backend.

use std::path::PathBuf;

use super::GeneratorError;

/// A file placed next to the Typst source before compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderAsset {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything a renderer needs to produce one PDF.
#[derive(Debug, Clone, Default)]
pub struct RenderJob {
    pub source: String,
    pub assets: Vec<RenderAsset>,
    /// Extra font directory; `None` leaves the renderer on its built-in fonts.
    pub font_dir: Option<PathBuf>,
}

/// Turns a [`RenderJob`] into PDF bytes. Implementations may block.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, job: &RenderJob) -> Result<Vec<u8>, GeneratorError>;
}
