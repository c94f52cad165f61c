//! Template background and font lookup.
//!
//! Each asset kind has an ordered candidate list; the first readable file
//! wins and a missing asset degrades instead of failing the render.

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::RenderAsset;

pub const TEMPLATES_DIR: &str = "templates";
pub const FONTS_DIR: &str = "fonts";

/// Template backgrounds, tried in order.
pub const TEMPLATE_CANDIDATES: &[&str] = &["first.pdf", "first.png", "first.svg"];

pub struct FontCandidate {
    pub file_name: &'static str,
    pub family: &'static str,
}

/// Unicode fonts with Cyrillic coverage, tried in order.
pub const FONT_CANDIDATES: &[FontCandidate] = &[
    FontCandidate {
        file_name: "NotoSans-Regular.ttf",
        family: "Noto Sans",
    },
    FontCandidate {
        file_name: "DejaVuSans.ttf",
        family: "DejaVu Sans",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub enum FontSelection {
    Unicode { family: String, dir: PathBuf },
    /// Built-in renderer font; text outside Latin-1 is replaced.
    Fallback,
}

impl FontSelection {
    pub fn is_unicode(&self) -> bool {
        matches!(self, FontSelection::Unicode { .. })
    }
}

/// First readable template background under `<static_dir>/templates`.
pub fn load_template(static_dir: &Path) -> Option<RenderAsset> {
    let dir = static_dir.join(TEMPLATES_DIR);
    TEMPLATE_CANDIDATES.iter().find_map(|file_name| {
        let path = dir.join(file_name);
        match fs::read(&path) {
            Ok(bytes) => {
                log::debug!("Using template background {}", path.display());
                Some(RenderAsset {
                    file_name: (*file_name).to_string(),
                    bytes,
                })
            }
            Err(e) => {
                log::debug!("Template candidate {} unavailable: {}", path.display(), e);
                None
            }
        }
    })
}

/// First readable Unicode font under `<static_dir>/fonts`, else the fallback.
pub fn select_font(static_dir: &Path) -> FontSelection {
    let dir = static_dir.join(FONTS_DIR);
    for candidate in FONT_CANDIDATES {
        let path = dir.join(candidate.file_name);
        match fs::File::open(&path) {
            Ok(_) => {
                log::debug!("Using font {} from {}", candidate.family, path.display());
                return FontSelection::Unicode {
                    family: candidate.family.to_string(),
                    dir,
                };
            }
            Err(e) => log::debug!("Font candidate {} unavailable: {}", path.display(), e),
        }
    }

    log::warn!("No Unicode font found in {}; Cyrillic text will be replaced", dir.display());
    FontSelection::Fallback
}
