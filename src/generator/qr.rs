use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use super::GeneratorError;

const MIN_DIMENSION: u32 = 280;

/// SVG QR code for `data`, medium error correction, no quiet zone.
pub fn qr_svg(data: &str) -> Result<String, GeneratorError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
        .map_err(|e| GeneratorError::Qr(e.to_string()))?;

    Ok(code
        .render::<svg::Color<'_>>()
        .quiet_zone(false)
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build())
}
