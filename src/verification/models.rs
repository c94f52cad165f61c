use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MISSING_FIELDS: &str = "MISSING_FIELDS";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INVALID_PIN: &str = "INVALID_PIN";

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct VerifyRequest {
    #[schema(example = "6f1c2d3e-4a5b-4c6d-8e7f-901234567890")]
    pub token: Option<String>,
    #[schema(example = "042042")]
    pub pin: Option<String>,
}

impl VerifyRequest {
    /// Token and PIN, when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        let pin = self.pin.as_deref().filter(|p| !p.is_empty())?;
        Some((token, pin))
    }
}
