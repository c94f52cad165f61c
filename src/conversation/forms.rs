//! Comma-separated chat submissions and their parsed shapes.

use serde::{Deserialize, Serialize};

use super::validation::{
    split_parts, validate_birth_date, validate_full_name, validate_pinfl, validate_required,
    ValidationError, ValidationErrors,
};

const NOSUD_FIELDS: usize = 5;
const APOSTILLE_FIELDS: usize = 2;

/// Data for a certificate of no criminal record:
/// `LASTNAME, FIRSTNAME, MIDDLENAME, DD.MM.YYYY, PINFL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NosudInput {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: String,
    pub pinfl: String,
}

impl NosudInput {
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
    }
}

/// Apostille request: `Full Name, Organization`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApostilleInput {
    pub full_name: String,
    pub organization: String,
}

pub fn parse_nosud(text: &str) -> Result<NosudInput, ValidationErrors> {
    let parts = split_parts(text);
    if parts.len() != NOSUD_FIELDS {
        return Err(ValidationError::wrong_part_count(NOSUD_FIELDS, parts.len()).into());
    }

    let input = NosudInput {
        last_name: parts[0].to_string(),
        first_name: parts[1].to_string(),
        middle_name: parts[2].to_string(),
        birth_date: parts[3].to_string(),
        pinfl: parts[4].to_string(),
    };

    let mut errors = ValidationErrors::new();
    validate_required(&input.last_name, "last_name", "Фамилия", &mut errors);
    validate_required(&input.first_name, "first_name", "Имя", &mut errors);
    validate_required(&input.middle_name, "middle_name", "Отчество", &mut errors);
    validate_birth_date(&input.birth_date, "birth_date", &mut errors);
    validate_pinfl(&input.pinfl, "pinfl", &mut errors);
    errors.into_result()?;

    Ok(input)
}

pub fn parse_apostille(text: &str) -> Result<ApostilleInput, ValidationErrors> {
    let parts = split_parts(text);
    if parts.len() != APOSTILLE_FIELDS {
        return Err(ValidationError::wrong_part_count(APOSTILLE_FIELDS, parts.len()).into());
    }

    let input = ApostilleInput {
        full_name: parts[0].to_string(),
        organization: parts[1].to_string(),
    };

    let mut errors = ValidationErrors::new();
    validate_required(&input.organization, "organization", "Организация", &mut errors);
    validate_full_name(&input.full_name, "full_name", &mut errors);
    errors.into_result()?;

    Ok(input)
}

pub fn validate_nosud(text: &str) -> bool {
    parse_nosud(text).is_ok()
}

pub fn validate_apostille(text: &str) -> bool {
    parse_apostille(text).is_ok()
}
