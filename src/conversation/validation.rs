//! Field-level validation for chat submissions.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref BIRTH_DATE: Regex =
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.(19|20)\d{2}$")
            .expect("birth date pattern is valid");
}

pub const PINFL_LEN: usize = 14;

/// Validation error with a user-friendly message.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message in Russian
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} не может быть пустым", label))
    }

    /// Create error for a submission with the wrong number of comma-separated values
    pub fn wrong_part_count(expected: usize, actual: usize) -> Self {
        Self::new(
            "input",
            format!("Ожидалось {} значений через запятую, получено {}", expected, actual),
        )
    }

    /// Create error for invalid birth date format
    pub fn invalid_birth_date(field: &str, value: &str) -> Self {
        Self::new(field, format!("Дата рождения '{}' указана неверно", value))
            .with_suggestion("Используйте формат ДД.ММ.ГГГГ, например: 27.03.2000")
    }

    /// Create error for invalid PINFL
    pub fn invalid_pinfl(field: &str) -> Self {
        Self::new(field, "ПИНФЛ должен состоять из 14 цифр")
            .with_suggestion("Пример: 30109986180092")
    }

    /// Create error for a full name given as a single word
    pub fn missing_surname(field: &str) -> Self {
        Self::new(field, "Укажите Ф.И.О. полностью, через пробел")
            .with_suggestion("Пример: Ulmasov Bakhtiyor Abrorovich")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Convert to Result - Ok if no errors, Err with the collected errors otherwise
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

/// Split a comma-separated submission, trimming parts and dropping empty ones.
pub fn split_parts(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// `DD.MM.YYYY` with day 01–31, month 01–12, year 19xx/20xx. No calendar check.
pub fn validate_birth_date(value: &str, field: &str, errors: &mut ValidationErrors) {
    if !BIRTH_DATE.is_match(value) {
        errors.add(ValidationError::invalid_birth_date(field, value));
    }
}

pub fn validate_pinfl(value: &str, field: &str, errors: &mut ValidationErrors) {
    if value.len() != PINFL_LEN || !value.chars().all(|c| c.is_ascii_digit()) {
        errors.add(ValidationError::invalid_pinfl(field));
    }
}

/// A full name needs at least one whitespace run between its words.
pub fn validate_full_name(value: &str, field: &str, errors: &mut ValidationErrors) {
    if !value.chars().any(char::is_whitespace) {
        errors.add(ValidationError::missing_surname(field));
    }
}
