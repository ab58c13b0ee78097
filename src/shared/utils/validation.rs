use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_not_blank(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_language_tag(field: &str, value: &str) -> Result<(), AppError> {
        Self::validate_not_blank(field, value)?;
        if !value.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err(AppError::ValidationError(format!(
                "{} must be a language tag such as 'ru', got '{}'",
                field, value
            )));
        }
        Ok(())
    }
}
