use serde::Serialize;
use thiserror::Error;

/// Errors surfaced at construction and decoding boundaries.
///
/// Normalization itself never fails: malformed fields degrade to absent values
/// instead of producing one of these.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            AppError::InvalidInput(format!("Malformed JSON payload: {}", err))
        } else {
            AppError::SerializationError(err.to_string())
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_syntax_error_maps_to_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::InvalidInput(_)));
    }

    #[test]
    fn test_json_shape_error_maps_to_serialization_error() {
        let err = serde_json::from_str::<Vec<u32>>(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(
            AppError::from(err),
            AppError::SerializationError(_)
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(AppError::ValidationError("blank".into())).unwrap();
        assert_eq!(json["type"], "ValidationError");
        assert_eq!(json["message"], "blank");
    }
}
