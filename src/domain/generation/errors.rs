//! Generation Context - Errors
//!
//! 错误信息会原样透传到 HTTP 响应，文案与前端约定保持固定

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Text content is required")]
    EmptyText,

    #[error("Unsupported model")]
    UnsupportedModel,

    #[error("Speed must be between 0.5 and 2.0")]
    SpeedOutOfRange,

    #[error("Temperature must be between 0.1 and 1.0")]
    TemperatureOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_verbatim() {
        assert_eq!(
            GenerationError::EmptyText.to_string(),
            "Text content is required"
        );
        assert_eq!(
            GenerationError::UnsupportedModel.to_string(),
            "Unsupported model"
        );
        assert_eq!(
            GenerationError::SpeedOutOfRange.to_string(),
            "Speed must be between 0.5 and 2.0"
        );
        assert_eq!(
            GenerationError::TemperatureOutOfRange.to_string(),
            "Temperature must be between 0.1 and 1.0"
        );
    }
}
