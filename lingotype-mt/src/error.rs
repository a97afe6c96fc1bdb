/// Error types for the translation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Transport-level failure (connect, timeout, TLS)
    NetworkError(String),
    /// The service answered but could not translate
    TranslationError(String),
    /// Provider misconfiguration (bad endpoint, bad client setup)
    ConfigError(String),
    /// Malformed language code
    InvalidLanguage(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::InvalidLanguage(msg) => write!(f, "Invalid language code: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        MtError::NetworkError(err.to_string())
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = MtError::NetworkError("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = MtError::InvalidLanguage("en@US".to_string());
        assert!(err.to_string().contains("en@US"));
    }
}
