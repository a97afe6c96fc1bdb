//! Mock translator for tests and offline development.
//!
//! Deterministic, API-free translation so the scheduler and front ends can
//! be exercised without network access.
//!
//! # Example
//!
//! ```ignore
//! use lingotype_mt::{MockMode, MockTranslator, Translator};
//!
//! let mock = MockTranslator::new(MockMode::Suffix);
//! let result = mock.translate("hello", "en-US", "fr-FR").await.unwrap();
//! assert_eq!(result, "hello_fr-FR");
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::Translator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock translation modes for different test scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target tag: "hello" → "hello_fr-FR"
    Suffix,

    /// Predefined mappings: (text, target_lang) → translation,
    /// falling back to suffix mode for unknown pairs
    Mappings(HashMap<(String, String), String>),

    /// Simulate a failing service
    Error(String),

    /// Return the input unchanged
    NoOp,
}

/// Deterministic translator simulating various backend behaviors.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Simulated network delay in milliseconds
    delay_ms: u64,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Mock with a simulated per-request delay, for testing in-flight
    /// supersession.
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    fn apply(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        self.apply(text, target_lang)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_mode() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", "en-US", "fr-FR").await.unwrap();
        assert_eq!(result, "hello_fr-FR");
    }

    #[tokio::test]
    async fn test_mapping_mode() {
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), "fr-FR".to_string()),
            "bonjour".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));

        assert_eq!(
            mock.translate("hello", "en-US", "fr-FR").await.unwrap(),
            "bonjour"
        );
        // Unknown pairs fall back to suffix mode.
        assert_eq!(
            mock.translate("unknown", "en-US", "fr-FR").await.unwrap(),
            "unknown_fr-FR"
        );
    }

    #[tokio::test]
    async fn test_error_mode() {
        let mock = MockTranslator::new(MockMode::Error("service down".to_string()));
        match mock.translate("hello", "en-US", "fr-FR").await {
            Err(MtError::TranslationError(msg)) => assert_eq!(msg, "service down"),
            other => panic!("expected TranslationError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_noop_mode() {
        let mock = MockTranslator::new(MockMode::NoOp);
        assert_eq!(
            mock.translate("unchanged", "en-US", "fr-FR").await.unwrap(),
            "unchanged"
        );
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
