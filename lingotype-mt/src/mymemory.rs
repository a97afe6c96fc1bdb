//! MyMemory translation provider.
//!
//! Talks to the free MyMemory endpoint:
//! `GET https://api.mymemory.translated.net/get?q=<text>&langpair=<src>|<tgt>`.
//! The service reports its own status inside the JSON body
//! (`responseStatus`), independently of the HTTP status line; both must
//! indicate success before a translation is accepted.

use crate::error::{MtError, MtResult};
use crate::translator::{Translator, validate_lang_code};
use async_trait::async_trait;
use lingotype::lang::api_lang_code;

/// HTTP provider against the MyMemory translation API.
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    client: reqwest::Client,
    base_url: String,
}

impl MyMemoryProvider {
    /// Create a provider against the public endpoint.
    pub fn new() -> MtResult<Self> {
        Self::with_base_url("https://api.mymemory.translated.net/get".to_string())
    }

    /// Create a provider against a custom endpoint (tests, proxies).
    pub fn with_base_url(base_url: String) -> MtResult<Self> {
        if base_url.trim().is_empty() {
            return Err(MtError::ConfigError("base URL cannot be empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Pull the translated text out of a MyMemory response body.
    ///
    /// A body-level `responseStatus` other than 200 means the service
    /// declined the request even though the HTTP exchange succeeded.
    fn extract_translation(json: &serde_json::Value) -> MtResult<String> {
        if json["responseStatus"].as_i64() != Some(200) {
            return Err(MtError::TranslationError(format!(
                "service status {}",
                json["responseStatus"]
            )));
        }
        json["responseData"]["translatedText"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                MtError::TranslationError(
                    "invalid response: missing 'responseData.translatedText'".to_string(),
                )
            })
    }
}

#[async_trait]
impl Translator for MyMemoryProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> MtResult<String> {
        validate_lang_code(source_lang)?;
        validate_lang_code(target_lang)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let langpair = format!(
            "{}|{}",
            api_lang_code(source_lang),
            api_lang_code(target_lang)
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MtError::TranslationError(format!(
                "HTTP error {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| MtError::TranslationError(format!("failed to parse response: {}", e)))?;

        Self::extract_translation(&json)
    }

    fn provider_name(&self) -> &str {
        "MyMemory"
    }
}
