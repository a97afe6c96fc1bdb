//! Translation provider trait and language-code helpers.
//!
//! The trait abstracts over translation backends (the MyMemory HTTP
//! provider, the deterministic mock) so the scheduler and the front ends
//! never couple to a specific service.

use crate::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for translation providers.
///
/// All methods are async to support network-backed implementations.
///
/// # Example
///
/// ```ignore
/// use lingotype_mt::{MyMemoryProvider, Translator};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = MyMemoryProvider::new()?;
///     let result = provider.translate("Hello", "en-US", "fr-FR").await?;
///     println!("{}", result);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` between the given BCP 47 tags.
    ///
    /// Implementations derive the wire-level codes themselves (see
    /// [`lingotype::lang::api_lang_code`]); callers pass UI tags.
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
    -> MtResult<String>;

    /// Provider name for logging and diagnostics.
    fn provider_name(&self) -> &str;
}

/// Validate that a language tag is plausibly a BCP 47 code: non-empty,
/// with only alphanumerics, hyphens, and underscores.
pub fn validate_lang_code(tag: &str) -> MtResult<()> {
    if tag.is_empty() {
        return Err(MtError::InvalidLanguage("language code is empty".to_string()));
    }
    if !tag
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLanguage(format!(
            "invalid characters in language code: {}",
            tag
        )));
    }
    Ok(())
}
