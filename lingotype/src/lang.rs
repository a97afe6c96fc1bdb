//! Language table and language-code normalization.

/// A selectable language: BCP 47 tag plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered by the practice UI, in menu order.
pub const LANGUAGES: [Language; 13] = [
    Language { code: "en-US", name: "English" },
    Language { code: "zh-TW", name: "繁體中文" },
    Language { code: "ja-JP", name: "日本語" },
    Language { code: "ko-KR", name: "한국어" },
    Language { code: "vi-VN", name: "Tiếng Việt" },
    Language { code: "id-ID", name: "Bahasa Indonesia" },
    Language { code: "hi-IN", name: "हिन्दी (Hindi)" },
    Language { code: "pt-PT", name: "Português" },
    Language { code: "ar-SA", name: "العربية" },
    Language { code: "de-DE", name: "Deutsch" },
    Language { code: "ru-RU", name: "Русский" },
    Language { code: "es-ES", name: "Español" },
    Language { code: "fr-FR", name: "Français" },
];

/// The primary language subtag of a BCP 47 tag (`"en"` from `"en-US"`).
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Language code as the translation API expects it.
///
/// The primary subtag, lowercased. The exception is `zh-TW`, which the
/// API distinguishes from other Chinese variants and which is passed
/// through unchanged.
///
/// # Example
///
/// ```
/// use lingotype::lang::api_lang_code;
///
/// assert_eq!(api_lang_code("en-US"), "en");
/// assert_eq!(api_lang_code("zh-TW"), "zh-TW");
/// ```
pub fn api_lang_code(tag: &str) -> String {
    if tag == "zh-TW" {
        return tag.to_string();
    }
    primary_subtag(tag).to_lowercase()
}
