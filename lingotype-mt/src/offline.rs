//! Local fallback used when the translation service is unreachable.

/// Known-phrase translations available without the network.
const OFFLINE_PHRASES: &[(&str, &str)] = &[
    ("Accessibility", "無障礙"),
    ("Essential", "必要的"),
];

/// Deterministic local approximation of a translation.
///
/// Known phrases match by case-insensitive containment. Anything else is
/// passed through, annotated when the target language is Chinese so the
/// user can tell the service was unreachable.
pub fn offline_fallback(text: &str, target_lang: &str) -> String {
    let lower = text.to_lowercase();
    for (phrase, translation) in OFFLINE_PHRASES {
        if lower.contains(&phrase.to_lowercase()) {
            return (*translation).to_string();
        }
    }
    if target_lang.contains("zh") {
        format!("[離線] {}", text)
    } else {
        text.to_string()
    }
}
