//! Token model shared by the segmenter and the cursor locator.
//!
//! A [`Token`] is a contiguous span of text classified as word or non-word
//! content. Tokens are produced in a single left-to-right pass and their
//! concatenation reconstructs the original text exactly: spans are
//! contiguous, non-overlapping, and cover the whole input.
//!
//! All offsets in this crate count Unicode scalar values (`char`s), not
//! bytes, so the same offset is valid against `text.chars()` regardless of
//! script.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A contiguous span of text produced by segmentation.
///
/// `start`/`end` are half-open char offsets into the owning text.
/// `is_word` marks tokens containing at least one character that is neither
/// whitespace nor punctuation. `is_wide_script` is a rendering hint for
/// scripts written without inter-word spacing; it never affects
/// segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub is_word: bool,
    pub start: usize,
    pub end: usize,
    pub is_wide_script: bool,
}

/// Matches a run of separators: whitespace (including newlines), ASCII
/// sentence punctuation, and the fullwidth/CJK punctuation set.
///
/// This is the single separator definition for the crate. The fallback
/// segmenter splits on it and the fallback cursor locator tests single
/// characters against it, so word boundaries agree between the two paths.
pub(crate) static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,.!?;:，。！？、：；「」『』()（）]+").expect("valid separator pattern"));

static WORD_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s\p{P}]").expect("valid word-content pattern"));

/// Returns true if `c` belongs to the separator class.
///
/// Must stay in sync with [`SEPARATOR_RUN`]: whitespace plus the fixed
/// punctuation set.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '.' | '!' | '?' | ';' | ':'
                | '，' | '。' | '！' | '？' | '、' | '：' | '；'
                | '「' | '」' | '『' | '』'
                | '(' | ')' | '（' | '）'
        )
}

/// Returns true if `text` contains at least one character that is neither
/// whitespace nor Unicode punctuation.
pub fn has_word_content(text: &str) -> bool {
    WORD_CONTENT.is_match(text)
}

/// Returns true if `text` contains characters from the CJK Unified
/// Ideographs, Kana, or Hangul Syllables ranges.
pub fn has_wide_script(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{4e00}'..='\u{9fa5}' | '\u{3040}'..='\u{30ff}' | '\u{ac00}'..='\u{d7af}')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Separator Tests ==========

    #[test]
    fn test_whitespace_is_separator() {
        assert!(is_separator(' '));
        assert!(is_separator('\n'));
        assert!(is_separator('\t'));
        assert!(is_separator('\u{3000}')); // ideographic space
    }

    #[test]
    fn test_punctuation_is_separator() {
        for c in ",.!?;:，。！？、：；「」『』()（）".chars() {
            assert!(is_separator(c), "expected separator: {:?}", c);
        }
    }

    #[test]
    fn test_word_chars_are_not_separators() {
        assert!(!is_separator('a'));
        assert!(!is_separator('好'));
        assert!(!is_separator('안'));
        assert!(!is_separator('न'));
        assert!(!is_separator('\''));
    }

    #[test]
    fn test_separator_run_agrees_with_char_test() {
        let sample = "a b\nc，d。e「f」(g)？h\u{3000}i";
        for c in sample.chars() {
            let by_regex = SEPARATOR_RUN.is_match(&c.to_string());
            assert_eq!(by_regex, is_separator(c), "disagreement on {:?}", c);
        }
    }

    // ========== Word Content Tests ==========

    #[test]
    fn test_word_content_detection() {
        assert!(has_word_content("hello"));
        assert!(has_word_content("天氣"));
        assert!(has_word_content("a."));
        assert!(!has_word_content("  \n"));
        assert!(!has_word_content(",.!?"));
        assert!(!has_word_content("。、「」"));
    }

    // ========== Wide Script Tests ==========

    #[test]
    fn test_wide_script_detection() {
        assert!(has_wide_script("天氣"));
        assert!(has_wide_script("できます"));
        assert!(has_wide_script("안녕하세요"));
        assert!(!has_wide_script("hello"));
        assert!(!has_wide_script("नमस्ते")); // Devanagari is not a wide script
        assert!(!has_wide_script("Привет"));
    }

    #[test]
    fn test_mixed_text_is_wide() {
        assert!(has_wide_script("Hello世界"));
    }
}
