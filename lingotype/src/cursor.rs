//! Cursor locator: resolve a caret offset to the enclosing word.
//!
//! Uses the same segmentation strategies as the full tokenizer, so the word
//! a caret resolves to is always one the segmenter would have produced.
//! Span checks are inclusive on both ends: a caret sitting exactly between
//! two tokens still resolves to the word it trails.

use crate::segmenter::{IcuSegmenter, RawSegment, SegmentStrategy};
use crate::token::{has_word_content, is_separator};

/// Return the word spanning `offset` in `text`, or an empty string when the
/// caret rests on a separator or outside any word.
///
/// `offset` is a char index in `0..=text.chars().count()`; offsets at or
/// past the end of the text resolve the trailing word, matching the
/// behavior of a caret at the end of an input field.
///
/// # Example
///
/// ```
/// use lingotype::cursor::word_at;
///
/// assert_eq!(word_at("Hello World", 7, "en-US"), "World");
/// assert_eq!(word_at("Hello World", 5, "en-US"), "Hello");
/// ```
pub fn word_at(text: &str, offset: usize, lang: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    match IcuSegmenter::for_language(lang) {
        Some(icu) => word_in_segments(&icu.raw_segments(text), offset),
        None => word_at_fallback(text, offset),
    }
}

/// Scan raw segments for one whose span contains `offset`, boundary
/// inclusive, and accept it when the platform marks it word-like or it
/// passes the word-content test.
fn word_in_segments(segments: &[RawSegment], offset: usize) -> String {
    for seg in segments {
        if offset >= seg.start && offset <= seg.end {
            if seg.word_like || has_word_content(&seg.text) {
                return seg.text.clone();
            }
        }
    }
    String::new()
}

/// Separator-expansion fallback, sharing the segmenter's separator class.
///
/// A caret sitting just after a word (on the separator that ends it) shifts
/// left one position so it still resolves to that word. Offsets at or past
/// the end of the text are treated as resting on a non-separator.
fn word_at_fallback(text: &str, offset: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let sep_at = |i: usize| chars.get(i).copied().is_some_and(is_separator);

    let mut idx = offset.min(chars.len());
    if idx > 0 && sep_at(idx) && !sep_at(idx - 1) {
        idx -= 1;
    } else if sep_at(idx) {
        return String::new();
    }

    let mut start = idx;
    let mut end = idx;
    while start > 0 && !sep_at(start - 1) {
        start -= 1;
    }
    while end < chars.len() && !sep_at(end) {
        end += 1;
    }
    chars[start..end].iter().collect()
}
