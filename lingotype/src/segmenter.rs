//! Word segmentation with a locale-aware preferred path and a regex fallback.
//!
//! The preferred strategy delegates to the ICU4X word-boundary segmenter,
//! which understands scripts without inter-word spacing (Chinese, Japanese,
//! Korean, Thai). When the content locale cannot be parsed or the segmenter
//! cannot be built, segmentation falls back to a capturing split on a fixed
//! separator class. Both strategies feed the same post-processing, so the
//! [`Token`] invariants hold on either path:
//!
//! - spans are contiguous and non-overlapping, covering the whole input
//! - concatenating `token.text` reconstructs the input exactly
//! - empty segments are never emitted
//!
//! # Example
//!
//! ```
//! use lingotype::segmenter::segment;
//!
//! let tokens = segment("Hello 世界", "en-US");
//! let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(rebuilt, "Hello 世界");
//! ```

use icu_locale::Locale;
use icu_segmenter::WordSegmenter;
use icu_segmenter::options::WordBreakOptions;

use crate::token::{SEPARATOR_RUN, Token, has_wide_script, has_word_content};

/// A raw segment before token classification.
///
/// `word_like` carries the platform segmenter's own judgement; the regex
/// fallback marks non-separator runs as word-like. Offsets are char
/// indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub word_like: bool,
}

/// Strategy seam between the platform segmenter and the regex fallback.
///
/// Both the full segmentation pass and the cursor locator run on raw
/// segments, so the two operations always agree on word boundaries.
pub trait SegmentStrategy {
    fn raw_segments(&self, text: &str) -> Vec<RawSegment>;
}

/// Locale-aware segmentation backed by `icu_segmenter`.
pub struct IcuSegmenter {
    inner: WordSegmenter,
}

impl IcuSegmenter {
    /// Build a segmenter tailored to `lang` (a BCP 47 tag such as
    /// `"en-US"` or `"ja-JP"`).
    ///
    /// Returns `None` when the tag does not parse or segmentation data is
    /// unavailable for it; callers degrade to [`RegexSegmenter`].
    pub fn for_language(lang: &str) -> Option<Self> {
        let locale: Locale = lang.parse().ok()?;
        let mut options = WordBreakOptions::default();
        options.content_locale = Some(&locale.id);
        let inner = WordSegmenter::try_new_auto(options).ok()?;
        Some(Self { inner })
    }
}

impl SegmentStrategy for IcuSegmenter {
    fn raw_segments(&self, text: &str) -> Vec<RawSegment> {
        let mut segments = Vec::new();
        let mut iter = self.inner.as_borrowed().segment_str(text);
        let mut prev_byte = 0usize;
        let mut char_pos = 0usize;
        while let Some(boundary) = iter.next() {
            // The first boundary is the start of the text; skip the empty
            // prefix it would otherwise produce.
            if boundary > prev_byte {
                let piece = &text[prev_byte..boundary];
                let char_len = piece.chars().count();
                segments.push(RawSegment {
                    text: piece.to_string(),
                    start: char_pos,
                    end: char_pos + char_len,
                    word_like: iter.is_word_like(),
                });
                char_pos += char_len;
                prev_byte = boundary;
            }
        }
        segments
    }
}

/// Fallback segmentation: a capturing split on separator runs.
///
/// Separator runs (whitespace, ASCII and CJK punctuation, newlines) become
/// their own segments so that absolute offsets stay valid for
/// reconstruction.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexSegmenter;

impl SegmentStrategy for RegexSegmenter {
    fn raw_segments(&self, text: &str) -> Vec<RawSegment> {
        let mut segments = Vec::new();
        let mut char_pos = 0usize;
        let mut last_byte = 0usize;

        let mut push = |piece: &str, word_like: bool, char_pos: &mut usize| {
            let char_len = piece.chars().count();
            segments.push(RawSegment {
                text: piece.to_string(),
                start: *char_pos,
                end: *char_pos + char_len,
                word_like,
            });
            *char_pos += char_len;
        };

        for sep in SEPARATOR_RUN.find_iter(text) {
            if sep.start() > last_byte {
                push(&text[last_byte..sep.start()], true, &mut char_pos);
            }
            push(sep.as_str(), false, &mut char_pos);
            last_byte = sep.end();
        }
        if last_byte < text.len() {
            push(&text[last_byte..], true, &mut char_pos);
        }
        segments
    }
}

/// Produce raw segments for `text` using the preferred strategy for `lang`,
/// degrading to the regex fallback when it is unavailable.
pub(crate) fn raw_segments(text: &str, lang: &str) -> Vec<RawSegment> {
    match IcuSegmenter::for_language(lang) {
        Some(icu) => icu.raw_segments(text),
        None => RegexSegmenter.raw_segments(text),
    }
}

/// Segment `text` into an ordered token sequence.
///
/// Word/non-word classification is by content (at least one character that
/// is neither whitespace nor punctuation), independent of which strategy
/// produced the segments. Empty input yields an empty sequence.
pub fn segment(text: &str, lang: &str) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }
    raw_segments(text, lang)
        .into_iter()
        .map(|seg| Token {
            is_word: has_word_content(&seg.text),
            is_wide_script: has_wide_script(&seg.text),
            start: seg.start,
            end: seg.end,
            text: seg.text,
        })
        .collect()
}
