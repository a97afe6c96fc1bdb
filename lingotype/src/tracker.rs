//! Match tracker: detect when typing completes a reference word.
//!
//! The tracker owns the last-spoken boundary so a completed word triggers
//! pronunciation exactly once. The boundary is the typed-text length at
//! which a pronunciation already fired; it only moves forward while the
//! user types forward and clears as soon as they delete past it.

use crate::token::Token;

/// Stateful detector for exact word completions against reference tokens.
#[derive(Debug, Default)]
pub struct MatchTracker {
    last_spoken_boundary: Option<usize>,
}

impl MatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a typed-text change against the reference token sequence.
    ///
    /// Returns the completed word when the caret sits exactly at the end of
    /// a reference word token and the typed span matches that token
    /// verbatim (case-sensitive, no fuzzy matching). Repeated calls at the
    /// same typed length report nothing until the boundary changes.
    ///
    /// # Example
    ///
    /// ```
    /// use lingotype::segmenter::segment;
    /// use lingotype::tracker::MatchTracker;
    ///
    /// let tokens = segment("Hello World", "en-US");
    /// let mut tracker = MatchTracker::new();
    /// assert_eq!(tracker.on_text_changed("Hello", &tokens).as_deref(), Some("Hello"));
    /// assert_eq!(tracker.on_text_changed("Hello", &tokens), None);
    /// ```
    pub fn on_text_changed(&mut self, typed: &str, reference_tokens: &[Token]) -> Option<String> {
        let typed_len = typed.chars().count();

        // The user deleted past a prior completion; re-arm and report
        // nothing for this call.
        if let Some(boundary) = self.last_spoken_boundary {
            if typed_len < boundary {
                self.last_spoken_boundary = None;
                return None;
            }
        }

        let token = reference_tokens
            .iter()
            .find(|t| t.end == typed_len && t.is_word)?;

        if self.last_spoken_boundary == Some(typed_len) {
            return None;
        }

        let typed_span: String = typed
            .chars()
            .skip(token.start)
            .take(token.end - token.start)
            .collect();
        if typed_span == token.text {
            self.last_spoken_boundary = Some(typed_len);
            Some(token.text.clone())
        } else {
            None
        }
    }

    /// Forget the recorded boundary (new reference text or language).
    pub fn reset(&mut self) {
        self.last_spoken_boundary = None;
    }
}
