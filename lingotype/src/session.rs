//! Practice session state.
//!
//! A [`PracticeSession`] owns the reference text together with its token
//! sequence, the active language pair, the match tracker, and the IME
//! composition gate. The reference text and its tokens are always replaced
//! in the same call, so stale tokens can never be read against a new text.
//!
//! Typed text stays owned by the input surface; the session receives it as
//! an argument on every keystroke-driven call.

use crate::accuracy;
use crate::cursor;
use crate::segmenter::segment;
use crate::token::Token;
use crate::tracker::MatchTracker;

/// Reference text shown when the app starts: one line per script family so
/// every segmentation path is exercised out of the box.
pub const DEFAULT_REFERENCE: &str = "Accessibility is essential. こうした問題は解決できます。
今天天氣很好，適合寫程式。
안녕하세요.
Namaste duniya.
Bonjour le monde.
";

/// The downloadable demonstration document.
pub fn sample_document() -> String {
    "Title: Multi-Language Test
Type: Practice

こうした問題は解決できます。(Japanese)
今天天氣真好 (Chinese)
안녕하세요 (Korean)
Namaste (Hindi)
Guten Tag (German)
Hello World (English)
"
    .to_string()
}

/// Result of running cursor lookup and match detection together after an
/// IME composition ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputUpdate {
    /// Word to pronounce, when the composed text exactly completed a
    /// reference word.
    pub speak: Option<String>,
    /// Word under the caret in the composed text, for the tooltip.
    pub word_at_cursor: String,
}

/// One typing-practice session: reference text, tokens, language pair, and
/// the pronunciation boundary.
pub struct PracticeSession {
    reference_text: String,
    tokens: Vec<Token>,
    source_lang: String,
    target_lang: String,
    tracker: MatchTracker,
    composing: bool,
}

impl PracticeSession {
    /// Start a session over the default multi-script reference text.
    pub fn new(source_lang: &str, target_lang: &str) -> Self {
        let mut session = Self {
            reference_text: String::new(),
            tokens: Vec::new(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            tracker: MatchTracker::new(),
            composing: false,
        };
        session.load_reference(DEFAULT_REFERENCE);
        session
    }

    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Replace the reference text wholesale (file load). Re-tokenizes and
    /// re-arms the pronunciation tracker. Any content is accepted as-is.
    pub fn load_reference(&mut self, text: &str) {
        self.reference_text = text.to_string();
        self.tokens = segment(&self.reference_text, &self.source_lang);
        self.tracker.reset();
    }

    /// Switch the segmentation language. Tokenization is locale-sensitive,
    /// so the token sequence is rebuilt in the same call.
    pub fn set_source_lang(&mut self, lang: &str) {
        self.source_lang = lang.to_string();
        self.tokens = segment(&self.reference_text, &self.source_lang);
        self.tracker.reset();
    }

    pub fn set_target_lang(&mut self, lang: &str) {
        self.target_lang = lang.to_string();
    }

    /// Process a typed-text change. Returns the word to pronounce when the
    /// change exactly completed a reference word. Suspended entirely while
    /// an IME composition is in progress.
    pub fn text_changed(&mut self, typed: &str) -> Option<String> {
        if self.composing {
            return None;
        }
        self.tracker.on_text_changed(typed, &self.tokens)
    }

    /// Word under the caret in the typed text, using the session's source
    /// language. Empty while composing (partial characters never match).
    pub fn word_at(&self, typed: &str, cursor: usize) -> String {
        if self.composing {
            return String::new();
        }
        cursor::word_at(typed, cursor, &self.source_lang)
    }

    /// Live accuracy of `typed` against the reference text.
    pub fn accuracy(&self, typed: &str) -> u8 {
        accuracy::score(typed, &self.reference_text)
    }

    /// An IME composition started: suspend cursor and match processing.
    pub fn begin_composition(&mut self) {
        self.composing = true;
    }

    /// The composition ended with `typed` as the final text. Cursor lookup
    /// and match detection both run exactly once on it.
    pub fn end_composition(&mut self, typed: &str, cursor: usize) -> InputUpdate {
        self.composing = false;
        InputUpdate {
            speak: self.tracker.on_text_changed(typed, &self.tokens),
            word_at_cursor: cursor::word_at(typed, cursor, &self.source_lang),
        }
    }
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new("en-US", "zh-TW")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Lifecycle Tests ==========

    #[test]
    fn test_new_session_tokenizes_default_reference() {
        let session = PracticeSession::default();
        assert_eq!(session.reference_text(), DEFAULT_REFERENCE);
        assert!(!session.tokens().is_empty());
    }

    #[test]
    fn test_tokens_replaced_with_reference() {
        let mut session = PracticeSession::default();
        session.load_reference("cat dog");
        let rebuilt: String = session.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, "cat dog");
    }

    #[test]
    fn test_load_reference_resets_tracker() {
        let mut session = PracticeSession::default();
        session.load_reference("cat dog");
        assert_eq!(session.text_changed("cat").as_deref(), Some("cat"));

        session.load_reference("cat bird");
        // Same boundary as before, but the tracker was re-armed.
        assert_eq!(session.text_changed("cat").as_deref(), Some("cat"));
    }

    #[test]
    fn test_language_switch_retokenizes_atomically() {
        let mut session = PracticeSession::default();
        session.load_reference("今天天氣很好");
        session.set_source_lang("not a locale!");
        // The fallback segmenter sees one unbroken run.
        assert_eq!(session.tokens().len(), 1);
        let rebuilt: String = session.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, session.reference_text());
    }

    // ========== Input Flow Tests ==========

    #[test]
    fn test_accuracy_against_reference() {
        let mut session = PracticeSession::default();
        session.load_reference("Hello World");
        assert_eq!(session.accuracy("Hello Worle"), 91);
        assert_eq!(session.accuracy(""), 100);
    }

    #[test]
    fn test_word_at_uses_source_lang() {
        let mut session = PracticeSession::default();
        session.load_reference("Hello World");
        assert_eq!(session.word_at("Hello World", 8), "World");
    }

    // ========== Composition Tests ==========

    #[test]
    fn test_composition_suspends_processing() {
        let mut session = PracticeSession::default();
        session.load_reference("cat dog");
        session.begin_composition();
        assert_eq!(session.text_changed("cat"), None);
        assert_eq!(session.word_at("cat", 2), "");
    }

    #[test]
    fn test_composition_end_runs_both_once() {
        let mut session = PracticeSession::default();
        session.load_reference("cat dog");
        session.begin_composition();
        assert_eq!(session.text_changed("cat"), None);

        let update = session.end_composition("cat", 3);
        assert_eq!(update.speak.as_deref(), Some("cat"));
        assert_eq!(update.word_at_cursor, "cat");

        // The boundary fired during end_composition; it must not re-fire.
        assert_eq!(session.text_changed("cat"), None);
    }
}
