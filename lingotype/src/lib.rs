//! Core engine for multilingual typing practice.
//!
//! lingotype tracks free typing against a reference text: it segments text
//! into word/non-word tokens across scripts (Latin, CJK, Hangul,
//! Devanagari), maps caret offsets to the enclosing word, detects exact
//! word completions to gate pronunciation, and scores per-character
//! accuracy. Everything here is synchronous and free of I/O; translation
//! lives in the companion `lingotype-mt` crate, and rendering belongs to
//! the host.
//!
//! # Example
//!
//! ```
//! use lingotype::PracticeSession;
//!
//! let mut session = PracticeSession::new("en-US", "fr-FR");
//! session.load_reference("Hello World");
//!
//! assert_eq!(session.text_changed("Hello").as_deref(), Some("Hello"));
//! assert_eq!(session.accuracy("Hello Worle"), 91);
//! assert_eq!(session.word_at("Hello Worle", 11), "Worle");
//! ```

pub mod accuracy;
pub mod cursor;
pub mod lang;
pub mod phonetic;
pub mod segmenter;
pub mod session;
pub mod shortcuts;
pub mod token;
pub mod tracker;
pub mod voice;

pub use accuracy::score;
pub use cursor::word_at;
pub use lang::{LANGUAGES, Language, api_lang_code, primary_subtag};
pub use phonetic::demo_phonetic;
pub use segmenter::{IcuSegmenter, RegexSegmenter, SegmentStrategy, segment};
pub use session::{DEFAULT_REFERENCE, InputUpdate, PracticeSession, sample_document};
pub use shortcuts::{ShortcutAction, action_for};
pub use token::Token;
pub use tracker::MatchTracker;
pub use voice::{Speaker, SpeechBackend, Voice, select_voice};
