//! Cross-module scenarios: the practice engine driving the translation
//! layer the way an input surface would.

use crate::mock::{MockMode, MockTranslator};
use crate::scheduler::{RequestKind, TranslationScheduler};
use lingotype::PracticeSession;
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn test_practice_round_no_speak_on_mismatch() {
    let mut session = PracticeSession::new("en-US", "zh-TW");
    session.load_reference("Hello World");

    // The last word is mistyped: accuracy drops, cursor still resolves a
    // word, and no pronunciation fires because the token text differs.
    let typed = "Hello Worle";
    assert_eq!(session.accuracy(typed), 91);
    assert_eq!(session.word_at(typed, 11), "Worle");
    assert_eq!(session.text_changed(typed), None);
}

#[test]
fn test_practice_round_speaks_each_word_once() {
    let mut session = PracticeSession::new("en-US", "zh-TW");
    session.load_reference("Hello World");

    assert_eq!(session.text_changed("Hello").as_deref(), Some("Hello"));
    assert_eq!(session.text_changed("Hello "), None);
    assert_eq!(
        session.text_changed("Hello World").as_deref(),
        Some("World")
    );
    assert_eq!(session.text_changed("Hello World"), None);
}

#[tokio::test(start_paused = true)]
async fn test_word_lookup_flows_into_translation() {
    let mut map = HashMap::new();
    map.insert(
        ("World".to_string(), "fr-FR".to_string()),
        "Monde".to_string(),
    );
    let provider = Arc::new(MockTranslator::new(MockMode::Mappings(map)));
    let scheduler = TranslationScheduler::new(provider);

    let mut session = PracticeSession::new("en-US", "fr-FR");
    session.load_reference("Hello World");

    let word = session.word_at("Hello World", 8);
    assert_eq!(word, "World");

    let translated = scheduler
        .request(&word, session.source_lang(), session.target_lang(), RequestKind::Word)
        .await;
    assert_eq!(translated, Some("Monde".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_offline_round_trip_through_session_langs() {
    let provider = Arc::new(MockTranslator::new(MockMode::Error("down".to_string())));
    let scheduler = TranslationScheduler::new(provider);

    let session = PracticeSession::new("en-US", "zh-TW");
    let translated = scheduler
        .request(
            "Accessibility is essential.",
            session.source_lang(),
            session.target_lang(),
            RequestKind::Sentence,
        )
        .await;

    // The known-phrase table answers even with the service down.
    assert_eq!(translated, Some("無障礙".to_string()));
    assert!(scheduler.is_offline());
}
