//! Voice selection and utterance dispatch for pronunciation.
//!
//! The actual synthesis engine is a collaborator behind [`SpeechBackend`];
//! this module owns the part worth testing: picking the best voice for a
//! language tag and guaranteeing at most one utterance plays at a time.

use crate::lang::primary_subtag;

/// An available synthesis voice, as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

/// Pick the best voice for `lang_tag`: an exact tag match, else the first
/// voice whose tag starts with the primary subtag, else none (the platform
/// default voice is used).
pub fn select_voice<'a>(voices: &'a [Voice], lang_tag: &str) -> Option<&'a Voice> {
    voices
        .iter()
        .find(|v| v.lang == lang_tag)
        .or_else(|| {
            let primary = primary_subtag(lang_tag);
            voices.iter().find(|v| v.lang.starts_with(primary))
        })
}

/// Synthesis collaborator. Implementations are fire-and-forget.
pub trait SpeechBackend {
    /// Start speaking `text`. `voice` is `None` when no inventory voice
    /// matched and the platform default should be used.
    fn speak(&mut self, text: &str, lang: &str, voice: Option<&Voice>);

    /// Stop any utterance currently playing.
    fn cancel(&mut self);
}

/// Pronunciation dispatcher owning the voice inventory.
pub struct Speaker {
    voices: Vec<Voice>,
    backend: Box<dyn SpeechBackend>,
}

impl Speaker {
    pub fn new(voices: Vec<Voice>, backend: Box<dyn SpeechBackend>) -> Self {
        Self { voices, backend }
    }

    /// Replace the voice inventory (platforms load voices asynchronously).
    pub fn set_voices(&mut self, voices: Vec<Voice>) {
        self.voices = voices;
    }

    /// Speak `text` in `lang`, cancelling any prior utterance first so at
    /// most one plays at a time. Empty text is ignored.
    pub fn speak(&mut self, text: &str, lang: &str) {
        if text.is_empty() {
            return;
        }
        self.backend.cancel();
        let voice = select_voice(&self.voices, lang);
        self.backend.speak(text, lang, voice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn voices() -> Vec<Voice> {
        vec![
            Voice { name: "Amelie".into(), lang: "fr-FR".into() },
            Voice { name: "Kyoko".into(), lang: "ja-JP".into() },
            Voice { name: "Daniel".into(), lang: "en-GB".into() },
            Voice { name: "Samantha".into(), lang: "en-US".into() },
        ]
    }

    // ========== Selection Tests ==========

    #[test]
    fn test_exact_tag_match_wins() {
        let voices = voices();
        let voice = select_voice(&voices, "en-US").unwrap();
        assert_eq!(voice.name, "Samantha");
    }

    #[test]
    fn test_primary_subtag_fallback() {
        let voices = voices();
        // No en-AU voice; the first "en" voice wins.
        let voice = select_voice(&voices, "en-AU").unwrap();
        assert_eq!(voice.name, "Daniel");
    }

    #[test]
    fn test_no_match_yields_platform_default() {
        let voices = voices();
        assert!(select_voice(&voices, "ko-KR").is_none());
        assert!(select_voice(&[], "en-US").is_none());
    }

    // ========== Speaker Tests ==========

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Cancel,
        Speak(String, Option<String>),
    }

    struct RecordingBackend(Arc<Mutex<Vec<Event>>>);

    impl SpeechBackend for RecordingBackend {
        fn speak(&mut self, text: &str, _lang: &str, voice: Option<&Voice>) {
            self.0.lock().unwrap().push(Event::Speak(
                text.to_string(),
                voice.map(|v| v.name.clone()),
            ));
        }

        fn cancel(&mut self) {
            self.0.lock().unwrap().push(Event::Cancel);
        }
    }

    #[test]
    fn test_cancels_before_each_utterance() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut speaker = Speaker::new(voices(), Box::new(RecordingBackend(events.clone())));

        speaker.speak("Bonjour", "fr-FR");
        speaker.speak("Hello", "en-US");

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                Event::Cancel,
                Event::Speak("Bonjour".into(), Some("Amelie".into())),
                Event::Cancel,
                Event::Speak("Hello".into(), Some("Samantha".into())),
            ]
        );
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut speaker = Speaker::new(voices(), Box::new(RecordingBackend(events.clone())));

        speaker.speak("", "en-US");
        assert!(events.lock().unwrap().is_empty());
    }
}
