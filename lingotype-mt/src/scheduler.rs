//! Debounced translation scheduling.
//!
//! The input surface fires translation lookups far faster than any service
//! should be called: every cursor move wants a word lookup, every keystroke
//! wants the sentence re-translated. The scheduler coalesces them with a
//! trailing debounce per request kind and guarantees that only the most
//! recently issued request per kind ever applies its result.
//!
//! Each issued request takes the next epoch for its kind. The epoch is
//! checked twice: when the debounce timer fires (a superseded request never
//! calls the service) and again when the fetch completes (a stale response
//! is discarded even if it arrives after a newer request started).
//! Last-writer-wins is therefore by issuance order, not completion order.
//!
//! Service failures never surface as errors: the scheduler switches to the
//! offline fallback and stays offline until the next sentence-kind request
//! optimistically retries the network.

use crate::offline::offline_fallback;
use crate::translator::Translator;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// The two lookup kinds, each with its own debounce window and epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Word under the cursor; short window so tooltips feel live.
    Word,
    /// Whole typed sentence; longer window to ride out bursts of typing.
    Sentence,
}

/// Debounced, last-writer-wins front end over a [`Translator`].
pub struct TranslationScheduler {
    provider: Arc<dyn Translator>,
    word_delay: Duration,
    sentence_delay: Duration,
    epochs: [AtomicU64; 2],
    offline: AtomicBool,
}

impl TranslationScheduler {
    /// Debounce window for word lookups.
    pub const WORD_DEBOUNCE: Duration = Duration::from_millis(300);
    /// Debounce window for sentence translation.
    pub const SENTENCE_DEBOUNCE: Duration = Duration::from_millis(1000);

    pub fn new(provider: Arc<dyn Translator>) -> Self {
        Self::with_delays(provider, Self::WORD_DEBOUNCE, Self::SENTENCE_DEBOUNCE)
    }

    /// Scheduler with custom debounce windows (tests, non-interactive
    /// hosts).
    pub fn with_delays(
        provider: Arc<dyn Translator>,
        word_delay: Duration,
        sentence_delay: Duration,
    ) -> Self {
        Self {
            provider,
            word_delay,
            sentence_delay,
            epochs: [AtomicU64::new(0), AtomicU64::new(0)],
            offline: AtomicBool::new(false),
        }
    }

    /// True while translations come from the local fallback rather than
    /// the service.
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    fn epoch(&self, kind: RequestKind) -> &AtomicU64 {
        &self.epochs[kind as usize]
    }

    fn delay(&self, kind: RequestKind) -> Duration {
        match kind {
            RequestKind::Word => self.word_delay,
            RequestKind::Sentence => self.sentence_delay,
        }
    }

    /// Issue a translation request of the given kind.
    ///
    /// Resolves to `Some(translation)` when this request was still the
    /// newest of its kind at completion, or `None` when a later request
    /// superseded it (its result must not be applied). Blank input
    /// resolves immediately to an empty string, cancelling any pending
    /// request of the same kind, without calling the service.
    ///
    /// Failures resolve to the offline fallback, never to an error.
    pub async fn request(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        kind: RequestKind,
    ) -> Option<String> {
        if text.trim().is_empty() {
            self.epoch(kind).fetch_add(1, Ordering::SeqCst);
            return Some(String::new());
        }

        let epoch = self.epoch(kind).fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay(kind)).await;
        if self.epoch(kind).load(Ordering::SeqCst) != epoch {
            debug!(kind = ?kind, "debounced request superseded before firing");
            return None;
        }

        // Optimistic retry: a sentence-kind attempt always leaves offline
        // mode before touching the network.
        if kind == RequestKind::Sentence && self.offline.swap(false, Ordering::SeqCst) {
            debug!("leaving offline mode to retry the translation service");
        }

        let output = match self.provider.translate(text, source_lang, target_lang).await {
            Ok(translated) => translated,
            Err(err) => {
                warn!(
                    provider = self.provider.provider_name(),
                    error = %err,
                    "translation failed, switching to offline fallback"
                );
                self.offline.store(true, Ordering::SeqCst);
                offline_fallback(text, target_lang)
            }
        };

        // A newer request of this kind was issued while the fetch was in
        // flight; its result wins regardless of completion order.
        if self.epoch(kind).load(Ordering::SeqCst) != epoch {
            debug!(kind = ?kind, "discarding stale translation response");
            return None;
        }
        Some(output)
    }
}
