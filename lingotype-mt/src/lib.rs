//! Translation layer for lingotype.
//!
//! This crate connects the typing-practice engine to a translation
//! service without letting service behavior leak into it:
//!
//! 1. **Provider trait**: generic async [`Translator`] with the MyMemory
//!    HTTP implementation and a deterministic mock
//! 2. **Offline fallback**: local approximation used whenever the
//!    service fails; failures never surface as errors
//! 3. **Scheduler**: per-kind trailing debounce with last-writer-wins
//!    application of results
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lingotype_mt::{MyMemoryProvider, RequestKind, TranslationScheduler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(MyMemoryProvider::new()?);
//!     let scheduler = TranslationScheduler::new(provider);
//!
//!     if let Some(translated) = scheduler
//!         .request("Hello World", "en-US", "fr-FR", RequestKind::Sentence)
//!         .await
//!     {
//!         println!("{}", translated);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mock;
pub mod mymemory;
pub mod offline;
pub mod scheduler;
pub mod translator;

// Integration tests (only available during testing)
#[cfg(test)]
mod integration_tests;

// Re-export main types for convenient access
pub use error::{MtError, MtResult};
pub use mock::{MockMode, MockTranslator};
pub use mymemory::MyMemoryProvider;
pub use offline::offline_fallback;
pub use scheduler::{RequestKind, TranslationScheduler};
pub use translator::{Translator, validate_lang_code};
