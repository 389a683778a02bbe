// Word translation seam
//
// The pipeline only depends on the WordTranslator trait; the Ollama-backed
// implementation lives in its own module. Per-word failures are recorded as
// a typed marker instead of being raised, so a bad word never takes the
// batch down with it.

pub mod ollama;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

pub use ollama::OllamaTranslator;
use crate::error::Result;

/// Rendering of a failed translation in the output spreadsheet.
pub const FAILURE_MARKER: &str = "翻译失败";

/// Outcome of translating a single word: the translated text, or a marker
/// distinct from any real translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Text(String),
    Failed,
}

impl Translation {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// The string written to the output spreadsheet.
    pub fn as_output(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Failed => FAILURE_MARKER,
        }
    }
}

/// Main trait for word translation operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordTranslator: Send + Sync {
    /// Translate a single English word to Simplified Chinese
    async fn translate_word(&self, word: &str) -> Result<String>;

    /// Check that the translation backend is reachable and ready
    async fn check_availability(&self) -> Result<()>;
}

/// Translate a batch of words, one at a time and in input order.
///
/// The output has exactly one entry per input word, in the same order. A
/// failing call is logged and recorded as `Translation::Failed`; it never
/// interrupts the rest of the batch.
pub async fn translate_batch(
    translator: &dyn WordTranslator,
    words: &[String],
) -> Vec<Translation> {
    let progress = ProgressBar::new(words.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_message("Translating");

    let mut results = Vec::with_capacity(words.len());
    for word in words {
        match translator.translate_word(word).await {
            Ok(text) => results.push(Translation::Text(text)),
            Err(e) => {
                warn!("Translation failed for '{}': {}", word, e);
                results.push(Translation::Failed);
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordsieveError;

    fn stub_translator() -> MockWordTranslator {
        let mut mock = MockWordTranslator::new();
        mock.expect_translate_word().returning(|word| {
            if word == "xyzzy" {
                Err(WordsieveError::Translation("no such word".to_string()))
            } else {
                Ok(format!("{}-zh", word))
            }
        });
        mock
    }

    #[tokio::test]
    async fn test_output_aligned_with_input() {
        let translator = stub_translator();
        let words = vec!["banana".to_string(), "cat".to_string()];

        let results = translate_batch(&translator, &words).await;

        assert_eq!(results.len(), words.len());
        assert_eq!(results[0], Translation::Text("banana-zh".to_string()));
        assert_eq!(results[1], Translation::Text("cat-zh".to_string()));
    }

    #[tokio::test]
    async fn test_failure_is_isolated_per_word() {
        let translator = stub_translator();
        let words = vec![
            "banana".to_string(),
            "xyzzy".to_string(),
            "cat".to_string(),
        ];

        let results = translate_batch(&translator, &words).await;

        assert_eq!(results.len(), 3);
        assert!(!results[0].is_failed());
        assert!(results[1].is_failed());
        assert!(!results[2].is_failed());
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_output() {
        let translator = MockWordTranslator::new();
        let results = translate_batch(&translator, &[]).await;
        assert!(results.is_empty());
    }

    #[test]
    fn test_failure_marker_distinct_from_translations() {
        let failed = Translation::Failed;
        assert_eq!(failed.as_output(), FAILURE_MARKER);
        assert_ne!(
            Translation::Text("香蕉".to_string()).as_output(),
            FAILURE_MARKER
        );
    }
}
