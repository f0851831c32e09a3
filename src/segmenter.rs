use std::sync::Arc;

use crate::annotator::Annotator;
use crate::error::Result;

/// Splits raw document text into trimmed, non-empty sentences.
///
/// Segmentation itself is delegated to the annotation service; this type
/// owns the pre- and post-processing around it.
pub struct SentenceSegmenter {
    annotator: Arc<dyn Annotator>,
}

impl SentenceSegmenter {
    #[must_use]
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }

    /// Split `text` into sentences.
    ///
    /// Whitespace-only input yields no sentences without consulting the
    /// backend. Returned sentences are trimmed and never empty.
    ///
    /// # Errors
    /// Propagates annotation service failures.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let sentences = self.annotator.segment(text)?;
        Ok(sentences
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

#[cfg(test)]
#[path = "segmenter_tests.rs"]
mod tests;
