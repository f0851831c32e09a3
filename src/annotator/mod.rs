mod http;

pub use http::{HttpAnnotator, is_http_url};

use crate::error::{ProseGuardError, Result};

#[cfg(test)]
pub mod test_fixtures;

/// A single token from the dependency parse of a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text of the token.
    pub text: String,
    /// Fine-grained part-of-speech tag (Penn Treebank style, e.g. `VB`, `VBN`, `NN`).
    pub tag: String,
    /// Coarse part-of-speech category (e.g. `VERB`, `NOUN`, `DET`).
    pub pos: String,
    /// Dependency relation to the head token (e.g. `ROOT`, `det`, `nsubj`).
    pub dep: String,
    /// Index of the head token within the sentence. The root points at itself.
    pub head: usize,
    pub is_punct: bool,
    pub is_space: bool,
}

/// A noun phrase span over the token sequence, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounChunk {
    pub start: usize,
    pub end: usize,
    /// Index of the chunk's head noun, always within `[start, end)`.
    pub root: usize,
}

/// A fully parsed sentence: the raw text plus its tokens and noun chunks.
///
/// Construction validates all index bounds, so rule code can index into
/// `tokens()` with chunk and head indices without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    text: String,
    tokens: Vec<Token>,
    chunks: Vec<NounChunk>,
}

impl Annotation {
    /// Build an annotation, validating that every head index and chunk span
    /// refers to an existing token.
    ///
    /// # Errors
    /// Returns [`ProseGuardError::Annotator`] if any token head is out of
    /// bounds, or any chunk span is empty, out of bounds, or has its root
    /// outside the span.
    pub fn new(text: String, tokens: Vec<Token>, chunks: Vec<NounChunk>) -> Result<Self> {
        let len = tokens.len();
        for (i, token) in tokens.iter().enumerate() {
            if token.head >= len {
                return Err(ProseGuardError::Annotator(format!(
                    "malformed annotation: token {i} has head {} but sentence has {len} tokens",
                    token.head
                )));
            }
        }
        for (i, chunk) in chunks.iter().enumerate() {
            if chunk.start >= chunk.end || chunk.end > len {
                return Err(ProseGuardError::Annotator(format!(
                    "malformed annotation: noun chunk {i} spans [{}, {}) but sentence has {len} tokens",
                    chunk.start, chunk.end
                )));
            }
            if chunk.root < chunk.start || chunk.root >= chunk.end {
                return Err(ProseGuardError::Annotator(format!(
                    "malformed annotation: noun chunk {i} has root {} outside its span [{}, {})",
                    chunk.root, chunk.start, chunk.end
                )));
            }
        }
        Ok(Self {
            text,
            tokens,
            chunks,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn noun_chunks(&self) -> &[NounChunk] {
        &self.chunks
    }

    /// Iterate over the syntactic children of the token at `head`.
    ///
    /// The token at `head` itself is excluded, so a root token that points
    /// at its own index is not its own child.
    pub fn children(&self, head: usize) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |&(i, token)| i != head && token.head == head)
            .map(|(_, token)| token)
    }

    /// The main verb of the sentence: the first token whose dependency
    /// relation is `ROOT` and whose coarse category is `VERB`.
    #[must_use]
    pub fn root_verb(&self) -> Option<(usize, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .find(|&(_, token)| token.dep == "ROOT" && token.pos == "VERB")
    }

    /// Count tokens acting as a verbal root (`dep == "ROOT"`, `pos == "VERB"`).
    #[must_use]
    pub fn root_verb_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| token.dep == "ROOT" && token.pos == "VERB")
            .count()
    }

    /// Number of tokens that count as words (punctuation and whitespace
    /// tokens are excluded).
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| !token.is_punct && !token.is_space)
            .count()
    }
}

/// Linguistic annotation backend.
///
/// Implementations wrap an external NLP service that performs sentence
/// segmentation and dependency parsing. The trait exists so the rule engine
/// can be tested against canned parses without the service running.
pub trait Annotator: Send + Sync {
    /// Split raw document text into sentences.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be reached or returns a
    /// malformed response.
    fn segment(&self, text: &str) -> Result<Vec<String>>;

    /// Produce the full annotation for a single sentence.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be reached or returns a
    /// malformed response.
    fn annotate(&self, sentence: &str) -> Result<Annotation>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
