mod gemini;

pub use gemini::{DEFAULT_API_BASE, GeminiOracle};

use thiserror::Error;

/// Verdict from the language-model oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleAnswer {
    /// The actions in the sentence happen at the same time.
    Yes,
    /// The actions are sequential (or there is only one).
    No,
}

/// Failure modes of an oracle call.
///
/// Oracle failures are deliberately not [`crate::ProseGuardError`]: they
/// never abort a run. The caller treats any of these as "cannot verify"
/// and falls back to flagging the sentence.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("model answered neither YES nor NO: {answer:?}")]
    UnexpectedAnswer { answer: String },
}

/// Judge whether the actions in a sentence happen simultaneously.
///
/// Implemented by [`GeminiOracle`] in production; tests substitute canned
/// oracles to exercise the fallback paths.
pub trait SimultaneityOracle: Send + Sync {
    /// Ask the oracle about one sentence.
    ///
    /// # Errors
    /// Returns an [`OracleError`] when the backing service cannot produce
    /// a usable YES/NO verdict.
    fn actions_simultaneous(&self, sentence: &str) -> Result<OracleAnswer, OracleError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
