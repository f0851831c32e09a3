use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProseGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Annotation service unavailable at {endpoint}: {reason}")]
    AnnotatorUnavailable { endpoint: String, reason: String },

    #[error("Annotation request failed: {0}")]
    Annotator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProseGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
