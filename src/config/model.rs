use serde::{Deserialize, Serialize};

use crate::rules::DEFAULT_MAX_WORDS;

/// Root configuration, read from `.prose-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Annotation service connection `[annotator]`.
    #[serde(default)]
    pub annotator: AnnotatorConfig,

    /// Simultaneity oracle settings `[oracle]`.
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Per-rule tuning `[rules]`.
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Connection settings for the annotation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Base URL of the annotation service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_annotator_timeout")]
    pub timeout_secs: u64,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_annotator_timeout(),
        }
    }
}

/// Settings for the language-model oracle behind the single-instruction
/// rule. The oracle is optional: without a resolvable API key the rule is
/// skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OracleConfig {
    /// Gemini model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable consulted for the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// API key set directly in the config. Takes precedence over
    /// `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Alternative API base URL (for proxies or a local stand-in).
    #[serde(default)]
    pub api_base: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_oracle_timeout")]
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_key: None,
            api_base: None,
            timeout_secs: default_oracle_timeout(),
        }
    }
}

impl OracleConfig {
    /// The effective API key: the inline value wins over the environment
    /// variable named by `api_key_env`. Empty values count as absent.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(ToString::to_string)
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.is_empty())
            })
    }
}

/// Per-rule tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// Word limit for the sentence-length rule.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8765".to_string()
}

const fn default_annotator_timeout() -> u64 {
    30
}

fn default_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

const fn default_oracle_timeout() -> u64 {
    10
}

const fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
