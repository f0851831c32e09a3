use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ProseGuardError, Result};

use super::{OracleAnswer, OracleError, SimultaneityOracle};

/// Default base URL of the Gemini REST API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Simultaneity oracle backed by the Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiOracle {
    client: reqwest::blocking::Client,
    api_base: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiOracle {
    /// Build an oracle for `model` authenticated with `api_key`.
    ///
    /// # Errors
    /// Returns [`ProseGuardError::Config`] if the HTTP client cannot be
    /// constructed.
    pub fn new(model: String, api_key: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProseGuardError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            model,
            api_key,
            timeout_secs,
        })
    }

    /// Override the API base URL. Used to point the oracle at a local
    /// stand-in for the Gemini service.
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

/// The question posed to the model. Answer format is pinned down so the
/// reply can be parsed without any further prompting round.
fn build_prompt(sentence: &str) -> String {
    format!(
        "Analyze this sentence from a technical manual:\n\
         \"{sentence}\"\n\n\
         Do the actions in this sentence occur at the same time?\n\
         Answer ONLY with YES or NO. Do NOT explain."
    )
}

/// Pull the reply text out of the first candidate.
fn extract_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    if candidate.content.parts.is_empty() {
        return None;
    }
    Some(
        candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect(),
    )
}

/// Map the model's reply onto a verdict, tolerating case and trailing
/// punctuation but nothing else.
fn parse_answer(text: &str) -> std::result::Result<OracleAnswer, OracleError> {
    let trimmed = text.trim().trim_end_matches('.').trim();
    if trimmed.eq_ignore_ascii_case("yes") {
        Ok(OracleAnswer::Yes)
    } else if trimmed.eq_ignore_ascii_case("no") {
        Ok(OracleAnswer::No)
    } else {
        Err(OracleError::UnexpectedAnswer {
            answer: text.to_string(),
        })
    }
}

/// Network half of the oracle. Excluded from coverage measurement because
/// it cannot run without a live endpoint.
#[cfg(not(tarpaulin_include))]
impl SimultaneityOracle for GeminiOracle {
    fn actions_simultaneous(
        &self,
        sentence: &str,
    ) -> std::result::Result<OracleAnswer, OracleError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let prompt = build_prompt(sentence);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout {
                        seconds: self.timeout_secs,
                    }
                } else {
                    OracleError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|e| OracleError::MalformedResponse(e.to_string()))?;
        let text = extract_text(&body)
            .ok_or_else(|| OracleError::MalformedResponse("no candidates in reply".to_string()))?;
        parse_answer(&text)
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod tests;
