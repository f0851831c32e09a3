use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ProseGuardError, Result};

use super::{Annotation, Annotator, NounChunk, Token};

/// Check if a string is a valid annotator endpoint (http:// or https://).
#[must_use]
pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Annotation service client speaking the `/health` + `/annotate` protocol.
///
/// The service wraps a dependency parser behind two routes: `GET /health`
/// answers 200 when the model is loaded, and `POST /annotate` takes
/// `{"text": ...}` and returns tokens, noun chunks and sentence spans.
#[derive(Debug)]
pub struct HttpAnnotator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    tokens: Vec<TokenDto>,
    #[serde(default)]
    noun_chunks: Vec<NounChunkDto>,
    #[serde(default)]
    sentences: Vec<SentenceDto>,
}

#[derive(Deserialize)]
struct TokenDto {
    text: String,
    tag: String,
    pos: String,
    dep: String,
    head: usize,
    #[serde(default)]
    is_punct: bool,
    #[serde(default)]
    is_space: bool,
}

#[derive(Deserialize)]
struct NounChunkDto {
    start: usize,
    end: usize,
    root: usize,
}

#[derive(Deserialize)]
struct SentenceDto {
    text: String,
}

fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// Convert a wire response into a validated [`Annotation`] for `sentence`.
fn annotation_from_response(sentence: &str, response: AnnotateResponse) -> Result<Annotation> {
    let tokens = response
        .tokens
        .into_iter()
        .map(|t| Token {
            text: t.text,
            tag: t.tag,
            pos: t.pos,
            dep: t.dep,
            head: t.head,
            is_punct: t.is_punct,
            is_space: t.is_space,
        })
        .collect();
    let chunks = response
        .noun_chunks
        .into_iter()
        .map(|c| NounChunk {
            start: c.start,
            end: c.end,
            root: c.root,
        })
        .collect();
    Annotation::new(sentence.to_string(), tokens, chunks)
}

/// Network half of the client. Excluded from coverage measurement because
/// it cannot run without a live annotation service.
#[cfg(not(tarpaulin_include))]
impl HttpAnnotator {
    /// Connect to the annotation service and verify it is ready.
    ///
    /// Sends `GET {endpoint}/health` before returning, so a missing or
    /// still-loading service is reported at startup rather than on the
    /// first document.
    ///
    /// # Errors
    /// Returns [`ProseGuardError::AnnotatorUnavailable`] if the client
    /// cannot be built, the health check does not answer, or it answers
    /// with a non-2xx status.
    pub fn connect(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProseGuardError::AnnotatorUnavailable {
                endpoint: endpoint.clone(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        let health_url = format!("{endpoint}/health");
        let response =
            client
                .get(&health_url)
                .send()
                .map_err(|e| ProseGuardError::AnnotatorUnavailable {
                    endpoint: endpoint.clone(),
                    reason: describe_request_error(&e),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProseGuardError::AnnotatorUnavailable {
                endpoint,
                reason: format!("health check returned HTTP {status}"),
            });
        }

        Ok(Self { client, endpoint })
    }

    fn request(&self, text: &str) -> Result<AnnotateResponse> {
        let url = format!("{}/annotate", self.endpoint);
        let response = self
            .client
            .post(&url)
            .json(&AnnotateRequest { text })
            .send()
            .map_err(|e| ProseGuardError::Annotator(describe_request_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProseGuardError::Annotator(format!(
                "server returned status {}",
                status.as_u16()
            )));
        }

        response
            .json()
            .map_err(|e| ProseGuardError::Annotator(format!("invalid response body: {e}")))
    }
}

#[cfg(not(tarpaulin_include))]
impl Annotator for HttpAnnotator {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let response = self.request(text)?;
        Ok(response.sentences.into_iter().map(|s| s.text).collect())
    }

    fn annotate(&self, sentence: &str) -> Result<Annotation> {
        let response = self.request(sentence)?;
        annotation_from_response(sentence, response)
    }
}

#[cfg(not(tarpaulin_include))]
fn describe_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        e.to_string()
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
