#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

use serde_json::{Value, json};

/// In-process stand-in for the annotation service.
///
/// Serves `GET /health` and `POST /annotate` over plain HTTP on an
/// ephemeral local port. `/annotate` answers from a canned text-to-payload
/// table, so tests control the linguistic analysis without running a real
/// parser. The server thread lives until the test process exits.
pub struct AnnotatorStub {
    addr: SocketAddr,
}

impl AnnotatorStub {
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Builds the canned route table for an [`AnnotatorStub`].
pub struct StubBuilder {
    routes: HashMap<String, Value>,
}

impl StubBuilder {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Answer segmentation of the exact document `text` with `sentences`.
    pub fn document(mut self, text: &str, sentences: &[&str]) -> Self {
        let entry = self
            .routes
            .entry(text.to_string())
            .or_insert_with(empty_payload);
        entry["sentences"] = Value::Array(sentences.iter().map(|s| json!({ "text": s })).collect());
        self
    }

    /// Answer annotation of the exact sentence `text` with `annotation`
    /// (see [`annotation`] and the canned sentence helpers).
    pub fn sentence(mut self, text: &str, annotation: Value) -> Self {
        let entry = self
            .routes
            .entry(text.to_string())
            .or_insert_with(empty_payload);
        entry["tokens"] = annotation["tokens"].clone();
        entry["noun_chunks"] = annotation["noun_chunks"].clone();
        self
    }

    /// Bind an ephemeral port and serve the routes on a background thread.
    pub fn start(self) -> AnnotatorStub {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");
        let routes = self.routes;
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                handle_annotator_connection(stream, &routes);
            }
        });
        AnnotatorStub { addr }
    }
}

impl Default for StubBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_payload() -> Value {
    json!({ "tokens": [], "noun_chunks": [], "sentences": [] })
}

fn handle_annotator_connection(stream: TcpStream, routes: &HashMap<String, Value>) {
    let _ = serve_request(stream, |method, path, body| {
        if method == "GET" && path == "/health" {
            return (200, json!({ "status": "ok" }).to_string());
        }
        if method == "POST" && path == "/annotate" {
            let request: Value = match serde_json::from_slice(body) {
                Ok(value) => value,
                Err(_) => return (400, json!({ "error": "invalid json" }).to_string()),
            };
            let text = request["text"].as_str().unwrap_or_default();
            let payload = routes.get(text).cloned().unwrap_or_else(empty_payload);
            return (200, payload.to_string());
        }
        (404, json!({ "error": "not found" }).to_string())
    });
}

/// Stand-in for the Gemini API. Every `generateContent` call is answered
/// with the same reply text.
pub struct GeminiStub {
    addr: SocketAddr,
}

impl GeminiStub {
    /// Serve `reply` (e.g. `"YES"` or `"NO"`) for every request.
    pub fn answering(reply: &str) -> Self {
        Self::with_status(200, reply)
    }

    /// Serve every request with `status` and `reply` as the candidate text.
    pub fn with_status(status: u16, reply: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");
        let reply = reply.to_string();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let body = json!({
                    "candidates": [
                        { "content": { "parts": [{ "text": reply }] } }
                    ]
                })
                .to_string();
                let _ = serve_request(stream, move |_, _, _| (status, body));
            }
        });
        GeminiStub { addr }
    }

    pub fn api_base(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Read one HTTP request from `stream`, hand it to `respond`, write back
/// the answer and close the connection.
fn serve_request<F>(mut stream: TcpStream, respond: F) -> std::io::Result<()>
where
    F: FnOnce(&str, &str, &[u8]) -> (u16, String),
{
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        if line.trim().is_empty() {
            break;
        }
        let lower = line.to_ascii_lowercase();
        if let Some(value) = lower.strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;

    let (status, response_body) = respond(&method, &path, &body);
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Not Found",
    };
    write!(
        stream,
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n\
         {response_body}",
        response_body.len()
    )?;
    stream.flush()
}

/// JSON for one token of an annotation payload.
pub fn token(text: &str, tag: &str, pos: &str, dep: &str, head: usize) -> Value {
    json!({
        "text": text,
        "tag": tag,
        "pos": pos,
        "dep": dep,
        "head": head,
        "is_punct": false,
        "is_space": false,
    })
}

/// JSON for a punctuation token.
pub fn punct(text: &str, head: usize) -> Value {
    json!({
        "text": text,
        "tag": ".",
        "pos": "PUNCT",
        "dep": "punct",
        "head": head,
        "is_punct": true,
        "is_space": false,
    })
}

/// JSON for a noun chunk spanning `[start, end)` with head token `root`.
pub fn chunk(start: usize, end: usize, root: usize) -> Value {
    json!({ "start": start, "end": end, "root": root })
}

/// Full annotation payload from tokens and chunks.
pub fn annotation(tokens: Vec<Value>, chunks: Vec<Value>) -> Value {
    json!({ "tokens": tokens, "noun_chunks": chunks, "sentences": [] })
}

/// "Turn the knob." -- passes every rule.
pub fn clean_sentence() -> Value {
    annotation(
        vec![
            token("Turn", "VB", "VERB", "ROOT", 0),
            token("the", "DT", "DET", "det", 2),
            token("knob", "NN", "NOUN", "dobj", 0),
            punct(".", 0),
        ],
        vec![chunk(1, 3, 2)],
    )
}

/// "Turn shaft assembly." -- noun phrase without an article.
pub fn missing_determiner_sentence() -> Value {
    annotation(
        vec![
            token("Turn", "VB", "VERB", "ROOT", 0),
            token("shaft", "NN", "NOUN", "compound", 2),
            token("assembly", "NN", "NOUN", "dobj", 0),
            punct(".", 0),
        ],
        vec![chunk(1, 3, 2)],
    )
}

/// "Disengage the lock and lift the cover." -- two coordinated actions.
pub fn two_action_sentence() -> Value {
    annotation(
        vec![
            token("Disengage", "VB", "VERB", "ROOT", 0),
            token("the", "DT", "DET", "det", 2),
            token("lock", "NN", "NOUN", "dobj", 0),
            token("and", "CC", "CCONJ", "cc", 0),
            token("lift", "VB", "VERB", "conj", 0),
            token("the", "DT", "DET", "det", 6),
            token("cover", "NN", "NOUN", "dobj", 4),
            punct(".", 0),
        ],
        vec![chunk(1, 3, 2), chunk(5, 7, 6)],
    )
}
