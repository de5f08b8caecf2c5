//! Mock implementations and payload fixtures for testing
//!
//! These mocks enable driver and client tests without real I/O.

use crate::driver::Prompt;
use crate::transport::{Transport, TransportError};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Mock Transport
// ============================================================================

/// Transport that returns queued results and records every URL it was given
pub struct MockTransport {
    results: Mutex<VecDeque<Result<Value, TransportError>>>,
    urls: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            urls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful JSON body
    pub fn queue_json(&self, body: Value) {
        self.results.lock().unwrap().push_back(Ok(body));
    }

    /// Queue a transport failure
    pub fn queue_error(&self, error: TransportError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_urls(&self) -> Vec<Url> {
        self.urls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    /// Value of query parameter `key` on the `index`th request
    pub fn query_param(&self, index: usize, key: &str) -> Option<String> {
        self.urls.lock().unwrap()[index]
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<Value, TransportError> {
        self.urls.lock().unwrap().push(url.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::network("No mock response queued")))
    }
}

// ============================================================================
// Stub HTTP Server
// ============================================================================

fn stub_url(addr: std::net::SocketAddr) -> Url {
    Url::parse(&format!(
        "http://{addr}/apps/app?subscription-key=SECRETKEY&q=hi&verbose=true"
    ))
    .unwrap()
}

/// Serve the same canned response to every connection, returning a query URL
/// that points at the server
pub async fn stub_server(status: &str, body: &str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    );

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let response = response.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    stub_url(addr)
}

/// A query URL for a port nothing listens on
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    stub_url(addr)
}

// ============================================================================
// Scripted Prompt
// ============================================================================

/// Prompt collaborator that answers from a fixed script
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    /// Every prompt shown, in order
    pub prompts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn next_answer(&mut self, prompt: &str) -> std::io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}

// ============================================================================
// Payload Fixtures
// ============================================================================

pub mod fixtures {
    use serde_json::{json, Value};

    fn book_flight_intent(triggered: bool, time: Option<&str>) -> Value {
        let time_value = time.map_or(Value::Null, |t| {
            json!({"type": "builtin.datetime.time", "entity": t, "resolution": {"time": "T15"}})
        });
        json!({
            "intent": "BookFlight",
            "score": 0.97,
            "actions": [{
                "name": "BookFlight",
                "triggered": triggered,
                "parameters": [
                    {"name": "destination", "type": "city", "required": true,
                     "value": {"type": "city", "entity": "Paris"}},
                    {"name": "time", "type": "builtin.datetime.time", "required": true,
                     "value": time_value}
                ]
            }]
        })
    }

    /// A response with no dialog
    pub fn simple(query: &str) -> Value {
        json!({
            "query": query,
            "topScoringIntent": {"intent": "Greeting", "score": 0.91},
            "intents": [
                {"intent": "Greeting", "score": 0.91},
                {"intent": "None", "score": 0.04}
            ],
            "entities": []
        })
    }

    /// A response asking for `parameter_name` within dialog `context_id`
    pub fn question(context_id: &str, parameter_name: &str) -> Value {
        json!({
            "query": "book a flight to Paris",
            "topScoringIntent": book_flight_intent(false, None),
            "intents": [
                book_flight_intent(false, None),
                {"intent": "None", "score": 0.02}
            ],
            "entities": [
                {"type": "city", "entity": "paris", "startIndex": 17, "endIndex": 21, "score": 0.93}
            ],
            "dialog": {
                "prompt": "What time do you want to leave?",
                "parameterName": parameter_name,
                "parameterType": "builtin.datetime.time",
                "contextId": context_id,
                "status": "Question"
            }
        })
    }

    /// The final response of dialog `context_id`, with the action triggered
    pub fn finished(context_id: &str) -> Value {
        json!({
            "query": "3pm",
            "topScoringIntent": book_flight_intent(true, Some("3pm")),
            "intents": [book_flight_intent(true, Some("3pm"))],
            "entities": [
                {"type": "builtin.datetime.time", "entity": "3pm", "startIndex": 0, "endIndex": 2, "score": 0.88}
            ],
            "dialog": {"contextId": context_id, "status": "Finished"}
        })
    }
}
