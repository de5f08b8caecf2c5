//! Blocking transport built on ureq
//!
//! Requests run on tokio's blocking pool so this type satisfies the same
//! async [`Transport`] trait as [`super::HttpTransport`].

use super::{Transport, TransportError};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

pub struct BlockingTransport {
    agent: ureq::Agent,
}

impl BlockingTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }

    /// Perform the request on the calling thread
    pub fn get_blocking(&self, url: &str) -> Result<Value, TransportError> {
        get_with(&self.agent, url)
    }
}

fn get_with(agent: &ureq::Agent, url: &str) -> Result<Value, TransportError> {
    let response = match agent.get(url).set("accept", "application/json").call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            let body = response.into_string().unwrap_or_default();
            return Err(TransportError::from_status(status, &body));
        }
        // Only the kind: the transport error's Display includes the URL
        Err(ureq::Error::Transport(e)) => {
            return Err(TransportError::network(format!("Request failed: {}", e.kind())));
        }
    };

    let body = response
        .into_string()
        .map_err(|e| TransportError::network(format!("Failed to read response: {e}")))?;

    serde_json::from_str(&body).map_err(|e| {
        TransportError::decode(format!("Failed to parse response: {e} - body: {body}"))
    })
}

#[async_trait]
impl Transport for BlockingTransport {
    async fn get(&self, url: &Url) -> Result<Value, TransportError> {
        let agent = self.agent.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || get_with(&agent, &url))
            .await
            .map_err(|e| TransportError::unknown(format!("Blocking request aborted: {e}")))?
    }
}
