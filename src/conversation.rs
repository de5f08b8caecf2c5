//! Append-only history of one multi-turn exchange

use crate::error::{Error, Result};
use crate::response::Response;

/// Every response received for one logical dialog, oldest first.
///
/// Entries are never removed or reordered. The context id comes from the
/// first recorded response's dialog and does not change afterwards.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    responses: Vec<Response>,
    context_id: Option<String>,
}

impl Conversation {
    /// An empty conversation; the first recorded response seeds the context id
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(initial: Response) -> Self {
        let mut conversation = Self::new();
        conversation.record(initial);
        conversation
    }

    pub fn record(&mut self, next: Response) {
        if self.responses.is_empty() {
            self.context_id = next.context_id().map(ToString::to_string);
        }
        self.responses.push(next);
    }

    /// Most recently recorded response
    pub fn last(&self) -> Result<&Response> {
        self.responses.last().ok_or(Error::EmptyConversation)
    }

    pub fn is_finished(&self) -> Result<bool> {
        Ok(!self.last()?.needs_more_info())
    }

    pub fn context_id(&self) -> Option<&str> {
        self.context_id.as_deref()
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
