//! LUIS query client

use crate::conversation::Conversation;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::response::Response;
use crate::transport::Transport;

/// Reject blank queries before any network call is made.
///
/// Returns the text with surrounding whitespace removed; that is the form
/// sent to the service.
pub fn validate_query(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(Error::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}

/// Sends queries for one application through a [`Transport`]
pub struct LuisClient<T> {
    endpoint: Endpoint,
    transport: T,
}

impl<T: Transport> LuisClient<T> {
    pub fn new(endpoint: Endpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send a fresh query.
    ///
    /// Surrounding whitespace is trimmed before sending; blank text fails
    /// with [`Error::EmptyQuery`] without touching the transport.
    pub async fn analyze(&self, text: &str) -> Result<Response> {
        let text = validate_query(text)?;
        tracing::debug!(app_id = %self.endpoint.app_id(), query = %text, "Sending query");
        let body = self.transport.get(&self.endpoint.query_url(text)).await?;
        Ok(Response::from_json(body)?)
    }

    /// Answer the open dialog identified by `context_id`.
    ///
    /// `text` is trimmed and validated the same way as in [`Self::analyze`].
    pub async fn reply(
        &self,
        text: &str,
        context_id: &str,
        parameter_name: Option<&str>,
    ) -> Result<Response> {
        let text = validate_query(text)?;
        tracing::debug!(
            app_id = %self.endpoint.app_id(),
            context_id = %context_id,
            parameter = ?parameter_name,
            "Sending dialog reply"
        );
        let url = self.endpoint.reply_url(text, context_id, parameter_name);
        let body = self.transport.get(&url).await?;
        Ok(Response::from_json(body)?)
    }

    /// Send `text` within `conversation` and record the response.
    ///
    /// An empty conversation, or one whose first response carried no dialog,
    /// gets a plain query. Otherwise the text is sent as a reply bound to the
    /// conversation's context id and the last response's pending parameter;
    /// if that dialog is no longer open this fails with
    /// [`Error::NoActiveDialog`]. On failure the conversation is left
    /// untouched.
    pub async fn analyze_into<'c>(
        &self,
        text: &str,
        conversation: &'c mut Conversation,
    ) -> Result<&'c Response> {
        let response = match conversation.context_id() {
            Some(context_id) => {
                let last = conversation.last()?;
                if !last.needs_more_info() {
                    return Err(Error::NoActiveDialog);
                }
                let parameter = last.dialog.as_ref().and_then(|d| d.parameter_name.as_deref());
                self.reply(text, context_id, parameter).await?
            }
            None => self.analyze(text).await?,
        };
        conversation.record(response);
        conversation.last()
    }
}
