//! Multi-turn dialog driver
//!
//! Turn-taking runs `AwaitingInitialQuery -> AwaitingInfo -> Finished`, or
//! ends in `Cancelled` when the user answers with a cancel word. Decisions
//! come from the pure functions in [`transition`]; this module performs the
//! network call they ask for and records each response exactly once, in
//! call order. A failed call leaves state and history as they were.

mod prompt;
mod state;
pub mod transition;


pub use prompt::{Prompt, StdinPrompt};
pub use state::{DialogState, PendingDialog};
pub use transition::{plan, settle, CancelVocabulary, Effect, Input};

use crate::client::LuisClient;
use crate::conversation::Conversation;
use crate::error::{Error, Result};
use crate::response::Response;
use crate::transport::Transport;
use tracing::{Instrument, Span};

/// How a driven dialog ended
#[derive(Debug)]
pub enum Outcome<'a> {
    /// The service needs nothing more; carries the final response
    Finished(&'a Response),
    Cancelled,
}

/// Drives one conversation at a time against a LUIS application
pub struct DialogDriver<T> {
    client: LuisClient<T>,
    state: DialogState,
    conversation: Option<Conversation>,
    cancel_words: CancelVocabulary,
    span: Span,
}

impl<T: Transport> DialogDriver<T> {
    pub fn new(client: LuisClient<T>) -> Self {
        let span = tracing::info_span!("dialog", app_id = %client.endpoint().app_id());
        Self {
            client,
            state: DialogState::default(),
            conversation: None,
            cancel_words: CancelVocabulary::default(),
            span,
        }
    }

    pub fn with_cancel_words(mut self, cancel_words: CancelVocabulary) -> Self {
        self.cancel_words = cancel_words;
        self
    }

    /// Log everything this driver does inside `span`
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// The current (or most recent) conversation
    pub fn conversation(&self) -> Option<&Conversation> {
        self.conversation.as_ref()
    }

    pub fn into_conversation(self) -> Option<Conversation> {
        self.conversation
    }

    /// Send an initial query, starting a new conversation
    pub async fn ask(&mut self, text: &str) -> Result<&Response> {
        self.step(Input::Ask(text))
            .await?
            .ok_or(Error::EmptyConversation)
    }

    /// Answer the open dialog. Returns `None` when the answer cancelled it.
    pub async fn reply(&mut self, answer: &str) -> Result<Option<&Response>> {
        self.step(Input::Reply(answer)).await
    }

    /// Ask `text`, then keep answering through `prompt` until the dialog
    /// finishes or is cancelled. Blank answers are asked again.
    pub async fn run<P>(&mut self, text: &str, prompt: &mut P) -> Result<Outcome<'_>>
    where
        P: Prompt + ?Sized,
    {
        self.ask(text).await?;

        while let Some(pending) = self.state.pending() {
            let question = pending.question();
            let answer = prompt.next_answer(&question).await?;
            match self.reply(&answer).await {
                Ok(_) => {}
                Err(Error::EmptyQuery) => {
                    self.span.in_scope(|| tracing::warn!("Blank answer, asking again"));
                }
                Err(e) => return Err(e),
            }
        }

        if self.state == DialogState::Cancelled {
            return Ok(Outcome::Cancelled);
        }
        let conversation = self.conversation.as_ref().ok_or(Error::EmptyConversation)?;
        Ok(Outcome::Finished(conversation.last()?))
    }

    async fn step(&mut self, input: Input<'_>) -> Result<Option<&Response>> {
        let effect = plan(&self.state, input, &self.cancel_words).inspect_err(|e| {
            self.span.in_scope(|| {
                tracing::warn!(state = self.state.name(), error = %e, "Input rejected");
            });
        })?;

        match effect {
            Effect::Cancel => {
                self.state = DialogState::Cancelled;
                self.span.in_scope(|| tracing::info!("Dialog cancelled by user"));
                Ok(None)
            }

            Effect::SendQuery { text } => {
                let response = self
                    .client
                    .analyze(&text)
                    .instrument(self.span.clone())
                    .await?;
                self.state = settle(&response);
                self.log_transition();
                let conversation = self.conversation.insert(Conversation::start(response));
                conversation.last().map(Some)
            }

            Effect::SendReply {
                text,
                context_id,
                parameter_name,
            } => {
                let response = self
                    .client
                    .reply(&text, &context_id, parameter_name.as_deref())
                    .instrument(self.span.clone())
                    .await?;
                self.state = settle(&response);
                self.log_transition();
                let conversation = self.conversation.get_or_insert_with(Conversation::new);
                conversation.record(response);
                conversation.last().map(Some)
            }
        }
    }

    fn log_transition(&self) {
        self.span.in_scope(|| {
            tracing::info!(
                state = self.state.name(),
                context_id = ?self.state.pending().map(|p| p.context_id.as_str()),
                "Dialog advanced"
            );
        });
    }
}
