//! Pure dialog transitions
//!
//! Deciding what to send and which state a response leads to involves no
//! I/O; the driver performs the resulting effect and feeds the response
//! back through [`settle`].

use super::state::{DialogState, PendingDialog};
use crate::client::validate_query;
use crate::error::{Error, Result};
use crate::response::Response;

/// Answers that abandon an open dialog instead of being sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelVocabulary {
    words: Vec<String>,
}

impl Default for CancelVocabulary {
    fn default() -> Self {
        Self::new(["cancel", "stop"])
    }
}

impl CancelVocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| {
                    let w: String = w.into();
                    w.trim().to_string()
                })
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Comma separated list, e.g. `"cancel, stop"`
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Case-sensitive match against the trimmed answer
    pub fn matches(&self, answer: &str) -> bool {
        let answer = answer.trim();
        self.words.iter().any(|w| w == answer)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// User input offered to the driver
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    Ask(&'a str),
    Reply(&'a str),
}

/// What the driver must do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendQuery {
        text: String,
    },
    SendReply {
        text: String,
        context_id: String,
        parameter_name: Option<String>,
    },
    Cancel,
}

/// Decide the effect of `input` in `state`.
///
/// Fails without producing an effect, so nothing reaches the network, when
/// the text is blank or the input does not fit the state.
pub fn plan(state: &DialogState, input: Input<'_>, cancel_words: &CancelVocabulary) -> Result<Effect> {
    match (state, input) {
        (DialogState::AwaitingInfo(pending), Input::Ask(_)) => Err(Error::DialogInProgress {
            context_id: pending.context_id.clone(),
        }),

        (_, Input::Ask(text)) => Ok(Effect::SendQuery {
            text: validate_query(text)?.to_string(),
        }),

        (DialogState::AwaitingInfo(_), Input::Reply(answer)) if cancel_words.matches(answer) => {
            Ok(Effect::Cancel)
        }

        (DialogState::AwaitingInfo(pending), Input::Reply(answer)) => Ok(Effect::SendReply {
            text: validate_query(answer)?.to_string(),
            context_id: pending.context_id.clone(),
            parameter_name: pending.parameter_name.clone(),
        }),

        (_, Input::Reply(_)) => Err(Error::NoActiveDialog),
    }
}

/// State reached once `response` has been received
pub fn settle(response: &Response) -> DialogState {
    match &response.dialog {
        Some(dialog) if response.needs_more_info() => {
            DialogState::AwaitingInfo(PendingDialog::from(dialog))
        }
        _ => DialogState::Finished,
    }
}
