//! Dialog driver state types

use crate::response::Dialog;

/// The open dialog a reply will be bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDialog {
    pub context_id: String,
    pub prompt: Option<String>,
    pub parameter_name: Option<String>,
    pub parameter_type: Option<String>,
}

impl PendingDialog {
    /// Text to show the user, falling back to the parameter being filled
    pub fn question(&self) -> String {
        match (&self.prompt, &self.parameter_name) {
            (Some(prompt), _) => prompt.clone(),
            (None, Some(name)) => format!("Please provide a value for '{name}'"),
            (None, None) => "Please provide more information".to_string(),
        }
    }
}

impl From<&Dialog> for PendingDialog {
    fn from(dialog: &Dialog) -> Self {
        Self {
            context_id: dialog.context_id.clone(),
            prompt: dialog.prompt.clone(),
            parameter_name: dialog.parameter_name.clone(),
            parameter_type: dialog.parameter_type.clone(),
        }
    }
}

/// Where the turn-taking currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Nothing sent yet
    #[default]
    AwaitingInitialQuery,
    /// The service asked a question and waits for a reply
    AwaitingInfo(PendingDialog),
    Finished,
    /// The user abandoned the dialog
    Cancelled,
}

impl DialogState {
    pub fn pending(&self) -> Option<&PendingDialog> {
        match self {
            DialogState::AwaitingInfo(pending) => Some(pending),
            _ => None,
        }
    }

    /// No further reply is accepted
    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogState::Finished | DialogState::Cancelled)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DialogState::AwaitingInitialQuery => "awaiting_initial_query",
            DialogState::AwaitingInfo(_) => "awaiting_info",
            DialogState::Finished => "finished",
            DialogState::Cancelled => "cancelled",
        }
    }
}
