//! Crate-level error type

use crate::config::ConfigError;
use crate::response::ParseError;
use crate::transport::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Query text cannot be empty")]
    EmptyQuery,

    #[error("No dialog is waiting for a reply")]
    NoActiveDialog,

    #[error("Dialog {context_id} is still waiting for a reply (answer or cancel it first)")]
    DialogInProgress { context_id: String },

    #[error("Conversation has no responses")]
    EmptyConversation,

    #[error("Malformed response: {0}")]
    Parse(#[from] ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read answer: {0}")]
    Prompt(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
