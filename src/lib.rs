//! LUIS dialog client
//!
//! Sends queries to a LUIS application, maps the JSON answers onto a typed
//! response tree, and drives multi-turn dialogs in which the service asks
//! for missing action parameters until it has everything it needs.

#![allow(clippy::must_use_candidate)] // accessors and constructors throughout the public API
#![allow(clippy::missing_errors_doc)] // every fallible call returns one of the documented error enums
#![allow(clippy::return_self_not_must_use)] // with_* builders on DialogDriver

pub mod client;
pub mod config;
pub mod conversation;
pub mod driver;
pub mod endpoint;
pub mod error;
pub mod response;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::LuisClient;
pub use config::{ConfigError, LuisConfig};
pub use conversation::Conversation;
pub use driver::{CancelVocabulary, DialogDriver, DialogState, Outcome, Prompt, StdinPrompt};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use response::{Action, Dialog, DialogStatus, Entity, Intent, Parameter, ParseError, Response};
pub use transport::{
    BlockingTransport, HttpTransport, LoggingTransport, Transport, TransportError,
    TransportErrorKind,
};
