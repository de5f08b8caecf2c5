//! Typed view of a LUIS query response
//!
//! A response is built once from the JSON payload and never mutated. Values
//! derived from other fields (whether more input is needed, which action was
//! triggered) are computed on access instead of being stored.

mod dialog;
mod entity;
mod error;
mod intent;
mod json;

#[cfg(test)]
mod proptests;

pub use dialog::{Dialog, DialogStatus};
pub use entity::Entity;
pub use error::{ParseError, Shape};
pub use intent::{Action, Intent, Parameter};

use json::{Fields, FromJson};
use serde_json::Value;

/// One answer from the service to one query
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The payload as received, kept for diagnostics
    pub raw: Value,
    pub query: String,
    pub top_scoring_intent: Intent,
    /// Candidate intents in payload order, not necessarily sorted by score
    pub intents: Vec<Intent>,
    pub entities: Vec<Entity>,
    pub dialog: Option<Dialog>,
}

impl Response {
    /// Build a response from a decoded payload
    pub fn from_json(raw: Value) -> Result<Self, ParseError> {
        let parsed: ParsedBody = json::parse(&raw, "response", "Response")?;
        Ok(Self {
            query: parsed.query,
            top_scoring_intent: parsed.top_scoring_intent,
            intents: parsed.intents,
            entities: parsed.entities,
            dialog: parsed.dialog,
            raw,
        })
    }

    /// True while the service still waits for more input
    pub fn needs_more_info(&self) -> bool {
        self.dialog.as_ref().is_some_and(|d| !d.is_finished())
    }

    pub fn context_id(&self) -> Option<&str> {
        self.dialog.as_ref().map(|d| d.context_id.as_str())
    }

    pub fn triggered_action(&self) -> Option<&Action> {
        self.top_scoring_intent.triggered_action()
    }

    pub fn entities_of_type<'a>(&'a self, entity_type: &'a str) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(move |e| e.entity_type == entity_type)
    }
}

impl TryFrom<Value> for Response {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

/// Everything but the raw payload, so parsing can borrow it
struct ParsedBody {
    query: String,
    top_scoring_intent: Intent,
    intents: Vec<Intent>,
    entities: Vec<Entity>,
    dialog: Option<Dialog>,
}

impl FromJson for ParsedBody {
    const TYPE_NAME: &'static str = "Response";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            query: fields.string("query")?,
            top_scoring_intent: fields.object("topScoringIntent")?,
            intents: fields.list("intents")?,
            entities: fields.list("entities")?,
            dialog: fields.opt_object("dialog")?,
        })
    }
}
