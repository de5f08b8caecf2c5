//! Entities recognized in a query

use super::error::ParseError;
use super::json::{Fields, FromJson};
use serde_json::Value;

/// A recognized span of the query text.
///
/// Entities listed on a response carry their character offsets and a score.
/// Entities filling an action parameter usually do not, so those fields are
/// optional rather than split into a separate type.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Category tag, e.g. `builtin.datetime.time`
    pub entity_type: String,
    /// The recognized text
    pub value: String,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
    pub score: Option<f64>,
    /// Opaque resolution payload, passed through untouched
    pub resolution: Option<Value>,
}

impl Entity {
    /// Inclusive character offsets into the query, when the service sent both
    pub fn span(&self) -> Option<(usize, usize)> {
        Some((self.start_index?, self.end_index?))
    }
}

impl FromJson for Entity {
    const TYPE_NAME: &'static str = "Entity";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            entity_type: fields.string_any(&["type", "name"])?,
            value: fields.string("entity")?,
            start_index: fields.opt_usize("startIndex")?,
            end_index: fields.opt_usize("endIndex")?,
            score: fields.opt_f64("score")?,
            resolution: fields.opt_value("resolution"),
        })
    }
}
