//! Intents and the actions attached to them

use super::entity::Entity;
use super::error::ParseError;
use super::json::{Fields, FromJson};

/// A classification hypothesis for what the user meant
#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub name: String,
    /// Confidence in `[0, 1]`
    pub score: f64,
    pub actions: Option<Vec<Action>>,
}

impl Intent {
    /// First action flagged as triggered, in payload order.
    ///
    /// The service is expected to trigger at most one action per intent;
    /// if several are flagged the first one wins.
    pub fn triggered_action(&self) -> Option<&Action> {
        self.actions.as_deref()?.iter().find(|a| a.triggered)
    }
}

impl FromJson for Intent {
    const TYPE_NAME: &'static str = "Intent";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            name: fields.string("intent")?,
            score: fields.f64("score")?,
            actions: fields.opt_list("actions")?,
        })
    }
}

/// An operation the service associates with an intent
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    pub triggered: bool,
    pub parameters: Vec<Parameter>,
}

impl Action {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Required parameters the conversation has not filled yet
    pub fn missing_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.required && p.value.is_none())
    }
}

impl FromJson for Action {
    const TYPE_NAME: &'static str = "Action";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            name: fields.string("name")?,
            triggered: fields.bool("triggered")?,
            parameters: fields.list("parameters")?,
        })
    }
}

/// One named argument of an action
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub parameter_type: String,
    pub required: bool,
    /// Filler entity, absent until the conversation resolves it
    pub value: Option<Entity>,
}

impl FromJson for Parameter {
    const TYPE_NAME: &'static str = "Parameter";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            name: fields.string("name")?,
            parameter_type: fields.string("type")?,
            required: fields.bool("required")?,
            value: fields.opt_object("value")?,
        })
    }
}
