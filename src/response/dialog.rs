//! Multi-turn dialog state reported by the service

use super::error::ParseError;
use super::json::{Fields, FromJson};
use std::fmt;

/// Progress of a multi-turn exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogStatus {
    Finished,
    Question,
    Other(String),
}

impl DialogStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DialogStatus::Finished => "Finished",
            DialogStatus::Question => "Question",
            DialogStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for DialogStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Finished" => DialogStatus::Finished,
            "Question" => DialogStatus::Question,
            _ => DialogStatus::Other(s),
        }
    }
}

impl fmt::Display for DialogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The service's request for continued interaction.
///
/// `prompt`, `parameter_name` and `parameter_type` are only populated while
/// the dialog is still open; a finished dialog always has them as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Correlates a reply with the exchange it continues
    pub context_id: String,
    pub status: DialogStatus,
    pub prompt: Option<String>,
    pub parameter_name: Option<String>,
    pub parameter_type: Option<String>,
}

impl Dialog {
    pub fn is_finished(&self) -> bool {
        self.status == DialogStatus::Finished
    }
}

impl FromJson for Dialog {
    const TYPE_NAME: &'static str = "Dialog";

    fn from_fields(fields: &Fields<'_>) -> Result<Self, ParseError> {
        let context_id = fields.string_any(&["contextId", "contextID"])?;
        let status = DialogStatus::from(fields.string("status")?);

        let (prompt, parameter_name, parameter_type) = if status == DialogStatus::Finished {
            (None, None, None)
        } else {
            (
                fields.opt_string("prompt")?,
                fields.opt_string("parameterName")?,
                fields.opt_string("parameterType")?,
            )
        };

        Ok(Self {
            context_id,
            status,
            prompt,
            parameter_name,
            parameter_type,
        })
    }
}
