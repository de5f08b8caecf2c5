//! Field access over a JSON object with LUIS-specific absence rules
//!
//! A key that is missing or explicitly `null` is absent. Absent required
//! keys fail with [`ParseError::MissingField`]; absent optional keys map to
//! `None`. Single/list expectations are checked in both directions.

use super::error::{ParseError, Shape};
use serde_json::{Map, Value};

/// A type that can be built from one JSON object
pub(crate) trait FromJson: Sized {
    const TYPE_NAME: &'static str;

    fn from_fields(fields: &Fields<'_>) -> Result<Self, ParseError>;
}

/// Parse `value` (found under `field` of `parent`) as a single `T`
pub(crate) fn parse<T: FromJson>(
    value: &Value,
    field: &'static str,
    parent: &'static str,
) -> Result<T, ParseError> {
    match value {
        Value::Object(map) => T::from_fields(&Fields {
            map,
            type_name: T::TYPE_NAME,
        }),
        Value::Array(_) => Err(ParseError::ShapeMismatch {
            field,
            type_name: parent,
            expected: Shape::Single,
            found: Shape::Sequence,
        }),
        _ => Err(ParseError::InvalidType {
            field,
            type_name: parent,
            expected: "an object",
        }),
    }
}

/// Read-only view of one JSON object being mapped onto `type_name`
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    type_name: &'static str,
}

impl<'a> Fields<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &'static str) -> Result<&'a Value, ParseError> {
        self.get(key).ok_or(ParseError::MissingField {
            field: key,
            type_name: self.type_name,
        })
    }

    fn invalid(&self, key: &'static str, expected: &'static str) -> ParseError {
        ParseError::InvalidType {
            field: key,
            type_name: self.type_name,
            expected,
        }
    }

    pub fn string(&self, key: &'static str) -> Result<String, ParseError> {
        self.as_string(key, self.required(key)?)
    }

    pub fn opt_string(&self, key: &'static str) -> Result<Option<String>, ParseError> {
        self.get(key).map(|v| self.as_string(key, v)).transpose()
    }

    /// First present key among `keys` wins; a miss is reported against `keys[0]`
    pub fn string_any(&self, keys: &[&'static str]) -> Result<String, ParseError> {
        for &key in keys {
            if let Some(v) = self.get(key) {
                return self.as_string(key, v);
            }
        }
        Err(ParseError::MissingField {
            field: keys.first().copied().unwrap_or_default(),
            type_name: self.type_name,
        })
    }

    fn as_string(&self, key: &'static str, value: &Value) -> Result<String, ParseError> {
        value
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| self.invalid(key, "a string"))
    }

    pub fn f64(&self, key: &'static str) -> Result<f64, ParseError> {
        self.required(key)?
            .as_f64()
            .ok_or_else(|| self.invalid(key, "a number"))
    }

    pub fn opt_f64(&self, key: &'static str) -> Result<Option<f64>, ParseError> {
        self.get(key)
            .map(|v| v.as_f64().ok_or_else(|| self.invalid(key, "a number")))
            .transpose()
    }

    pub fn opt_usize(&self, key: &'static str) -> Result<Option<usize>, ParseError> {
        self.get(key)
            .map(|v| {
                v.as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| self.invalid(key, "a non-negative integer"))
            })
            .transpose()
    }

    pub fn bool(&self, key: &'static str) -> Result<bool, ParseError> {
        self.required(key)?
            .as_bool()
            .ok_or_else(|| self.invalid(key, "a boolean"))
    }

    pub fn opt_value(&self, key: &'static str) -> Option<Value> {
        self.get(key).cloned()
    }

    pub fn object<T: FromJson>(&self, key: &'static str) -> Result<T, ParseError> {
        parse(self.required(key)?, key, self.type_name)
    }

    pub fn opt_object<T: FromJson>(&self, key: &'static str) -> Result<Option<T>, ParseError> {
        self.get(key)
            .map(|v| parse(v, key, self.type_name))
            .transpose()
    }

    pub fn list<T: FromJson>(&self, key: &'static str) -> Result<Vec<T>, ParseError> {
        self.as_list(key, self.required(key)?)
    }

    pub fn opt_list<T: FromJson>(&self, key: &'static str) -> Result<Option<Vec<T>>, ParseError> {
        self.get(key).map(|v| self.as_list(key, v)).transpose()
    }

    fn as_list<T: FromJson>(&self, key: &'static str, value: &Value) -> Result<Vec<T>, ParseError> {
        let Value::Array(items) = value else {
            return Err(ParseError::ShapeMismatch {
                field: key,
                type_name: self.type_name,
                expected: Shape::Sequence,
                found: Shape::Single,
            });
        };
        items
            .iter()
            .map(|item| parse(item, key, self.type_name))
            .collect()
    }
}
