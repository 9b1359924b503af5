//! In-memory values carried across the bridge.

use indexmap::IndexMap;
use sdk_marshal_registry::ModelValue;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use crate::response::ResponseEnvelope;
use crate::serialize::serialize;

/// Wire form of [`MarshalValue::Unset`].
pub const UNSET_LITERAL: &str = "UNSET";

/// One argument or result, with one variant per wire shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MarshalValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Field intentionally omitted; distinct from [`MarshalValue::Null`].
    Unset,
    List(Vec<MarshalValue>),
    Map(IndexMap<String, MarshalValue>),
    Model(ModelValue),
    Response(Box<ResponseEnvelope>),
    /// Untyped JSON: a dict-valued field, or a best-effort fallback when
    /// the hinted model could not be produced.
    Raw(JsonValue),
}

impl MarshalValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Whether this value, or anything inside it, fell back to raw JSON.
    pub fn contains_raw(&self) -> bool {
        match self {
            Self::Raw(_) => true,
            Self::List(items) => items.iter().any(Self::contains_raw),
            Self::Map(entries) => entries.values().any(Self::contains_raw),
            Self::Response(envelope) => envelope.parsed.contains_raw(),
            _ => false,
        }
    }

    pub fn as_model(&self) -> Option<&ModelValue> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_response(&self) -> Option<&ResponseEnvelope> {
        match self {
            Self::Response(envelope) => Some(envelope),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&JsonValue> {
        match self {
            Self::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// Scalars keep their own variant, containers stay raw JSON.
    pub(crate) fn passthrough(data: &JsonValue) -> Self {
        match data {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => Self::Number(n.clone()),
            JsonValue::String(s) => Self::String(s.clone()),
            JsonValue::Array(_) | JsonValue::Object(_) => Self::Raw(data.clone()),
        }
    }
}

/// Writes `Unset` as the `"UNSET"` literal.
impl Serialize for MarshalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl From<bool> for MarshalValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MarshalValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for MarshalValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for MarshalValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for MarshalValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for MarshalValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MarshalValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ModelValue> for MarshalValue {
    fn from(value: ModelValue) -> Self {
        Self::Model(value)
    }
}

impl From<ResponseEnvelope> for MarshalValue {
    fn from(value: ResponseEnvelope) -> Self {
        Self::Response(Box::new(value))
    }
}

impl<T: Into<MarshalValue>> From<Vec<T>> for MarshalValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MarshalValue>> From<Option<T>> for MarshalValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<MarshalValue>> FromIterator<(String, T)> for MarshalValue {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
