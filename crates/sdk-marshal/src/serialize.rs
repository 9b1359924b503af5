//! Value -> JSON-safe tree.

use serde_json::{Map, Value as JsonValue};

use crate::error::MarshalError;
use crate::response::encode_response;
use crate::value::{MarshalValue, UNSET_LITERAL};

/// Encode an argument or result as JSON.
///
/// Models contribute their `to_dict()` mapping, containers are encoded
/// element by element in order, `Unset` becomes `"UNSET"` and raw JSON is
/// emitted as is. Fails only for response bodies that are not UTF-8.
pub fn serialize(value: &MarshalValue) -> Result<JsonValue, MarshalError> {
    Ok(match value {
        MarshalValue::Null => JsonValue::Null,
        MarshalValue::Bool(b) => JsonValue::Bool(*b),
        MarshalValue::Number(n) => JsonValue::Number(n.clone()),
        MarshalValue::String(s) => JsonValue::String(s.clone()),
        MarshalValue::Model(model) => JsonValue::Object(model.to_dict()),
        MarshalValue::List(items) => JsonValue::Array(
            items
                .iter()
                .map(serialize)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        MarshalValue::Map(entries) => JsonValue::Object(
            entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), serialize(value)?)))
                .collect::<Result<Map<_, _>, MarshalError>>()?,
        ),
        MarshalValue::Response(envelope) => encode_response(envelope)?,
        MarshalValue::Unset => JsonValue::String(UNSET_LITERAL.to_string()),
        MarshalValue::Raw(raw) => raw.clone(),
    })
}

/// [`serialize`] straight to JSON text.
pub fn to_json_string(value: &MarshalValue) -> Result<String, MarshalError> {
    Ok(serde_json::to_string(&serialize(value)?)?)
}
