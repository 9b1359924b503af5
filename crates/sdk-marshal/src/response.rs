//! Tagged JSON form of an HTTP response envelope.
//!
//! ```json
//! {
//!   "_response_type": "Response",
//!   "status_code": 200,
//!   "headers": {"content-type": "application/json"},
//!   "content": "{\"name\":\"rex\"}",
//!   "parsed": {"name": "rex"}
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use sdk_marshal_hint::{classify, extract_response_parsed_type, TypeShape};
use serde_json::{Map, Value as JsonValue};

use crate::deserialize::Marshaller;
use crate::error::{EnvelopeError, MarshalError};
use crate::serialize::serialize;
use crate::value::MarshalValue;

pub const RESPONSE_TYPE_KEY: &str = "_response_type";
pub const RESPONSE_TYPE_TAG: &str = "Response";

/// Status, headers, raw body and parsed payload of one HTTP response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub content: Vec<u8>,
    pub parsed: MarshalValue,
}

impl ResponseEnvelope {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_parsed(mut self, parsed: impl Into<MarshalValue>) -> Self {
        self.parsed = parsed.into();
        self
    }
}

/// Whether `data` carries the response tag.
pub fn is_response_envelope(data: &JsonValue) -> bool {
    data.get(RESPONSE_TYPE_KEY).and_then(JsonValue::as_str) == Some(RESPONSE_TYPE_TAG)
}

/// Encode an envelope; headers are written in sorted order.
pub fn encode_response(envelope: &ResponseEnvelope) -> Result<JsonValue, MarshalError> {
    let content =
        std::str::from_utf8(&envelope.content).map_err(|source| MarshalError::ContentNotUtf8 {
            status_code: envelope.status_code,
            source,
        })?;
    let headers: Map<String, JsonValue> = envelope
        .headers
        .iter()
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(name, value)| (name.clone(), JsonValue::String(value.clone())))
        .collect();

    let mut out = Map::new();
    out.insert(RESPONSE_TYPE_KEY.into(), RESPONSE_TYPE_TAG.into());
    out.insert("status_code".into(), envelope.status_code.into());
    out.insert("headers".into(), JsonValue::Object(headers));
    out.insert("content".into(), content.into());
    out.insert("parsed".into(), serialize(&envelope.parsed)?);
    Ok(JsonValue::Object(out))
}

impl Marshaller {
    /// Rebuild an envelope from its tagged form.
    ///
    /// `hint` is the outer `Response[...]` hint; `parsed` is decoded against
    /// its inner hint. Missing `headers`, `content` or `parsed` decode as
    /// empty; a missing or out-of-range `status_code` is an error.
    pub fn decode_response(
        &self,
        data: &JsonValue,
        hint: &str,
        service: &str,
    ) -> Result<ResponseEnvelope, EnvelopeError> {
        match classify(hint) {
            TypeShape::ResponseOf(parsed_hint) => self.decode_envelope(data, &parsed_hint, service),
            _ => self.decode_envelope(data, extract_response_parsed_type(hint), service),
        }
    }

    /// Decode against an already extracted `parsed` hint.
    pub(crate) fn decode_envelope(
        &self,
        data: &JsonValue,
        parsed_hint: &str,
        service: &str,
    ) -> Result<ResponseEnvelope, EnvelopeError> {
        if !is_response_envelope(data) {
            return Err(EnvelopeError::NotTagged);
        }
        let status_code = data
            .get("status_code")
            .ok_or(EnvelopeError::MissingField("status_code"))?
            .as_u64()
            .and_then(|code| u16::try_from(code).ok())
            .ok_or(EnvelopeError::InvalidField {
                field: "status_code",
                expected: "an HTTP status code",
            })?;

        let mut headers = HashMap::new();
        match data.get("headers") {
            None | Some(JsonValue::Null) => {}
            Some(JsonValue::Object(map)) => {
                for (name, value) in map {
                    let value = value.as_str().ok_or(EnvelopeError::InvalidField {
                        field: "headers",
                        expected: "a map of strings",
                    })?;
                    headers.insert(name.clone(), value.to_string());
                }
            }
            Some(_) => {
                return Err(EnvelopeError::InvalidField {
                    field: "headers",
                    expected: "a map of strings",
                })
            }
        }

        let content = match data.get("content") {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::String(text)) => text.as_bytes().to_vec(),
            Some(_) => {
                return Err(EnvelopeError::InvalidField {
                    field: "content",
                    expected: "a string",
                })
            }
        };

        let parsed = data
            .get("parsed")
            .map_or(MarshalValue::Null, |parsed| {
                self.deserialize(parsed, parsed_hint, service)
            });

        Ok(ResponseEnvelope {
            status_code,
            headers,
            content,
            parsed,
        })
    }

    /// [`encode_response`] through the marshaller.
    pub fn encode_response(&self, envelope: &ResponseEnvelope) -> Result<JsonValue, MarshalError> {
        encode_response(envelope)
    }
}
