use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarshalError {
    /// Response bodies must be UTF-8 text; binary payloads are not carried.
    #[error("response content is not valid UTF-8 (status {status_code})")]
    ContentNotUtf8 {
        status_code: u16,
        #[source]
        source: Utf8Error,
    },
    #[error("invalid response envelope: {0}")]
    Envelope(#[from] EnvelopeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{operation}` has no parameter `{name}`")]
    UnknownArgument { operation: String, name: String },
    #[error("`{operation}` arguments must be a JSON object")]
    ArgumentsNotObject { operation: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("missing `_response_type: \"Response\"` tag")]
    NotTagged,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}
