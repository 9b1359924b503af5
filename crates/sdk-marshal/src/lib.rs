//! Type-hint-directed JSON marshalling for calls against generated API
//! client SDKs.
//!
//! [`serialize`] turns arguments and results into plain JSON. A
//! [`Marshaller`] turns that JSON back into values given the original type
//! hint and service namespace, resolving model classes through a
//! [`ModelRegistry`]. Two wire conventions are reserved: the `"UNSET"`
//! literal for [`MarshalValue::Unset`], and the `_response_type: "Response"`
//! tagged object for [`ResponseEnvelope`].
//!
//! Decoding is best effort. When a hinted model cannot be resolved or built,
//! the data comes back as [`MarshalValue::Raw`] instead of an error.

mod call;
mod deserialize;
mod error;
mod response;
mod serialize;
mod value;

pub use call::{CallSignature, Parameter};
pub use deserialize::Marshaller;
pub use error::{EnvelopeError, MarshalError};
pub use response::{
    encode_response, is_response_envelope, ResponseEnvelope, RESPONSE_TYPE_KEY, RESPONSE_TYPE_TAG,
};
pub use serialize::{serialize, to_json_string};
pub use value::{MarshalValue, UNSET_LITERAL};

pub use indexmap::IndexMap;
pub use sdk_marshal_hint as hint;
pub use sdk_marshal_registry::{
    required, snake_case, ClassRef, Dict, FromDict, Model, ModelError, ModelRegistry, ModelValue,
    RegistryConfig, ResolutionError, SdkPackage,
};
