//! JSON -> value, guided by a type hint and a service namespace.

use std::sync::Arc;

use sdk_marshal_hint::{classify, TypeShape};
use sdk_marshal_registry::ModelRegistry;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::MarshalError;
use crate::response::is_response_envelope;
use crate::serialize::serialize;
use crate::value::{MarshalValue, UNSET_LITERAL};

/// Serializer/deserializer pair bound to a model registry.
#[derive(Debug, Clone, Default)]
pub struct Marshaller {
    registry: Arc<ModelRegistry>,
}

impl Marshaller {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn serialize(&self, value: &MarshalValue) -> Result<JsonValue, MarshalError> {
        serialize(value)
    }

    /// Decode `data` as the shape `hint` describes.
    ///
    /// Never fails. Data that cannot be given the hinted type is returned
    /// unchanged: scalars as scalars, containers as [`MarshalValue::Raw`].
    pub fn deserialize(&self, data: &JsonValue, hint: &str, service: &str) -> MarshalValue {
        if data.is_null() {
            return MarshalValue::Null;
        }
        match classify(hint) {
            TypeShape::Primitive | TypeShape::DictOf => MarshalValue::passthrough(data),
            TypeShape::UnsetCapable(inner) => {
                if data.as_str() == Some(UNSET_LITERAL) {
                    return MarshalValue::Unset;
                }
                self.deserialize(data, &inner, service)
            }
            TypeShape::ListOf(inner) => match data {
                JsonValue::Array(items) => MarshalValue::List(
                    items
                        .iter()
                        .map(|item| self.deserialize(item, &inner, service))
                        .collect(),
                ),
                _ => MarshalValue::passthrough(data),
            },
            TypeShape::ResponseOf(parsed_hint) if is_response_envelope(data) => {
                match self.decode_envelope(data, &parsed_hint, service) {
                    Ok(envelope) => MarshalValue::Response(Box::new(envelope)),
                    Err(err) => {
                        debug!(service, hint, %err, "malformed response envelope, passing raw JSON through");
                        MarshalValue::passthrough(data)
                    }
                }
            }
            TypeShape::ResponseOf(_) => MarshalValue::passthrough(data),
            TypeShape::NamedModel(name) => self.deserialize_model(data, &name, service),
        }
    }

    /// [`Marshaller::deserialize`] from JSON text.
    pub fn from_json_str(
        &self,
        text: &str,
        hint: &str,
        service: &str,
    ) -> Result<MarshalValue, MarshalError> {
        let data: JsonValue = serde_json::from_str(text)?;
        Ok(self.deserialize(&data, hint, service))
    }

    fn deserialize_model(&self, data: &JsonValue, name: &str, service: &str) -> MarshalValue {
        let JsonValue::Object(dict) = data else {
            return MarshalValue::passthrough(data);
        };
        let class = match self.registry.resolve(service, name) {
            Ok(class) => class,
            Err(err) => {
                debug!(service, model = name, %err, "model not resolved, passing raw JSON through");
                return MarshalValue::Raw(data.clone());
            }
        };
        match class.from_dict(dict) {
            Ok(model) => MarshalValue::Model(model),
            Err(err) => {
                debug!(service, model = name, %err, "from_dict rejected data, passing raw JSON through");
                MarshalValue::Raw(data.clone())
            }
        }
    }
}
