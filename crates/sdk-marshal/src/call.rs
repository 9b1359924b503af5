//! Whole-call marshalling: named arguments in, one result out.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::deserialize::Marshaller;
use crate::error::MarshalError;
use crate::serialize::serialize;
use crate::value::MarshalValue;

/// One parameter of a generated SDK operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub hint: String,
}

/// Parameter and return hints of one SDK operation within a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSignature {
    pub service: String,
    pub operation: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub returns: String,
}

impl CallSignature {
    pub fn new(
        service: impl Into<String>,
        operation: impl Into<String>,
        returns: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
            parameters: Vec::new(),
            returns: returns.into(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, hint: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            hint: hint.into(),
        });
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    fn check_known<'a>(&self, mut names: impl Iterator<Item = &'a String>) -> Result<(), MarshalError> {
        match names.find(|name| self.parameter(name).is_none()) {
            Some(name) => Err(MarshalError::UnknownArgument {
                operation: self.operation.clone(),
                name: name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Encode arguments in declaration order; absent parameters are omitted.
    pub fn encode_arguments(
        &self,
        args: &IndexMap<String, MarshalValue>,
    ) -> Result<Map<String, JsonValue>, MarshalError> {
        self.check_known(args.keys())?;
        let mut out = Map::new();
        for param in &self.parameters {
            if let Some(value) = args.get(&param.name) {
                out.insert(param.name.clone(), serialize(value)?);
            }
        }
        Ok(out)
    }

    /// Decode arguments against their parameter hints, in declaration order.
    pub fn decode_arguments(
        &self,
        marshaller: &Marshaller,
        args: &JsonValue,
    ) -> Result<IndexMap<String, MarshalValue>, MarshalError> {
        let JsonValue::Object(args) = args else {
            return Err(MarshalError::ArgumentsNotObject {
                operation: self.operation.clone(),
            });
        };
        self.check_known(args.keys())?;
        let mut out = IndexMap::with_capacity(args.len());
        for param in &self.parameters {
            if let Some(data) = args.get(&param.name) {
                let value = marshaller.deserialize(data, &param.hint, &self.service);
                out.insert(param.name.clone(), value);
            }
        }
        Ok(out)
    }

    pub fn encode_result(&self, result: &MarshalValue) -> Result<JsonValue, MarshalError> {
        serialize(result)
    }

    pub fn decode_result(&self, marshaller: &Marshaller, data: &JsonValue) -> MarshalValue {
        marshaller.deserialize(data, &self.returns, &self.service)
    }
}
