//! Hand-written stand-ins for generated SDK models.

#![allow(dead_code)]

use std::any::Any;
use std::sync::Arc;

use sdk_marshal::{required, Dict, FromDict, Marshaller, Model, ModelError, ModelRegistry, SdkPackage};
use serde_json::json;

fn invalid(model: &str, field: &str, expected: &'static str) -> ModelError {
    ModelError::InvalidField {
        model: model.to_string(),
        field: field.to_string(),
        expected,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub name: String,
    pub age: Option<i64>,
}

impl Pet {
    pub fn new(name: &str, age: Option<i64>) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl Model for Pet {
    fn model_name(&self) -> &str {
        "Pet"
    }

    fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        dict.insert("name".into(), json!(self.name));
        if let Some(age) = self.age {
            dict.insert("age".into(), json!(age));
        }
        dict
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FromDict for Pet {
    fn from_dict(dict: &Dict) -> Result<Self, ModelError> {
        let name = required(dict, "Pet", "name")?
            .as_str()
            .ok_or_else(|| invalid("Pet", "name", "a string"))?;
        let age = match dict.get("age") {
            None => None,
            Some(age) => Some(age.as_i64().ok_or_else(|| invalid("Pet", "age", "an integer"))?),
        };
        Ok(Self::new(name, age))
    }
}

/// Same class name as [`Pet`], different SDK.
#[derive(Debug, Clone, PartialEq)]
pub struct StorePet {
    pub sku: String,
}

impl Model for StorePet {
    fn model_name(&self) -> &str {
        "Pet"
    }

    fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        dict.insert("sku".into(), json!(self.sku));
        dict
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FromDict for StorePet {
    fn from_dict(dict: &Dict) -> Result<Self, ModelError> {
        let sku = required(dict, "Pet", "sku")?
            .as_str()
            .ok_or_else(|| invalid("Pet", "sku", "a string"))?;
        Ok(Self {
            sku: sku.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiBillingEntity {
    pub account_id: String,
    pub amount_cents: i64,
}

impl Model for ApiBillingEntity {
    fn model_name(&self) -> &str {
        "ApiBillingEntity"
    }

    fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        dict.insert("account_id".into(), json!(self.account_id));
        dict.insert("amount_cents".into(), json!(self.amount_cents));
        dict
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FromDict for ApiBillingEntity {
    fn from_dict(dict: &Dict) -> Result<Self, ModelError> {
        let account_id = required(dict, "ApiBillingEntity", "account_id")?
            .as_str()
            .ok_or_else(|| invalid("ApiBillingEntity", "account_id", "a string"))?;
        let amount_cents = required(dict, "ApiBillingEntity", "amount_cents")?
            .as_i64()
            .ok_or_else(|| invalid("ApiBillingEntity", "amount_cents", "an integer"))?;
        Ok(Self {
            account_id: account_id.to_string(),
            amount_cents,
        })
    }
}

pub fn registry() -> Arc<ModelRegistry> {
    let registry = ModelRegistry::new();
    registry.install(
        SdkPackage::new("petstore")
            .register::<Pet>("Pet")
            .register::<ApiBillingEntity>("ApiBillingEntity"),
    );
    registry.install(SdkPackage::new("store").register::<StorePet>("Pet"));
    Arc::new(registry)
}

pub fn marshaller() -> Marshaller {
    Marshaller::new(registry())
}
