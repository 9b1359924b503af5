//! The capability every generated model class exposes.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

/// A model's wire mapping.
pub type Dict = Map<String, Value>;

/// Instance side of a generated model: `to_dict()`.
pub trait Model: fmt::Debug + Send + Sync + 'static {
    /// PascalCase class name, as used in type hints.
    fn model_name(&self) -> &str;

    /// JSON-safe mapping of the model's fields.
    fn to_dict(&self) -> Dict;

    fn as_any(&self) -> &dyn Any;
}

/// Class side of a generated model: `from_dict(mapping)`.
pub trait FromDict: Model + Sized {
    fn from_dict(dict: &Dict) -> Result<Self, ModelError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("`{model}` is missing required field `{field}`")]
    MissingField { model: String, field: String },
    #[error("`{model}` field `{field}` is not {expected}")]
    InvalidField {
        model: String,
        field: String,
        expected: &'static str,
    },
}

/// Required field lookup for `from_dict` implementations.
pub fn required<'a>(dict: &'a Dict, model: &str, field: &str) -> Result<&'a Value, ModelError> {
    dict.get(field).ok_or_else(|| ModelError::MissingField {
        model: model.to_string(),
        field: field.to_string(),
    })
}

/// Shared handle to a model instance.
///
/// Equality is field-wise: same class name and equal `to_dict()` output.
#[derive(Clone)]
pub struct ModelValue(Arc<dyn Model>);

impl ModelValue {
    pub fn new<T: Model>(model: T) -> Self {
        Self(Arc::new(model))
    }

    pub fn model_name(&self) -> &str {
        self.0.model_name()
    }

    pub fn to_dict(&self) -> Dict {
        self.0.to_dict()
    }

    pub fn downcast_ref<T: Model>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn as_model(&self) -> &dyn Model {
        self.0.as_ref()
    }
}

impl fmt::Debug for ModelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq for ModelValue {
    fn eq(&self, other: &Self) -> bool {
        self.model_name() == other.model_name() && self.to_dict() == other.to_dict()
    }
}
