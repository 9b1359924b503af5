//! Static model table of one generated SDK.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Dict, FromDict, ModelError, ModelValue};
use crate::naming::snake_case;

pub(crate) type FromDictFn = fn(&Dict) -> Result<ModelValue, ModelError>;

fn construct<T: FromDict>(dict: &Dict) -> Result<ModelValue, ModelError> {
    T::from_dict(dict).map(ModelValue::new)
}

/// The models module tree of one service's SDK, built once at startup.
///
/// Classes land in the module named after them (`snake_case`) unless placed
/// explicitly with [`SdkPackage::register_in_module`].
#[derive(Clone)]
pub struct SdkPackage {
    service: String,
    modules: BTreeMap<String, BTreeMap<String, FromDictFn>>,
}

impl fmt::Debug for SdkPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modules: BTreeMap<&str, Vec<&str>> = self
            .modules
            .iter()
            .map(|(module, classes)| {
                (module.as_str(), classes.keys().map(String::as_str).collect())
            })
            .collect();
        f.debug_struct("SdkPackage")
            .field("service", &self.service)
            .field("modules", &modules)
            .finish()
    }
}

impl SdkPackage {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            modules: BTreeMap::new(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn register<T: FromDict>(self, class: &str) -> Self {
        let module = snake_case(class);
        self.register_in_module::<T>(&module, class)
    }

    pub fn register_in_module<T: FromDict>(mut self, module: &str, class: &str) -> Self {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(class.to_string(), construct::<T>);
        self
    }

    /// Record a module that defines no model classes.
    pub fn declare_module(mut self, module: &str) -> Self {
        self.modules.entry(module.to_string()).or_default();
        self
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub(crate) fn into_modules(self) -> BTreeMap<String, BTreeMap<String, FromDictFn>> {
        self.modules
    }
}
