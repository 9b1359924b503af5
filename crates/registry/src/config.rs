//! Module-path convention settings.
//!
//! ```toml
//! root = "sdks"
//! client_package = "{service}_client"
//! cache = true
//!
//! [services.billing]
//! client_package = "billing_api_client"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::naming::snake_case;

const SERVICE_PLACEHOLDER: &str = "{service}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// First segment of every module path.
    pub root: String,
    /// Client package template; `{service}` is replaced by the namespace.
    pub client_package: String,
    pub services: BTreeMap<String, ServiceConfig>,
    /// Memoize successful resolutions.
    pub cache: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub client_package: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            root: "sdks".to_string(),
            client_package: format!("{SERVICE_PLACEHOLDER}_client"),
            services: BTreeMap::new(),
            cache: true,
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Client package name of one service.
    pub fn client_package(&self, service: &str) -> String {
        let template = self
            .services
            .get(service)
            .and_then(|s| s.client_package.as_deref())
            .unwrap_or(&self.client_package);
        template.replace(SERVICE_PLACEHOLDER, service)
    }

    /// `{root}.{service}.{client_package}.models.{module}`
    pub fn models_module_path(&self, service: &str, module: &str) -> String {
        format!(
            "{}.{}.{}.models.{}",
            self.root,
            service,
            self.client_package(service),
            module
        )
    }

    /// Module path holding the class `type_name` of `service`.
    pub fn module_path(&self, service: &str, type_name: &str) -> String {
        self.models_module_path(service, &snake_case(type_name))
    }
}
