//! (service, type name) -> model class resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::error::ResolutionError;
use crate::model::{Dict, ModelError, ModelValue};
use crate::package::{FromDictFn, SdkPackage};

/// A resolved model class.
pub struct ModelClass {
    name: String,
    module_path: String,
    construct: FromDictFn,
}

impl ModelClass {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn from_dict(&self, dict: &Dict) -> Result<ModelValue, ModelError> {
        (self.construct)(dict)
    }
}

impl fmt::Debug for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClass")
            .field("name", &self.name)
            .field("module_path", &self.module_path)
            .finish_non_exhaustive()
    }
}

pub type ClassRef = Arc<ModelClass>;

type Module = HashMap<String, ClassRef>;

/// Resolves type names against installed SDK packages.
///
/// Successful resolutions are cached per (service, type name) for the life
/// of the registry when [`RegistryConfig::cache`] is set; failures never are.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    config: RegistryConfig,
    modules: RwLock<HashMap<String, Module>>,
    cache: RwLock<HashMap<(String, String), ClassRef>>,
    module_loads: AtomicUsize,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Mount a package's modules under the configured module paths.
    pub fn install(&self, package: SdkPackage) {
        let service = package.service().to_string();
        let mut modules = write(&self.modules);
        for (module, classes) in package.into_modules() {
            let module_path = self.config.models_module_path(&service, &module);
            debug!(%module_path, classes = classes.len(), "installing models module");
            let entry = modules.entry(module_path.clone()).or_default();
            for (name, construct) in classes {
                let class = ModelClass {
                    name: name.clone(),
                    module_path: module_path.clone(),
                    construct,
                };
                entry.insert(name, Arc::new(class));
            }
        }
    }

    pub fn resolve(&self, service: &str, type_name: &str) -> Result<ClassRef, ResolutionError> {
        if self.config.cache {
            if let Some(class) = self.cached(service, type_name) {
                trace!(service, type_name, "model class cache hit");
                return Ok(class);
            }
        }
        let module_path = self.config.module_path(service, type_name);
        let class = self.load(module_path, type_name)?;
        if !self.config.cache {
            return Ok(class);
        }
        let mut cache = write(&self.cache);
        let entry = cache
            .entry((service.to_string(), type_name.to_string()))
            .or_insert(class);
        Ok(Arc::clone(entry))
    }

    pub fn cached(&self, service: &str, type_name: &str) -> Option<ClassRef> {
        read(&self.cache)
            .get(&(service.to_string(), type_name.to_string()))
            .cloned()
    }

    pub fn cache_len(&self) -> usize {
        read(&self.cache).len()
    }

    /// Number of module lookups performed so far.
    pub fn module_loads(&self) -> usize {
        self.module_loads.load(Ordering::Relaxed)
    }

    fn load(&self, module_path: String, class: &str) -> Result<ClassRef, ResolutionError> {
        self.module_loads.fetch_add(1, Ordering::Relaxed);
        let modules = read(&self.modules);
        let Some(module) = modules.get(&module_path) else {
            debug!(%module_path, "models module not found");
            return Err(ResolutionError::ModuleNotFound { module_path });
        };
        match module.get(class) {
            Some(found) => Ok(Arc::clone(found)),
            None => {
                debug!(%module_path, class, "model class not found in module");
                Err(ResolutionError::ClassNotFound {
                    module_path,
                    class: class.to_string(),
                })
            }
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
