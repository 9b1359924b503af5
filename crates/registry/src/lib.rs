//! Namespace-scoped registry of generated SDK model classes.
//!
//! Each generated SDK registers its models once, as an [`SdkPackage`], and
//! [`ModelRegistry::resolve`] maps a (service, type name) pair to the class
//! that lives at `{root}.{service}.{client_package}.models.{snake_case(name)}`.
//! The same type name under two services resolves to two different classes.

mod config;
mod error;
mod model;
mod naming;
mod package;
mod registry;

pub use config::{RegistryConfig, ServiceConfig};
pub use error::{ConfigError, ResolutionError};
pub use model::{required, Dict, FromDict, Model, ModelError, ModelValue};
pub use naming::snake_case;
pub use package::SdkPackage;
pub use registry::{ClassRef, ModelClass, ModelRegistry};
