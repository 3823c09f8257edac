//! Extension registry for the quill editor shell.
//!
//! Resolves language ids to language capabilities (eagerly built or lazily
//! loaded and memoized) and theme names to theme capabilities.

mod error;
mod registry;
mod resolution;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
#[cfg(test)]
mod tests;

pub use error::{ConfigurationError, RegistryError, Result};
pub use registry::{ExtensionRegistry, RegistryBuilder};
pub use resolution::{PendingLoad, Resolution};
