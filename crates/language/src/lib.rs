//! Language modes for the quill editor shell.
//!
//! # Architecture
//!
//! * [`id`]: the closed [`LanguageId`] set and name parsing
//! * [`language`]: definitions and the [`LanguageCapability`] built from them
//! * [`defs`]: the embedded builtin definition table
//! * [`loader`]: synchronous and asynchronous capability loaders
//!
//! Tokenizers and indentation engines live in the editing engine; a capability
//! only names the grammar and carries the metadata the engine asks for.

pub mod defs;
pub mod error;
pub mod id;
pub mod language;
pub mod loader;

pub use defs::LanguageDefs;
pub use error::{LoadError, Result};
pub use id::{LanguageId, UnknownLanguage};
pub use language::{BracketPair, IndentRule, LanguageCapability, LanguageDef, LanguageSupport};
pub use loader::{BuiltinLoader, DirectoryLoader, LanguageLoader};
