#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editor shell for quill.
//!
//! Wires an [`EditingEngine`] together with a fixed run of baseline
//! capabilities and two reconfigurable slots, language and theme.
//!
//! # Main Types
//!
//! - [`EditorShell`] - owns the engine and the slot state
//! - [`EditingEngine`] - the seam to the engine that does the actual editing
//! - [`HeadlessEngine`] - a rope-backed engine without rendering
//!
//! # Capability list
//!
//! ```text
//! [ autocompletion, line-numbers, ..., custom-keymap, standard-keymap,   // Baseline
//!   language,                                                            // Slot
//!   theme ]                                                              // Slot
//! ```
//!
//! Baseline entries are fixed once mounted. Slot swaps never touch document
//! text, selection, or history.

pub mod engine;
mod epoch;
pub mod error;
pub mod extension;
mod shell;

pub use engine::{EditingEngine, HeadlessContainer, HeadlessEngine, Selection};
pub use epoch::SlotEpoch;
pub use error::{MountError, Result, ShellError};
pub use extension::{Baseline, BaselineConfig, BaselineOptions, Extension, Slot, SlotValue, Target};
pub use shell::{EditorShell, LanguageUpdate, PendingLanguage, SettledLanguage, Settlement, ShellInit, ShellStatus};
