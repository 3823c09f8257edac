//! The editor shell.
//!
//! Owns one engine instance between [`EditorShell::initialize`] and
//! [`EditorShell::teardown`], and is the only path through which its two
//! slots change.
//!
//! # Language requests
//!
//! Switching language is split in three so that a load never borrows the
//! shell:
//!
//! 1. [`EditorShell::set_language`] advances the language epoch and
//!    validates the request. A ready capability is installed immediately.
//! 2. [`PendingLanguage::resolve`] runs the load on its own.
//! 3. [`EditorShell::settle_language`] installs the result only if no later
//!    request was made in the meantime.
//!
//! The previous capability stays installed until step 3 succeeds.

use std::sync::Arc;

use quill_config::ShellConfig;
use quill_keymap::Keymap;
use quill_language::{BuiltinLoader, DirectoryLoader, LanguageCapability, LanguageId, LanguageLoader};
use quill_registry::{ExtensionRegistry, PendingLoad, RegistryError, Resolution};
use quill_theme::ThemeCapability;

use crate::engine::{EditingEngine, Selection};
use crate::epoch::SlotEpoch;
use crate::error::{MountError, Result, ShellError};
use crate::extension::{BaselineOptions, Extension, Slot, SlotValue, Target};

/// Initial state for [`EditorShell::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInit {
	pub document: String,
	pub language: LanguageId,
	/// Whether the dark theme starts on.
	pub dark: bool,
}

impl ShellInit {
	pub fn from_config(config: &ShellConfig) -> Self {
		Self {
			document: config.document.clone(),
			language: config.language,
			dark: config.dark,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStatus {
	Uninitialized,
	Ready,
}

/// Result of [`EditorShell::set_language`].
#[derive(Debug)]
pub enum LanguageUpdate {
	/// The capability was ready and is now installed.
	Applied(LanguageId),
	/// The capability must be loaded first.
	Pending(PendingLanguage),
}

/// An accepted language request waiting on its load.
#[derive(Debug)]
pub struct PendingLanguage {
	epoch: SlotEpoch,
	load: PendingLoad,
}

impl PendingLanguage {
	pub fn id(&self) -> LanguageId {
		self.load.id()
	}

	pub fn epoch(&self) -> SlotEpoch {
		self.epoch
	}

	/// Runs the load to completion.
	pub async fn resolve(self) -> SettledLanguage {
		let id = self.load.id();
		SettledLanguage {
			epoch: self.epoch,
			id,
			result: self.load.await,
		}
	}
}

/// A finished load, ready for [`EditorShell::settle_language`].
#[derive(Debug)]
pub struct SettledLanguage {
	epoch: SlotEpoch,
	id: LanguageId,
	result: std::result::Result<LanguageCapability, RegistryError>,
}

impl SettledLanguage {
	pub fn id(&self) -> LanguageId {
		self.id
	}

	pub fn epoch(&self) -> SlotEpoch {
		self.epoch
	}

	pub fn is_ok(&self) -> bool {
		self.result.is_ok()
	}
}

/// Outcome of settling a language request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
	Applied(LanguageId),
	/// A later request superseded this one; nothing changed.
	Stale,
}

struct Mounted<E> {
	engine: E,
	extensions: Vec<Extension>,
	language: LanguageCapability,
	theme: ThemeCapability,
}

/// Composes an [`EditingEngine`] with baseline capabilities and the language
/// and theme slots.
pub struct EditorShell<E: EditingEngine> {
	registry: Arc<ExtensionRegistry>,
	baseline: BaselineOptions,
	mounted: Option<Mounted<E>>,
	language_epoch: SlotEpoch,
	theme_epoch: SlotEpoch,
}

impl<E: EditingEngine> EditorShell<E> {
	pub fn new(registry: Arc<ExtensionRegistry>, baseline: BaselineOptions) -> Self {
		Self {
			registry,
			baseline,
			mounted: None,
			language_epoch: SlotEpoch::default(),
			theme_epoch: SlotEpoch::default(),
		}
	}

	/// Builds the registry and baseline from validated configuration.
	///
	/// Configured key bindings are installed ahead of the builtin custom
	/// keymap. Languages with a file in `language-dir` load from there; the
	/// rest come from the builtin table.
	pub fn from_config(config: &ShellConfig) -> Result<Self> {
		let directory = config.language_dir.as_ref().map(DirectoryLoader::new);
		// Eager ids are built from the builtin table, so ids with a file stay lazy.
		let eager = config
			.eager
			.iter()
			.copied()
			.filter(|&id| !directory.as_ref().is_some_and(|dir| dir.provides(id)));

		let mut builder = ExtensionRegistry::builder()
			.eager(eager)
			.builtin(BuiltinLoader::new().map_err(RegistryError::Languages)?)
			.themes(config.theme_catalog()?)
			.dark_theme(config.dark_theme.clone());
		if let Some(directory) = directory {
			builder = builder.loader(Arc::new(directory));
		}

		let mut custom_keymap = config.keys.clone();
		custom_keymap.extend(&Keymap::custom(config.platform));
		let baseline = BaselineOptions {
			indent_unit: config.indent_unit.clone(),
			custom_keymap,
			standard_keymap: Keymap::standard(config.platform),
		};

		Ok(Self::new(Arc::new(builder.build()?), baseline))
	}

	pub fn registry(&self) -> &Arc<ExtensionRegistry> {
		&self.registry
	}

	/// Mounts a new engine in `container`.
	///
	/// Waits for the initial language if it has to be loaded. The container is
	/// taken only once both slot values are resolved, so a failed language or
	/// theme leaves it with the caller.
	pub async fn initialize(&mut self, container: &mut Option<E::Container>, init: ShellInit) -> Result<()> {
		if self.mounted.is_some() {
			return Err(ShellError::AlreadyInitialized);
		}
		if container.is_none() {
			return Err(MountError::MissingContainer.into());
		}

		let language = self.registry.resolve_language(init.language)?.wait().await?;
		let theme = self.registry.theme_for(init.dark)?;

		let mut extensions = self.baseline.extensions();
		extensions.push(Extension::Slot(SlotValue::Language(language.clone())));
		extensions.push(Extension::Slot(SlotValue::Theme(theme.clone())));

		let container = container.take().ok_or(MountError::MissingContainer)?;
		let engine = E::create(container, &init.document, extensions.clone())?;
		self.language_epoch = self.language_epoch.next();
		self.theme_epoch = self.theme_epoch.next();
		self.mounted = Some(Mounted {
			engine,
			extensions,
			language,
			theme,
		});

		tracing::debug!(language = %init.language, dark = init.dark, "shell.initialize");
		Ok(())
	}

	/// Requests a language by name.
	///
	/// Every request on a mounted shell supersedes earlier pending loads.
	/// Unknown or unprovided names fail and keep the installed capability.
	pub fn set_language(&mut self, name: &str) -> Result<LanguageUpdate> {
		self.require_ready()?;
		self.language_epoch = self.language_epoch.next();
		let resolution = self.registry.resolve_language_name(name)?;
		self.request_language(resolution)
	}

	/// Requests a language by id.
	pub fn set_language_id(&mut self, id: LanguageId) -> Result<LanguageUpdate> {
		self.require_ready()?;
		self.language_epoch = self.language_epoch.next();
		let resolution = self.registry.resolve_language(id)?;
		self.request_language(resolution)
	}

	fn request_language(&mut self, resolution: Resolution) -> Result<LanguageUpdate> {
		match resolution {
			Resolution::Ready(cap) => {
				let id = cap.id();
				self.install(SlotValue::Language(cap))?;
				Ok(LanguageUpdate::Applied(id))
			}
			Resolution::Pending(load) => {
				tracing::debug!(language = %load.id(), epoch = self.language_epoch.get(), "shell.language.pending");
				Ok(LanguageUpdate::Pending(PendingLanguage {
					epoch: self.language_epoch,
					load,
				}))
			}
		}
	}

	/// Installs a finished load if its request is still the latest.
	///
	/// A failed load of the latest request is returned as an error; the
	/// previous capability stays installed.
	pub fn settle_language(&mut self, settled: SettledLanguage) -> Result<Settlement> {
		if settled.epoch != self.language_epoch {
			tracing::trace!(
				language = %settled.id,
				epoch = settled.epoch.get(),
				current = self.language_epoch.get(),
				"shell.language.stale"
			);
			return Ok(Settlement::Stale);
		}

		let cap = settled.result?;
		self.install(SlotValue::Language(cap))?;
		Ok(Settlement::Applied(settled.id))
	}

	/// Requests a language and waits for it to settle.
	pub async fn set_language_settled(&mut self, name: &str) -> Result<Settlement> {
		match self.set_language(name)? {
			LanguageUpdate::Applied(id) => Ok(Settlement::Applied(id)),
			LanguageUpdate::Pending(pending) => {
				let settled = pending.resolve().await;
				self.settle_language(settled)
			}
		}
	}

	/// Installs the dark theme (`true`) or the empty theme set (`false`).
	pub fn set_theme(&mut self, dark: bool) -> Result<()> {
		self.require_ready()?;
		let theme = self.registry.theme_for(dark)?;
		self.theme_epoch = self.theme_epoch.next();
		self.install(SlotValue::Theme(theme))
	}

	/// Installs a named theme, or the empty set for `None`.
	pub fn set_theme_named(&mut self, name: Option<&str>) -> Result<()> {
		self.require_ready()?;
		let theme = self.registry.resolve_theme(name)?;
		self.theme_epoch = self.theme_epoch.next();
		self.install(SlotValue::Theme(theme))
	}

	/// Replaces the value of the slot addressed by `target`.
	///
	/// Baseline entries are fixed once mounted.
	pub fn reconfigure(&mut self, target: Target, value: SlotValue) -> Result<()> {
		let slot = match target {
			Target::Baseline(kind) => return Err(ShellError::UnsupportedReconfiguration(kind)),
			Target::Slot(slot) => slot,
		};
		if slot != value.slot() {
			return Err(ShellError::SlotMismatch {
				target: slot,
				value: value.slot(),
			});
		}

		self.require_ready()?;
		match slot {
			Slot::Language => self.language_epoch = self.language_epoch.next(),
			Slot::Theme => self.theme_epoch = self.theme_epoch.next(),
		}
		self.install(value)
	}

	fn install(&mut self, value: SlotValue) -> Result<()> {
		let slot = value.slot();
		let epoch = self.epoch(slot);
		let mounted = self.mounted.as_mut().ok_or(ShellError::NotInitialized)?;

		match &value {
			SlotValue::Language(cap) => mounted.language = cap.clone(),
			SlotValue::Theme(theme) => mounted.theme = theme.clone(),
		}
		if let Some(entry) = mounted
			.extensions
			.iter_mut()
			.find(|ext| ext.target() == Target::Slot(slot))
		{
			*entry = Extension::Slot(value.clone());
		}
		mounted.engine.reconfigure(value);

		tracing::debug!(slot = %slot, epoch = epoch.get(), "shell.slot.apply");
		Ok(())
	}

	/// Unmounts the engine and hands back its container.
	///
	/// Loads still in flight settle as stale.
	pub fn teardown(&mut self) -> Result<E::Container> {
		let mounted = self.mounted.take().ok_or(ShellError::NotInitialized)?;
		self.language_epoch = self.language_epoch.next();
		self.theme_epoch = self.theme_epoch.next();
		tracing::debug!(language = %mounted.language.id(), "shell.teardown");
		Ok(mounted.engine.destroy())
	}

	fn require_ready(&self) -> Result<()> {
		match self.mounted {
			Some(_) => Ok(()),
			None => Err(ShellError::NotInitialized),
		}
	}

	pub fn status(&self) -> ShellStatus {
		match self.mounted {
			Some(_) => ShellStatus::Ready,
			None => ShellStatus::Uninitialized,
		}
	}

	pub fn epoch(&self, slot: Slot) -> SlotEpoch {
		match slot {
			Slot::Language => self.language_epoch,
			Slot::Theme => self.theme_epoch,
		}
	}

	pub fn active_language(&self) -> Option<LanguageId> {
		self.mounted.as_ref().map(|m| m.language.id())
	}

	pub fn language(&self) -> Option<&LanguageCapability> {
		self.mounted.as_ref().map(|m| &m.language)
	}

	pub fn theme(&self) -> Option<&ThemeCapability> {
		self.mounted.as_ref().map(|m| &m.theme)
	}

	/// Whether a non-empty theme set is installed.
	pub fn theme_on(&self) -> bool {
		self.theme().is_some_and(|theme| !theme.is_empty())
	}

	pub fn document(&self) -> Option<String> {
		self.engine().map(E::document)
	}

	pub fn selection(&self) -> Option<Selection> {
		self.engine().map(E::selection)
	}

	pub fn engine(&self) -> Option<&E> {
		self.mounted.as_ref().map(|m| &m.engine)
	}

	pub fn engine_mut(&mut self) -> Option<&mut E> {
		self.mounted.as_mut().map(|m| &mut m.engine)
	}

	/// The capability list as last handed to the engine.
	pub fn extensions(&self) -> &[Extension] {
		self.mounted.as_ref().map(|m| m.extensions.as_slice()).unwrap_or_default()
	}
}
