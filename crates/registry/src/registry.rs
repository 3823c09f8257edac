//! The extension registry.
//!
//! Maps a [`LanguageId`] to a [`LanguageCapability`] using two strategies:
//!
//! * **eager**: capabilities built when the registry is built, returned as
//!   [`Resolution::Ready`];
//! * **lazy**: capabilities produced on demand by a [`LanguageLoader`],
//!   returned as [`Resolution::Pending`] and memoized once they arrive.
//!
//! Theme names (or their absence) map to [`ThemeCapability`] values through a
//! [`ThemeCatalog`].

use std::sync::Arc;

use parking_lot::Mutex;
use quill_language::{BuiltinLoader, LanguageCapability, LanguageId, LanguageLoader, LoadError};
use quill_theme::{DEFAULT_DARK_THEME, ThemeCapability, ThemeCatalog};
use rustc_hash::FxHashMap;

use crate::error::{ConfigurationError, RegistryError, Result};
use crate::resolution::{PendingLoad, Resolution};

/// Append-only memo of lazily loaded capabilities.
type Memo = Arc<Mutex<FxHashMap<LanguageId, LanguageCapability>>>;

/// Language and theme capability resolution.
pub struct ExtensionRegistry {
	eager: FxHashMap<LanguageId, LanguageCapability>,
	loaders: Vec<Arc<dyn LanguageLoader>>,
	memo: Memo,
	themes: ThemeCatalog,
	dark_theme: String,
}

impl ExtensionRegistry {
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::default()
	}

	/// Builtin languages (`eager` built up front, the rest loaded lazily) and
	/// builtin themes.
	pub fn with_builtins(eager: &[LanguageId]) -> Result<Self> {
		let builtin = BuiltinLoader::new().map_err(RegistryError::Languages)?;
		Self::builder()
			.eager(eager.iter().copied())
			.builtin(builtin)
			.build()
	}

	/// Resolves a language name.
	pub fn resolve_language_name(&self, name: &str) -> Result<Resolution> {
		self.resolve_language(LanguageId::parse_name(name)?)
	}

	/// Resolves `id` to a ready capability or a pending load.
	///
	/// Fails with a configuration error when nothing provides `id`; there is
	/// no fallback to another language.
	pub fn resolve_language(&self, id: LanguageId) -> Result<Resolution> {
		if let Some(cap) = self.eager.get(&id) {
			tracing::trace!(language = %id, "registry.language.eager");
			return Ok(Resolution::Ready(cap.clone()));
		}
		if let Some(cap) = self.memo.lock().get(&id).cloned() {
			tracing::trace!(language = %id, "registry.language.memoized");
			return Ok(Resolution::Ready(cap));
		}

		let loader = self
			.loaders
			.iter()
			.find(|loader| loader.provides(id))
			.cloned()
			.ok_or(ConfigurationError::Unavailable(id))?;
		let memo = Arc::clone(&self.memo);

		tracing::debug!(language = %id, "registry.language.pending");
		Ok(Resolution::Pending(PendingLoad::new(
			id,
			Box::pin(async move {
				let cap = loader
					.load(id)
					.await
					.map_err(|source| RegistryError::CapabilityLoad { id, source })?;
				if cap.id() != id {
					return Err(RegistryError::CapabilityLoad {
						id,
						source: LoadError::IdMismatch {
							requested: id,
							found: cap.id(),
						},
					});
				}

				// Concurrent loads of one id keep the first result.
				let cap = memo.lock().entry(id).or_insert(cap).clone();
				tracing::debug!(language = %id, "registry.language.loaded");
				Ok(cap)
			}),
		)))
	}

	/// Whether `id` resolves without a load.
	pub fn is_ready(&self, id: LanguageId) -> bool {
		self.eager.contains_key(&id) || self.memo.lock().contains_key(&id)
	}

	/// Whether any strategy covers `id`.
	pub fn provides(&self, id: LanguageId) -> bool {
		self.is_ready(id) || self.loaders.iter().any(|loader| loader.provides(id))
	}

	/// Maps a theme name, or its absence, to a slot value.
	pub fn resolve_theme(&self, name: Option<&str>) -> Result<ThemeCapability> {
		self.themes
			.resolve(name)
			.map_err(|err| ConfigurationError::UnknownTheme(err).into())
	}

	/// Slot value for the theme checkbox.
	pub fn theme_for(&self, dark: bool) -> Result<ThemeCapability> {
		self.resolve_theme(dark.then_some(self.dark_theme.as_str()))
	}

	/// Capability for the configured dark theme.
	pub fn dark_theme(&self) -> Result<ThemeCapability> {
		self.theme_for(true)
	}

	pub fn dark_theme_name(&self) -> &str {
		&self.dark_theme
	}

	pub fn themes(&self) -> &ThemeCatalog {
		&self.themes
	}
}

/// Builder for [`ExtensionRegistry`].
pub struct RegistryBuilder {
	eager_ids: Vec<LanguageId>,
	eager: FxHashMap<LanguageId, LanguageCapability>,
	builtin: Option<BuiltinLoader>,
	loaders: Vec<Arc<dyn LanguageLoader>>,
	themes: Option<ThemeCatalog>,
	dark_theme: String,
}

impl Default for RegistryBuilder {
	fn default() -> Self {
		Self {
			eager_ids: Vec::new(),
			eager: FxHashMap::default(),
			builtin: None,
			loaders: Vec::new(),
			themes: None,
			dark_theme: DEFAULT_DARK_THEME.to_string(),
		}
	}
}

impl RegistryBuilder {
	/// Ids to build from the builtin table when the registry is built.
	pub fn eager(mut self, ids: impl IntoIterator<Item = LanguageId>) -> Self {
		self.eager_ids.extend(ids);
		self
	}

	/// Installs an already constructed capability under its own id.
	pub fn eager_capability(mut self, cap: LanguageCapability) -> Self {
		self.eager.insert(cap.id(), cap);
		self
	}

	/// Uses `loader` for eager construction and as the last lazy loader.
	pub fn builtin(mut self, loader: BuiltinLoader) -> Self {
		self.builtin = Some(loader);
		self
	}

	/// Adds a lazy loader. Loaders are consulted in insertion order, ahead of
	/// the builtin loader.
	pub fn loader(mut self, loader: Arc<dyn LanguageLoader>) -> Self {
		self.loaders.push(loader);
		self
	}

	/// Replaces the builtin theme catalog.
	pub fn themes(mut self, themes: ThemeCatalog) -> Self {
		self.themes = Some(themes);
		self
	}

	pub fn dark_theme(mut self, name: impl Into<String>) -> Self {
		self.dark_theme = name.into();
		self
	}

	pub fn build(self) -> Result<ExtensionRegistry> {
		let Self {
			eager_ids,
			mut eager,
			builtin,
			mut loaders,
			themes,
			dark_theme,
		} = self;

		let themes = match themes {
			Some(themes) => themes,
			None => ThemeCatalog::builtin().map_err(RegistryError::Themes)?,
		};
		if !themes.contains(&dark_theme) {
			return Err(ConfigurationError::UnknownTheme(quill_theme::ThemeError::Unknown {
				suggestion: themes.suggest(&dark_theme),
				name: dark_theme,
			})
			.into());
		}

		for id in eager_ids {
			if eager.contains_key(&id) {
				continue;
			}
			let builtin = builtin.as_ref().ok_or(ConfigurationError::Unavailable(id))?;
			let cap = builtin.build(id).map_err(|source| RegistryError::CapabilityLoad { id, source })?;
			eager.insert(id, cap);
		}

		if let Some(builtin) = builtin {
			loaders.push(Arc::new(builtin));
		}

		tracing::debug!(eager = eager.len(), loaders = loaders.len(), "registry.build");
		Ok(ExtensionRegistry {
			eager,
			loaders,
			memo: Memo::default(),
			themes,
			dark_theme,
		})
	}
}
