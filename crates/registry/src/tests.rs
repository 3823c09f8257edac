use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use quill_language::{BuiltinLoader, LanguageCapability, LanguageId, LanguageLoader, LoadError};

use super::*;
use crate::testing::GatedLoader;

/// Answers `json` with the YAML capability, the way a miswired table would.
struct SwappedLoader(BuiltinLoader);

#[async_trait]
impl LanguageLoader for SwappedLoader {
	async fn load(&self, id: LanguageId) -> quill_language::Result<LanguageCapability> {
		match id {
			LanguageId::Json => self.0.build(LanguageId::Yaml),
			other => self.0.build(other),
		}
	}

	fn provides(&self, id: LanguageId) -> bool {
		id == LanguageId::Json
	}
}

fn gated_registry(loader: &Arc<GatedLoader>, eager: &[LanguageId]) -> ExtensionRegistry {
	ExtensionRegistry::builder()
		.eager(eager.iter().copied())
		.builtin(BuiltinLoader::new().unwrap())
		.loader(loader.clone())
		.build()
		.unwrap()
}

#[test]
fn eager_languages_resolve_ready() {
	let registry = ExtensionRegistry::with_builtins(&[LanguageId::Javascript]).unwrap();
	assert!(registry.is_ready(LanguageId::Javascript));
	assert!(!registry.is_ready(LanguageId::Python));

	let Resolution::Ready(cap) = registry.resolve_language(LanguageId::Javascript).unwrap() else {
		panic!("eager language should be ready");
	};
	assert_eq!(cap.id(), LanguageId::Javascript);
}

#[tokio::test]
async fn lazy_languages_are_memoized_after_first_load() {
	let registry = ExtensionRegistry::with_builtins(&[]).unwrap();

	let first = match registry.resolve_language(LanguageId::Rust).unwrap() {
		Resolution::Pending(load) => load.await.unwrap(),
		Resolution::Ready(_) => panic!("lazy language should start pending"),
	};
	assert!(registry.is_ready(LanguageId::Rust));

	let Resolution::Ready(second) = registry.resolve_language(LanguageId::Rust).unwrap() else {
		panic!("memoized language should be ready");
	};
	assert!(first.same(&second));
}

#[tokio::test]
async fn every_language_resolves_to_its_own_capability() {
	let registry = ExtensionRegistry::with_builtins(&[]).unwrap();
	for id in LanguageId::all() {
		let cap = registry.resolve_language(id).unwrap().wait().await.unwrap();
		assert_eq!(cap.id(), id);
	}
}

#[test]
fn unknown_name_is_a_configuration_error() {
	let registry = ExtensionRegistry::with_builtins(&[LanguageId::Javascript]).unwrap();
	let err = registry.resolve_language_name("unknown-id").unwrap_err();
	assert!(err.is_configuration());
	assert_eq!(err.to_string(), "unknown language 'unknown-id'");
}

#[test]
fn unprovided_language_does_not_fall_back() {
	let registry = ExtensionRegistry::builder()
		.eager([LanguageId::Javascript])
		.builtin(BuiltinLoader::new().unwrap())
		.build()
		.unwrap();
	assert!(registry.provides(LanguageId::Python));

	let registry = ExtensionRegistry::builder()
		.eager_capability(BuiltinLoader::new().unwrap().build(LanguageId::Javascript).unwrap())
		.build()
		.unwrap();
	let err = registry.resolve_language(LanguageId::Python).unwrap_err();
	assert!(matches!(
		err,
		RegistryError::Configuration(ConfigurationError::Unavailable(LanguageId::Python))
	));
}

#[tokio::test]
async fn mismatched_capability_is_rejected() {
	let registry = ExtensionRegistry::builder()
		.loader(Arc::new(SwappedLoader(BuiltinLoader::new().unwrap())))
		.build()
		.unwrap();

	let err = registry.resolve_language(LanguageId::Json).unwrap().wait().await.unwrap_err();
	assert!(matches!(
		err,
		RegistryError::CapabilityLoad {
			id: LanguageId::Json,
			source: LoadError::IdMismatch {
				found: LanguageId::Yaml,
				..
			}
		}
	));
	assert!(!registry.is_ready(LanguageId::Json));
}

#[tokio::test]
async fn failed_loads_are_not_memoized() {
	let loader = Arc::new(GatedLoader::new());
	let registry = gated_registry(&loader, &[]);

	loader.fail(LanguageId::Php);
	let err = registry.resolve_language(LanguageId::Php).unwrap().wait().await.unwrap_err();
	assert!(matches!(err, RegistryError::CapabilityLoad { id: LanguageId::Php, .. }));
	assert!(matches!(registry.resolve_language(LanguageId::Php).unwrap(), Resolution::Pending(_)));
}

#[tokio::test]
async fn concurrent_loads_of_one_language_share_the_first_result() {
	let loader = Arc::new(GatedLoader::new());
	let registry = gated_registry(&loader, &[]);

	let Resolution::Pending(a) = registry.resolve_language(LanguageId::Css).unwrap() else {
		panic!("expected pending");
	};
	let Resolution::Pending(b) = registry.resolve_language(LanguageId::Css).unwrap() else {
		panic!("expected pending");
	};

	loader.release(LanguageId::Css);
	let (a, b) = tokio::join!(a, b);
	assert!(a.unwrap().same(&b.unwrap()));
	assert_eq!(loader.started(), 2);
}

#[test]
fn theme_checkbox_maps_to_empty_or_dark() {
	let registry = ExtensionRegistry::with_builtins(&[]).unwrap();
	assert!(registry.theme_for(false).unwrap().is_empty());

	let dark = registry.theme_for(true).unwrap();
	assert!(dark.is_dark());
	assert_eq!(dark.names().collect::<Vec<_>>(), vec![registry.dark_theme_name()]);
}

#[test]
fn unknown_dark_theme_fails_at_build() {
	let err = ExtensionRegistry::builder().dark_theme("solarized").build().err().unwrap();
	assert!(err.is_configuration());
}
