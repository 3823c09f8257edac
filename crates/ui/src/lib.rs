#![cfg_attr(test, allow(unused_crate_dependencies))]
//! UI binding for the quill editor shell.
//!
//! Connects two controls, a language selector and a dark-theme checkbox, to a
//! shared [`EditorShell`]. Errors are reported through the controls' error
//! indicator; nothing here owns state beyond the two handles.
//!
//! The shell lock is taken only for synchronous shell calls. Language loads
//! run with the lock released and re-take it to settle.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use quill_editor::{EditingEngine, EditorShell, LanguageUpdate, Result, Settlement};

/// The shell as shared between the binding and its owner.
pub type SharedShell<E> = Arc<Mutex<EditorShell<E>>>;

/// The host's input controls.
pub trait Controls: Send + Sync + 'static {
	/// Current value of the language selector.
	fn selected_language(&self) -> String;

	/// Current state of the dark-theme checkbox.
	fn theme_checked(&self) -> bool;

	fn show_error(&self, message: &str);

	fn clear_error(&self);
}

/// Input events the binding reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
	LanguageChanged,
	ThemeChanged,
}

pub struct UiBinding<E: EditingEngine, C: Controls> {
	shell: SharedShell<E>,
	controls: Arc<C>,
}

impl<E: EditingEngine, C: Controls> UiBinding<E, C> {
	pub fn new(shell: SharedShell<E>, controls: Arc<C>) -> Self {
		Self { shell, controls }
	}

	pub fn shell(&self) -> &SharedShell<E> {
		&self.shell
	}

	pub fn controls(&self) -> &Arc<C> {
		&self.controls
	}

	/// Reacts to a language selector change.
	///
	/// The selector is read and the request issued before this returns; the
	/// returned future completes any load and settles it. Results superseded
	/// by a later change are dropped without touching the error indicator.
	pub fn on_language_change(&self) -> impl Future<Output = Result<Settlement>> + Send + use<E, C> {
		let name = self.controls.selected_language();
		let request = self.shell.lock().set_language(&name);
		let shell = Arc::clone(&self.shell);
		let controls = Arc::clone(&self.controls);

		async move {
			let outcome = match request {
				Ok(LanguageUpdate::Applied(id)) => Ok(Settlement::Applied(id)),
				Ok(LanguageUpdate::Pending(pending)) => {
					let settled = pending.resolve().await;
					shell.lock().settle_language(settled)
				}
				Err(err) => Err(err),
			};

			match &outcome {
				Ok(Settlement::Applied(id)) => {
					tracing::debug!(language = %id, "ui.language.applied");
					controls.clear_error();
				}
				Ok(Settlement::Stale) => tracing::trace!(requested = %name, "ui.language.stale"),
				Err(err) => {
					tracing::warn!(requested = %name, error = %err, "ui.language.failed");
					controls.show_error(&err.to_string());
				}
			}
			outcome
		}
	}

	/// Reacts to a theme checkbox change.
	pub fn on_theme_change(&self) -> Result<()> {
		let dark = self.controls.theme_checked();
		let outcome = self.shell.lock().set_theme(dark);
		match &outcome {
			Ok(()) => {
				tracing::debug!(dark, "ui.theme.applied");
				self.controls.clear_error();
			}
			Err(err) => {
				tracing::warn!(dark, error = %err, "ui.theme.failed");
				self.controls.show_error(&err.to_string());
			}
		}
		outcome
	}

	/// Dispatches `event` to its handler.
	pub fn handle(&self, event: UiEvent) -> BoxFuture<'static, Result<()>> {
		match event {
			UiEvent::LanguageChanged => self.on_language_change().map(|outcome| outcome.map(drop)).boxed(),
			UiEvent::ThemeChanged => futures::future::ready(self.on_theme_change()).boxed(),
		}
	}
}
