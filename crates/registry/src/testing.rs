//! Test loaders with caller-controlled completion.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use quill_language::{BuiltinLoader, LanguageCapability, LanguageId, LanguageLoader, LoadError};
use rustc_hash::FxHashMap;
use tokio::sync::Notify;

#[derive(Default)]
struct Gate {
	open: AtomicBool,
	fail: AtomicBool,
	notify: Notify,
}

/// Builtin capabilities that are only handed out once their gate opens.
///
/// Lets tests decide the order in which concurrent loads complete.
pub struct GatedLoader {
	builtin: BuiltinLoader,
	gates: Mutex<FxHashMap<LanguageId, Arc<Gate>>>,
	started: AtomicUsize,
}

impl GatedLoader {
	pub fn new() -> Self {
		Self {
			builtin: BuiltinLoader::new().expect("embedded language table parses"),
			gates: Mutex::new(FxHashMap::default()),
			started: AtomicUsize::new(0),
		}
	}

	fn gate(&self, id: LanguageId) -> Arc<Gate> {
		Arc::clone(self.gates.lock().entry(id).or_default())
	}

	/// Lets loads of `id` complete successfully.
	pub fn release(&self, id: LanguageId) {
		let gate = self.gate(id);
		gate.open.store(true, Ordering::SeqCst);
		gate.notify.notify_waiters();
	}

	/// Lets loads of `id` complete with an error.
	pub fn fail(&self, id: LanguageId) {
		self.gate(id).fail.store(true, Ordering::SeqCst);
		self.release(id);
	}

	/// Number of loads started so far.
	pub fn started(&self) -> usize {
		self.started.load(Ordering::SeqCst)
	}
}

impl Default for GatedLoader {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl LanguageLoader for GatedLoader {
	async fn load(&self, id: LanguageId) -> quill_language::Result<LanguageCapability> {
		self.started.fetch_add(1, Ordering::SeqCst);
		let gate = self.gate(id);
		loop {
			let notified = gate.notify.notified();
			if gate.open.load(Ordering::SeqCst) {
				break;
			}
			notified.await;
		}

		if gate.fail.load(Ordering::SeqCst) {
			return Err(LoadError::Io {
				path: format!("{id}.toml").into(),
				error: std::io::Error::other("gate failed"),
			});
		}
		self.builtin.build(id)
	}

	fn provides(&self, _id: LanguageId) -> bool {
		true
	}
}
