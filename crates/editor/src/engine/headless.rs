//! A headless engine over a rope.
//!
//! Stores the document, one selection, the installed capability list, and
//! counters. It does no tokenizing, rendering, or history.

use ropey::Rope;

use super::{EditingEngine, Selection};
use crate::error::MountError;
use crate::extension::{Extension, Slot, SlotValue};

/// Mount target for [`HeadlessEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessContainer {
	pub id: String,
	/// Set while an engine is mounted here.
	pub attached: bool,
}

impl HeadlessContainer {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			attached: false,
		}
	}
}

#[derive(Debug)]
pub struct HeadlessEngine {
	container: HeadlessContainer,
	text: Rope,
	selection: Selection,
	extensions: Vec<Extension>,
	edits: u64,
	reconfigurations: u64,
}

impl HeadlessEngine {
	pub fn container(&self) -> &HeadlessContainer {
		&self.container
	}

	pub fn extensions(&self) -> &[Extension] {
		&self.extensions
	}

	/// The value currently installed in `slot`.
	pub fn slot(&self, slot: Slot) -> Option<&SlotValue> {
		self.extensions.iter().find_map(|ext| match ext {
			Extension::Slot(value) if value.slot() == slot => Some(value),
			_ => None,
		})
	}

	/// Inserts `text` at char offset `at`, clamped to the document end, and
	/// places the cursor after it.
	pub fn insert(&mut self, at: usize, text: &str) {
		let at = at.min(self.text.len_chars());
		self.text.insert(at, text);
		self.selection = Selection::point(at + text.chars().count());
		self.edits += 1;
	}

	/// Removes the selected range, if any.
	pub fn delete_selection(&mut self) {
		if self.selection.is_empty() {
			return;
		}
		let from = self.selection.start();
		self.text.remove(from..self.selection.end());
		self.selection = Selection::point(from);
		self.edits += 1;
	}

	/// Sets the selection, clamping both ends to the document.
	pub fn set_selection(&mut self, selection: Selection) {
		let len = self.text.len_chars();
		self.selection = Selection::new(selection.anchor.min(len), selection.head.min(len));
	}

	/// Number of text edits applied since mount.
	pub fn edit_count(&self) -> u64 {
		self.edits
	}

	/// Number of slot swaps since mount.
	pub fn reconfigure_count(&self) -> u64 {
		self.reconfigurations
	}
}

impl EditingEngine for HeadlessEngine {
	type Container = HeadlessContainer;

	fn create(mut container: HeadlessContainer, document: &str, extensions: Vec<Extension>) -> Result<Self, MountError> {
		if container.attached {
			return Err(MountError::Occupied(container.id));
		}
		container.attached = true;
		Ok(Self {
			container,
			text: Rope::from_str(document),
			selection: Selection::point(0),
			extensions,
			edits: 0,
			reconfigurations: 0,
		})
	}

	fn reconfigure(&mut self, value: SlotValue) {
		let slot = value.slot();
		match self
			.extensions
			.iter_mut()
			.find(|ext| matches!(ext, Extension::Slot(v) if v.slot() == slot))
		{
			Some(entry) => *entry = Extension::Slot(value),
			None => self.extensions.push(Extension::Slot(value)),
		}
		self.reconfigurations += 1;
	}

	fn document(&self) -> String {
		self.text.to_string()
	}

	fn selection(&self) -> Selection {
		self.selection
	}

	fn destroy(mut self) -> HeadlessContainer {
		self.container.attached = false;
		self.container
	}
}
