//! The editing engine seam.
//!
//! The shell never edits text itself. It hands an engine the document and the
//! capability list at mount, swaps slot values afterwards, and reads the
//! document and selection back. Everything else belongs to the engine.

mod headless;

pub use headless::{HeadlessContainer, HeadlessEngine};

use crate::error::MountError;
use crate::extension::{Extension, SlotValue};

/// A selection as a pair of char offsets. `anchor == head` is a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
	pub anchor: usize,
	pub head: usize,
}

impl Selection {
	pub const fn new(anchor: usize, head: usize) -> Self {
		Self { anchor, head }
	}

	pub const fn point(pos: usize) -> Self {
		Self::new(pos, pos)
	}

	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	pub fn start(&self) -> usize {
		self.anchor.min(self.head)
	}

	pub fn end(&self) -> usize {
		self.anchor.max(self.head)
	}
}

/// A live editor instance.
pub trait EditingEngine: Sized + Send + 'static {
	/// Where the engine mounts.
	type Container: Send;

	/// Mounts a new instance holding `document` with the given capabilities.
	fn create(container: Self::Container, document: &str, extensions: Vec<Extension>) -> Result<Self, MountError>;

	/// Replaces the value held by one slot, leaving text, selection, and
	/// history untouched.
	fn reconfigure(&mut self, value: SlotValue);

	fn document(&self) -> String;

	fn selection(&self) -> Selection;

	/// Unmounts the instance and hands back its container.
	fn destroy(self) -> Self::Container;
}
