/// Request counter for one slot.
///
/// Advanced on every accepted reconfiguration request, and on mount and
/// teardown, so that results of superseded requests can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct SlotEpoch(u64);

impl SlotEpoch {
	pub(crate) fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}

	pub const fn get(self) -> u64 {
		self.0
	}
}
